use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use serde::Deserialize;
use tracing::debug;

use models::signup::{self, validate_time};
use models::{activity, camper};

use crate::errors::ServiceError;

/// Create/update payload. An absent reference key is a validation failure,
/// while a present-but-null one flows into the lookup and misses like any
/// other unknown id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupInput {
    #[serde(default, deserialize_with = "crate::input::double_option")]
    pub camper_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::input::double_option")]
    pub activity_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::input::double_option")]
    pub time: Option<Option<i32>>,
}

/// A signup with both sides of the join resolved.
#[derive(Debug)]
pub struct SignupDetail {
    pub signup: signup::Model,
    pub camper: camper::Model,
    pub activity: activity::Model,
}

async fn expand(db: &DatabaseConnection, s: signup::Model) -> Result<SignupDetail, ServiceError> {
    let camper = s
        .find_related(camper::Entity)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::Db(format!("signup {} references missing camper", s.id)))?;
    let activity = s
        .find_related(activity::Entity)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::Db(format!("signup {} references missing activity", s.id)))?;
    Ok(SignupDetail { signup: s, camper, activity })
}

async fn resolve_camper(
    db: &DatabaseConnection,
    id: Option<i32>,
) -> Result<camper::Model, ServiceError> {
    let found = match id {
        Some(id) => camper::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?,
        None => None,
    };
    found.ok_or_else(|| ServiceError::missing_reference("Camper"))
}

async fn resolve_activity(
    db: &DatabaseConnection,
    id: Option<i32>,
) -> Result<activity::Model, ServiceError> {
    let found = match id {
        Some(id) => activity::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?,
        None => None,
    };
    found.ok_or_else(|| ServiceError::missing_reference("Activity"))
}

pub async fn list_signups(db: &DatabaseConnection) -> Result<Vec<SignupDetail>, ServiceError> {
    let rows = signup::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let mut out = Vec::with_capacity(rows.len());
    for s in rows {
        out.push(expand(db, s).await?);
    }
    Ok(out)
}

pub async fn get_signup(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<SignupDetail>, ServiceError> {
    let found = signup::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    match found {
        Some(s) => Ok(Some(expand(db, s).await?)),
        None => Ok(None),
    }
}

/// Both referenced records must already exist; the camper is resolved
/// first. A missing reference rejects the write without creating anything.
pub async fn create_signup(
    db: &DatabaseConnection,
    input: SignupInput,
) -> Result<SignupDetail, ServiceError> {
    let camper_id = input
        .camper_id
        .ok_or_else(|| ServiceError::Validation("camper_id is required".into()))?;
    let activity_id = input
        .activity_id
        .ok_or_else(|| ServiceError::Validation("activity_id is required".into()))?;

    let camper = resolve_camper(db, camper_id).await?;
    let activity = resolve_activity(db, activity_id).await?;

    let time = validate_time(input.time.flatten())?;
    let am = signup::ActiveModel {
        camper_id: Set(camper.id),
        activity_id: Set(activity.id),
        time: Set(time),
        ..Default::default()
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(
        signup_id = created.id,
        camper_id = camper.id,
        activity_id = activity.id,
        "signup created"
    );
    Ok(SignupDetail { signup: created, camper, activity })
}

/// Partial update. Present references are re-resolved (null included) and a
/// present time is revalidated, the same rules as at creation.
pub async fn update_signup(
    db: &DatabaseConnection,
    id: i32,
    input: SignupInput,
) -> Result<SignupDetail, ServiceError> {
    let found = signup::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Signup"))?;
    let mut am: signup::ActiveModel = found.into();
    if let Some(camper_id) = input.camper_id {
        let camper = resolve_camper(db, camper_id).await?;
        am.camper_id = Set(camper.id);
    }
    if let Some(activity_id) = input.activity_id {
        let activity = resolve_activity(db, activity_id).await?;
        am.activity_id = Set(activity.id);
    }
    if let Some(time) = input.time {
        am.time = Set(validate_time(time)?);
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    expand(db, updated).await
}

pub async fn delete_signup(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let found = signup::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Signup"))?;
    signup::Entity::delete_by_id(found.id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}
