use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Deserialize;
use tracing::debug;

use models::camper::{self, validate_age, validate_name};
use models::{activity, signup};

use crate::errors::ServiceError;

/// Create/update payload. The outer `Option` tracks key presence: an absent
/// field is left untouched on update, while an explicit JSON null is
/// assigned and validated like any other candidate value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CamperInput {
    #[serde(default, deserialize_with = "crate::input::double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::input::double_option")]
    pub age: Option<Option<i32>>,
}

/// A camper with its signups, each paired with the signed-up activity.
#[derive(Debug)]
pub struct CamperDetail {
    pub camper: camper::Model,
    pub signups: Vec<(signup::Model, activity::Model)>,
}

pub async fn list_campers(db: &DatabaseConnection) -> Result<Vec<camper::Model>, ServiceError> {
    camper::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn get_camper(db: &DatabaseConnection, id: i32) -> Result<Option<camper::Model>, ServiceError> {
    camper::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Camper with relationship expansion, for the single-camper view.
pub async fn get_camper_detail(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<CamperDetail>, ServiceError> {
    let Some(found) = get_camper(db, id).await? else { return Ok(None) };
    let rows = found
        .find_related(signup::Entity)
        .find_also_related(activity::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let mut signups = Vec::with_capacity(rows.len());
    for (s, a) in rows {
        let a = a.ok_or_else(|| {
            ServiceError::Db(format!("signup {} references missing activity", s.id))
        })?;
        signups.push((s, a));
    }
    Ok(Some(CamperDetail { camper: found, signups }))
}

/// At creation, absent and null fields fail validation alike.
pub async fn create_camper(
    db: &DatabaseConnection,
    input: CamperInput,
) -> Result<camper::Model, ServiceError> {
    let name = validate_name(input.name.flatten().as_deref())?;
    let age = validate_age(input.age.flatten())?;
    let am = camper::ActiveModel {
        name: Set(name),
        age: Set(age),
        ..Default::default()
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(camper_id = created.id, "camper created");
    Ok(created)
}

/// Partial update; each present field is revalidated before the write, so
/// a present-but-null field fails its rule rather than being skipped.
pub async fn update_camper(
    db: &DatabaseConnection,
    id: i32,
    input: CamperInput,
) -> Result<camper::Model, ServiceError> {
    let mut am: camper::ActiveModel = get_camper(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Camper"))?
        .into();
    if let Some(name) = input.name {
        am.name = Set(validate_name(name.as_deref())?);
    }
    if let Some(age) = input.age {
        am.age = Set(validate_age(age)?);
    }
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete a camper together with its signups, atomically.
pub async fn delete_camper(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let found = get_camper(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Camper"))?;
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    signup::Entity::delete_many()
        .filter(signup::Column::CamperId.eq(found.id))
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    camper::Entity::delete_by_id(found.id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(camper_id = found.id, "camper deleted with signups");
    Ok(())
}
