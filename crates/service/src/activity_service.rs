use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Deserialize;
use tracing::debug;

use models::{activity, signup};

use crate::errors::ServiceError;

/// Create/update payload. Activity fields carry no validation: whatever is
/// present, null included, is persisted exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityInput {
    #[serde(default, deserialize_with = "crate::input::double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::input::double_option")]
    pub difficulty: Option<Option<i32>>,
}

pub async fn list_activities(db: &DatabaseConnection) -> Result<Vec<activity::Model>, ServiceError> {
    activity::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn get_activity(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<activity::Model>, ServiceError> {
    activity::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn create_activity(
    db: &DatabaseConnection,
    input: ActivityInput,
) -> Result<activity::Model, ServiceError> {
    let am = activity::ActiveModel {
        name: Set(input.name.flatten()),
        difficulty: Set(input.difficulty.flatten()),
        ..Default::default()
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(activity_id = created.id, "activity created");
    Ok(created)
}

/// Partial update; a present-but-null field clears the column.
pub async fn update_activity(
    db: &DatabaseConnection,
    id: i32,
    input: ActivityInput,
) -> Result<activity::Model, ServiceError> {
    let mut am: activity::ActiveModel = get_activity(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Activity"))?
        .into();
    if let Some(name) = input.name {
        am.name = Set(name);
    }
    if let Some(difficulty) = input.difficulty {
        am.difficulty = Set(difficulty);
    }
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete an activity together with its signups, atomically.
pub async fn delete_activity(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let found = get_activity(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Activity"))?;
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    signup::Entity::delete_many()
        .filter(signup::Column::ActivityId.eq(found.id))
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    activity::Entity::delete_by_id(found.id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(activity_id = found.id, "activity deleted with signups");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camper_service::{self, CamperInput};
    use crate::signup_service::{self, SignupInput};
    use crate::test_support::get_db;

    fn input(name: &str, difficulty: i32) -> ActivityInput {
        ActivityInput {
            name: Some(Some(name.to_string())),
            difficulty: Some(Some(difficulty)),
        }
    }

    #[tokio::test]
    async fn activity_crud_round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_activity(&db, input("Archery", 2)).await?;
        assert_eq!(created.id, 1);
        assert_eq!(created.name.as_deref(), Some("Archery"));
        assert_eq!(created.difficulty, Some(2));

        let all = list_activities(&db).await?;
        assert_eq!(all.len(), 1);

        delete_activity(&db, created.id).await?;
        assert!(get_activity(&db, created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn accepts_absent_and_null_fields_as_is() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        // No validation on activities; an empty payload is stored with nulls
        let created = create_activity(&db, ActivityInput::default()).await?;
        assert!(created.name.is_none());
        assert!(created.difficulty.is_none());

        // Explicit nulls land the same way
        let created = create_activity(
            &db,
            ActivityInput { name: Some(None), difficulty: Some(None) },
        )
        .await?;
        assert!(created.name.is_none());
        assert!(created.difficulty.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_distinguishes_null_from_absent() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_activity(&db, input("Kayaking", 4)).await?;

        // Absent name: untouched
        let updated = update_activity(
            &db,
            created.id,
            ActivityInput { name: None, difficulty: Some(Some(5)) },
        )
        .await?;
        assert_eq!(updated.name.as_deref(), Some("Kayaking"));
        assert_eq!(updated.difficulty, Some(5));

        // Present null: cleared
        let updated = update_activity(
            &db,
            created.id,
            ActivityInput { name: Some(None), difficulty: None },
        )
        .await?;
        assert!(updated.name.is_none());
        assert_eq!(updated.difficulty, Some(5));
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_missing_activity_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let err = update_activity(&db, 7, ActivityInput::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Activity not found");

        let err = delete_activity(&db, 7).await.unwrap_err();
        assert_eq!(err.to_string(), "Activity not found");
        Ok(())
    }

    #[tokio::test]
    async fn delete_cascades_to_signups() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let camper = camper_service::create_camper(
            &db,
            CamperInput { name: Some(Some("Zoe".into())), age: Some(Some(11)) },
        )
        .await?;
        let activity = create_activity(&db, input("Rock Climbing", 5)).await?;
        signup_service::create_signup(
            &db,
            SignupInput {
                camper_id: Some(Some(camper.id)),
                activity_id: Some(Some(activity.id)),
                time: Some(Some(14)),
            },
        )
        .await?;

        delete_activity(&db, activity.id).await?;
        assert!(signup_service::list_signups(&db).await?.is_empty());
        // The camper side of the join survives
        assert!(camper_service::get_camper(&db, camper.id).await?.is_some());
        Ok(())
    }
}
