use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{activity, camper};

/// Join record linking one camper to one activity at a given hour.
/// The same (camper, activity) pair may appear more than once.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "signups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub time: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Camper,
    Activity,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Camper => Entity::belongs_to(camper::Entity)
                .from(Column::CamperId)
                .to(camper::Column::Id)
                .into(),
            Relation::Activity => Entity::belongs_to(activity::Entity)
                .from(Column::ActivityId)
                .to(activity::Column::Id)
                .into(),
        }
    }
}

impl Related<camper::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Camper.def()
    }
}

impl Related<activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Runs on every assignment of `time`.
pub fn validate_time(time: Option<i32>) -> Result<i32, ModelError> {
    match time {
        Some(t) if (0..=23).contains(&t) => Ok(t),
        _ => Err(ModelError::Validation("Time must be between 0 and 23".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_bounds_are_inclusive() {
        assert_eq!(validate_time(Some(0)).unwrap(), 0);
        assert_eq!(validate_time(Some(23)).unwrap(), 23);
        for bad in [Some(-1), Some(24), Some(25), None] {
            assert_eq!(
                validate_time(bad).unwrap_err().to_string(),
                "Time must be between 0 and 23"
            );
        }
    }
}
