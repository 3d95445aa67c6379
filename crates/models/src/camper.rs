use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::signup;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "campers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Signups,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Signups => Entity::has_many(signup::Entity).into(),
        }
    }
}

impl Related<signup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Signups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Runs on every assignment of `name`; absent and empty are rejected alike.
pub fn validate_name(name: Option<&str>) -> Result<String, ModelError> {
    match name {
        Some(n) if !n.is_empty() => Ok(n.to_string()),
        _ => Err(ModelError::Validation("Name is required".into())),
    }
}

/// Runs on every assignment of `age`.
pub fn validate_age(age: Option<i32>) -> Result<i32, ModelError> {
    match age {
        Some(a) if (8..=18).contains(&a) => Ok(a),
        _ => Err(ModelError::Validation("Age must be between 8 and 18".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_be_present_and_non_empty() {
        assert!(validate_name(Some("Caitlin")).is_ok());
        assert_eq!(
            validate_name(Some("")).unwrap_err().to_string(),
            "Name is required"
        );
        assert_eq!(
            validate_name(None).unwrap_err().to_string(),
            "Name is required"
        );
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert_eq!(validate_age(Some(8)).unwrap(), 8);
        assert_eq!(validate_age(Some(18)).unwrap(), 18);
        for bad in [Some(7), Some(19), Some(-1), None] {
            assert_eq!(
                validate_age(bad).unwrap_err().to_string(),
                "Age must be between 8 and 18"
            );
        }
    }
}
