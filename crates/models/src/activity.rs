use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::signup;

// Activity fields carry no validation; name and difficulty are stored
// exactly as submitted, nulls included.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub difficulty: Option<i32>,
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
