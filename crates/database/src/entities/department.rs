use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "department")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub dept_code: String,
    pub dept_name: String,
    pub dept_email: Option<String>,
    pub dept_phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::restriction_code::Entity")]
    RestrictionCodes,
}

impl Related<super::restriction_code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestrictionCodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
