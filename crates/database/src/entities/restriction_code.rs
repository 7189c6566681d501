use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restriction_code")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rstr_code: String,
    pub description: String,
    pub dept_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DeptCode",
        to = "super::department::Column::DeptCode"
    )]
    Department,
    #[sea_orm(has_many = "super::restriction::Entity")]
    Restrictions,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::restriction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restrictions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
