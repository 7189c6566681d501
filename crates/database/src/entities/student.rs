use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    /// Same value as the person's `person_id`
    #[sea_orm(primary_key, auto_increment = false)]
    pub stu_id: i64,
    pub status: String, // A, I, G
    pub tags: Option<String>,
    pub add_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::StuId",
        to = "super::person::Column::PersonId"
    )]
    Person,
    #[sea_orm(has_many = "super::stu_program::Entity")]
    Programs,
    #[sea_orm(has_many = "super::restriction::Entity")]
    Restrictions,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl Related<super::stu_program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Programs.def()
    }
}

impl Related<super::restriction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restrictions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
