use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An administrative hold placed on a student
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restriction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub rstr_id: i64,
    pub stu_id: i64,
    pub rstr_code: String,
    pub severity: i32,
    pub start_date: Date,
    /// `None` while the restriction is open-ended
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StuId",
        to = "super::student::Column::StuId"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::restriction_code::Entity",
        from = "Column::RstrCode",
        to = "super::restriction_code::Column::RstrCode"
    )]
    RestrictionCode,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::restriction_code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestrictionCode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
