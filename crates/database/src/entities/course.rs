use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub course_id: i64,
    pub course_code: String, // e.g. "MATH-101"
    pub course_short_title: String,
    /// Comma-separated course codes, e.g. "C100,C101"
    pub pre_req: Option<String>,
    pub min_credit: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_sec::Entity")]
    Sections,
}

impl Related<super::course_sec::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
