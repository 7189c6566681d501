use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A student's enrollment in one course section
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stu_course_sec")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub stu_id: i64,
    pub course_sec_id: i64,
    pub course_sec_code: String,
    pub term_code: String,
    pub status: String, // A, N, D, W, C
    pub status_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
