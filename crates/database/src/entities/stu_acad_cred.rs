use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Academic credit a student has attempted or earned for a course
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stu_acad_cred")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub stu_acad_cred_id: i64,
    pub stu_id: i64,
    pub course_code: String,
    pub course_sec_id: Option<i64>,
    pub term_code: String,
    pub grade: Option<String>,
    pub status: String, // A, N, D, W, C
    pub att_cred: f64,
    pub comp_cred: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
