use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Classifies a credit load (full time, half time, ...) for given terms and levels
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student_load_rule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub slr_id: i64,
    pub status: String, // F, Q, H, L
    pub min_cred: f64,
    pub max_cred: f64,
    pub term: String,            // e.g. "FA,SP"
    pub acad_level_code: String, // e.g. "UG,GR"
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
