use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A section waiting in a student's registration cart
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stu_rgn_cart")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub stu_id: i64,
    pub course_sec_id: i64,
    /// Past this moment the entry can no longer be removed by the student
    pub delete_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
