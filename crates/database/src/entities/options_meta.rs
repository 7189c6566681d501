use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// System-wide key/value settings
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "options_meta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub meta_id: i64,
    #[sea_orm(unique)]
    pub meta_key: String,
    pub meta_value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
