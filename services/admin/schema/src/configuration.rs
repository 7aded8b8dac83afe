use sea_orm::entity::prelude::*;

/// Platform-wide key/value setting.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "configuration")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "config_id")]
    pub id: i32,
    #[sea_orm(unique)]
    pub config_key: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub config_value: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
