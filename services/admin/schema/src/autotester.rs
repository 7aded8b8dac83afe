use sea_orm::entity::prelude::*;

/// Where the autotester fetches student code and tests from, and which image runs them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "autotester")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "autotester_id")]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub student_gitlab_url: String,
    #[sea_orm(column_type = "Text")]
    pub tests_gitlab_url: String,
    #[sea_orm(column_type = "Text")]
    pub student_code_path: String,
    #[sea_orm(column_type = "Text")]
    pub test_code_path: String,
    #[sea_orm(column_type = "Text")]
    pub docker_image_url: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub gitlab_token: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
