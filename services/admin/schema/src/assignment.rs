use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assignment")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "assignment_id")]
    pub id: i32,
    pub course_id: i32,
    pub assignment_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub autotester_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::autotester::Entity",
        from = "Column::AutotesterId",
        to = "super::autotester::Column::Id"
    )]
    Autotester,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::autotester::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Autotester.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
