use sea_orm::entity::prelude::*;

/// A student's submission for an assignment and its overall grade.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_assignment")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "student_assignment_id")]
    pub id: i32,
    pub student_id: i32,
    pub assignment_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub submission_url: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub grade: Option<Decimal>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub submission_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::StudentId",
        to = "super::app_user::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id"
    )]
    Assignment,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
