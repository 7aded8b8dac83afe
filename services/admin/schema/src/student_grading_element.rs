use sea_orm::entity::prelude::*;

/// Points a student received for one grading element of a submission.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_grading_element")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "student_grading_element_id")]
    pub id: i32,
    pub student_assignment_id: i32,
    pub grading_element_id: i32,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub points_awarded: Decimal,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_assignment::Entity",
        from = "Column::StudentAssignmentId",
        to = "super::student_assignment::Column::Id"
    )]
    StudentAssignment,
    #[sea_orm(
        belongs_to = "super::grading_element::Entity",
        from = "Column::GradingElementId",
        to = "super::grading_element::Column::Id"
    )]
    GradingElement,
}

impl Related<super::student_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentAssignment.def()
    }
}

impl Related<super::grading_element::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GradingElement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
