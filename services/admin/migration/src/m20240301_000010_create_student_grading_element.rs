use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentGradingElement::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentGradingElement::StudentGradingElementId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentGradingElement::StudentAssignmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentGradingElement::GradingElementId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentGradingElement::PointsAwarded)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentGradingElement::Feedback).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_grading_element_student_assignment")
                            .from(
                                StudentGradingElement::Table,
                                StudentGradingElement::StudentAssignmentId,
                            )
                            .to(StudentAssignment::Table, StudentAssignment::StudentAssignmentId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_grading_element_grading_element")
                            .from(
                                StudentGradingElement::Table,
                                StudentGradingElement::GradingElementId,
                            )
                            .to(GradingElement::Table, GradingElement::GradingElementId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentGradingElement::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StudentGradingElement {
    Table,
    StudentGradingElementId,
    StudentAssignmentId,
    GradingElementId,
    PointsAwarded,
    Feedback,
}

#[derive(Iden)]
enum StudentAssignment {
    Table,
    StudentAssignmentId,
}

#[derive(Iden)]
enum GradingElement {
    Table,
    GradingElementId,
}
