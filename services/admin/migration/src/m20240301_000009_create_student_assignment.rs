use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentAssignment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentAssignment::StudentAssignmentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentAssignment::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAssignment::AssignmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentAssignment::SubmissionUrl).text())
                    .col(ColumnDef::new(StudentAssignment::Grade).decimal_len(5, 2))
                    .col(ColumnDef::new(StudentAssignment::Feedback).text())
                    .col(ColumnDef::new(StudentAssignment::SubmissionDate).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_assignment_student")
                            .from(StudentAssignment::Table, StudentAssignment::StudentId)
                            .to(AppUser::Table, AppUser::AppUserId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_assignment_assignment")
                            .from(StudentAssignment::Table, StudentAssignment::AssignmentId)
                            .to(Assignment::Table, Assignment::AssignmentId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentAssignment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StudentAssignment {
    Table,
    StudentAssignmentId,
    StudentId,
    AssignmentId,
    SubmissionUrl,
    Grade,
    Feedback,
    SubmissionDate,
}

#[derive(Iden)]
enum AppUser {
    Table,
    AppUserId,
}

#[derive(Iden)]
enum Assignment {
    Table,
    AssignmentId,
}
