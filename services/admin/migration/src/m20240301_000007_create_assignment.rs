use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignment::AssignmentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignment::CourseId).integer().not_null())
                    .col(
                        ColumnDef::new(Assignment::AssignmentName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignment::Description).text())
                    .col(ColumnDef::new(Assignment::DueDate).date())
                    .col(ColumnDef::new(Assignment::AutotesterId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_course")
                            .from(Assignment::Table, Assignment::CourseId)
                            .to(Course::Table, Course::CourseId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_autotester")
                            .from(Assignment::Table, Assignment::AutotesterId)
                            .to(Autotester::Table, Autotester::AutotesterId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Assignment {
    Table,
    AssignmentId,
    CourseId,
    AssignmentName,
    Description,
    DueDate,
    AutotesterId,
}

#[derive(Iden)]
enum Course {
    Table,
    CourseId,
}

#[derive(Iden)]
enum Autotester {
    Table,
    AutotesterId,
}
