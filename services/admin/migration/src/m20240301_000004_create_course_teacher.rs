use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseTeacher::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseTeacher::CourseTeacherId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseTeacher::CourseId).integer().not_null())
                    .col(ColumnDef::new(CourseTeacher::TeacherId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_teacher_course")
                            .from(CourseTeacher::Table, CourseTeacher::CourseId)
                            .to(Course::Table, Course::CourseId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_teacher_teacher")
                            .from(CourseTeacher::Table, CourseTeacher::TeacherId)
                            .to(AppUser::Table, AppUser::AppUserId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseTeacher::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CourseTeacher {
    Table,
    CourseTeacherId,
    CourseId,
    TeacherId,
}

#[derive(Iden)]
enum Course {
    Table,
    CourseId,
}

#[derive(Iden)]
enum AppUser {
    Table,
    AppUserId,
}
