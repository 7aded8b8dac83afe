pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user_role;
mod m20240301_000002_create_app_user;
mod m20240301_000003_create_course;
mod m20240301_000004_create_course_teacher;
mod m20240301_000005_create_enrollment;
mod m20240301_000006_create_autotester;
mod m20240301_000007_create_assignment;
mod m20240301_000008_create_grading_element;
mod m20240301_000009_create_student_assignment;
mod m20240301_000010_create_student_grading_element;
mod m20240301_000011_create_configuration;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user_role::Migration),
            Box::new(m20240301_000002_create_app_user::Migration),
            Box::new(m20240301_000003_create_course::Migration),
            Box::new(m20240301_000004_create_course_teacher::Migration),
            Box::new(m20240301_000005_create_enrollment::Migration),
            Box::new(m20240301_000006_create_autotester::Migration),
            Box::new(m20240301_000007_create_assignment::Migration),
            Box::new(m20240301_000008_create_grading_element::Migration),
            Box::new(m20240301_000009_create_student_assignment::Migration),
            Box::new(m20240301_000010_create_student_grading_element::Migration),
            Box::new(m20240301_000011_create_configuration::Migration),
        ]
    }
}
