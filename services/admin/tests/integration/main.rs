mod helpers;

mod app_user_test;
mod autotester_test;
mod configuration_test;
mod course_test;
mod health_test;
mod repository_test;
mod user_role_test;
