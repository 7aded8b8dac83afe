//! Request and response bodies for every resource.
//!
//! Request fields are all optional so that missing values reach validation
//! and are reported alongside every other violation instead of failing
//! deserialization.

pub mod app_user;
pub mod assignment;
pub mod autotester;
pub mod configuration;
pub mod course;
pub mod course_teacher;
pub mod enrollment;
pub mod grading_element;
pub mod student_assignment;
pub mod student_grading_element;
pub mod user_role;

use rust_decimal::Decimal;
use testify_domain::validation::Constraint;

/// Largest value a `numeric(5,2)` column holds.
pub(crate) const MAX_SCORE: Decimal = Decimal::from_parts(99_999, 0, 0, false, 2);

/// Shape of a `numeric(5,2)` column.
pub(crate) const SCORE_DIGITS: (u32, u32) = (3, 2);

pub(crate) const fn not_null(message: &'static str) -> Constraint {
    Constraint::NotNull { message }
}

pub(crate) const fn not_empty(message: &'static str) -> Constraint {
    Constraint::NotEmpty { message }
}

pub(crate) const fn length(min: u64, max: u64, message: &'static str) -> Constraint {
    Constraint::Length { min, max, message }
}
