use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// The kinds of record managed by the admin service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    UserRole,
    AppUser,
    Course,
    CourseTeacher,
    Enrollment,
    Autotester,
    Assignment,
    GradingElement,
    StudentAssignment,
    StudentGradingElement,
    Configuration,
}

impl RecordKind {
    /// Lower-case label used in error messages, e.g. `"user role"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::UserRole => "user role",
            Self::AppUser => "user",
            Self::Course => "course",
            Self::CourseTeacher => "course teacher",
            Self::Enrollment => "enrollment",
            Self::Autotester => "autotester",
            Self::Assignment => "assignment",
            Self::GradingElement => "grading element",
            Self::StudentAssignment => "student assignment",
            Self::StudentGradingElement => "student grading element",
            Self::Configuration => "configuration",
        }
    }

    /// Label with its first letter capitalised, e.g. `"User role"`.
    pub fn title(self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Name of the unique natural key in messages.
    pub fn key_label(self) -> &'static str {
        match self {
            Self::UserRole => "name",
            Self::AppUser => "email",
            _ => "key",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A foreign key held by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub kind: RecordKind,
    pub id: i32,
}

impl Reference {
    pub fn new(kind: RecordKind, id: i32) -> Self {
        Self { kind, id }
    }
}

/// A stored row as seen by use cases. The id is `None` until the storage
/// layer assigns one.
pub trait Record: Clone + Send + Sync + 'static {
    const KIND: RecordKind;

    fn id(&self) -> Option<i32>;

    /// Value of the declared unique key, for kinds that have one.
    fn natural_key(&self) -> Option<&str> {
        None
    }

    /// Rows this record points at. Each must exist before a write.
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }
}

// ── Records ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRole {
    pub id: Option<i32>,
    pub name: String,
}

impl Record for UserRole {
    const KIND: RecordKind = RecordKind::UserRole;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppUser {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_role_id: i32,
}

impl Record for AppUser {
    const KIND: RecordKind = RecordKind::AppUser;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new(RecordKind::UserRole, self.user_role_id)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: Option<i32>,
    pub course_name: String,
    pub description: Option<String>,
}

impl Record for Course {
    const KIND: RecordKind = RecordKind::Course;

    fn id(&self) -> Option<i32> {
        self.id
    }
}

/// Assignment of a teacher (an [`AppUser`]) to a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTeacher {
    pub id: Option<i32>,
    pub course_id: i32,
    pub teacher_id: i32,
}

impl Record for CourseTeacher {
    const KIND: RecordKind = RecordKind::CourseTeacher;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(RecordKind::Course, self.course_id),
            Reference::new(RecordKind::AppUser, self.teacher_id),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: Option<i32>,
    pub course_id: i32,
    pub student_id: i32,
}

impl Record for Enrollment {
    const KIND: RecordKind = RecordKind::Enrollment;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(RecordKind::Course, self.course_id),
            Reference::new(RecordKind::AppUser, self.student_id),
        ]
    }
}

/// Where an autotester fetches student code and tests from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autotester {
    pub id: Option<i32>,
    pub name: String,
    pub student_gitlab_url: String,
    pub tests_gitlab_url: String,
    pub student_code_path: String,
    pub test_code_path: String,
    pub docker_image_url: String,
    pub gitlab_token: Option<String>,
}

impl Record for Autotester {
    const KIND: RecordKind = RecordKind::Autotester;

    fn id(&self) -> Option<i32> {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: Option<i32>,
    pub course_id: i32,
    pub assignment_name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub autotester_id: Option<i32>,
}

impl Record for Assignment {
    const KIND: RecordKind = RecordKind::Assignment;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        let mut refs = vec![Reference::new(RecordKind::Course, self.course_id)];
        if let Some(autotester_id) = self.autotester_id {
            refs.push(Reference::new(RecordKind::Autotester, autotester_id));
        }
        refs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingElement {
    pub id: Option<i32>,
    pub assignment_id: i32,
    pub element_name: String,
    pub description: Option<String>,
    pub max_points: Decimal,
    pub is_deduction: bool,
}

impl Record for GradingElement {
    const KIND: RecordKind = RecordKind::GradingElement;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new(RecordKind::Assignment, self.assignment_id)]
    }
}

/// A student's submission for an assignment and its overall grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentAssignment {
    pub id: Option<i32>,
    pub student_id: i32,
    pub assignment_id: i32,
    pub submission_url: Option<String>,
    pub grade: Option<Decimal>,
    pub feedback: Option<String>,
    pub submission_date: Option<NaiveDate>,
}

impl Record for StudentAssignment {
    const KIND: RecordKind = RecordKind::StudentAssignment;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(RecordKind::AppUser, self.student_id),
            Reference::new(RecordKind::Assignment, self.assignment_id),
        ]
    }
}

/// Points awarded to one submission for one grading element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentGradingElement {
    pub id: Option<i32>,
    pub student_assignment_id: i32,
    pub grading_element_id: i32,
    pub points_awarded: Decimal,
    pub feedback: Option<String>,
}

impl Record for StudentGradingElement {
    const KIND: RecordKind = RecordKind::StudentGradingElement;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(RecordKind::StudentAssignment, self.student_assignment_id),
            Reference::new(RecordKind::GradingElement, self.grading_element_id),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub id: Option<i32>,
    pub config_key: String,
    pub config_value: Option<String>,
}

impl Record for Configuration {
    const KIND: RecordKind = RecordKind::Configuration;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.config_key)
    }
}
