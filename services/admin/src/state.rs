use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAppUserRepository, DbAssignmentRepository, DbAutotesterRepository,
    DbConfigurationRepository, DbCourseRepository, DbCourseTeacherRepository,
    DbEnrollmentRepository, DbGradingElementRepository, DbReferenceChecker,
    DbStudentAssignmentRepository, DbStudentGradingElementRepository, DbUserRoleRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_role_repo(&self) -> DbUserRoleRepository {
        DbUserRoleRepository {
            db: self.db.clone(),
        }
    }

    pub fn app_user_repo(&self) -> DbAppUserRepository {
        DbAppUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn course_repo(&self) -> DbCourseRepository {
        DbCourseRepository {
            db: self.db.clone(),
        }
    }

    pub fn course_teacher_repo(&self) -> DbCourseTeacherRepository {
        DbCourseTeacherRepository {
            db: self.db.clone(),
        }
    }

    pub fn enrollment_repo(&self) -> DbEnrollmentRepository {
        DbEnrollmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn autotester_repo(&self) -> DbAutotesterRepository {
        DbAutotesterRepository {
            db: self.db.clone(),
        }
    }

    pub fn assignment_repo(&self) -> DbAssignmentRepository {
        DbAssignmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn grading_element_repo(&self) -> DbGradingElementRepository {
        DbGradingElementRepository {
            db: self.db.clone(),
        }
    }

    pub fn student_assignment_repo(&self) -> DbStudentAssignmentRepository {
        DbStudentAssignmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn student_grading_element_repo(&self) -> DbStudentGradingElementRepository {
        DbStudentGradingElementRepository {
            db: self.db.clone(),
        }
    }

    pub fn configuration_repo(&self) -> DbConfigurationRepository {
        DbConfigurationRepository {
            db: self.db.clone(),
        }
    }

    pub fn reference_checker(&self) -> DbReferenceChecker {
        DbReferenceChecker {
            db: self.db.clone(),
        }
    }
}
