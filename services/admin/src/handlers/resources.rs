//! One [`Resource`] per record kind.

use crate::dto::app_user::{AppUserRequest, AppUserResponse};
use crate::dto::assignment::{AssignmentRequest, AssignmentResponse};
use crate::dto::autotester::{AutotesterRequest, AutotesterResponse};
use crate::dto::configuration::{ConfigurationRequest, ConfigurationResponse};
use crate::dto::course::{CourseRequest, CourseResponse};
use crate::dto::course_teacher::{CourseTeacherRequest, CourseTeacherResponse};
use crate::dto::enrollment::{EnrollmentRequest, EnrollmentResponse};
use crate::dto::grading_element::{GradingElementRequest, GradingElementResponse};
use crate::dto::student_assignment::{StudentAssignmentRequest, StudentAssignmentResponse};
use crate::dto::student_grading_element::{
    StudentGradingElementRequest, StudentGradingElementResponse,
};
use crate::dto::user_role::{UserRoleRequest, UserRoleResponse};
use crate::handlers::crud::Resource;
use crate::infra::db::{
    DbAppUserRepository, DbAssignmentRepository, DbAutotesterRepository,
    DbConfigurationRepository, DbCourseRepository, DbCourseTeacherRepository,
    DbEnrollmentRepository, DbGradingElementRepository, DbStudentAssignmentRepository,
    DbStudentGradingElementRepository, DbUserRoleRepository,
};
use crate::mapper::{
    AppUserMapper, AssignmentMapper, AutotesterMapper, ConfigurationMapper, CourseMapper,
    CourseTeacherMapper, EnrollmentMapper, GradingElementMapper, StudentAssignmentMapper,
    StudentGradingElementMapper, UserRoleMapper,
};
use crate::state::AppState;

pub struct UserRoles;

impl Resource for UserRoles {
    type Request = UserRoleRequest;
    type Response = UserRoleResponse;
    type Repo = DbUserRoleRepository;
    type Mapper = UserRoleMapper;

    const SEGMENT: &'static str = "user-role";

    fn repo(state: &AppState) -> Self::Repo {
        state.user_role_repo()
    }

    fn mapper() -> Self::Mapper {
        UserRoleMapper
    }
}

pub struct AppUsers;

impl Resource for AppUsers {
    type Request = AppUserRequest;
    type Response = AppUserResponse;
    type Repo = DbAppUserRepository;
    type Mapper = AppUserMapper;

    const SEGMENT: &'static str = "user";

    fn repo(state: &AppState) -> Self::Repo {
        state.app_user_repo()
    }

    fn mapper() -> Self::Mapper {
        AppUserMapper
    }
}

pub struct Courses;

impl Resource for Courses {
    type Request = CourseRequest;
    type Response = CourseResponse;
    type Repo = DbCourseRepository;
    type Mapper = CourseMapper;

    const SEGMENT: &'static str = "course";

    fn repo(state: &AppState) -> Self::Repo {
        state.course_repo()
    }

    fn mapper() -> Self::Mapper {
        CourseMapper
    }
}

pub struct CourseTeachers;

impl Resource for CourseTeachers {
    type Request = CourseTeacherRequest;
    type Response = CourseTeacherResponse;
    type Repo = DbCourseTeacherRepository;
    type Mapper = CourseTeacherMapper;

    const SEGMENT: &'static str = "course-teacher";

    fn repo(state: &AppState) -> Self::Repo {
        state.course_teacher_repo()
    }

    fn mapper() -> Self::Mapper {
        CourseTeacherMapper
    }
}

pub struct Enrollments;

impl Resource for Enrollments {
    type Request = EnrollmentRequest;
    type Response = EnrollmentResponse;
    type Repo = DbEnrollmentRepository;
    type Mapper = EnrollmentMapper;

    const SEGMENT: &'static str = "enrollment";

    fn repo(state: &AppState) -> Self::Repo {
        state.enrollment_repo()
    }

    fn mapper() -> Self::Mapper {
        EnrollmentMapper
    }
}

pub struct Autotesters;

impl Resource for Autotesters {
    type Request = AutotesterRequest;
    type Response = AutotesterResponse;
    type Repo = DbAutotesterRepository;
    type Mapper = AutotesterMapper;

    const SEGMENT: &'static str = "autotester";

    fn repo(state: &AppState) -> Self::Repo {
        state.autotester_repo()
    }

    fn mapper() -> Self::Mapper {
        AutotesterMapper
    }
}

pub struct Assignments;

impl Resource for Assignments {
    type Request = AssignmentRequest;
    type Response = AssignmentResponse;
    type Repo = DbAssignmentRepository;
    type Mapper = AssignmentMapper;

    const SEGMENT: &'static str = "assignment";

    fn repo(state: &AppState) -> Self::Repo {
        state.assignment_repo()
    }

    fn mapper() -> Self::Mapper {
        AssignmentMapper
    }
}

pub struct GradingElements;

impl Resource for GradingElements {
    type Request = GradingElementRequest;
    type Response = GradingElementResponse;
    type Repo = DbGradingElementRepository;
    type Mapper = GradingElementMapper;

    const SEGMENT: &'static str = "grading-element";

    fn repo(state: &AppState) -> Self::Repo {
        state.grading_element_repo()
    }

    fn mapper() -> Self::Mapper {
        GradingElementMapper
    }
}

pub struct StudentAssignments;

impl Resource for StudentAssignments {
    type Request = StudentAssignmentRequest;
    type Response = StudentAssignmentResponse;
    type Repo = DbStudentAssignmentRepository;
    type Mapper = StudentAssignmentMapper;

    const SEGMENT: &'static str = "student-assignment";

    fn repo(state: &AppState) -> Self::Repo {
        state.student_assignment_repo()
    }

    fn mapper() -> Self::Mapper {
        StudentAssignmentMapper
    }
}

pub struct StudentGradingElements;

impl Resource for StudentGradingElements {
    type Request = StudentGradingElementRequest;
    type Response = StudentGradingElementResponse;
    type Repo = DbStudentGradingElementRepository;
    type Mapper = StudentGradingElementMapper;

    const SEGMENT: &'static str = "student-grading-element";

    fn repo(state: &AppState) -> Self::Repo {
        state.student_grading_element_repo()
    }

    fn mapper() -> Self::Mapper {
        StudentGradingElementMapper
    }
}

pub struct Configurations;

impl Resource for Configurations {
    type Request = ConfigurationRequest;
    type Response = ConfigurationResponse;
    type Repo = DbConfigurationRepository;
    type Mapper = ConfigurationMapper;

    const SEGMENT: &'static str = "configuration";

    fn repo(state: &AppState) -> Self::Repo {
        state.configuration_repo()
    }

    fn mapper() -> Self::Mapper {
        ConfigurationMapper
    }
}
