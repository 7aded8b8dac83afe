use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use testify_admin_schema::{
    app_user, assignment, autotester, configuration, course, course_teacher, enrollment,
    grading_element, student_assignment, student_grading_element, user_role,
};
use testify_core::sea_ext::{ConstraintViolation, constraint_violation};

use crate::domain::repository::{CrudRepository, ReferencePort};
use crate::domain::types::{
    AppUser, Assignment, Autotester, Configuration, Course, CourseTeacher, Enrollment,
    GradingElement, Record, RecordKind, StudentAssignment, StudentGradingElement, UserRole,
};
use crate::error::AdminServiceError;

// ── Error translation ────────────────────────────────────────────────────────

/// Translate a failed insert/update. A unique violation surfaces as the same
/// conflict the pre-check reports.
fn write_failed<T: Record>(err: DbErr, record: &T, context: &'static str) -> AdminServiceError {
    if matches!(err, DbErr::RecordNotUpdated) {
        if let Some(id) = record.id() {
            return AdminServiceError::not_found(T::KIND, id);
        }
    }
    match (constraint_violation(&err), record.natural_key()) {
        (Some(ConstraintViolation::Unique(_)), Some(key)) => {
            AdminServiceError::already_exists(T::KIND, key)
        }
        (Some(ConstraintViolation::ForeignKey(detail)), _) => {
            let kind = T::KIND;
            tracing::warn!(%kind, %detail, "write rejected by foreign key");
            AdminServiceError::NotFound(format!("{} references a missing record", T::KIND.title()))
        }
        _ => AdminServiceError::Internal(anyhow::Error::new(err).context(context)),
    }
}

fn delete_failed(err: DbErr, kind: RecordKind, id: i32) -> AdminServiceError {
    match constraint_violation(&err) {
        Some(ConstraintViolation::ForeignKey(_)) => AdminServiceError::in_use(kind, id),
        _ => AdminServiceError::Internal(anyhow::Error::new(err).context("delete row")),
    }
}

fn stored_id<T: Record>(record: &T) -> Result<i32, AdminServiceError> {
    record
        .id()
        .ok_or_else(|| anyhow::anyhow!("{} has not been stored", T::KIND).into())
}

// ── UserRole repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRoleRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbUserRoleRepository {
    type Record = UserRole;

    async fn find_by_id(&self, id: i32) -> Result<Option<UserRole>, AdminServiceError> {
        let model = user_role::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user role by id")?;
        Ok(model.map(user_role_from_model))
    }

    async fn find_by_natural_key(&self, key: &str) -> Result<Option<UserRole>, AdminServiceError> {
        let model = user_role::Entity::find()
            .filter(user_role::Column::UserRoleName.eq(key))
            .one(&self.db)
            .await
            .context("find user role by name")?;
        Ok(model.map(user_role_from_model))
    }

    async fn find_all(&self) -> Result<Vec<UserRole>, AdminServiceError> {
        let models = user_role::Entity::find()
            .order_by_asc(user_role::Column::Id)
            .all(&self.db)
            .await
            .context("list user roles")?;
        Ok(models.into_iter().map(user_role_from_model).collect())
    }

    async fn save(&self, record: UserRole) -> Result<UserRole, AdminServiceError> {
        let am = user_role::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            user_role_name: Set(record.name.clone()),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model = result.map_err(|e| write_failed(e, &record, "save user role"))?;
        Ok(user_role_from_model(model))
    }

    async fn delete(&self, record: &UserRole) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        user_role::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::UserRole, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = user_role::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count user role")?;
        Ok(count > 0)
    }
}

fn user_role_from_model(model: user_role::Model) -> UserRole {
    UserRole {
        id: Some(model.id),
        name: model.user_role_name,
    }
}

// ── AppUser repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAppUserRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbAppUserRepository {
    type Record = AppUser;

    async fn find_by_id(&self, id: i32) -> Result<Option<AppUser>, AdminServiceError> {
        let model = app_user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(app_user_from_model))
    }

    async fn find_by_natural_key(&self, key: &str) -> Result<Option<AppUser>, AdminServiceError> {
        let model = app_user::Entity::find()
            .filter(app_user::Column::Email.eq(key))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(app_user_from_model))
    }

    async fn find_all(&self) -> Result<Vec<AppUser>, AdminServiceError> {
        let models = app_user::Entity::find()
            .order_by_asc(app_user::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(app_user_from_model).collect())
    }

    async fn save(&self, record: AppUser) -> Result<AppUser, AdminServiceError> {
        let am = app_user::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            first_name: Set(record.first_name.clone()),
            last_name: Set(record.last_name.clone()),
            email: Set(record.email.clone()),
            user_role_id: Set(record.user_role_id),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model = result.map_err(|e| write_failed(e, &record, "save user"))?;
        Ok(app_user_from_model(model))
    }

    async fn delete(&self, record: &AppUser) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        app_user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::AppUser, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = app_user::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count user")?;
        Ok(count > 0)
    }
}

fn app_user_from_model(model: app_user::Model) -> AppUser {
    AppUser {
        id: Some(model.id),
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        user_role_id: model.user_role_id,
    }
}

// ── Course repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbCourseRepository {
    type Record = Course;

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AdminServiceError> {
        let model = course::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find course by id")?;
        Ok(model.map(course_from_model))
    }

    async fn find_all(&self) -> Result<Vec<Course>, AdminServiceError> {
        let models = course::Entity::find()
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await
            .context("list courses")?;
        Ok(models.into_iter().map(course_from_model).collect())
    }

    async fn save(&self, record: Course) -> Result<Course, AdminServiceError> {
        let am = course::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            course_name: Set(record.course_name.clone()),
            description: Set(record.description.clone()),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model = result.map_err(|e| write_failed(e, &record, "save course"))?;
        Ok(course_from_model(model))
    }

    async fn delete(&self, record: &Course) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        course::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::Course, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = course::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count course")?;
        Ok(count > 0)
    }
}

fn course_from_model(model: course::Model) -> Course {
    Course {
        id: Some(model.id),
        course_name: model.course_name,
        description: model.description,
    }
}

// ── CourseTeacher repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseTeacherRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbCourseTeacherRepository {
    type Record = CourseTeacher;

    async fn find_by_id(&self, id: i32) -> Result<Option<CourseTeacher>, AdminServiceError> {
        let model = course_teacher::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find course teacher by id")?;
        Ok(model.map(course_teacher_from_model))
    }

    async fn find_all(&self) -> Result<Vec<CourseTeacher>, AdminServiceError> {
        let models = course_teacher::Entity::find()
            .order_by_asc(course_teacher::Column::Id)
            .all(&self.db)
            .await
            .context("list course teachers")?;
        Ok(models.into_iter().map(course_teacher_from_model).collect())
    }

    async fn save(&self, record: CourseTeacher) -> Result<CourseTeacher, AdminServiceError> {
        let am = course_teacher::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            course_id: Set(record.course_id),
            teacher_id: Set(record.teacher_id),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model = result.map_err(|e| write_failed(e, &record, "save course teacher"))?;
        Ok(course_teacher_from_model(model))
    }

    async fn delete(&self, record: &CourseTeacher) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        course_teacher::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::CourseTeacher, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = course_teacher::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count course teacher")?;
        Ok(count > 0)
    }
}

fn course_teacher_from_model(model: course_teacher::Model) -> CourseTeacher {
    CourseTeacher {
        id: Some(model.id),
        course_id: model.course_id,
        teacher_id: model.teacher_id,
    }
}

// ── Enrollment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEnrollmentRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbEnrollmentRepository {
    type Record = Enrollment;

    async fn find_by_id(&self, id: i32) -> Result<Option<Enrollment>, AdminServiceError> {
        let model = enrollment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find enrollment by id")?;
        Ok(model.map(enrollment_from_model))
    }

    async fn find_all(&self) -> Result<Vec<Enrollment>, AdminServiceError> {
        let models = enrollment::Entity::find()
            .order_by_asc(enrollment::Column::Id)
            .all(&self.db)
            .await
            .context("list enrollments")?;
        Ok(models.into_iter().map(enrollment_from_model).collect())
    }

    async fn save(&self, record: Enrollment) -> Result<Enrollment, AdminServiceError> {
        let am = enrollment::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            course_id: Set(record.course_id),
            student_id: Set(record.student_id),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model = result.map_err(|e| write_failed(e, &record, "save enrollment"))?;
        Ok(enrollment_from_model(model))
    }

    async fn delete(&self, record: &Enrollment) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        enrollment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::Enrollment, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = enrollment::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count enrollment")?;
        Ok(count > 0)
    }
}

fn enrollment_from_model(model: enrollment::Model) -> Enrollment {
    Enrollment {
        id: Some(model.id),
        course_id: model.course_id,
        student_id: model.student_id,
    }
}

// ── Autotester repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAutotesterRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbAutotesterRepository {
    type Record = Autotester;

    async fn find_by_id(&self, id: i32) -> Result<Option<Autotester>, AdminServiceError> {
        let model = autotester::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find autotester by id")?;
        Ok(model.map(autotester_from_model))
    }

    async fn find_all(&self) -> Result<Vec<Autotester>, AdminServiceError> {
        let models = autotester::Entity::find()
            .order_by_asc(autotester::Column::Id)
            .all(&self.db)
            .await
            .context("list autotesters")?;
        Ok(models.into_iter().map(autotester_from_model).collect())
    }

    async fn save(&self, record: Autotester) -> Result<Autotester, AdminServiceError> {
        let am = autotester::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            name: Set(record.name.clone()),
            student_gitlab_url: Set(record.student_gitlab_url.clone()),
            tests_gitlab_url: Set(record.tests_gitlab_url.clone()),
            student_code_path: Set(record.student_code_path.clone()),
            test_code_path: Set(record.test_code_path.clone()),
            docker_image_url: Set(record.docker_image_url.clone()),
            gitlab_token: Set(record.gitlab_token.clone()),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model = result.map_err(|e| write_failed(e, &record, "save autotester"))?;
        Ok(autotester_from_model(model))
    }

    async fn delete(&self, record: &Autotester) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        autotester::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::Autotester, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = autotester::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count autotester")?;
        Ok(count > 0)
    }
}

fn autotester_from_model(model: autotester::Model) -> Autotester {
    Autotester {
        id: Some(model.id),
        name: model.name,
        student_gitlab_url: model.student_gitlab_url,
        tests_gitlab_url: model.tests_gitlab_url,
        student_code_path: model.student_code_path,
        test_code_path: model.test_code_path,
        docker_image_url: model.docker_image_url,
        gitlab_token: model.gitlab_token,
    }
}

// ── Assignment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAssignmentRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbAssignmentRepository {
    type Record = Assignment;

    async fn find_by_id(&self, id: i32) -> Result<Option<Assignment>, AdminServiceError> {
        let model = assignment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find assignment by id")?;
        Ok(model.map(assignment_from_model))
    }

    async fn find_all(&self) -> Result<Vec<Assignment>, AdminServiceError> {
        let models = assignment::Entity::find()
            .order_by_asc(assignment::Column::Id)
            .all(&self.db)
            .await
            .context("list assignments")?;
        Ok(models.into_iter().map(assignment_from_model).collect())
    }

    async fn save(&self, record: Assignment) -> Result<Assignment, AdminServiceError> {
        let am = assignment::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            course_id: Set(record.course_id),
            assignment_name: Set(record.assignment_name.clone()),
            description: Set(record.description.clone()),
            due_date: Set(record.due_date),
            autotester_id: Set(record.autotester_id),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model = result.map_err(|e| write_failed(e, &record, "save assignment"))?;
        Ok(assignment_from_model(model))
    }

    async fn delete(&self, record: &Assignment) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        assignment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::Assignment, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = assignment::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count assignment")?;
        Ok(count > 0)
    }
}

fn assignment_from_model(model: assignment::Model) -> Assignment {
    Assignment {
        id: Some(model.id),
        course_id: model.course_id,
        assignment_name: model.assignment_name,
        description: model.description,
        due_date: model.due_date,
        autotester_id: model.autotester_id,
    }
}

// ── GradingElement repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGradingElementRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbGradingElementRepository {
    type Record = GradingElement;

    async fn find_by_id(&self, id: i32) -> Result<Option<GradingElement>, AdminServiceError> {
        let model = grading_element::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find grading element by id")?;
        Ok(model.map(grading_element_from_model))
    }

    async fn find_all(&self) -> Result<Vec<GradingElement>, AdminServiceError> {
        let models = grading_element::Entity::find()
            .order_by_asc(grading_element::Column::Id)
            .all(&self.db)
            .await
            .context("list grading elements")?;
        Ok(models.into_iter().map(grading_element_from_model).collect())
    }

    async fn save(&self, record: GradingElement) -> Result<GradingElement, AdminServiceError> {
        let am = grading_element::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            assignment_id: Set(record.assignment_id),
            element_name: Set(record.element_name.clone()),
            description: Set(record.description.clone()),
            max_points: Set(record.max_points),
            is_deduction: Set(record.is_deduction),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model = result.map_err(|e| write_failed(e, &record, "save grading element"))?;
        Ok(grading_element_from_model(model))
    }

    async fn delete(&self, record: &GradingElement) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        grading_element::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::GradingElement, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = grading_element::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count grading element")?;
        Ok(count > 0)
    }
}

fn grading_element_from_model(model: grading_element::Model) -> GradingElement {
    GradingElement {
        id: Some(model.id),
        assignment_id: model.assignment_id,
        element_name: model.element_name,
        description: model.description,
        max_points: model.max_points,
        is_deduction: model.is_deduction,
    }
}

// ── StudentAssignment repository ─────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStudentAssignmentRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbStudentAssignmentRepository {
    type Record = StudentAssignment;

    async fn find_by_id(&self, id: i32) -> Result<Option<StudentAssignment>, AdminServiceError> {
        let model = student_assignment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find student assignment by id")?;
        Ok(model.map(student_assignment_from_model))
    }

    async fn find_all(&self) -> Result<Vec<StudentAssignment>, AdminServiceError> {
        let models = student_assignment::Entity::find()
            .order_by_asc(student_assignment::Column::Id)
            .all(&self.db)
            .await
            .context("list student assignments")?;
        Ok(models.into_iter().map(student_assignment_from_model).collect())
    }

    async fn save(
        &self,
        record: StudentAssignment,
    ) -> Result<StudentAssignment, AdminServiceError> {
        let am = student_assignment::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            student_id: Set(record.student_id),
            assignment_id: Set(record.assignment_id),
            submission_url: Set(record.submission_url.clone()),
            grade: Set(record.grade),
            feedback: Set(record.feedback.clone()),
            submission_date: Set(record.submission_date),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model = result.map_err(|e| write_failed(e, &record, "save student assignment"))?;
        Ok(student_assignment_from_model(model))
    }

    async fn delete(&self, record: &StudentAssignment) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        student_assignment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::StudentAssignment, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = student_assignment::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count student assignment")?;
        Ok(count > 0)
    }
}

fn student_assignment_from_model(model: student_assignment::Model) -> StudentAssignment {
    StudentAssignment {
        id: Some(model.id),
        student_id: model.student_id,
        assignment_id: model.assignment_id,
        submission_url: model.submission_url,
        grade: model.grade,
        feedback: model.feedback,
        submission_date: model.submission_date,
    }
}

// ── StudentGradingElement repository ─────────────────────────────────────────

#[derive(Clone)]
pub struct DbStudentGradingElementRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbStudentGradingElementRepository {
    type Record = StudentGradingElement;

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<StudentGradingElement>, AdminServiceError> {
        let model = student_grading_element::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find student grading element by id")?;
        Ok(model.map(student_grading_element_from_model))
    }

    async fn find_all(&self) -> Result<Vec<StudentGradingElement>, AdminServiceError> {
        let models = student_grading_element::Entity::find()
            .order_by_asc(student_grading_element::Column::Id)
            .all(&self.db)
            .await
            .context("list student grading elements")?;
        Ok(models
            .into_iter()
            .map(student_grading_element_from_model)
            .collect())
    }

    async fn save(
        &self,
        record: StudentGradingElement,
    ) -> Result<StudentGradingElement, AdminServiceError> {
        let am = student_grading_element::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            student_assignment_id: Set(record.student_assignment_id),
            grading_element_id: Set(record.grading_element_id),
            points_awarded: Set(record.points_awarded),
            feedback: Set(record.feedback.clone()),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model =
            result.map_err(|e| write_failed(e, &record, "save student grading element"))?;
        Ok(student_grading_element_from_model(model))
    }

    async fn delete(&self, record: &StudentGradingElement) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        student_grading_element::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::StudentGradingElement, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = student_grading_element::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count student grading element")?;
        Ok(count > 0)
    }
}

fn student_grading_element_from_model(
    model: student_grading_element::Model,
) -> StudentGradingElement {
    StudentGradingElement {
        id: Some(model.id),
        student_assignment_id: model.student_assignment_id,
        grading_element_id: model.grading_element_id,
        points_awarded: model.points_awarded,
        feedback: model.feedback,
    }
}

// ── Configuration repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbConfigurationRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository for DbConfigurationRepository {
    type Record = Configuration;

    async fn find_by_id(&self, id: i32) -> Result<Option<Configuration>, AdminServiceError> {
        let model = configuration::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find configuration by id")?;
        Ok(model.map(configuration_from_model))
    }

    async fn find_by_natural_key(
        &self,
        key: &str,
    ) -> Result<Option<Configuration>, AdminServiceError> {
        let model = configuration::Entity::find()
            .filter(configuration::Column::ConfigKey.eq(key))
            .one(&self.db)
            .await
            .context("find configuration by key")?;
        Ok(model.map(configuration_from_model))
    }

    async fn find_all(&self) -> Result<Vec<Configuration>, AdminServiceError> {
        let models = configuration::Entity::find()
            .order_by_asc(configuration::Column::Id)
            .all(&self.db)
            .await
            .context("list configuration")?;
        Ok(models.into_iter().map(configuration_from_model).collect())
    }

    async fn save(&self, record: Configuration) -> Result<Configuration, AdminServiceError> {
        let am = configuration::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            config_key: Set(record.config_key.clone()),
            config_value: Set(record.config_value.clone()),
        };
        let result = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        };
        let model = result.map_err(|e| write_failed(e, &record, "save configuration"))?;
        Ok(configuration_from_model(model))
    }

    async fn delete(&self, record: &Configuration) -> Result<(), AdminServiceError> {
        let id = stored_id(record)?;
        configuration::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_failed(e, RecordKind::Configuration, id))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AdminServiceError> {
        let count = configuration::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count configuration")?;
        Ok(count > 0)
    }
}

fn configuration_from_model(model: configuration::Model) -> Configuration {
    Configuration {
        id: Some(model.id),
        config_key: model.config_key,
        config_value: model.config_value,
    }
}

// ── Reference checks ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReferenceChecker {
    pub db: DatabaseConnection,
}

impl ReferencePort for DbReferenceChecker {
    async fn exists(&self, kind: RecordKind, id: i32) -> Result<bool, AdminServiceError> {
        let db = self.db.clone();
        match kind {
            RecordKind::UserRole => DbUserRoleRepository { db }.exists_by_id(id).await,
            RecordKind::AppUser => DbAppUserRepository { db }.exists_by_id(id).await,
            RecordKind::Course => DbCourseRepository { db }.exists_by_id(id).await,
            RecordKind::CourseTeacher => DbCourseTeacherRepository { db }.exists_by_id(id).await,
            RecordKind::Enrollment => DbEnrollmentRepository { db }.exists_by_id(id).await,
            RecordKind::Autotester => DbAutotesterRepository { db }.exists_by_id(id).await,
            RecordKind::Assignment => DbAssignmentRepository { db }.exists_by_id(id).await,
            RecordKind::GradingElement => {
                DbGradingElementRepository { db }.exists_by_id(id).await
            }
            RecordKind::StudentAssignment => {
                DbStudentAssignmentRepository { db }.exists_by_id(id).await
            }
            RecordKind::StudentGradingElement => {
                DbStudentGradingElementRepository { db }
                    .exists_by_id(id)
                    .await
            }
            RecordKind::Configuration => DbConfigurationRepository { db }.exists_by_id(id).await,
        }
    }
}
