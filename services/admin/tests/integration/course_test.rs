use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create, id_of, item, path, seed_course, seed_roles, seed_user, test_server};

#[tokio::test]
async fn should_link_teacher_and_student_to_course() {
    let server = test_server().await;
    seed_roles(&server).await;
    let teacher = seed_user(&server, 2, "teacher@example.com").await;
    let student = seed_user(&server, 1, "student@example.com").await;
    let course = seed_course(&server, "Algorithms").await;

    let link = create(
        &server,
        "course-teacher",
        json!({ "courseId": course, "teacherId": teacher }),
    )
    .await;
    assert_eq!(link["teacherId"], teacher);

    let enrollment = create(
        &server,
        "enrollment",
        json!({ "courseId": course, "studentId": student }),
    )
    .await;
    assert_eq!(enrollment["studentId"], student);

    let resp = server.delete(&item("course", course)).await;
    resp.assert_status(StatusCode::CONFLICT);
    let body: Value = resp.json();
    assert_eq!(
        body["message"],
        format!("Course with id {course} is still referenced")
    );

    server
        .delete(&item("enrollment", id_of(&enrollment)))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete(&item("course-teacher", id_of(&link)))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete(&item("course", course))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_reject_enrollment_in_missing_course() {
    let server = test_server().await;
    seed_roles(&server).await;
    let student = seed_user(&server, 1, "student@example.com").await;

    let resp = server
        .post(&path("enrollment"))
        .json(&json!({ "courseId": 77, "studentId": student }))
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["message"], "No course with id: 77");
}

#[tokio::test]
async fn should_clear_course_description_on_update() {
    let server = test_server().await;
    let created = create(
        &server,
        "course",
        json!({ "courseName": "Databases", "description": "SQL and beyond" }),
    )
    .await;

    let resp = server
        .put(&item("course", id_of(&created)))
        .json(&json!({ "courseName": "Databases I" }))
        .await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["courseName"], "Databases I");
    assert!(body["description"].is_null());
}

#[tokio::test]
async fn should_grade_a_submission() {
    let server = test_server().await;
    seed_roles(&server).await;
    let student = seed_user(&server, 1, "student@example.com").await;
    let course = seed_course(&server, "Compilers").await;

    let assignment = create(
        &server,
        "assignment",
        json!({
            "courseId": course,
            "assignmentName": "Lexer",
            "dueDate": "2024-06-01",
        }),
    )
    .await;
    assert_eq!(assignment["dueDate"], "2024-06-01");
    assert!(assignment["autotesterId"].is_null());

    let element = create(
        &server,
        "grading-element",
        json!({
            "assignmentId": id_of(&assignment),
            "elementName": "Tokenizes keywords",
            "maxPoints": 10.5,
        }),
    )
    .await;
    assert_eq!(element["maxPoints"], 10.5);
    assert_eq!(element["isDeduction"], false);

    let submission = create(
        &server,
        "student-assignment",
        json!({
            "studentId": student,
            "assignmentId": id_of(&assignment),
            "submissionUrl": "https://gitlab.example.com/student/lexer",
            "submissionDate": "2024-05-30",
        }),
    )
    .await;
    assert!(submission["grade"].is_null());

    let points = create(
        &server,
        "student-grading-element",
        json!({
            "studentAssignmentId": id_of(&submission),
            "gradingElementId": id_of(&element),
            "pointsAwarded": 8,
            "feedback": "Misses nested comments",
        }),
    )
    .await;
    assert_eq!(points["pointsAwarded"], 8.0);

    let resp = server.delete(&item("grading-element", id_of(&element))).await;
    resp.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn should_reject_assignment_pointing_at_missing_autotester() {
    let server = test_server().await;
    let course = seed_course(&server, "Networks").await;
    let assignment = create(
        &server,
        "assignment",
        json!({ "courseId": course, "assignmentName": "Sockets" }),
    )
    .await;

    let resp = server
        .put(&item("assignment", id_of(&assignment)))
        .json(&json!({
            "courseId": course,
            "assignmentName": "Sockets",
            "autotesterId": 9,
        }))
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["message"], "No autotester with id: 9");

    server
        .get(&item("assignment", id_of(&assignment)))
        .await
        .assert_json(&assignment);
}

#[tokio::test]
async fn should_reject_out_of_range_points() {
    let server = test_server().await;

    let resp = server
        .post(&path("grading-element"))
        .json(&json!({
            "assignmentId": 1,
            "elementName": "Style",
            "maxPoints": -1,
        }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(
        body["errors"],
        json!(["Max points must be between 0 and 999.99"])
    );
}
