use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create, id_of, item, path, seed_roles, seed_user, test_server};

fn user(email: &str, role_id: i64) -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": email,
        "userRoleId": role_id,
    })
}

#[tokio::test]
async fn should_create_and_find_user_by_email() {
    let server = test_server().await;
    seed_roles(&server).await;

    let created = create(&server, "user", user("ada@example.com", 2)).await;
    assert_eq!(created["email"], "ada@example.com");
    assert_eq!(created["userRoleId"], 2);

    let resp = server
        .get(&format!("{}/email/ada@example.com", path("user")))
        .await;
    resp.assert_status_ok();
    resp.assert_json(&created);
}

#[tokio::test]
async fn should_reject_unknown_role() {
    let server = test_server().await;

    let resp = server
        .post(&path("user"))
        .json(&user("ada@example.com", 42))
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["message"], "No user role with id: 42");

    server.get(&path("user")).await.assert_json(&json!([]));
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let server = test_server().await;
    seed_roles(&server).await;
    seed_user(&server, 1, "ada@example.com").await;

    let resp = server
        .post(&path("user"))
        .json(&user("ada@example.com", 2))
        .await;
    resp.assert_status(StatusCode::CONFLICT);
    let body: Value = resp.json();
    assert_eq!(body["message"], "User with email ada@example.com already exists");
}

#[tokio::test]
async fn should_move_user_to_another_role() {
    let server = test_server().await;
    seed_roles(&server).await;
    let id = seed_user(&server, 1, "ada@example.com").await;

    let resp = server
        .put(&item("user", id))
        .json(&user("ada@example.com", 2))
        .await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(id_of(&body), id);
    assert_eq!(body["userRoleId"], 2);
}

#[tokio::test]
async fn should_report_every_violated_field_in_order() {
    let server = test_server().await;

    let resp = server
        .post(&path("user"))
        .json(&json!({ "firstName": "", "email": "not-an-address" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(
        body["errors"],
        json!([
            "First name must not be empty",
            "First name size must be between 1 and 100",
            "Last name must not be null",
            "Last name must not be empty",
            "Email must be a well-formed e-mail address",
            "User role id must not be null",
        ])
    );
}
