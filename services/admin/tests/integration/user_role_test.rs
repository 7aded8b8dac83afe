use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create, item, path, seed_roles, seed_user, test_server};

#[tokio::test]
async fn should_list_seeded_roles_in_id_order() {
    let server = test_server().await;
    seed_roles(&server).await;

    let resp = server.get(&path("user-role")).await;
    resp.assert_status_ok();
    resp.assert_json(&json!([
        { "id": 1, "userRoleName": "Admin" },
        { "id": 2, "userRoleName": "Teacher" },
    ]));
}

#[tokio::test]
async fn should_list_empty_table() {
    let server = test_server().await;
    server.get(&path("user-role")).await.assert_json(&json!([]));
}

#[tokio::test]
async fn should_walk_through_role_lifecycle() {
    let server = test_server().await;
    seed_roles(&server).await;

    // create
    let created = create(&server, "user-role", json!({ "userRoleName": "Student" })).await;
    assert_eq!(created, json!({ "id": 3, "userRoleName": "Student" }));
    server.get(&item("user-role", 3)).await.assert_json(&created);

    // duplicate create
    let resp = server
        .post(&path("user-role"))
        .json(&json!({ "userRoleName": "Admin" }))
        .await;
    resp.assert_status(StatusCode::CONFLICT);
    let body: Value = resp.json();
    assert_eq!(body["message"], "User role with name Admin already exists");
    assert_eq!(body["status"], 409);

    // update colliding with another row
    let resp = server
        .put(&item("user-role", 2))
        .json(&json!({ "userRoleName": "Admin" }))
        .await;
    resp.assert_status(StatusCode::CONFLICT);
    server
        .get(&item("user-role", 2))
        .await
        .assert_json(&json!({ "id": 2, "userRoleName": "Teacher" }));

    // update to own name
    server
        .put(&item("user-role", 2))
        .json(&json!({ "userRoleName": "Teacher" }))
        .await
        .assert_status_ok();

    // rename
    let resp = server
        .put(&item("user-role", 2))
        .json(&json!({ "userRoleName": "Senior Teacher" }))
        .await;
    resp.assert_status_ok();
    resp.assert_json(&json!({ "id": 2, "userRoleName": "Senior Teacher" }));
    server
        .get(&item("user-role", 2))
        .await
        .assert_json(&json!({ "id": 2, "userRoleName": "Senior Teacher" }));

    // delete
    let resp = server.delete(&item("user-role", 2)).await;
    resp.assert_status(StatusCode::NO_CONTENT);
    assert!(resp.as_bytes().is_empty());
    server
        .get(&item("user-role", 2))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_body_for_missing_id() {
    let server = test_server().await;

    let resp = server.get(&item("user-role", 999)).await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].as_str().unwrap().contains("999"));
    assert!(body.get("errors").is_none());

    let ts = body["timestamp"].as_str().unwrap();
    assert_eq!(ts.len(), 24);
    assert!(ts.ends_with('Z'));
}

#[tokio::test]
async fn should_not_touch_store_when_updating_or_deleting_missing_id() {
    let server = test_server().await;
    seed_roles(&server).await;

    server
        .put(&item("user-role", 999))
        .json(&json!({ "userRoleName": "Ghost" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&item("user-role", 999))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let roles: Vec<Value> = server.get(&path("user-role")).await.json();
    assert_eq!(roles.len(), 2);
}

#[tokio::test]
async fn should_find_role_by_name() {
    let server = test_server().await;
    seed_roles(&server).await;

    server
        .get(&format!("{}/name/Teacher", path("user-role")))
        .await
        .assert_json(&json!({ "id": 2, "userRoleName": "Teacher" }));

    let resp = server.get(&format!("{}/name/Janitor", path("user-role"))).await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["message"], "No user role with name: Janitor");
}

#[tokio::test]
async fn should_report_null_and_empty_for_missing_name() {
    let server = test_server().await;

    let resp = server.post(&path("user-role")).json(&json!({})).await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(
        body["errors"],
        json!(["User role must not be null", "User role must not be empty"])
    );
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn should_report_size_violation_for_long_name() {
    let server = test_server().await;

    let resp = server
        .post(&path("user-role"))
        .json(&json!({ "userRoleName": "x".repeat(51) }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("size must be between"));

    server.get(&path("user-role")).await.assert_json(&json!([]));
}

#[tokio::test]
async fn should_validate_update_body_before_touching_row() {
    let server = test_server().await;
    seed_roles(&server).await;

    let resp = server
        .put(&item("user-role", 2))
        .json(&json!({ "userRoleName": "" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(
        body["errors"],
        json!([
            "User role must not be empty",
            "User role name size must be between 1 and 50",
        ])
    );

    server
        .get(&item("user-role", 2))
        .await
        .assert_json(&json!({ "id": 2, "userRoleName": "Teacher" }));
}

#[tokio::test]
async fn should_reject_malformed_body_and_path() {
    let server = test_server().await;

    let resp = server
        .post(&path("user-role"))
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"userRoleName\":"))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert!(body["message"].is_string());

    let resp = server.post(&path("user-role")).text("Admin").await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let resp = server.get(&format!("{}/abc", path("user-role"))).await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn should_refuse_to_delete_role_still_held_by_user() {
    let server = test_server().await;
    seed_roles(&server).await;
    seed_user(&server, 1, "grace@example.com").await;

    let resp = server.delete(&item("user-role", 1)).await;
    resp.assert_status(StatusCode::CONFLICT);
    let body: Value = resp.json();
    assert_eq!(body["message"], "User role with id 1 is still referenced");

    server.get(&item("user-role", 1)).await.assert_status_ok();
}
