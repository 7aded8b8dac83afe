use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create, id_of, item, path, test_server};

#[tokio::test]
async fn should_look_up_entry_by_key() {
    let server = test_server().await;
    let created = create(
        &server,
        "configuration",
        json!({ "configKey": "grading.scale", "configValue": "0-10" }),
    )
    .await;

    server
        .get(&format!("{}/key/grading.scale", path("configuration")))
        .await
        .assert_json(&created);

    let resp = server
        .get(&format!("{}/key/missing", path("configuration")))
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["message"], "No configuration with key: missing");
}

#[tokio::test]
async fn should_keep_keys_unique() {
    let server = test_server().await;
    create(&server, "configuration", json!({ "configKey": "a" })).await;
    let second = create(&server, "configuration", json!({ "configKey": "b" })).await;

    let resp = server
        .post(&path("configuration"))
        .json(&json!({ "configKey": "a" }))
        .await;
    resp.assert_status(StatusCode::CONFLICT);
    let body: Value = resp.json();
    assert_eq!(body["message"], "Configuration with key a already exists");

    server
        .put(&item("configuration", id_of(&second)))
        .json(&json!({ "configKey": "a" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    let resp = server
        .put(&item("configuration", id_of(&second)))
        .json(&json!({ "configKey": "b", "configValue": "on" }))
        .await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["configValue"], "on");
}
