use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create, id_of, item, path, test_server};

fn autotester(token: Option<&str>) -> Value {
    json!({
        "name": "java-17",
        "studentGitlabUrl": "https://gitlab.example.com/students",
        "testsGitlabUrl": "https://gitlab.example.com/tests",
        "studentCodePath": "src/main/java",
        "testCodePath": "src/test/java",
        "dockerImageUrl": "registry.example.com/autotester:17",
        "gitlabToken": token,
    })
}

#[tokio::test]
async fn should_never_echo_gitlab_token() {
    let server = test_server().await;

    let created = create(&server, "autotester", autotester(Some("glpat-secret"))).await;
    assert_eq!(created["hasGitlabToken"], true);
    assert!(created.get("gitlabToken").is_none());

    let fetched = server.get(&item("autotester", id_of(&created))).await;
    fetched.assert_status_ok();
    assert!(!fetched.text().contains("glpat-secret"));
}

#[tokio::test]
async fn should_drop_token_on_update_without_one() {
    let server = test_server().await;
    let created = create(&server, "autotester", autotester(Some("glpat-secret"))).await;

    let resp = server
        .put(&item("autotester", id_of(&created)))
        .json(&autotester(None))
        .await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["hasGitlabToken"], false);
}

#[tokio::test]
async fn should_reject_relative_repository_url() {
    let server = test_server().await;
    let mut body = autotester(None);
    body["testsGitlabUrl"] = json!("gitlab/tests");

    let resp = server.post(&path("autotester")).json(&body).await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["errors"], json!(["Tests GitLab URL must be a valid URL"]));
}
