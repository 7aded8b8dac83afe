use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};

use testify_admin::router::build_router;
use testify_admin::state::AppState;
use testify_admin_migration::{Migrator, MigratorTrait};

pub const BASE: &str = "/api/v1/admin";

/// Fresh, fully migrated in-memory database.
pub async fn migrated_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Router over a fresh database.
pub async fn test_server() -> TestServer {
    let db = migrated_db().await;
    TestServer::new(build_router(AppState { db })).unwrap()
}

pub fn path(segment: &str) -> String {
    format!("{BASE}/{segment}")
}

pub fn item(segment: &str, id: i64) -> String {
    format!("{BASE}/{segment}/{id}")
}

/// POST `body` and return the created resource, asserting `201`.
pub async fn create(server: &TestServer, segment: &str, body: Value) -> Value {
    let resp = server.post(&path(segment)).json(&body).await;
    resp.assert_status(StatusCode::CREATED);
    resp.json()
}

pub fn id_of(value: &Value) -> i64 {
    value["id"].as_i64().unwrap()
}

/// Seeds the roles `{1: "Admin", 2: "Teacher"}`.
pub async fn seed_roles(server: &TestServer) {
    for name in ["Admin", "Teacher"] {
        create(server, "user-role", json!({ "userRoleName": name })).await;
    }
}

pub async fn seed_user(server: &TestServer, role_id: i64, email: &str) -> i64 {
    let user = create(
        server,
        "user",
        json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": email,
            "userRoleId": role_id,
        }),
    )
    .await;
    id_of(&user)
}

pub async fn seed_course(server: &TestServer, name: &str) -> i64 {
    let course = create(server, "course", json!({ "courseName": name })).await;
    id_of(&course)
}
