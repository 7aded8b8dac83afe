use sea_orm::Database;
use tracing::info;

use testify_admin::config::AdminConfig;
use testify_admin::router::build_router;
use testify_admin::state::AppState;

#[tokio::main]
async fn main() {
    testify_core::tracing::init_tracing();

    let config = AdminConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.admin_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("admin service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
