use crate::helpers::test_server;

#[tokio::test]
async fn should_report_live_and_ready() {
    let server = test_server().await;
    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_attach_request_id_to_responses() {
    let server = test_server().await;
    let resp = server.get("/healthz").await;
    assert!(resp.maybe_header("x-request-id").is_some());
}

#[tokio::test]
async fn should_keep_caller_request_id() {
    let server = test_server().await;
    let resp = server
        .get("/healthz")
        .add_header("x-request-id", "req-123")
        .await;
    assert_eq!(resp.header("x-request-id"), "req-123");
}
