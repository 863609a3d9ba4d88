mod common;

use axum_test::TestServer;
use domain_generator::routes::base_router;
use tempfile::TempDir;

#[tokio::test]
async fn test_index_page_renders() {
    let (server, _dir) = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Domain File Generator"));
    assert!(html.contains("/download-template"));
    assert!(html.contains("up to 16 MB"));
}

#[tokio::test]
async fn test_index_page_shows_configured_limit() {
    let dir = TempDir::new().unwrap();
    let state = common::create_test_state_with_limit(dir.path(), 5 * 1024 * 1024);
    let server = TestServer::new(base_router(state)).unwrap();

    let html = server.get("/").await.text();

    assert!(html.contains("up to 5 MB"));
}
