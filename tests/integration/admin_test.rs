//! Integration tests for the admin console.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_admin_routes_require_admin() {
    let app = helpers::TestApp::new().await;
    let alice = app.tenant("alice", "pw").await;

    let response = app.request("GET", "/admin/users", None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let response = app.request("GET", "/admin/users", Some(&alice)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.text(), "Admins only");
}

#[tokio::test]
async fn test_list_users_hides_hashes() {
    let app = helpers::TestApp::new().await;
    app.tenant("alice", "pw").await;
    let admin = app.admin().await;

    let response = app.request("GET", "/admin/users", Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        serde_json::json!([
            { "username": "admin", "admin": true },
            { "username": "alice", "admin": false },
        ])
    );
    assert!(!response.text().contains("argon2"));
}

#[tokio::test]
async fn test_delete_removes_content_not_account() {
    let app = helpers::TestApp::new().await;
    let alice = app.tenant("alice", "pw").await;
    app.upload(Some(&alice), "index.html", b"hello").await;
    let admin = app.admin().await;

    let response = app
        .request("DELETE", "/admin/delete/alice", Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "User site deleted");

    let response = app.request("GET", "/site/alice/index.html", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // The account survives and can publish again.
    let alice = app.login("alice", "pw").await;
    let response = app.upload(Some(&alice), "index.html", b"again").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_missing_tenant_is_ok() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin().await;

    for _ in 0..2 {
        let response = app
            .request("DELETE", "/admin/delete/ghost", Some(&admin))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_tenant_cannot_delete() {
    let app = helpers::TestApp::new().await;
    let alice = app.tenant("alice", "pw").await;
    let bob = app.tenant("bob", "pw").await;
    app.upload(Some(&alice), "index.html", b"hello").await;

    let response = app
        .request("DELETE", "/admin/delete/alice", Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("GET", "/site/alice/index.html", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_rejects_traversal() {
    let app = helpers::TestApp::new().await;
    let alice = app.tenant("alice", "pw").await;
    app.upload(Some(&alice), "index.html", b"hello").await;
    let admin = app.admin().await;

    let response = app
        .request("DELETE", "/admin/delete/%2E%2E", Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/site/alice/index.html", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(std::path::Path::new(&app.config.storage.users_file).exists());
}
