//! Integration tests for registration, login, and logout.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_register_then_login_as_tenant() {
    let app = helpers::TestApp::new().await;

    let response = app.register("alice", "pw").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login.html"));

    let response = app
        .form("/login", &[("username", "alice"), ("password", "pw")], None)
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/dashboard.html"));

    let set_cookie = response.set_cookie().unwrap();
    assert!(set_cookie.starts_with("sitehost_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(!set_cookie.contains("alice"));
}

#[tokio::test]
async fn test_seeded_admin_lands_on_admin_page() {
    let app = helpers::TestApp::new().await;

    let response = app
        .form(
            "/login",
            &[("username", "admin"), ("password", "admin123")],
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/admin.html"));
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = helpers::TestApp::new().await;

    app.register("alice", "pw").await;
    let response = app.register("alice", "other").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.text(), "User already exists");

    // The original password still works.
    app.login("alice", "pw").await;
}

#[tokio::test]
async fn test_cannot_register_over_admin() {
    let app = helpers::TestApp::new().await;
    let response = app.register("admin", "mine").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_username_differing_only_in_case_conflicts() {
    let app = helpers::TestApp::new().await;

    let response = app.register("alice", "pw").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    for name in ["Alice", "ALICE", "Admin"] {
        let response = app.register(name, "pw").await;
        assert_eq!(response.status, StatusCode::CONFLICT, "{name}");
    }
}

#[tokio::test]
async fn test_missing_form_fields_are_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .form("/register", &[("username", "alice")], None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.form("/login", &[("password", "pw")], None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.form("/login", &[], None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_unsafe_usernames() {
    let app = helpers::TestApp::new().await;

    for name in ["../evil", "a/b", ".hidden", ".."] {
        let response = app.register(name, "pw").await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{name}");
    }

    let response = app.register("", "pw").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw").await;

    let wrong_password = app
        .form("/login", &[("username", "alice"), ("password", "nope")], None)
        .await;
    let unknown_user = app
        .form("/login", &[("username", "mallory"), ("password", "pw")], None)
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.text(), "Invalid login");
    assert_eq!(wrong_password.body, unknown_user.body);
    assert!(wrong_password.set_cookie().is_none());
    assert_eq!(app.state.session_manager.session_count(), 0);
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let app = helpers::TestApp::new().await;
    let cookie = app.tenant("alice", "pw").await;

    let response = app.request("GET", "/sites/me", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/logout", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login.html"));

    // Replaying the old cookie is anonymous.
    let response = app.request("GET", "/sites/me", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login.html"));
}

#[tokio::test]
async fn test_logout_without_session_redirects() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/logout", None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login.html"));
}

#[tokio::test]
async fn test_forged_cookie_is_anonymous() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request("GET", "/sites/me", Some("sitehost_session=alice"))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_credentials_persist_across_restart() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw").await;

    let state = sitehost_api::build_state(app.config.clone()).await.unwrap();
    let users = state.credentials.list_users().await.unwrap();
    assert!(users.iter().any(|u| u.username == "alice" && !u.admin));
    assert_eq!(users.iter().filter(|u| u.admin).count(), 1);
}

#[tokio::test]
async fn test_corrupt_credential_file_is_fatal() {
    let app = helpers::TestApp::new().await;
    std::fs::write(&app.config.storage.users_file, "{ not json").unwrap();

    let err = sitehost_api::build_state(app.config.clone())
        .await
        .unwrap_err();
    assert_eq!(err.kind, sitehost_core::error::ErrorKind::Configuration);
}

#[tokio::test]
async fn test_foreign_password_hash_is_fatal() {
    let app = helpers::TestApp::new().await;
    std::fs::write(
        &app.config.storage.users_file,
        r#"[{"username":"admin","password":"$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy","admin":true}]"#,
    )
    .unwrap();

    let err = sitehost_api::build_state(app.config.clone())
        .await
        .unwrap_err();
    assert_eq!(err.kind, sitehost_core::error::ErrorKind::Configuration);
}

#[tokio::test]
async fn test_health_reports_sessions() {
    let app = helpers::TestApp::new().await;
    app.tenant("alice", "pw").await;

    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "available");
    assert_eq!(body["active_sessions"], 1);
}
