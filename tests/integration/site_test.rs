//! Integration tests for uploading and serving tenant content.

mod helpers;

use http::StatusCode;
use http::header::CONTENT_TYPE;

#[tokio::test]
async fn test_upload_requires_session() {
    let app = helpers::TestApp::new().await;

    let response = app.upload(None, "index.html", b"<h1>hi</h1>").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login.html"));

    let response = app.request("GET", "/site/alice/index.html", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_round_trip() {
    let app = helpers::TestApp::new().await;
    let cookie = app.tenant("alice", "pw").await;
    let payload: Vec<u8> = (0u8..=255).cycle().take(4096).collect();

    let response = app.upload(Some(&cookie), "blob.bin", &payload).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("/site/alice/blob.bin"));

    let response = app.request("GET", "/site/alice/blob.bin", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], &payload[..]);
}

#[tokio::test]
async fn test_hosted_content_is_public_and_typed() {
    let app = helpers::TestApp::new().await;
    let cookie = app.tenant("alice", "pw").await;
    app.upload(Some(&cookie), "index.html", b"<h1>home</h1>")
        .await;

    for path in ["/site/alice/index.html", "/site/alice/"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert_eq!(&response.body[..], b"<h1>home</h1>");
        assert_eq!(
            response.headers[CONTENT_TYPE],
            "text/html; charset=utf-8",
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_bare_site_url_redirects_so_relative_links_resolve() {
    let app = helpers::TestApp::new().await;
    let cookie = app.tenant("alice", "pw").await;
    app.upload(
        Some(&cookie),
        "index.html",
        br#"<link rel="stylesheet" href="style.css"><h1>home</h1>"#,
    )
    .await;
    app.upload(Some(&cookie), "style.css", b"h1 { color: red }")
        .await;

    let response = app.request("GET", "/site/alice", None).await;
    assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.location(), Some("/site/alice/"));

    let response = app.request("GET", "/site/alice/", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains(r#"href="style.css""#));

    let response = app.request("GET", "/site/alice/style.css", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[CONTENT_TYPE], "text/css; charset=utf-8");
    assert_eq!(&response.body[..], b"h1 { color: red }");

    let response = app.request("GET", "/site/nobody", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tenants_are_isolated() {
    let app = helpers::TestApp::new().await;
    let alice = app.tenant("alice", "pw").await;
    app.tenant("bob", "pw").await;

    app.upload(Some(&alice), "page.html", b"alice").await;

    let response = app.request("GET", "/site/bob/page.html", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reupload_overwrites() {
    let app = helpers::TestApp::new().await;
    let cookie = app.tenant("alice", "pw").await;

    app.upload(Some(&cookie), "page.html", b"first").await;
    app.upload(Some(&cookie), "page.html", b"second").await;

    let response = app.request("GET", "/site/alice/page.html", None).await;
    assert_eq!(&response.body[..], b"second");

    let response = app.request("GET", "/sites/me", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["username"], "alice");
    assert_eq!(body["site_url"], "/site/alice/");
    assert_eq!(body["files"], serde_json::json!(["page.html"]));
}

#[tokio::test]
async fn test_missing_file_field_is_rejected() {
    let app = helpers::TestApp::new().await;
    let cookie = app.tenant("alice", "pw").await;

    let body = b"--sitehost-test-boundary\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--sitehost-test-boundary--\r\n".to_vec();
    let response = app.multipart(Some(&cookie), body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No file provided");

    // The server keeps serving.
    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_upload_name_cannot_escape_namespace() {
    let app = helpers::TestApp::new().await;
    let alice = app.tenant("alice", "pw").await;
    app.tenant("bob", "pw").await;

    let response = app.upload(Some(&alice), "../bob/index.html", b"owned").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/site/bob/index.html", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_serve_cannot_escape_root() {
    let app = helpers::TestApp::new().await;
    let cookie = app.tenant("alice", "pw").await;
    app.upload(Some(&cookie), "a.txt", b"x").await;

    for path in [
        "/site/alice/..%2F..%2Fdata%2Fusers.json",
        "/site/%2E%2E/data/users.json",
        "/site/alice/%2E%2E/%2E%2E/data/users.json",
    ] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert!(!response.text().contains("argon2"));
    }
}
