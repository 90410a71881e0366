//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use sitehost_api::AppState;
use sitehost_core::config::AppConfig;

/// Multipart boundary used by [`TestApp::upload`].
const BOUNDARY: &str = "sitehost-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct inspection
    pub state: AppState,
    /// Application config
    pub config: AppConfig,
    /// Holds data and upload directories for the test's lifetime
    pub dir: TempDir,
}

impl TestApp {
    /// Create a new test application over a fresh temporary directory
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path();

        let mut config = AppConfig::default();
        config.storage.data_root = root.join("data").display().to_string();
        config.storage.users_file = root.join("data/users.json").display().to_string();
        config.storage.sites_root = root.join("uploads").display().to_string();
        config.server.public_dir = None;

        let state = sitehost_api::build_state(config.clone())
            .await
            .expect("Failed to build state");
        let router = sitehost_api::build_app(state.clone());

        Self {
            router,
            state,
            config,
            dir,
        }
    }

    /// POST /register
    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.form(
            "/register",
            &[("username", username), ("password", password)],
            None,
        )
        .await
    }

    /// POST /login and return the `name=value` session cookie
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .form(
                "/login",
                &[("username", username), ("password", password)],
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::SEE_OTHER,
            "Login failed: {}",
            response.text()
        );

        response.session_cookie().expect("No session cookie set")
    }

    /// Register a tenant and log them in
    pub async fn tenant(&self, username: &str, password: &str) -> String {
        let response = self.register(username, password).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        self.login(username, password).await
    }

    /// Log in as the seeded admin
    pub async fn admin(&self) -> String {
        let auth = &self.config.auth;
        self.login(&auth.default_admin_username, &auth.default_admin_password)
            .await
    }

    /// Upload one file in the `site` multipart field
    pub async fn upload(&self, cookie: Option<&str>, file_name: &str, data: &[u8]) -> TestResponse {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"site\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        self.multipart(cookie, body).await
    }

    /// Send a raw multipart body to /upload
    pub async fn multipart(&self, cookie: Option<&str>, body: Vec<u8>) -> TestResponse {
        let mut req = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"));
        if let Some(cookie) = cookie {
            req = req.header(COOKIE, cookie);
        }

        self.send(req.body(Body::from(body)).expect("Failed to build request"))
            .await
    }

    /// Send a url-encoded form
    pub async fn form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencode(k), urlencode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let mut req = Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            req = req.header(COOKIE, cookie);
        }

        self.send(req.body(Body::from(body)).expect("Failed to build request"))
            .await
    }

    /// Make a bodiless HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, cookie: Option<&str>) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(cookie) = cookie {
            req = req.header(COOKIE, cookie);
        }

        self.send(req.body(Body::empty()).expect("Failed to build request"))
            .await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub body: Bytes,
}

impl TestResponse {
    /// Body as UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body parsed as JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Body is not JSON")
    }

    /// Redirect target, if any
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Raw `Set-Cookie` header, if any
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers.get(SET_COOKIE).and_then(|v| v.to_str().ok())
    }

    /// The `name=value` part of `Set-Cookie`
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookie()
            .and_then(|c| c.split(';').next())
            .map(|c| c.trim().to_string())
    }
}

fn urlencode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
