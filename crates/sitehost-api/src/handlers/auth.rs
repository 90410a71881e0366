//! Auth handlers: register, login, logout.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

use crate::dto::request::CredentialsForm;
use crate::error::{ApiError, LOGIN_PAGE};
use crate::state::AppState;

/// Landing page for admins after login.
const ADMIN_PAGE: &str = "/admin.html";

/// Landing page for tenants after login.
const DASHBOARD_PAGE: &str = "/dashboard.html";

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect, ApiError> {
    let form = form.validated()?;
    state
        .credentials
        .register(&form.username, &form.password)
        .await?;
    Ok(Redirect::to(LOGIN_PAGE))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect, ApiError> {
    let form = form.validated()?;
    let (token, session) = state
        .session_manager
        .login(&form.username, &form.password)
        .await?;

    let config = &state.config.session;
    if let Some(previous) = cookies.get(&config.cookie_name) {
        state.session_manager.logout(previous.value());
    }

    let cookie = Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build();
    cookies.add(cookie);

    Ok(Redirect::to(if session.admin {
        ADMIN_PAGE
    } else {
        DASHBOARD_PAGE
    }))
}

/// GET /logout
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> Redirect {
    let name = state.config.session.cookie_name.clone();
    if let Some(cookie) = cookies.get(&name) {
        state.session_manager.logout(cookie.value());
    }
    cookies.remove(Cookie::build((name, "")).path("/").build());
    Redirect::to(LOGIN_PAGE)
}
