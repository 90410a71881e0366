//! Route definitions for the SiteHost HTTP surface.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Unmatched paths fall through to the UI asset
//! directory when one is configured.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_cookies::CookieManagerLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let mut router = Router::new()
        .merge(auth_routes())
        .merge(site_routes())
        .merge(admin_routes())
        .merge(health_routes());

    if let Some(dir) = &state.config.server.public_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Registration, login, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/logout", get(handlers::auth::logout))
}

/// Upload, public hosting, and the caller's own site summary
fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handlers::site::upload))
        .route("/site/{username}", get(handlers::site::serve_root))
        .route("/site/{username}/", get(handlers::site::serve_index))
        .route("/site/{username}/{*path}", get(handlers::site::serve))
        .route("/sites/me", get(handlers::site::my_site))
}

/// Admin console
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route(
            "/admin/delete/{user}",
            delete(handlers::admin::users::delete_user_site),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
