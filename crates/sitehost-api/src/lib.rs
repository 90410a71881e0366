//! # sitehost-api
//!
//! HTTP layer for SiteHost built on Axum.
//!
//! Provides the form, upload, hosting, and admin endpoints, cookie-based
//! session extractors, DTOs, middleware, and error mapping. [`app`] wires
//! every crate together into a runnable server.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
