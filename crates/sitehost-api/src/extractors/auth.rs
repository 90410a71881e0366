//! Session extractors: resolve the session cookie into an identity and
//! gate handlers on it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_cookies::Cookies;
use tracing::warn;

use sitehost_auth::require_admin;
use sitehost_core::error::AppError;
use sitehost_entity::session::Identity;
use sitehost_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The caller's identity, anonymous if no live session backs the request.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::internal(msg))?;

        let token = cookies
            .get(&state.config.session.cookie_name)
            .map(|c| c.value().to_owned());

        Ok(Self(state.session_manager.identity(token.as_deref())))
    }
}

/// An authenticated caller. Anonymous requests are redirected to login.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentIdentity(identity) = CurrentIdentity::from_request_parts(parts, state).await?;
        Ok(Self(RequestContext::authenticated(identity)?))
    }
}

/// An admin caller. Non-admin sessions get `403 Admins only`.
#[derive(Debug, Clone)]
pub struct AdminUser(pub RequestContext);

impl std::ops::Deref for AdminUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentIdentity(identity) = CurrentIdentity::from_request_parts(parts, state).await?;
        if let Err(e) = require_admin(&identity) {
            if let Identity::User { username } = &identity {
                warn!(username = %username, path = %parts.uri.path(), "Non-admin denied");
            }
            return Err(e.into());
        }
        Ok(Self(RequestContext::authenticated(identity)?))
    }
}
