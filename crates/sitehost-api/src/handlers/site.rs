//! Upload, hosting, and dashboard handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::response::{Html, IntoResponse, Response};

use sitehost_core::error::AppError;
use sitehost_service::{Served, UploadedArtifact, site_url};

use crate::dto::response::SiteSummaryResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
const UPLOAD_FIELD: &str = "site";

/// POST /upload
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let mut artifact = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed upload: {}", e.body_text())))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => break,
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Malformed upload: {}", e.body_text())))?;

        artifact = Some(UploadedArtifact { file_name, data });
        break;
    }

    let artifact = artifact.ok_or_else(|| AppError::no_file_provided("No file provided"))?;
    let published = state.site_service.upload(&auth, artifact).await?;

    Ok(Html(format!(
        "<h3>Upload Successful</h3>\n\
         <p>Your website is live:</p>\n\
         <a href=\"{url}\" target=\"_blank\">{url}</a><br><br>\n\
         <a href=\"/dashboard.html\">Back to Dashboard</a>\n",
        url = escape_html(&published.url),
    )))
}

/// GET /site/{username}
pub async fn serve_root(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    serve_path(&state, &username, "").await
}

/// GET /site/{username}/
pub async fn serve_index(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    serve_path(&state, &username, "/").await
}

/// GET /site/{username}/{*path}
pub async fn serve(
    State(state): State<AppState>,
    Path((username, path)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    serve_path(&state, &username, &format!("/{path}")).await
}

async fn serve_path(state: &AppState, username: &str, path: &str) -> Result<Response, ApiError> {
    match state.site_service.serve(username, path).await? {
        Served::File(file) => Ok(([(CONTENT_TYPE, file.content_type)], file.bytes).into_response()),
        Served::Redirect(location) => {
            Ok((StatusCode::MOVED_PERMANENTLY, [(LOCATION, location)]).into_response())
        }
    }
}

/// GET /sites/me
pub async fn my_site(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SiteSummaryResponse>, ApiError> {
    let files = state.site_service.list_artifacts(&auth.username).await?;
    Ok(Json(SiteSummaryResponse {
        site_url: site_url(&auth.username),
        username: auth.username.clone(),
        files,
    }))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
