use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, Uri},
    response::Redirect,
    Extension,
};
use crate::config::AppState;
use crate::entities::content::ContentKind;
use crate::error::{PortalError, PortalResult};
use crate::models::auth_model::CurrentUser;
use crate::repositories::{content_repository::ContentRepository, like_repository::LikeLedger};

/// `POST /empregos/curtida/{id}`: like or unlike a job posting, then send the
/// user back to the page they came from.
pub async fn toggle_job_like_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> PortalResult<Redirect> {
    let kind = ContentKind::Job;
    let job = ContentRepository::new(&state.storage, kind)
        .get_by_id(&id)
        .await?
        .ok_or(PortalError::NotFound(kind.label()))?;

    LikeLedger::toggle(&state.storage, user.id, job.id, kind).await?;

    let fallback = format!("/{}", kind.collection_segment());
    Ok(Redirect::to(&back_path(&headers).unwrap_or(fallback)))
}

// Only the path of the Referer is reused, so the redirect never leaves the site.
fn back_path(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(header::REFERER)?.to_str().ok()?;
    let uri: Uri = referer.parse().ok()?;
    let path_and_query = uri.path_and_query()?.as_str();
    path_and_query.starts_with('/').then(|| path_and_query.to_string())
}
