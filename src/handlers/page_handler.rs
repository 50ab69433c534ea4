use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension,
};
use crate::config::AppState;
use crate::entities::content::ContentKind;
use crate::error::PortalResult;
use crate::models::auth_model::Viewer;
use crate::services::page_service::PageService;
use crate::utils::view_response::ViewBuilder;

pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
) -> PortalResult<impl IntoResponse> {
    let page = PageService::dashboard(&state.storage, &viewer).await?;
    Ok(ViewBuilder::render("dashboard", page))
}

pub async fn list_content_handler(
    State(state): State<AppState>,
    Extension(kind): Extension<ContentKind>,
    Extension(viewer): Extension<Viewer>,
) -> PortalResult<impl IntoResponse> {
    let page = PageService::list(&state.storage, kind, &viewer).await?;
    Ok(ViewBuilder::render(kind.list_view(), page))
}

pub async fn get_content_handler(
    State(state): State<AppState>,
    Extension(kind): Extension<ContentKind>,
    Extension(viewer): Extension<Viewer>,
    Path(id): Path<String>,
) -> PortalResult<impl IntoResponse> {
    let page = PageService::detail(&state.storage, kind, &id, &viewer).await?;
    Ok(ViewBuilder::render(kind.detail_view(), page))
}
