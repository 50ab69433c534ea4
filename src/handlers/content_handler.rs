use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use crate::config::AppState;
use crate::entities::content::ContentKind;
use crate::error::PortalResult;
use crate::models::{auth_model::CurrentUser, content_model::*};
use crate::repositories::content_repository::ContentRepository;
use crate::utils::validated_wrapper::ValidatedForm;

/// `POST /{kind}s/create`. Reached only through `require_admin`, which puts
/// the admin's `CurrentUser` on the request.
pub async fn create_content_handler(
    State(state): State<AppState>,
    Extension(kind): Extension<ContentKind>,
    Extension(user): Extension<CurrentUser>,
    ValidatedForm(form): ValidatedForm<CreateContentForm>,
) -> PortalResult<impl IntoResponse> {
    let item = ContentRepository::new(&state.storage, kind)
        .create(form.into_new_content(Some(user.id)))
        .await?;

    let location = format!("/{}", kind.collection_segment());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ContentResponse::from(item)),
    ))
}
