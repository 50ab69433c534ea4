use axum::{routing::{get, post}, Extension, Router};
use crate::config::AppState;
use crate::entities::content::ContentKind;
use crate::handlers::content_handler::create_content_handler;
use crate::handlers::page_handler::{get_content_handler, list_content_handler};

/// `GET /noticias`, `GET /noticia/{id}` and the same for every other kind.
pub fn browse_routes(kind: ContentKind) -> Router<AppState> {
    Router::new()
        .route(&format!("/{}", kind.collection_segment()), get(list_content_handler))
        .route(&format!("/{}/{{id}}", kind.item_segment()), get(get_content_handler))
        .layer(Extension(kind))
}

/// `POST /noticias/create` etc. The caller wraps these in the admin guard.
pub fn publish_routes(kind: ContentKind) -> Router<AppState> {
    Router::new()
        .route(&format!("/{}/create", kind.collection_segment()), post(create_content_handler))
        .layer(Extension(kind))
}
