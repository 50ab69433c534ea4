use crate::config::AppState;
use crate::entities::content::ContentKind;
use crate::handlers::{health_check_handler, page_handler::dashboard_handler};
use crate::middleware::auth_middleware::{identity_middleware, require_admin, require_user};
use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod auth_route;
pub mod content_route;
pub mod like_route;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let mut public = Router::new()
        .route("/", get(dashboard_handler))
        .merge(auth_route::auth_routes())
        .route("/health", get(health_check_handler));

    let mut publish = Router::new();
    for kind in ContentKind::ALL {
        public = public.merge(content_route::browse_routes(kind));
        publish = publish.merge(content_route::publish_routes(kind));
    }

    // Guards run after identity resolution, before any handler.
    let publish = publish.route_layer(middleware::from_fn(require_admin));
    let members = like_route::like_routes().route_layer(middleware::from_fn(require_user));

    Router::new()
        .merge(public)
        .merge(publish)
        .merge(members)
        .layer(middleware::from_fn_with_state(state, identity_middleware))
        .layer(TraceLayer::new_for_http())
}
