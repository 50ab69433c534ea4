use axum::{routing::get, Router};
use crate::config::AppState;
use crate::handlers::auth_handler::*;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page_handler).post(login_handler))
        .route("/register", get(register_page_handler).post(register_handler))
        .route("/deslogar", get(logout_handler))
}
