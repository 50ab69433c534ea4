use axum::{routing::post, Router};
use crate::config::AppState;
use crate::handlers::like_handler::toggle_job_like_handler;

pub fn like_routes() -> Router<AppState> {
    Router::new().route("/empregos/curtida/{id}", post(toggle_job_like_handler))
}
