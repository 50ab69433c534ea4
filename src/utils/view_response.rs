use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Envelope handed to the rendering collaborator: which template to use and
/// the view-model to fill it with.
#[derive(Serialize)]
pub struct ViewResponse<T> {
    pub status: String,
    pub view: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Serialize)]
pub struct ValidationErrorDetail {
    pub field: String,
    pub title: String,   // validator code, e.g. "length", "email"
    pub message: String,
}

impl<T> ViewResponse<T>
where
    T: Serialize,
{
    pub fn new(status: &str, view: &str, message: Option<&str>, data: Option<T>) -> Self {
        Self {
            status: status.to_string(),
            view: view.to_string(),
            message: message.map(str::to_string),
            data,
        }
    }
}

pub struct ViewResponseResult<T>(pub StatusCode, pub ViewResponse<T>);

impl<T> IntoResponse for ViewResponseResult<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

pub const ERROR_VIEW: &str = "error";

pub struct ViewBuilder;

impl ViewBuilder {
    pub fn render<T: Serialize>(view: &str, data: T) -> ViewResponseResult<T> {
        ViewResponseResult(
            StatusCode::OK,
            ViewResponse::new("success", view, None, Some(data)),
        )
    }

    /// A bare form page (login, register) with no view-model.
    pub fn page(view: &str) -> ViewResponseResult<()> {
        ViewResponseResult(StatusCode::OK, ViewResponse::new("success", view, None, None))
    }

    pub fn error(status_code: StatusCode, message: &str) -> ViewResponseResult<()> {
        ViewResponseResult(
            status_code,
            ViewResponse::new("error", ERROR_VIEW, Some(message), None),
        )
    }

    pub fn error_with_data<T: Serialize>(
        status_code: StatusCode,
        message: &str,
        data: T,
    ) -> ViewResponseResult<T> {
        ViewResponseResult(
            status_code,
            ViewResponse::new("error", ERROR_VIEW, Some(message), Some(data)),
        )
    }
}
