use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use sea_orm::DbErr;
use thiserror::Error;
use crate::utils::view_response::ViewBuilder;

/// Every failure a request can end in. Handlers propagate with `?`; the
/// `IntoResponse` impl below is the only place these become HTTP.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Not a hard error: the visitor is sent somewhere they are allowed to be.
    #[error("unauthorized, redirecting to {redirect_to}")]
    Unauthorized { redirect_to: &'static str },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type PortalResult<T> = Result<T, PortalError>;

impl PortalError {
    pub fn status(&self) -> StatusCode {
        match self {
            PortalError::NotFound(_) => StatusCode::NOT_FOUND,
            PortalError::StorageUnavailable(_) | PortalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PortalError::Unauthorized { .. } => StatusCode::SEE_OTHER,
            PortalError::Validation(_) => StatusCode::BAD_REQUEST,
            PortalError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            PortalError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<DbErr> for PortalError {
    fn from(err: DbErr) -> Self {
        PortalError::StorageUnavailable(err.to_string())
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            PortalError::Unauthorized { redirect_to } => Redirect::to(redirect_to).into_response(),
            PortalError::StorageUnavailable(detail) => {
                tracing::error!("storage unavailable: {}", detail);
                ViewBuilder::error(status, "The portal is temporarily unavailable").into_response()
            }
            PortalError::Internal(detail) => {
                tracing::error!("internal error: {}", detail);
                ViewBuilder::error(status, "Something went wrong").into_response()
            }
            other => ViewBuilder::error(status, &other.to_string()).into_response(),
        }
    }
}
