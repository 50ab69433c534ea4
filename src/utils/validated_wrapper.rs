use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Form,
    response::IntoResponse,
};
use validator::{Validate, ValidationErrors};
use crate::utils::view_response::{ViewBuilder, ValidationErrorDetail};

/// `Form<T>` that also runs `validator` rules before the handler sees it.
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(payload) = Form::<T>::from_request(req, state)
            .await
            .map_err(|err| {
                let message = format!("Invalid form data: {}", err.body_text());
                ViewBuilder::error(StatusCode::BAD_REQUEST, &message).into_response()
            })?;

        if let Err(e) = payload.validate() {
            return Err(ViewBuilder::error_with_data(
                StatusCode::BAD_REQUEST,
                "Validation failed",
                map_validation_errors(e),
            ).into_response());
        }

        Ok(ValidatedForm(payload))
    }
}

fn map_validation_errors(errors: ValidationErrors) -> Vec<ValidationErrorDetail> {
    let mut details = Vec::new();

    for (field, error_kind) in errors.field_errors() {
        for err in error_kind {
            details.push(ValidationErrorDetail {
                field: field.to_string(),
                title: err.code.to_string(),
                message: err.message.clone().map(|m| m.to_string()).unwrap_or_else(|| "Invalid value".to_string()),
            });
        }
    }

    details
}
