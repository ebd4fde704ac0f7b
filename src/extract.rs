//! Extractors whose rejections come back as [`AppError`] JSON bodies instead
//! of axum's plain-text defaults.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;
use crate::validation::ValidationErrors;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Splits a body deserialization failure into the offending field and the
/// serde message, e.g. `reportType: invalid type: integer `5`, expected a string`.
fn field_of_data_error(text: &str) -> Option<(&str, &str)> {
    let detail = text.strip_prefix(DATA_ERROR_PREFIX)?;
    let (field, message) = detail.split_once(": ")?;
    if field.is_empty() || field == "." || field.contains(' ') {
        return None;
    }
    Some((field, message))
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        if let JsonRejection::JsonDataError(_) = rejection {
            if let Some((field, message)) = field_of_data_error(&text) {
                let mut errors = ValidationErrors::default();
                errors.push(field, message);
                return AppError::Validation(errors);
            }
        }
        AppError::InvalidRequest(text)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}
