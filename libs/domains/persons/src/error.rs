use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersonError {
    #[error("Person not found with id {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PersonResult<T> = Result<T, PersonError>;

/// Convert PersonError to AppError for standardized error responses
impl From<PersonError> for AppError {
    fn from(err: PersonError) -> Self {
        match err {
            PersonError::NotFound(id) => {
                AppError::NotFound(format!("Person not found with id {}", id))
            }
            PersonError::Validation(msg) => AppError::BadRequest(msg),
            PersonError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PersonError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
