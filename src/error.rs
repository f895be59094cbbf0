use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::MessageResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Movie not found")]
    MovieNotFound,
    #[error("{0}")]
    Validation(String),
    #[error("failed to encode token")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    pub fn validation(detail: impl Into<String>) -> Self {
        ApiError::Validation(detail.into())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::MovieNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::TokenEncoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(MessageResponse {
            message: self.to_string(),
        })
    }
}
