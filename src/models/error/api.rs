use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use eyre::Report;
use thiserror::Error;

use crate::models::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Internal Server Error: {0}")]
    InternalEyreError(#[from] Report),

    #[error("Internal Server Error: {0}")]
    InternalError(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalEyreError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InternalError(msg) => {
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error(msg))
            }
            ApiError::NotFound(msg) => HttpResponse::NotFound().json(ApiResponse::<()>::error(msg)),
            ApiError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg))
            }
            ApiError::Conflict(msg) => HttpResponse::Conflict().json(ApiResponse::<()>::error(msg)),
            ApiError::InternalEyreError(msg) => {
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error(msg.to_string()))
            }
        }
    }
}
