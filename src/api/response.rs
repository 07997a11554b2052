//! API响应模块
//! Response bodies and the HTTP mapping of [`Error`].

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// `GET /` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub models_loaded: Vec<String>,
}

/// Success body of `POST /upload-model`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{"results": [...]}` wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsResponse<T> {
    pub results: Vec<T>,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl Error {
    /// Message sent to the client
    pub fn detail(&self) -> String {
        match self {
            Error::Validation(msg) | Error::Internal(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.detail(),
        })
    }
}
