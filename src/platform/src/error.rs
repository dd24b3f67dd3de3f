use std::result;

use axum::response::IntoResponse;
use axum::response::Response;
use common::error::CommonError;
use common::http::ApiError;
use thiserror::Error;

pub type Result<T> = result::Result<T, PlatformError>;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("bad request: {0:?}")]
    BadRequest(String),
    #[error("not found: {0:?}")]
    NotFound(String),
    #[error("csv: {0:?}")]
    Csv(#[from] csv::Error),
    #[error("common: {0:?}")]
    Common(#[from] CommonError),
}

impl PlatformError {
    pub fn into_api_error(self) -> ApiError {
        match self {
            PlatformError::BadRequest(msg) => ApiError::bad_request(msg),
            PlatformError::NotFound(msg) => ApiError::not_found(msg),
            PlatformError::Csv(err) => ApiError::internal(err.to_string()),
            PlatformError::Common(err) => match err {
                CommonError::BadRequest(msg) => ApiError::bad_request(msg),
                CommonError::InvalidPolygon(_) => ApiError::bad_request(err.to_string()),
                CommonError::Serde(err) => ApiError::bad_request(err.to_string()),
                CommonError::Url(err) => ApiError::internal(err.to_string()),
            },
        }
    }

    /// Message shown to the map page when a submission is refused.
    pub fn user_message(&self) -> String {
        match self {
            PlatformError::BadRequest(msg) => msg.clone(),
            PlatformError::Common(CommonError::BadRequest(msg)) => msg.clone(),
            PlatformError::Common(err @ CommonError::InvalidPolygon(_)) => err.to_string(),
            _ => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        self.into_api_error().into_response()
    }
}
