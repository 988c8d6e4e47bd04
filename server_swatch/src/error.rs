use actix_web::error::BlockingError;
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use lib_swatch::{CompositeError, EncodingError, MalformedColorError, RenderError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid color list: {0}")]
    MalformedColor(#[from] MalformedColorError),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Cannot render image: {0}")]
    Composite(#[from] CompositeError),

    #[error("Failed to encode image: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Rendering thread failed: {0}")]
    Blocking(#[from] BlockingError),
}

impl From<RenderError> for ServerError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::MalformedColor(e) => ServerError::MalformedColor(e),
            RenderError::Composite(e) => ServerError::Composite(e),
        }
    }
}

// Errors are always plain text, never `image/png`.
impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MalformedColor(_)
            | ServerError::InvalidQuery(_)
            | ServerError::Composite(_) => StatusCode::BAD_REQUEST,
            ServerError::Encoding(_) | ServerError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
