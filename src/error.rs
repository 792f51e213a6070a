use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::model::ProviderError;
use crate::web::cors;
use crate::web::models::ErrorResponse;

/// Failure classes a drafting request can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Input,
    UnknownAction,
    Provider,
    Internal,
}

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Unknown action key: {0}")]
    UnknownAction(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Failed to render prompt: {0}")]
    Template(String),
}

impl DraftError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DraftError::MissingApiKey => ErrorKind::Configuration,
            DraftError::InvalidRequest(_) => ErrorKind::Input,
            DraftError::UnknownAction(_) => ErrorKind::UnknownAction,
            DraftError::Provider(_) => ErrorKind::Provider,
            DraftError::Template(_) => ErrorKind::Internal,
        }
    }
}

impl ResponseError for DraftError {
    // Every failure class is reported as 500; clients only read the message.
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        cors::apply(&mut builder);
        builder.json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
