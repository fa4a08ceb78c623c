use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// The provider answered with a non-2xx status.
    #[error("OpenAI error: {body}")]
    Upstream { status: u16, body: String },

    /// The model produced no usable text where content was required.
    #[error("AI returned empty script.")]
    EmptyGeneration,

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
            AppError::EmptyGeneration => "EMPTY_GENERATION",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Text returned to the caller. Never carries configuration secrets, only what the
    /// provider or the failing component reported.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Upstream { .. } | AppError::EmptyGeneration => self.to_string(),
            AppError::NotFound(_) | AppError::ValidationError(_) => self.to_string(),
            AppError::InternalError(message) => format!("Server error: {}", message),
            AppError::DatabaseError(_) | AppError::MalformedResponse(_) => {
                format!("Server error: {}", self)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::EmptyGeneration => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{} ({}): {}", self.error_code(), status.as_u16(), self);
        } else {
            log::warn!("{} ({}): {}", self.error_code(), status.as_u16(), self);
        }

        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(self.client_message())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        AppError::InternalError("provider call timed out".to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
