use axum::http::StatusCode;

/// Failures while turning the log into a view model.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read log: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing {field} field")]
    MissingField { field: &'static str },
    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid {field} {value:?}: {source}")]
    Number {
        field: &'static str,
        value: String,
        source: std::num::ParseFloatError,
    },
    #[error("{field} {value:?} is not a finite number")]
    NonFinite { field: &'static str, value: String },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        Self::internal(err)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if self.status.is_server_error() {
            tracing::error!("request failed: {}", self.message);
        }
        (self.status, self.message).into_response()
    }
}
