//! 统一错误处理
//!
//! [`AppError`] is the error type of the service layer and the HTTP boundary.
//!
//! | Variant | Status | Meaning |
//! |---------|--------|---------|
//! | `Validation` | 400 | missing/malformed field or body |
//! | `InvalidVoucher` | 400 | non-empty voucher code with no matching voucher |
//! | `NotFound` | 400 | missing query parameter, unknown order |
//! | `UnsupportedMethod` | 400 | HTTP method not served by the route |
//! | `Persistence` | 500 | any store failure |
//! | `Serialization` | 500 | response encoding failure |
//!
//! Response bodies are plain text. For 500s the client only sees the
//! message; the underlying cause is reported by [`AppError::detail`] for logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::repository::RepoError;

/// Result type for service and handler operations
pub type AppResult<T> = Result<T, AppError>;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 客户端错误 (400) ==========
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidVoucher(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnsupportedMethod(String),

    // ========== 系统错误 (500) ==========
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: RepoError,
    },

    #[error("{message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_voucher() -> Self {
        Self::InvalidVoucher("the voucher code provided is invalid".to_string())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Missing mandatory query parameter
    pub fn missing_param(name: &str) -> Self {
        Self::NotFound(format!("mandatory parameter '{name}' not found"))
    }

    /// Query parameter present but not an integer
    pub fn invalid_param(name: &str) -> Self {
        Self::Validation(format!("could not convert parameter '{name}' to integer"))
    }

    pub fn unsupported_method(route: &str) -> Self {
        Self::UnsupportedMethod(format!("wrong method type for {route} route"))
    }

    pub fn persistence(message: impl Into<String>, source: RepoError) -> Self {
        Self::Persistence {
            message: message.into(),
            source,
        }
    }

    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::InvalidVoucher(_)
            | Self::NotFound(_)
            | Self::UnsupportedMethod(_) => StatusCode::BAD_REQUEST,
            Self::Persistence { .. } | Self::Serialization { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message plus underlying cause, for logs only
    pub fn detail(&self) -> String {
        match self {
            Self::Persistence { message, source } => format!("{message}: {source}"),
            Self::Serialization { message, source } => format!("{message}: {source}"),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
