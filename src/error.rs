//! Error Types
//!
//! One enum per concern: backend requests, form checks, configuration.

use thiserror::Error;

use crate::signup_form::SignupField;

/// Failures reported by a backend behind the request seam.
/// The local stub never fails, so outside tests nothing builds these yet.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service refused the payload
    #[error("request rejected: {0}")]
    Rejected(String),
    /// The service could not be reached
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Short text for the inline status line under a form
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(reason) => reason.clone(),
            ApiError::Unavailable(_) => "Service unavailable, please try again.".to_string(),
            ApiError::Server { .. } => "Something went wrong on our side.".to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Signup form checks (mirrors native browser validation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(SignupField),
    #[error("email address is not valid")]
    InvalidEmail,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed app config: {0}")]
    Parse(#[from] serde_json::Error),
}
