//! Frontend Models
//!
//! Payloads handed to the backend seam and what comes back.

use serde::{Deserialize, Serialize};

/// Account creation payload (built from a validated signup form)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

/// Chat message payload (matches the completion service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Completion service reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub model_used: String,
    pub credits_remaining: i32,
}

/// One confirmed exchange in the session transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub id: u32,
    pub prompt: String,
    pub reply: Option<String>,
}
