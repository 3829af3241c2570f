use serde::{Deserialize, Serialize};

pub mod client;
pub use client::AccountsClient;

#[cfg(test)]
mod tests;

use crate::services::http::NotSuccessResponseInfo;

#[derive(Debug, Clone)]
pub enum SignupError {
    /// The request never completed, or a success body could not be decoded.
    Transport(String),
    /// The endpoint refused the signup.
    Rejected(NotSuccessResponseInfo),
}

impl From<reqwest::Error> for SignupError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<NotSuccessResponseInfo> for SignupError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        Self::Rejected(info)
    }
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignupError::Transport(msg) => write!(f, "Network error: {}", msg),
            SignupError::Rejected(info) => write!(f, "{}", info.text),
        }
    }
}

impl std::error::Error for SignupError {}

/// The confirmation value stays local, it is never part of the payload.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}
