use serde::Deserialize;
use thiserror::Error;

use crate::config;

use super::form::RelayRequest;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timeout")]
    Timeout,
    #[error("rate limit exceeded")]
    RateLimited,
    #[error("relay answered with status {0}")]
    Status(u16),
    #[error("unreadable relay response: {0}")]
    Decode(String),
    #[error("relay rejected the submission: {0}")]
    Rejected(String),
}

impl SubmitError {
    pub fn from_status(status: u16) -> Self {
        match status {
            408 | 504 => SubmitError::Timeout,
            429 => SubmitError::RateLimited,
            s => SubmitError::Status(s),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// The email relay endpoint. The browser implementation lives in
/// `web::relay`.
pub trait Relay {
    async fn post(&self, body: String) -> Result<RelayResponse, SubmitError>;
}

/// Turns a failure into the line shown above the submit button.
pub fn user_message(err: &SubmitError) -> String {
    let text = err.to_string().to_lowercase();
    if text.contains("network") || text.contains("fetch") {
        "Network error. Please check your connection and try again.".to_string()
    } else if text.contains("timeout") {
        "The request timed out. Please try again.".to_string()
    } else if text.contains("rate limit") {
        "Too many requests. Please wait a moment and try again.".to_string()
    } else {
        format!(
            "Something went wrong. Please try again later or contact us at {}.",
            config::CONTACT_EMAIL
        )
    }
}

pub async fn send<R: Relay>(relay: &R, request: &RelayRequest) -> Result<(), SubmitError> {
    let response = relay.post(request.encode()).await?;
    if response.success {
        Ok(())
    } else {
        Err(SubmitError::Rejected(
            response.message.unwrap_or_else(|| "no reason given".to_string()),
        ))
    }
}
