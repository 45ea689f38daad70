use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classified reason a request did not produce data.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payment required: {0}")]
    PaymentRequired(String),

    #[error("{0}")]
    Generic(String),
}

impl DomainError {
    pub fn message(&self) -> &str {
        match self {
            DomainError::NotFound(message)
            | DomainError::PaymentRequired(message)
            | DomainError::Generic(message) => message,
        }
    }

    /// Status code this variant is classified from, if it has a dedicated one.
    pub fn status_hint(&self) -> Option<u16> {
        match self {
            DomainError::NotFound(_) => Some(404),
            DomainError::PaymentRequired(_) => Some(402),
            DomainError::Generic(_) => None,
        }
    }
}

/// Decoded body envelope. Failure bodies carry `message`, success bodies `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}
