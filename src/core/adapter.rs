use crate::core::{DomainError, Outcome, RawResponse, Transport};
use crate::utils::error::Result;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Message used for failures that have no dedicated classification.
pub const GENERIC_FAILURE_MESSAGE: &str = "Response's not okay";

/// Turns raw transport responses into classified outcomes.
///
/// Every failure, whether a rejected status, a broken body or the transport
/// itself erroring, ends up as [`Outcome::Failure`]; `call` has no error path.
#[derive(Debug, Clone)]
pub struct ResponseAdapter<T> {
    transport: T,
}

impl<T> ResponseAdapter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn call<P, V>(&self, params: P) -> Outcome<V, DomainError>
    where
        T: Transport<P>,
        V: DeserializeOwned,
    {
        match self.try_call(params).await {
            Ok(outcome) => outcome,
            Err(fault) => {
                tracing::warn!("❌ Request failed before classification: {}", fault);
                Outcome::failed(DomainError::Generic(fault.to_string()))
            }
        }
    }

    async fn try_call<P, V>(&self, params: P) -> Result<Outcome<V, DomainError>>
    where
        T: Transport<P>,
        V: DeserializeOwned,
    {
        let response = self.transport.send(params).await?;
        let status = response.status();
        tracing::debug!("📡 Response status: {}", status);

        if !response.ok() {
            let body = response.body().await?;
            let message = body
                .message
                .unwrap_or_else(|| canonical_reason(status).to_string());
            return Ok(Outcome::failed(classify_failure(status, message)));
        }

        let body = response.body().await?;
        let data = serde_json::from_value(body.data.unwrap_or(serde_json::Value::Null))?;
        Ok(Outcome::succeed(data))
    }
}

/// Maps a non-success status to its domain error. 404 and 402 keep the
/// server message; everything else collapses to [`GENERIC_FAILURE_MESSAGE`].
pub fn classify_failure(status: u16, message: String) -> DomainError {
    match status {
        404 => DomainError::NotFound(message),
        402 => DomainError::PaymentRequired(message),
        _ => {
            tracing::warn!(
                "🔶 Unclassified failure status {}: {}",
                status,
                message
            );
            DomainError::Generic(GENERIC_FAILURE_MESSAGE.to_string())
        }
    }
}

fn canonical_reason(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown status")
}
