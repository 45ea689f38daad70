use crate::core::{RawResponse, ResponseBody, Transport};
use crate::utils::error::Result;
use std::future::Future;

/// Uses any async function `Fn(P) -> Future<Output = Result<R>>` as a transport.
#[derive(Debug, Clone)]
pub struct FnTransport<F> {
    f: F,
}

impl<F> FnTransport<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<P, F, Fut, R> Transport<P> for FnTransport<F>
where
    F: Fn(P) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R>> + Send,
    R: RawResponse,
{
    type Response = R;

    fn send(&self, params: P) -> impl Future<Output = Result<R>> + Send {
        (self.f)(params)
    }
}

/// An already-received response with a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl JsonResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }
}

impl RawResponse for JsonResponse {
    fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn status(&self) -> u16 {
        self.status
    }

    async fn body(self) -> Result<ResponseBody> {
        Ok(serde_json::from_value(self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::adapter::ResponseAdapter;
    use crate::core::{DomainError, Outcome};
    use crate::utils::error::Error;
    use serde_json::json;

    #[tokio::test]
    async fn test_closure_drives_adapter() {
        let adapter = ResponseAdapter::new(FnTransport::new(|id: u32| async move {
            if id == 1 {
                Ok::<_, Error>(JsonResponse::new(200, json!({"data": {"id": id}})))
            } else {
                Ok::<_, Error>(JsonResponse::new(404, json!({"message": format!("no item {}", id)})))
            }
        }));

        let found: Outcome<serde_json::Value, DomainError> = adapter.call(1).await;
        assert_eq!(found.data(), Some(&json!({"id": 1})));

        let missing: Outcome<serde_json::Value, DomainError> = adapter.call(2).await;
        assert_eq!(
            missing.error(),
            Some(&DomainError::NotFound("no item 2".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closure_error_is_generic_failure() {
        let adapter = ResponseAdapter::new(FnTransport::new(|_: ()| async {
            Err::<JsonResponse, _>(Error::TransportError {
                message: "dns lookup failed".to_string(),
            })
        }));

        let outcome: Outcome<serde_json::Value, DomainError> = adapter.call(()).await;

        assert!(outcome
            .error()
            .is_some_and(|e| e.message().contains("dns lookup failed")));
    }

    #[tokio::test]
    async fn test_non_object_body_is_generic_failure() {
        let adapter = ResponseAdapter::new(FnTransport::new(|_: ()| async {
            Ok::<_, Error>(JsonResponse::new(200, json!("just a string")))
        }));

        let outcome: Outcome<serde_json::Value, DomainError> = adapter.call(()).await;

        assert!(matches!(outcome, Outcome::Failure(DomainError::Generic(_))));
    }
}
