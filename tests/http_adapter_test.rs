use fetch_outcome::{
    ClientConfig, DomainError, HttpRequest, HttpTransport, Outcome, ResponseAdapter,
};
use httpmock::prelude::*;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct Account {
    id: u64,
    name: String,
}

fn adapter_for(server: &MockServer) -> ResponseAdapter<HttpTransport> {
    let transport = HttpTransport::new(&ClientConfig::new(server.base_url())).unwrap();
    ResponseAdapter::new(transport)
}

#[tokio::test]
async fn test_success_payload_is_decoded() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/accounts/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"data": {"id": 1, "name": "Ada"}}));
    });

    let outcome: Outcome<Account, DomainError> =
        adapter_for(&server).call(HttpRequest::get("/accounts/1")).await;

    api_mock.assert();
    assert_eq!(
        outcome,
        Outcome::Success(Account {
            id: 1,
            name: "Ada".to_string()
        })
    );
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/accounts/9");
        then.status(404).json_body(json!({"message": "missing"}));
    });

    let outcome: Outcome<Account, DomainError> =
        adapter_for(&server).call(HttpRequest::get("/accounts/9")).await;

    assert_eq!(
        outcome.error(),
        Some(&DomainError::NotFound("missing".to_string()))
    );
}

#[tokio::test]
async fn test_empty_404_body_uses_reason_phrase() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path("/gone");
        then.status(404);
    });

    let outcome: Outcome<Account, DomainError> =
        adapter_for(&server).call(HttpRequest::get("/gone")).await;

    assert_eq!(
        outcome.error(),
        Some(&DomainError::NotFound("Not Found".to_string()))
    );
}

#[tokio::test]
async fn test_402_maps_to_payment_required() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/reports");
        then.status(402).json_body(json!({"message": "pay"}));
    });

    let outcome: Outcome<Account, DomainError> =
        adapter_for(&server).call(HttpRequest::get("/reports")).await;

    assert_eq!(
        outcome.error(),
        Some(&DomainError::PaymentRequired("pay".to_string()))
    );
}

#[tokio::test]
async fn test_other_statuses_map_to_generic() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path("/boom");
        then.status(500).json_body(json!({"message": "boom"}));
    });
    server.mock(|when, then| {
        when.path("/forbidden");
        then.status(403).json_body(json!({"message": "no"}));
    });
    let adapter = adapter_for(&server);

    for path in ["/boom", "/forbidden"] {
        let outcome: Outcome<Account, DomainError> = adapter.call(HttpRequest::get(path)).await;
        assert_eq!(
            outcome,
            Outcome::Failure(DomainError::Generic("Response's not okay".to_string()))
        );
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_generic_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path("/broken");
        then.status(200).body("<html>not json</html>");
    });

    let outcome: Outcome<Account, DomainError> =
        adapter_for(&server).call(HttpRequest::get("/broken")).await;

    assert!(matches!(outcome, Outcome::Failure(DomainError::Generic(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_generic_failure() {
    // Port 9 (discard) is essentially never listening locally.
    let transport = HttpTransport::new(&ClientConfig {
        timeout_seconds: Some(2),
        ..ClientConfig::new("http://127.0.0.1:9")
    })
    .unwrap();
    let adapter = ResponseAdapter::new(transport);

    let outcome: Outcome<Account, DomainError> = adapter.call(HttpRequest::get("/")).await;

    assert!(matches!(outcome, Outcome::Failure(DomainError::Generic(_))));
}

#[tokio::test]
async fn test_headers_query_and_body_are_sent() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/accounts")
            .query_param("dry_run", "true")
            .header("x-api-key", "k-123")
            .json_body(json!({"name": "Grace"}));
        then.status(201).json_body(json!({"data": {"id": 2, "name": "Grace"}}));
    });

    let mut headers = HashMap::new();
    headers.insert("x-api-key".to_string(), "k-123".to_string());
    let config = ClientConfig {
        headers,
        ..ClientConfig::new(server.url("/api"))
    };
    let adapter = ResponseAdapter::new(HttpTransport::new(&config).unwrap());

    let request =
        HttpRequest::post("/accounts", json!({"name": "Grace"})).with_query("dry_run", "true");
    let outcome: Outcome<Account, DomainError> = adapter.call(request).await;

    api_mock.assert();
    assert_eq!(outcome.data().map(|a| a.id), Some(2));
}
