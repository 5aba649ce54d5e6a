mod common;

use common::{unreachable_base_url, StubServer};
use langmath_core::{AiProvider, BackendConfig, ErrorKind, LocalProvider};
use serde_json::json;

fn provider_for(base_url: &str) -> LocalProvider {
    LocalProvider::with_config(BackendConfig::local().with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn trims_the_generated_response() {
    let server = StubServer::json(
        200,
        json!({ "model": "llama3.1:8b", "response": "  $$ x=1 $$  ", "done": true }),
    )
    .await;
    let result = provider_for(server.base_url()).convert("x equals one", None).await;
    assert_eq!(result.unwrap(), "$$ x=1 $$");
}

#[tokio::test]
async fn posts_the_generate_contract_without_auth() {
    let server = StubServer::json(200, json!({ "response": "$$ a $$" })).await;
    provider_for(server.base_url())
        .convert("area of a square", None)
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/generate");
    assert!(request.header("content-type").unwrap().starts_with("application/json"));
    assert!(request.header("authorization").is_none());

    let body = request.json();
    assert_eq!(body["model"], "llama3.1:8b");
    assert_eq!(body["stream"], false);
    assert_eq!(body["options"]["temperature"].as_f64(), Some(0.2));
    assert_eq!(body["options"]["top_p"].as_f64(), Some(0.95));
    assert!(body["prompt"].as_str().unwrap().ends_with("area of a square"));
}

#[tokio::test]
async fn server_error_is_a_network_failure_without_parsing() {
    let server = StubServer::start(500, "<html>not json</html>").await;
    let err = provider_for(server.base_url())
        .convert("x", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    assert!(err.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn unreachable_service_is_a_connection_failure() {
    let base_url = unreachable_base_url().await;
    let err = provider_for(&base_url).convert("x", None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
    assert!(err.to_string().starts_with("Could not connect to local instance"));
}

#[tokio::test]
async fn missing_response_field_is_malformed() {
    let server = StubServer::json(200, json!({ "model": "llama3.1:8b", "done": true })).await;
    let err = provider_for(server.base_url())
        .convert("x", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn non_json_success_body_is_malformed() {
    let server = StubServer::start(200, "definitely not json").await;
    let err = provider_for(server.base_url())
        .convert("x", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn empty_selection_never_reaches_the_service() {
    let server = StubServer::json(200, json!({ "response": "$$ a $$" })).await;
    let err = provider_for(server.base_url()).convert("", None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptySelection);
    assert!(server.requests().is_empty());
}
