/// Integration tests with a mocked credit scorer
/// Tests the score client contract without hitting a real external service
use std::time::Duration;

use user_records_api::errors::AppError;
use user_records_api::score_client::ScoreClient;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a client pointed at the mock server's /api/score endpoint.
fn score_client(server: &MockServer, timeout: Duration) -> ScoreClient {
    ScoreClient::new(format!("{}/api/score", server.uri()), timeout)
        .expect("score client should build")
}

#[tokio::test]
async fn test_get_score_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/score"))
        .and(body_json(serde_json::json!({
            "first_name": "Jeffrey",
            "last_name": "Bolle"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "score": "0.87"
        })))
        .mount(&mock_server)
        .await;

    let client = score_client(&mock_server, Duration::from_secs(5));
    let score = client.get_score("Jeffrey", "Bolle").await.unwrap();
    assert_eq!(score, 0.87);
}

#[tokio::test]
async fn test_get_score_is_fetched_fresh_every_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "score": "0.87"
        })))
        .mount(&mock_server)
        .await;

    let client = score_client(&mock_server, Duration::from_secs(5));
    assert_eq!(client.get_score("Jeffrey", "Bolle").await.unwrap(), 0.87);

    // The scorer's answer changes; the next call must reflect it.
    mock_server.reset().await;
    Mock::given(method("POST"))
        .and(path("/api/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "score": "0.34"
        })))
        .mount(&mock_server)
        .await;

    assert_eq!(client.get_score("Jeffrey", "Bolle").await.unwrap(), 0.34);
}

#[tokio::test]
async fn test_get_score_missing_field_is_protocol_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rating": "0.87"
        })))
        .mount(&mock_server)
        .await;

    let client = score_client(&mock_server, Duration::from_secs(5));
    let err = client.get_score("Jeffrey", "Bolle").await.unwrap_err();
    assert!(matches!(err, AppError::ScoreProtocol(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_get_score_non_json_body_is_protocol_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/score"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
        .mount(&mock_server)
        .await;

    let client = score_client(&mock_server, Duration::from_secs(5));
    let err = client.get_score("Jeffrey", "Bolle").await.unwrap_err();
    assert!(matches!(err, AppError::ScoreProtocol(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_get_score_unparseable_value_is_format_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "score": "very high"
        })))
        .mount(&mock_server)
        .await;

    let client = score_client(&mock_server, Duration::from_secs(5));
    let err = client.get_score("Jeffrey", "Bolle").await.unwrap_err();
    assert!(matches!(err, AppError::ScoreFormat(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_get_score_server_error_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/score"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = score_client(&mock_server, Duration::from_secs(5));
    let err = client.get_score("Jeffrey", "Bolle").await.unwrap_err();
    assert!(matches!(err, AppError::ScoreUnavailable(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_get_score_timeout_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/score"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "score": "0.5" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = score_client(&mock_server, Duration::from_millis(100));
    let err = client.get_score("Jeffrey", "Bolle").await.unwrap_err();
    assert!(matches!(err, AppError::ScoreUnavailable(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_concurrent_score_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "score": "0.42"
        })))
        .expect(10)
        .mount(&mock_server)
        .await;

    let client = score_client(&mock_server, Duration::from_secs(5));

    // Fire 10 concurrent requests through one shared client.
    let mut handles = vec![];
    for i in 0..10 {
        let client_clone = client.clone();
        let handle = tokio::spawn(async move {
            client_clone
                .get_score(&format!("First{}", i), "Last")
                .await
        });
        handles.push(handle);
    }

    for handle in handles {
        let score = handle.await.unwrap().unwrap();
        assert_eq!(score, 0.42);
    }
}
