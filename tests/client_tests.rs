mod common;

use axum::http::StatusCode;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use common::{spawn_backend, unreachable_url};
use reel::{
    error::AppError,
    models::{ContentType, RecommendationRequest, ResultCount},
    services::{RecommendationClient, RecommendationService},
};

fn request(title: &str, content_type: Option<ContentType>, count: u32) -> RecommendationRequest {
    RecommendationRequest::new(title, content_type, ResultCount::new(count).unwrap()).unwrap()
}

#[tokio::test]
async fn test_success_returns_items_in_response_order() {
    let (url, _) = spawn_backend(
        StatusCode::OK,
        r#"{"recommendations": [
            {"title": "Tenet", "description": "Time", "similarity": 0.72},
            {"title": "Interstellar", "description": "Space", "similarity": 0.91}
        ]}"#,
    )
    .await;

    let client = RecommendationClient::new(url);
    let items = assert_ok!(
        client
            .fetch_recommendations(&request("Inception", Some(ContentType::Movies), 2))
            .await
    );

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Tenet");
    assert_eq!(items[1].title, "Interstellar");
    assert_eq!(items[1].similarity, 0.91);
}

#[tokio::test]
async fn test_request_body_includes_content_type() {
    let (url, recorded) = spawn_backend(StatusCode::OK, r#"{"recommendations": []}"#).await;

    let client = RecommendationClient::new(url);
    assert_ok!(
        client
            .fetch_recommendations(&request("Inception", Some(ContentType::Shows), 5))
            .await
    );

    assert_eq!(
        recorded.bodies(),
        vec![json!({"title": "Inception", "content_type": "shows", "count": 5})]
    );
}

#[tokio::test]
async fn test_request_body_omits_content_type_when_unset() {
    let (url, recorded) = spawn_backend(StatusCode::OK, r#"{"recommendations": []}"#).await;

    let client = RecommendationClient::new(url);
    assert_ok!(
        client
            .fetch_recommendations(&request("Inception", None, 5))
            .await
    );

    assert_eq!(
        recorded.bodies(),
        vec![json!({"title": "Inception", "count": 5})]
    );
}

#[tokio::test]
async fn test_each_call_carries_a_fresh_request_id() {
    let (url, recorded) = spawn_backend(StatusCode::OK, r#"{"recommendations": []}"#).await;

    let client = RecommendationClient::new(url);
    let req = request("Inception", None, 5);
    assert_ok!(client.fetch_recommendations(&req).await);
    assert_ok!(client.fetch_recommendations(&req).await);

    let ids = recorded.request_ids();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    for id in ids {
        assert!(Uuid::parse_str(&id).is_ok());
    }
}

#[tokio::test]
async fn test_not_found_surfaces_server_message() {
    let (url, _) = spawn_backend(StatusCode::NOT_FOUND, r#"{"error": "Title not found"}"#).await;

    let client = RecommendationClient::new(url);
    let err = assert_err!(
        client
            .fetch_recommendations(&request("Nope", Some(ContentType::Movies), 5))
            .await
    );

    assert!(matches!(err, AppError::Service(ref msg) if msg == "Title not found"));
    assert_eq!(err.user_message(), "Title not found");
}

#[tokio::test]
async fn test_error_field_on_success_status_is_a_failure() {
    let (url, _) = spawn_backend(
        StatusCode::OK,
        r#"{"error": "Model not loaded", "recommendations": []}"#,
    )
    .await;

    let client = RecommendationClient::new(url);
    let err = assert_err!(
        client
            .fetch_recommendations(&request("Inception", None, 5))
            .await
    );

    assert_eq!(err.user_message(), "Model not loaded");
}

#[tokio::test]
async fn test_non_json_error_uses_fallback() {
    let (url, _) = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>").await;

    let client = RecommendationClient::new(url);
    let err = assert_err!(
        client
            .fetch_recommendations(&request("Inception", None, 5))
            .await
    );

    assert!(matches!(err, AppError::Transport(_)));
    assert_eq!(
        err.user_message(),
        "Failed to fetch recommendations. Please try again."
    );
}

#[tokio::test]
async fn test_unexpected_success_shape_uses_fallback() {
    let (url, _) = spawn_backend(StatusCode::OK, r#"{"results": []}"#).await;

    let client = RecommendationClient::new(url);
    let err = assert_err!(
        client
            .fetch_recommendations(&request("Inception", None, 5))
            .await
    );

    assert!(matches!(err, AppError::Transport(_)));
}

#[tokio::test]
async fn test_connection_refused_uses_fallback() {
    let client = RecommendationClient::new(unreachable_url().await);
    let err = assert_err!(
        client
            .fetch_recommendations(&request("Inception", None, 5))
            .await
    );

    assert!(matches!(err, AppError::Transport(_)));
    assert_eq!(
        err.user_message(),
        "Failed to fetch recommendations. Please try again."
    );
}
