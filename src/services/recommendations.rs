/// HTTP client for the recommendation service
///
/// API Flow:
/// 1. `POST {base}/recommend` with `{title, content_type?, count}`
/// 2. `{"recommendations": [...]}` on success, `{"error": "..."}` on failure
///
/// An `error` field wins over the status code: a 200 carrying one is still a
/// failure, and a 404 carrying one surfaces its message verbatim.
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{error_message, RecommendationItem, RecommendationRequest, RecommendationResponse},
    services::{RecommendationService, RequestId, REQUEST_ID_HEADER},
};

#[derive(Clone)]
pub struct RecommendationClient {
    http_client: HttpClient,
    api_url: String,
}

impl RecommendationClient {
    /// Creates a client for the service at `api_url` (no trailing slash)
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: api_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.recommender_api_url.clone())
    }

    fn endpoint(&self) -> String {
        format!("{}/recommend", self.api_url)
    }
}

#[async_trait]
impl RecommendationService for RecommendationClient {
    async fn fetch_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<Vec<RecommendationItem>> {
        let request_id = RequestId::new();

        tracing::info!(
            request_id = %request_id,
            title = %request.title,
            count = request.count.get(),
            content_type = ?request.content_type,
            "Requesting recommendations"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(request_id = %request_id, error = %e, "Recommendation request failed");
                AppError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<Value>(&body).ok();

        if let Some(message) = parsed.as_ref().and_then(error_message) {
            tracing::warn!(
                request_id = %request_id,
                status = %status,
                error = %message,
                "Recommendation service returned an error"
            );
            return Err(AppError::Service(message));
        }

        if !status.is_success() {
            tracing::warn!(request_id = %request_id, status = %status, "Unstructured error response");
            return Err(AppError::Transport(format!(
                "Recommendation service returned status {}: {}",
                status, body
            )));
        }

        let value = parsed.ok_or_else(|| {
            tracing::error!(request_id = %request_id, response = %body, "Response is not JSON");
            AppError::Transport("Recommendation response is not valid JSON".to_string())
        })?;

        let response: RecommendationResponse = serde_json::from_value(value).map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                response = %body,
                "Failed to deserialize recommendation response"
            );
            AppError::Transport(format!("Failed to parse recommendation response: {}", e))
        })?;

        tracing::info!(
            request_id = %request_id,
            results = response.recommendations.len(),
            "Recommendations received"
        );

        Ok(response.recommendations)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
