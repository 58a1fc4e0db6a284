use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single title returned by the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Content resemblance in [0, 1], as reported by the service
    pub similarity: f64,
}

impl RecommendationItem {
    /// Similarity as a percentage with one decimal place, e.g. `87.0%`
    pub fn similarity_percent(&self) -> String {
        // `{:.1}` rounds ties to even; scores round half away from zero
        let tenths = (self.similarity * 1000.0).round();
        format!("{:.1}%", tenths / 10.0)
    }
}

/// Successful body of `POST /recommend`
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RecommendationItem>,
}

/// Extracts the message of an `{"error": ...}` payload, if the body carries one
pub fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(msg) if msg.is_empty() => None,
        Value::String(msg) => Some(msg.clone()),
        other => Some(other.to_string()),
    }
}
