use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Kind of content the recommendation service should search
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Movies,
    Shows,
}

impl ContentType {
    /// Value sent on the wire as `content_type`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movies => "movies",
            Self::Shows => "shows",
        }
    }

    /// Label shown next to a title in the detail view
    pub fn item_label(self) -> &'static str {
        match self {
            Self::Movies => "Movie",
            Self::Shows => "TV Show",
        }
    }

    /// Label shown in the selector
    pub fn selector_label(self) -> &'static str {
        match self {
            Self::Movies => "Movies",
            Self::Shows => "TV Shows",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Movies => Self::Shows,
            Self::Shows => Self::Movies,
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of recommendations to request, restricted to the selector's options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ResultCount(u32);

impl ResultCount {
    /// Options offered by the count selector, in display order
    pub const ALLOWED: [u32; 7] = [2, 3, 4, 5, 10, 15, 20];

    pub fn new(count: u32) -> AppResult<Self> {
        if Self::ALLOWED.contains(&count) {
            Ok(Self(count))
        } else {
            Err(AppError::Validation(format!(
                "count must be one of {:?}, got {}",
                Self::ALLOWED,
                count
            )))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    fn position(self) -> usize {
        Self::ALLOWED
            .iter()
            .position(|&c| c == self.0)
            .unwrap_or_default()
    }

    /// Next larger option, saturating at the largest
    pub fn next(self) -> Self {
        let idx = (self.position() + 1).min(Self::ALLOWED.len() - 1);
        Self(Self::ALLOWED[idx])
    }

    /// Next smaller option, saturating at the smallest
    pub fn prev(self) -> Self {
        Self(Self::ALLOWED[self.position().saturating_sub(1)])
    }
}

impl Default for ResultCount {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u32> for ResultCount {
    type Error = AppError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<ResultCount> for u32 {
    fn from(count: ResultCount) -> Self {
        count.0
    }
}

impl Display for ResultCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of `POST /recommend`. Built once per submit and never modified.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub title: String,
    /// Omitted from the body when the content-type selector is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    pub count: ResultCount,
}

impl RecommendationRequest {
    /// Builds a request from raw form input; the title is trimmed and must be non-empty
    pub fn new(
        title: &str,
        content_type: Option<ContentType>,
        count: ResultCount,
    ) -> AppResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            content_type,
            count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_type_serialization() {
        assert_eq!(serde_json::to_string(&ContentType::Movies).unwrap(), "\"movies\"");
        assert_eq!(serde_json::to_string(&ContentType::Shows).unwrap(), "\"shows\"");
    }

    #[test]
    fn test_content_type_labels() {
        assert_eq!(ContentType::Movies.item_label(), "Movie");
        assert_eq!(ContentType::Shows.item_label(), "TV Show");
        assert_eq!(ContentType::Movies.toggle(), ContentType::Shows);
        assert_eq!(ContentType::Shows.toggle(), ContentType::Movies);
    }

    #[test]
    fn test_result_count_rejects_values_outside_set() {
        assert!(ResultCount::new(5).is_ok());
        assert!(ResultCount::new(20).is_ok());
        assert!(ResultCount::new(0).is_err());
        assert!(ResultCount::new(7).is_err());
        assert!(serde_json::from_str::<ResultCount>("11").is_err());
    }

    #[test]
    fn test_result_count_stepping_saturates() {
        let two = ResultCount::new(2).unwrap();
        let twenty = ResultCount::new(20).unwrap();
        assert_eq!(two.prev(), two);
        assert_eq!(two.next().get(), 3);
        assert_eq!(ResultCount::new(5).unwrap().next().get(), 10);
        assert_eq!(twenty.next(), twenty);
        assert_eq!(twenty.prev().get(), 15);
    }

    #[test]
    fn test_request_trims_title() {
        let request = RecommendationRequest::new(
            "  Inception ",
            Some(ContentType::Movies),
            ResultCount::default(),
        )
        .unwrap();
        assert_eq!(request.title, "Inception");
    }

    #[test]
    fn test_request_rejects_blank_title() {
        let result = RecommendationRequest::new("   \t", None, ResultCount::default());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_request_body_with_content_type() {
        let request = RecommendationRequest::new(
            "Inception",
            Some(ContentType::Movies),
            ResultCount::new(5).unwrap(),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"title": "Inception", "content_type": "movies", "count": 5})
        );
    }

    #[test]
    fn test_request_body_without_content_type() {
        let request =
            RecommendationRequest::new("Inception", None, ResultCount::new(5).unwrap()).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"title": "Inception", "count": 5})
        );
    }
}
