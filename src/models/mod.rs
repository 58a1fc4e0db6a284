mod query;
mod recommendation;

pub use query::{ContentType, RecommendationRequest, ResultCount};
pub use recommendation::{error_message, RecommendationItem, RecommendationResponse};
