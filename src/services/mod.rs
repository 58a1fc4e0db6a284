//! Recommendation service abstraction
//!
//! The front end never computes similarity itself. It hands a validated
//! [`RecommendationRequest`] to a [`RecommendationService`] and displays
//! whatever list comes back, in the order it came back.
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::AppResult,
    models::{RecommendationItem, RecommendationRequest},
};

pub mod recommendations;
pub mod request_id;

pub use recommendations::RecommendationClient;
pub use request_id::{RequestId, REQUEST_ID_HEADER};

/// Source of recommendations for a title
///
/// Implementations perform exactly one round trip per call and keep no state
/// between calls: no retries, no caching of identical queries.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Fetch titles similar to `request.title`
    ///
    /// Returns the service's list verbatim, without re-sorting or filtering.
    async fn fetch_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<Vec<RecommendationItem>>;

    /// Service name for logging and debugging
    fn name(&self) -> &'static str;
}
