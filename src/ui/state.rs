use crate::{
    error::AppResult,
    models::{ContentType, RecommendationItem},
};

/// Monotonic tag assigned to each dispatched search
pub type RequestSeq = u64;

/// Top-level search lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Results, error and loading flag owned by the UI
///
/// Only the UI loop mutates this, through [`SearchState::begin`] and
/// [`SearchState::complete`]. Outcomes tagged with anything but the most
/// recently issued sequence number are dropped, so an older response that
/// settles late cannot replace a newer one.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    results: Vec<RecommendationItem>,
    error: Option<String>,
    loading: bool,
    latest_seq: RequestSeq,
    results_content_type: ContentType,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[RecommendationItem] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Content type the visible results were requested with
    pub fn results_content_type(&self) -> ContentType {
        self.results_content_type
    }

    pub fn latest_seq(&self) -> RequestSeq {
        self.latest_seq
    }

    pub fn phase(&self) -> SearchPhase {
        if self.loading {
            SearchPhase::Loading
        } else if self.error.is_some() {
            SearchPhase::Failure
        } else if self.latest_seq == 0 {
            SearchPhase::Idle
        } else {
            SearchPhase::Success
        }
    }

    /// Marks a new search as in flight and returns its sequence number
    pub fn begin(&mut self) -> RequestSeq {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        self.latest_seq
    }

    /// Applies a settled search; returns `false` if the outcome was stale
    pub fn complete(
        &mut self,
        seq: RequestSeq,
        content_type: ContentType,
        outcome: AppResult<Vec<RecommendationItem>>,
    ) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "Discarding stale search outcome");
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(items) => {
                self.results = items;
                self.error = None;
                self.results_content_type = content_type;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e.user_message());
            }
        }
        true
    }
}
