use crate::{
    config::Config,
    models::{ContentType, RecommendationRequest, ResultCount},
};

/// Placeholder shown while the title input is empty
pub const TITLE_PLACEHOLDER: &str = "Enter a movie or TV show title...";

/// Query form: title input plus content-type and count selectors
///
/// The form never performs I/O. Operations that amount to a submit hand back
/// the request to send, or `None` when the title is blank after trimming.
#[derive(Debug, Clone)]
pub struct QueryForm {
    title: String,
    /// `None` when the content-type selector is disabled
    content_type: Option<ContentType>,
    count: ResultCount,
}

impl QueryForm {
    pub fn new(content_type: Option<ContentType>, count: ResultCount) -> Self {
        Self {
            title: String::new(),
            content_type,
            count,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let content_type = config
            .content_type_selector
            .then_some(config.default_content_type);
        Self::new(content_type, config.default_count)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type
    }

    pub fn has_content_type_selector(&self) -> bool {
        self.content_type.is_some()
    }

    pub fn count(&self) -> ResultCount {
        self.count
    }

    pub fn push_char(&mut self, c: char) {
        self.title.push(c);
    }

    pub fn pop_char(&mut self) {
        self.title.pop();
    }

    pub fn clear_title(&mut self) {
        self.title.clear();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Request for the current input, or `None` if the title is blank
    pub fn submit(&self) -> Option<RecommendationRequest> {
        RecommendationRequest::new(&self.title, self.content_type, self.count).ok()
    }

    /// Changes the content type and resubmits right away ("live refine")
    ///
    /// Returns a request only when the value actually changed and the title is
    /// non-blank. No-op when the selector is disabled.
    pub fn set_content_type(&mut self, content_type: ContentType) -> Option<RecommendationRequest> {
        match self.content_type {
            Some(current) if current != content_type => {
                self.content_type = Some(content_type);
                self.submit()
            }
            _ => None,
        }
    }

    pub fn toggle_content_type(&mut self) -> Option<RecommendationRequest> {
        let next = self.content_type?.toggle();
        self.set_content_type(next)
    }

    /// Changing the count never resubmits
    pub fn set_count(&mut self, count: ResultCount) {
        self.count = count;
    }

    pub fn next_count(&mut self) {
        self.set_count(self.count.next());
    }

    pub fn prev_count(&mut self) {
        self.set_count(self.count.prev());
    }
}
