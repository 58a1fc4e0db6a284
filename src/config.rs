use serde::Deserialize;

use crate::models::{ContentType, ResultCount};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recommendation service (`POST {url}/recommend`)
    #[serde(default = "default_recommender_api_url")]
    pub recommender_api_url: String,

    /// Content type preselected in the query form
    #[serde(default)]
    pub default_content_type: ContentType,

    /// Result count preselected in the query form
    #[serde(default)]
    pub default_count: ResultCount,

    /// Show the content-type selector and send `content_type` with each request
    #[serde(default = "default_content_type_selector")]
    pub content_type_selector: bool,

    /// File that receives tracing output while the terminal UI is active
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_recommender_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_content_type_selector() -> bool {
    true
}

fn default_log_file() -> String {
    "reel.log".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recommender_api_url: default_recommender_api_url(),
            default_content_type: ContentType::default(),
            default_count: ResultCount::default(),
            content_type_selector: default_content_type_selector(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        Ok(config.normalized())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.recommender_api_url.trim().trim_end_matches('/');
        self.recommender_api_url = trimmed.to_string();
        self
    }
}
