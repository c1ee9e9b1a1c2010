use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::search::DEFAULT_HITS_PER_PAGE;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote search service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint (default: the HN Algolia search API).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Results requested per search (default: 5).
    #[serde(default = "default_hits_per_page")]
    pub hits_per_page: u32,
    /// Term used when nothing is persisted yet (default: "Re").
    #[serde(default = "default_term")]
    pub default_term: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds. Unset means no limit.
    #[serde(default)]
    pub timeout_seconds: Option<u32>,
}

/// Where the persisted search term lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// State file path. Defaults to `<data_dir>/hnstories/state.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to
    /// `<data_dir>/hnstories/hnstories.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    "https://hn.algolia.com/api/v1/search".to_string()
}

fn default_hits_per_page() -> u32 {
    DEFAULT_HITS_PER_PAGE
}

fn default_term() -> String {
    "Re".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            hits_per_page: default_hits_per_page(),
            default_term: default_term(),
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
