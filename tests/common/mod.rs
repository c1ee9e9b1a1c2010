//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_search;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use hnstories::config::SearchConfig;
use hnstories::search::{
    ActionSink, FetchOrchestrator, ItemId, ResultItem, ResultsAction,
};
use hnstories::store::{KeyValueStore, StoreError};
use tempfile::TempDir;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Build a result item with the given id and title.
pub fn item(id: u64, title: &str) -> ResultItem {
    ResultItem {
        title: title.to_string(),
        url: Some(format!("https://example.com/{id}")),
        author: "tester".to_string(),
        comment_count: 1,
        score: 2,
        id: ItemId::from(id),
    }
}

/// Store whose every call fails.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(refused("read refused"))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(refused("write refused"))
    }
}

fn refused(message: &str) -> StoreError {
    StoreError::Io {
        path: PathBuf::from("/unavailable/state.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, message.to_string()),
    }
}

/// Search config pointed at `endpoint` with short timeouts.
pub fn search_config(endpoint: &str) -> SearchConfig {
    SearchConfig {
        endpoint: endpoint.to_string(),
        timeout_seconds: Some(5),
        connect_timeout_seconds: 2,
        ..SearchConfig::default()
    }
}

/// Orchestrator on the current runtime, reporting into a channel.
pub fn orchestrator(endpoint: &str) -> (FetchOrchestrator, UnboundedReceiver<ResultsAction>) {
    orchestrator_with(&search_config(endpoint))
}

/// Like [`orchestrator`], with a caller-supplied search config.
pub fn orchestrator_with(
    config: &SearchConfig,
) -> (FetchOrchestrator, UnboundedReceiver<ResultsAction>) {
    let (tx, rx) = mpsc::unbounded_channel::<ResultsAction>();
    let sink: Arc<dyn ActionSink> = Arc::new(tx);
    let fetcher = FetchOrchestrator::new(config, tokio::runtime::Handle::current(), sink)
        .expect("Failed to build orchestrator");
    (fetcher, rx)
}

/// Receive the next action or fail after `timeout`.
pub async fn next_action(
    rx: &mut UnboundedReceiver<ResultsAction>,
    timeout: Duration,
) -> ResultsAction {
    tokio::time::timeout(timeout, rx.recv())
        .await
        .expect("Timed out waiting for action")
        .expect("Action channel closed")
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
