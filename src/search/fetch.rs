//! Fetch orchestration.
//!
//! Turns a [`SearchRequest`] into fetch lifecycle events on an
//! [`ActionSink`]. The HTTP call runs on the tokio runtime; callers return
//! immediately.
//!
//! Overlapping requests are resolved last-write-wins by issue order: each
//! trigger takes a sequence number, and a completion is delivered only while
//! its number is still the latest one issued. Older completions are dropped,
//! so a slow stale response can neither overwrite nor relabel newer results.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::Handle;

use crate::config::SearchConfig;
use crate::search::item::{ResultItem, SearchResponse};
use crate::search::request::SearchRequest;
use crate::search::results::ResultsAction;

/// Errors from a single search request. Never surfaced directly; the
/// orchestrator converts them into [`ResultsAction::FetchFailure`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Search service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to decode search response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Receiver of fetch lifecycle events (the single-consumer event queue).
pub trait ActionSink: Send + Sync + 'static {
    fn dispatch(&self, action: ResultsAction);
}

impl ActionSink for tokio::sync::mpsc::UnboundedSender<ResultsAction> {
    fn dispatch(&self, action: ResultsAction) {
        if self.send(action).is_err() {
            tracing::trace!("Result action dropped (receiver gone)");
        }
    }
}

/// Performs one GET and decodes the `hits` list.
pub async fn fetch_hits(
    client: &Client,
    request: &SearchRequest,
) -> Result<Vec<ResultItem>, FetchError> {
    let response = client
        .get(request.url().clone())
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: request.url().to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let body: SearchResponse = response.json().await.map_err(FetchError::Decode)?;
    Ok(body.hits)
}

#[derive(Clone)]
pub struct FetchOrchestrator {
    client: Client,
    runtime: Handle,
    sink: Arc<dyn ActionSink>,
    /// Sequence number of the most recently issued request.
    latest: Arc<Mutex<u64>>,
}

impl FetchOrchestrator {
    pub fn new(
        config: &SearchConfig,
        runtime: Handle,
        sink: Arc<dyn ActionSink>,
    ) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()));
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds.into()));
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            runtime,
            sink,
            latest: Arc::new(Mutex::new(0)),
        })
    }

    /// Starts a fetch for `request`.
    ///
    /// `None` (an invalid term) is a no-op: no event is dispatched and no
    /// request leaves the process. Returns whether a request was issued.
    pub fn trigger(&self, request: Option<SearchRequest>) -> bool {
        let Some(request) = request else {
            tracing::info!("No valid search request; not fetching");
            return false;
        };

        let seq = {
            let mut latest = self.latest.lock();
            *latest += 1;
            self.sink.dispatch(ResultsAction::FetchInit);
            *latest
        };
        tracing::info!(url = %request.url(), seq, "Fetching search results");

        let client = self.client.clone();
        let sink = Arc::clone(&self.sink);
        let latest = Arc::clone(&self.latest);
        self.runtime.spawn(async move {
            let action = match fetch_hits(&client, &request).await {
                Ok(items) => {
                    tracing::info!(seq, hits = items.len(), "Search results received");
                    ResultsAction::FetchSuccess {
                        items,
                        queried_term: request.queried_term(),
                    }
                }
                Err(err) => {
                    tracing::warn!(seq, error = %err, "Error loading search results");
                    ResultsAction::FetchFailure
                }
            };

            let latest = latest.lock();
            if *latest != seq {
                tracing::debug!(seq, latest = *latest, "Dropping stale search response");
                return;
            }
            sink.dispatch(action);
        });
        true
    }
}
