//! Search term with write-through persistence.

use std::sync::Arc;

use crate::store::KeyValueStore;

/// Store key holding the last search term.
pub const SEARCH_TERM_KEY: &str = "searchTerm";

/// Outcome of [`SearchTermState::set_term`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermUpdate {
    Changed,
    /// Candidate equalled the current term; nothing was written.
    Unchanged,
}

/// Owns the current search term and mirrors every change into a store.
///
/// Store failures never reach the caller: they are logged and the
/// in-memory term stays authoritative for the session.
pub struct SearchTermState {
    store: Arc<dyn KeyValueStore>,
    key: String,
    term: String,
}

impl SearchTermState {
    /// Reads the persisted term, or uses `default` when it is absent, empty
    /// or unreadable.
    pub fn load(store: Arc<dyn KeyValueStore>, key: &str, default: &str) -> Self {
        let term = match store.get(key) {
            Ok(Some(stored)) if !stored.is_empty() => stored,
            Ok(_) => default.to_string(),
            Err(err) => {
                tracing::error!(key, error = %err, "Failed to read persisted search term");
                default.to_string()
            }
        };

        Self {
            store,
            key: key.to_string(),
            term,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Replaces the term if `candidate` differs (case-sensitive) and writes
    /// it through to the store.
    pub fn set_term(&mut self, candidate: &str) -> TermUpdate {
        if candidate == self.term {
            tracing::debug!(term = candidate, "Search term unchanged; skipping update");
            return TermUpdate::Unchanged;
        }

        tracing::debug!(old = %self.term, new = candidate, "Search term changed");
        self.term = candidate.to_string();

        if let Err(err) = self.store.set(&self.key, &self.term) {
            tracing::error!(
                key = %self.key,
                value = %self.term,
                error = %err,
                "Failed to persist search term"
            );
        }
        TermUpdate::Changed
    }
}
