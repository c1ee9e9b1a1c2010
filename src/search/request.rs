use url::Url;

use crate::search::validation::is_valid_search_term;

/// Page size used when the config does not set one.
pub const DEFAULT_HITS_PER_PAGE: u32 = 5;

const QUERY_PARAM: &str = "query";
const PAGE_SIZE_PARAM: &str = "hitsPerPage";

/// A ready-to-send search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    url: Url,
}

impl SearchRequest {
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Term this request asks for, read back from the URL's `query`
    /// parameter rather than from whatever the user has typed since.
    pub fn queried_term(&self) -> String {
        self.url
            .query_pairs()
            .find(|(key, _)| key == QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default()
    }
}

/// Maps a search term to a request against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    endpoint: Url,
    hits_per_page: u32,
}

impl RequestBuilder {
    pub fn new(endpoint: Url, hits_per_page: u32) -> Self {
        Self {
            endpoint,
            hits_per_page,
        }
    }

    pub fn hits_per_page(&self) -> u32 {
        self.hits_per_page
    }

    /// Builds `endpoint?query=<term>&hitsPerPage=<n>`.
    ///
    /// Returns `None` for terms that must not reach the network. That is a
    /// normal outcome, not an error.
    pub fn build(&self, term: &str) -> Option<SearchRequest> {
        if !is_valid_search_term(term) {
            tracing::info!(term, "Search term too short; not building request");
            return None;
        }

        let mut url = self.endpoint.clone();
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair(QUERY_PARAM, term)
            .append_pair(PAGE_SIZE_PARAM, &self.hits_per_page.to_string());

        tracing::debug!(%url, "Built search request");
        Some(SearchRequest { url })
    }
}
