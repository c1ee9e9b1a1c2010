//! Story search: term state, request building, fetching and the result
//! reducer.
//!
//! ```text
//! key press ─→ SearchTermState ─(submit)─→ RequestBuilder ─→ FetchOrchestrator
//!                                                                  │
//!            filter_items ←── ResultsState ←── ResultsReducer ←────┘
//! ```

pub mod bundled;
pub mod fetch;
pub mod item;
pub mod request;
pub mod results;
pub mod term;
pub mod validation;
pub mod view;

pub use fetch::{fetch_hits, ActionSink, FetchError, FetchOrchestrator};
pub use item::{ItemId, ResultItem, SearchResponse};
pub use request::{RequestBuilder, SearchRequest, DEFAULT_HITS_PER_PAGE};
pub use results::{ResultsAction, ResultsReducer, ResultsState};
pub use term::{SearchTermState, TermUpdate, SEARCH_TERM_KEY};
pub use validation::{check_input, is_valid_search_term, InputHint};
pub use view::filter_items;
