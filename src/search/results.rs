//! Result list state machine.

use crate::mvi::{Intent, Reducer, UiState};
use crate::search::item::{ItemId, ResultItem};

/// Everything the result list view needs.
///
/// `is_loading` and `is_error` are never both set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsState {
    pub items: Vec<ResultItem>,
    pub is_loading: bool,
    pub is_error: bool,
    /// Term of the request that produced `items`; empty until the first
    /// successful fetch.
    pub last_queried_term: String,
}

impl UiState for ResultsState {}

impl ResultsState {
    /// Initial state seeded with `items` (e.g. the bundled example data).
    pub fn with_items(items: Vec<ResultItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}

/// Events driving [`ResultsReducer`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsAction {
    /// A request was issued.
    FetchInit,
    /// A request completed; `items` replaces the current list.
    FetchSuccess {
        items: Vec<ResultItem>,
        queried_term: String,
    },
    /// A request failed. Existing items stay visible.
    FetchFailure,
    /// The user removed an item from the list.
    RemoveItem { id: ItemId },
}

impl Intent for ResultsAction {}

pub struct ResultsReducer;

impl Reducer for ResultsReducer {
    type State = ResultsState;
    type Intent = ResultsAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResultsAction::FetchInit => ResultsState {
                is_loading: true,
                is_error: false,
                ..state
            },
            ResultsAction::FetchSuccess {
                items,
                queried_term,
            } => ResultsState {
                items,
                is_loading: false,
                is_error: false,
                last_queried_term: queried_term,
            },
            ResultsAction::FetchFailure => ResultsState {
                is_loading: false,
                is_error: true,
                ..state
            },
            ResultsAction::RemoveItem { id } => {
                let mut items = state.items;
                items.retain(|item| item.id != id);
                ResultsState {
                    items,
                    is_loading: false,
                    is_error: false,
                    last_queried_term: state.last_queried_term,
                }
            }
        }
    }
}
