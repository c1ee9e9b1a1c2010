use crate::mvi::Reducer;
use crate::search::{
    check_input, filter_items, is_valid_search_term, FetchOrchestrator, InputHint,
    RequestBuilder, ResultItem, ResultsAction, ResultsReducer, ResultsState, SearchTermState,
};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    search: SearchTermState,
    builder: RequestBuilder,
    /// `None` when running offline.
    fetcher: Option<FetchOrchestrator>,
    /// Result list state (MVI pattern).
    results: ResultsState,
    /// Index into `visible_items()`.
    selection: usize,
}

impl App {
    pub fn new(
        search: SearchTermState,
        builder: RequestBuilder,
        fetcher: Option<FetchOrchestrator>,
        results: ResultsState,
    ) -> Self {
        Self {
            should_quit: false,
            search,
            builder,
            fetcher,
            results,
            selection: 0,
        }
    }

    /// Issues the startup search for the persisted (or default) term.
    pub fn start(&mut self) {
        tracing::info!(term = self.search.term(), "Starting initial search");
        self.submit();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn term(&self) -> &str {
        self.search.term()
    }

    pub fn results(&self) -> &ResultsState {
        &self.results
    }

    pub fn is_offline(&self) -> bool {
        self.fetcher.is_none()
    }

    /// Items shown in the list: the result list filtered by the current term.
    pub fn visible_items(&self) -> Vec<&ResultItem> {
        filter_items(&self.results.items, self.search.term())
    }

    pub fn input_hint(&self) -> Option<InputHint> {
        check_input(self.search.term()).err()
    }

    pub fn can_submit(&self) -> bool {
        is_valid_search_term(self.search.term())
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn push_char(&mut self, ch: char) {
        let mut next = self.search.term().to_string();
        next.push(ch);
        self.update_term(&next);
    }

    pub fn pop_char(&mut self) {
        let mut next = self.search.term().to_string();
        if next.pop().is_some() {
            self.update_term(&next);
        }
    }

    pub fn clear_term(&mut self) {
        self.update_term("");
    }

    fn update_term(&mut self, candidate: &str) {
        self.search.set_term(candidate);
        self.clamp_selection();
    }

    /// Builds a request for the current term and hands it to the fetcher.
    ///
    /// Returns whether a request was issued.
    pub fn submit(&mut self) -> bool {
        let Some(fetcher) = &self.fetcher else {
            tracing::info!("Offline mode; search not sent");
            return false;
        };
        fetcher.trigger(self.builder.build(self.search.term()))
    }

    /// Applies a result action delivered through the event queue.
    pub fn apply(&mut self, action: ResultsAction) {
        dispatch_mvi!(self, results, ResultsReducer, action);
        self.clamp_selection();
    }

    pub fn remove_selected(&mut self) {
        let Some(id) = self
            .visible_items()
            .get(self.selection)
            .map(|item| item.id.clone())
        else {
            return;
        };
        tracing::info!(%id, "Removing item");
        self.apply(ResultsAction::RemoveItem { id });
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_items().len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        self.selection = self.selection.saturating_add_signed(delta).min(len - 1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_items().len();
        self.selection = self.selection.min(len.saturating_sub(1));
    }
}
