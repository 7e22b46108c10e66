#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::{SearchResponse, SearchResult};

/// Message shown when a search succeeds but returns nothing. An empty
/// result set is presented exactly like an error, not as a distinct
/// empty state.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try a different query.";

/// Which of the mutually exclusive page panels is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Results,
    Error,
}

/// State for the search page: current phase, rendered results, and the
/// in-flight guard flag.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub phase: SearchPhase,
    /// True while a request is outstanding. Re-entrant triggers are
    /// dropped, not queued, so at most one request is in flight.
    pub searching: bool,
    pub results: Vec<SearchResult>,
    pub count: u64,
    pub error: String,
}

impl SearchState {
    /// Gate a submission attempt. Returns the trimmed query and moves
    /// to `Loading` if the attempt may proceed; `None` (and no state
    /// change) if a search is already in flight or the query is blank.
    pub fn try_begin(&mut self, raw_query: &str) -> Option<String> {
        if self.searching {
            return None;
        }
        let query = raw_query.trim();
        if query.is_empty() {
            return None;
        }

        self.searching = true;
        self.phase = SearchPhase::Loading;
        self.results.clear();
        self.count = 0;
        self.error.clear();
        Some(query.to_owned())
    }

    /// Apply a successful response. Empty result lists fall through to
    /// the error presentation with [`NO_RESULTS_MESSAGE`].
    ///
    /// Results keep server order; it encodes rank.
    pub fn apply_response(&mut self, response: SearchResponse) {
        self.searching = false;
        if response.results.is_empty() {
            self.phase = SearchPhase::Error;
            self.error = NO_RESULTS_MESSAGE.to_owned();
            return;
        }

        self.count = response.count;
        self.results = response.results;
        self.phase = SearchPhase::Results;
    }

    /// Apply a failed search. The page stays usable for another attempt.
    pub fn apply_error(&mut self, message: String) {
        self.searching = false;
        self.phase = SearchPhase::Error;
        self.error = message;
    }
}
