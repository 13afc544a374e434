//! Search state machine, kept free of UI types so its semantics are
//! testable without a running app.

use crate::omdb::{MovieSummary, OmdbError};
use tracing::warn;

/// A dispatched catalog query. The year-filtered variant exists for the
/// initial fetch; user submissions are plain title queries.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    Title(String),
    TitleYear { query: String, year: String },
}

impl SearchRequest {
    pub fn query(&self) -> &str {
        match self {
            SearchRequest::Title(query) => query,
            SearchRequest::TitleYear { query, .. } => query,
        }
    }
}

/// Observable view state. `Ready` with an empty list is the "no movies
/// found" branch; "loading with stale results" is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Loading,
    Ready { movies: Vec<MovieSummary> },
    Failed { message: String, retryable: bool },
}

/// Monotonic ticket counter for in-flight fetches. Every dispatch takes a
/// ticket; a resolution whose ticket is no longer current is discarded, so
/// the displayed results always come from the last submitted query rather
/// than the last response to arrive.
#[derive(Debug, Default)]
pub struct SearchSequence {
    dispatched: u64,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> u64 {
        self.dispatched += 1;
        self.dispatched
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.dispatched
    }
}

/// Map a settled fetch onto the next view state. Every error variant ends
/// `Loading`; the UI is never left stuck on a failed fetch.
pub fn state_from_outcome(outcome: Result<Vec<MovieSummary>, OmdbError>) -> SearchState {
    match outcome {
        Ok(movies) => SearchState::Ready { movies },
        Err(err) => {
            warn!("search failed: {err}");
            let (message, retryable) = match &err {
                OmdbError::Request(_) => (
                    "Could not reach the movie catalog. Check your connection and try again.",
                    true,
                ),
                OmdbError::Status(_) => ("The movie catalog is having trouble. Try again.", true),
                OmdbError::InvalidApiKey => {
                    ("The movie catalog rejected the configured API key.", false)
                }
                OmdbError::Malformed(_) => {
                    ("The movie catalog returned something unexpected.", false)
                }
                OmdbError::InvalidInput(_) => ("Enter a movie title to search for.", false),
            };
            SearchState::Failed {
                message: message.to_string(),
                retryable,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn summary(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: title.to_string(),
            poster_url: "N/A".to_string(),
            year: "2024".to_string(),
            rating: None,
        }
    }

    fn malformed() -> OmdbError {
        OmdbError::Malformed(serde_json::from_str::<serde_json::Value>("{").unwrap_err())
    }

    #[test]
    fn tickets_are_monotonic_and_only_latest_is_current() {
        let mut seq = SearchSequence::new();
        let first = seq.begin();
        let second = seq.begin();

        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn stale_resolution_is_discarded() {
        // Submit "a", then "b" while "a" is still in flight. "b" resolves
        // first and is applied; "a" resolves last, fails the ticket check,
        // and the state keeps "b"'s results.
        let mut seq = SearchSequence::new();
        let ticket_a = seq.begin();
        let ticket_b = seq.begin();

        let mut state = SearchState::Loading;
        let resolutions = [
            (ticket_b, Ok(vec![summary("tt2", "B")])),
            (ticket_a, Ok(vec![summary("tt1", "A")])),
        ];
        for (ticket, outcome) in resolutions {
            if seq.is_current(ticket) {
                state = state_from_outcome(outcome);
            }
        }

        assert_eq!(
            state,
            SearchState::Ready {
                movies: vec![summary("tt2", "B")]
            }
        );
    }

    #[test]
    fn success_becomes_ready() {
        let state = state_from_outcome(Ok(vec![summary("tt1", "A")]));
        match state {
            SearchState::Ready { movies } => assert_eq!(movies[0].title, "A"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn empty_results_are_ready_not_failed() {
        assert_eq!(
            state_from_outcome(Ok(Vec::new())),
            SearchState::Ready { movies: Vec::new() }
        );
    }

    #[test]
    fn http_errors_end_loading_and_are_retryable() {
        let state = state_from_outcome(Err(OmdbError::Status(StatusCode::SERVICE_UNAVAILABLE)));
        match state {
            SearchState::Failed { retryable, .. } => assert!(retryable),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn malformed_payloads_end_loading_without_retry() {
        let state = state_from_outcome(Err(malformed()));
        match state {
            SearchState::Failed { retryable, .. } => assert!(!retryable),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn rejected_api_key_is_not_retryable() {
        let state = state_from_outcome(Err(OmdbError::InvalidApiKey));
        match state {
            SearchState::Failed {
                message, retryable, ..
            } => {
                assert!(!retryable);
                assert!(message.contains("API key"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
