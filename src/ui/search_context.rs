use crate::config::Config;
use crate::omdb::OmdbClient;
use crate::search::{state_from_outcome, SearchRequest, SearchSequence, SearchState};
use dioxus::prelude::*;
use tracing::debug;

/// Shared search state: the query text, the tagged view state, and the
/// sequencing that makes rapid resubmissions last-submitted-wins.
#[derive(Clone)]
pub struct SearchContext {
    client: OmdbClient,
    default_request: SearchRequest,
    pub query: Signal<String>,
    pub state: Signal<SearchState>,
    last_request: Signal<Option<SearchRequest>>,
    seq: Signal<SearchSequence>,
}

impl SearchContext {
    /// Fetch with the configured default query and year filter. Runs once
    /// on mount.
    pub fn search_default(&mut self) {
        let request = self.default_request.clone();
        self.dispatch(request);
    }

    /// Fetch with a user-submitted title query.
    pub fn search_title(&mut self, query: String) {
        self.dispatch(SearchRequest::Title(query));
    }

    /// Re-dispatch the last attempted query after a retryable failure.
    pub fn retry(&mut self) {
        let last = self.last_request.read().clone();
        if let Some(request) = last {
            self.dispatch(request);
        }
    }

    fn dispatch(&mut self, request: SearchRequest) {
        if request.query().trim().is_empty() {
            debug!("ignoring blank search submission");
            return;
        }

        let ticket = self.seq.write().begin();
        self.last_request.set(Some(request.clone()));
        self.state.set(SearchState::Loading);

        let client = self.client.clone();
        let seq = self.seq;
        let mut state = self.state;

        spawn(async move {
            let outcome = match &request {
                SearchRequest::Title(query) => client.search(query).await,
                SearchRequest::TitleYear { query, year } => client.search_year(query, year).await,
            };

            // A newer dispatch supersedes this one; drop the stale outcome
            // instead of overwriting the latest query's state.
            if !seq.peek().is_current(ticket) {
                debug!("dropping stale response for ticket {ticket}");
                return;
            }

            state.set(state_from_outcome(outcome));
        });
    }
}

/// Provider component that makes the search context available to the whole
/// tree below it.
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let client = use_context::<OmdbClient>();
    let config = use_context::<Config>();

    let search_ctx = SearchContext {
        client,
        default_request: SearchRequest::TitleYear {
            query: config.default_query.clone(),
            year: config.default_year.clone(),
        },
        query: use_signal(String::new),
        state: use_signal(|| SearchState::Loading),
        last_request: use_signal(|| None),
        seq: use_signal(SearchSequence::new),
    };

    use_context_provider(move || search_ctx);

    rsx! {
        {children}
    }
}
