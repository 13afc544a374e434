use crate::search::SearchState;
use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;

use super::movie_card::MovieCard;

/// Placeholder blocks shown while a fetch is in flight.
const SKELETON_COUNT: usize = 6;

/// Movie search page: query form on top, then a skeleton grid, result grid,
/// empty notice, or failure banner depending on the search state.
#[component]
pub fn MovieSearch() -> Element {
    let search_ctx = use_context::<SearchContext>();
    let mut query = search_ctx.query;

    // Initial catalog fetch on mount.
    use_effect({
        let search_ctx = search_ctx.clone();
        move || {
            let mut search_ctx = search_ctx.clone();
            search_ctx.search_default();
        }
    });

    let state = search_ctx.state.read();
    let body = match &*state {
        SearchState::Loading => rsx! {
            div { class: "movie-grid",
                for i in 0..SKELETON_COUNT {
                    div { key: "{i}", class: "skeleton-card" }
                }
            }
        },
        SearchState::Failed { message, retryable } => rsx! {
            div { class: "search-error",
                p { "{message}" }
                if *retryable {
                    button {
                        class: "retry-button",
                        onclick: {
                            let mut search_ctx = search_ctx.clone();
                            move |_| search_ctx.retry()
                        },
                        "Retry"
                    }
                }
            }
        },
        SearchState::Ready { movies } if movies.is_empty() => rsx! {
            h3 { class: "empty-notice", "No movies found" }
        },
        SearchState::Ready { movies } => rsx! {
            div { class: "movie-grid",
                for movie in movies.iter() {
                    MovieCard { key: "{movie.id}", movie: movie.clone() }
                }
            }
        },
    };

    rsx! {
        div { class: "search-page",
            h1 { class: "search-heading", "Movie Search" }

            div { class: "search-form",
                input {
                    class: "search-input",
                    placeholder: "Search for a movie",
                    value: "{query}",
                    oninput: move |event: FormEvent| {
                        query.set(event.value());
                    },
                    onkeydown: {
                        let mut search_ctx = search_ctx.clone();
                        move |event: KeyboardEvent| {
                            if event.key() == Key::Enter {
                                let query = search_ctx.query.read().clone();
                                search_ctx.search_title(query);
                            }
                        }
                    }
                }
                button {
                    class: "search-button",
                    onclick: {
                        let mut search_ctx = search_ctx.clone();
                        move |_| {
                            let query = search_ctx.query.read().clone();
                            search_ctx.search_title(query);
                        }
                    },
                    "Search"
                }
            }

            {body}
        }
    }
}
