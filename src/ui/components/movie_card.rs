use crate::omdb::MovieSummary;
use dioxus::prelude::*;

/// Individual movie card: poster (or a fallback block when the catalog has
/// no image), title, and year. Presentation only.
#[component]
pub fn MovieCard(movie: MovieSummary) -> Element {
    rsx! {
        div { class: "movie-card",
            if let Some(poster) = movie.poster() {
                img {
                    class: "movie-poster",
                    src: "{poster}",
                    alt: "Poster for {movie.title}"
                }
            } else {
                div { class: "movie-poster movie-poster-fallback", "No poster" }
            }
            div { class: "movie-meta",
                h3 { class: "movie-title", "{movie.title}" }
                span { class: "movie-year", "{movie.year}" }
            }
        }
    }
}
