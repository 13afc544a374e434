pub mod client;
pub mod models;

pub use client::{parse_search_body, OmdbClient, OmdbError};
pub use models::{MovieSummary, POSTER_SENTINEL};
