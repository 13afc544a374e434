use crate::config::Config;
use crate::omdb::models::MovieSummary;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum OmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("invalid API key")]
    InvalidApiKey,
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
    #[error("malformed catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// OMDb search response wrapper. `Search` is absent when the catalog has
/// nothing to report and `Error` then carries its reason ("Movie not found!"
/// and friends). Neither case is a failure on our side.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Search")]
    search: Option<Vec<SearchItem>>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Individual search result
#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Poster")]
    poster: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Rated")]
    rated: Option<String>,
}

#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    /// Build a client from explicit configuration. The API key is injected
    /// here once; nothing else in the crate reads it.
    pub fn new(config: &Config) -> Result<Self, OmdbError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Search movie titles. Results come back in catalog order, untouched.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        self.request(query, None).await
    }

    /// Search movie titles restricted to a release year. Only the initial
    /// catalog fetch uses this.
    pub async fn search_year(
        &self,
        query: &str,
        year: &str,
    ) -> Result<Vec<MovieSummary>, OmdbError> {
        self.request(query, Some(year)).await
    }

    async fn request(
        &self,
        query: &str,
        year: Option<&str>,
    ) -> Result<Vec<MovieSummary>, OmdbError> {
        if query.trim().is_empty() {
            return Err(OmdbError::InvalidInput("search query is empty".to_string()));
        }

        // The key is appended after logging so it never lands in the logs.
        let mut url = self.request_url(query, year);
        debug!("sending catalog request to {url}*****");
        url.push_str(&self.api_key);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            parse_search_body(&body)
        } else if status == StatusCode::UNAUTHORIZED {
            warn!("catalog rejected the API key");
            Err(OmdbError::InvalidApiKey)
        } else {
            warn!("catalog returned HTTP {status}");
            Err(OmdbError::Status(status))
        }
    }

    /// Request URL up to and including `apikey=`, with the key itself left
    /// off so the URL is safe to log and assert on.
    fn request_url(&self, query: &str, year: Option<&str>) -> String {
        let mut url = format!("{}?s={}", self.base_url, urlencoding::encode(query));
        if let Some(year) = year {
            url.push_str("&y=");
            url.push_str(&urlencoding::encode(year));
        }
        url.push_str("&apikey=");
        url
    }
}

/// Decode a catalog search payload into summaries. A missing `Search` list
/// or an upstream `Error` field means "no matches", which is an empty result
/// list rather than an error.
pub fn parse_search_body(body: &str) -> Result<Vec<MovieSummary>, OmdbError> {
    let response: SearchResponse = serde_json::from_str(body).map_err(|e| {
        warn!("undecodable catalog payload: {e}");
        OmdbError::Malformed(e)
    })?;

    if let Some(reason) = &response.error {
        debug!("catalog reported no results: {reason}");
    }

    Ok(response
        .search
        .unwrap_or_default()
        .into_iter()
        .map(|item| MovieSummary {
            id: item.imdb_id,
            title: item.title,
            poster_url: item.poster,
            year: item.year,
            rating: item.rated,
        })
        .collect())
}
