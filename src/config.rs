use thiserror::Error;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_QUERY: &str = "movie";
pub const DEFAULT_YEAR: &str = "2024";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("OMDB_API_KEY is not set")]
    MissingApiKey,
}

/// Application configuration, read once at startup and injected into the
/// catalog client. In debug builds a `.env` file is loaded first.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// Query used for the initial fetch on launch.
    pub default_query: String,
    /// Year filter applied to the initial fetch only.
    pub default_year: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            info!("Config: loaded .env file");
        }

        let config = Self::resolve(
            env_var("OMDB_API_KEY"),
            env_var("OMDB_BASE_URL"),
            env_var("OMDB_DEFAULT_QUERY"),
            env_var("OMDB_DEFAULT_YEAR"),
            env_var("OMDB_TIMEOUT_SECS"),
        )?;

        info!(
            "Config: catalog {} (default query '{}', year {})",
            config.base_url, config.default_query, config.default_year
        );

        Ok(config)
    }

    fn resolve(
        api_key: Option<String>,
        base_url: Option<String>,
        default_query: Option<String>,
        default_year: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let timeout_secs = timeout_secs
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            default_query: default_query.unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            default_year: default_year.unwrap_or_else(|| DEFAULT_YEAR.to_string()),
            timeout_secs,
        })
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_an_error() {
        assert!(matches!(
            Config::resolve(None, None, None, None, None),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            Config::resolve(Some("  ".to_string()), None, None, None, None),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::resolve(Some("key".to_string()), None, None, None, None).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.default_query, "movie");
        assert_eq!(config.default_year, "2024");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let config = Config::resolve(
            Some("key".to_string()),
            Some("http://omdb.test/".to_string()),
            Some("western".to_string()),
            Some("1969".to_string()),
            Some("3".to_string()),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://omdb.test/");
        assert_eq!(config.default_query, "western");
        assert_eq!(config.default_year, "1969");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn unparseable_timeout_falls_back() {
        let config = Config::resolve(
            Some("key".to_string()),
            None,
            None,
            None,
            Some("soon".to_string()),
        )
        .unwrap();

        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
