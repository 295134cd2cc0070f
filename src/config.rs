use std::env;
use std::time::Duration;

pub const DEFAULT_GNEWS_URL: &str = "https://gnews.io/api/v4/search";
pub const DEFAULT_GNEWS_TOP_HEADLINES_URL: &str = "https://gnews.io/api/v4/top-headlines";
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_TIMEZONEDB_URL: &str = "https://api.timezonedb.com/v2.1/get-time-zone";

#[derive(Debug, Clone)]
pub struct Config {
    pub assistant_name: String,
    pub gnews_api_key: Option<String>,
    pub tmdb_api_key: Option<String>,
    pub openweather_api_key: Option<String>,
    pub timezonedb_api_key: Option<String>,
    pub gnews_url: String,
    pub gnews_top_headlines_url: String,
    pub tmdb_base_url: String,
    pub openweather_url: String,
    pub timezonedb_url: String,
    pub news_max_articles: usize,
    pub news_default_country: String,
    pub news_sources: Vec<String>,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();

        let news_max_articles = env::var("NEWS_MAX_ARTICLES")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(5);

        let news_default_country = env::var("NEWS_DEFAULT_COUNTRY")
            .ok()
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "it".to_string());

        // Comma-separated GNews source ids, empty entries dropped
        let news_sources = env::var("NEWS_SOURCES")
            .map(|v| parse_list(&v))
            .unwrap_or_default();

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(10);

        Self {
            assistant_name: "DiGio".to_string(),
            gnews_api_key: env::var("GNEWS_API_KEY").ok(),
            tmdb_api_key: env::var("TMDB_API_KEY").ok(),
            openweather_api_key: env::var("OPENWEATHER_API_KEY").ok(),
            timezonedb_api_key: env::var("TIMEZONEDB_API_KEY").ok(),
            gnews_url: env_or("GNEWS_URL", DEFAULT_GNEWS_URL),
            gnews_top_headlines_url: env_or("GNEWS_TOP_HEADLINES_URL", DEFAULT_GNEWS_TOP_HEADLINES_URL),
            tmdb_base_url: env_or("TMDB_BASE_URL", DEFAULT_TMDB_BASE_URL),
            openweather_url: env_or("OPENWEATHER_URL", DEFAULT_OPENWEATHER_URL),
            timezonedb_url: env_or("TIMEZONEDB_URL", DEFAULT_TIMEZONEDB_URL),
            news_max_articles,
            news_default_country,
            news_sources,
            http_timeout: Duration::from_secs(http_timeout_secs),
        }
    }
}

impl Config {
    /// Configuration with no keys and the public endpoints, independent of the environment
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            assistant_name: "DiGio".to_string(),
            gnews_api_key: None,
            tmdb_api_key: None,
            openweather_api_key: None,
            timezonedb_api_key: None,
            gnews_url: DEFAULT_GNEWS_URL.to_string(),
            gnews_top_headlines_url: DEFAULT_GNEWS_TOP_HEADLINES_URL.to_string(),
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            openweather_url: DEFAULT_OPENWEATHER_URL.to_string(),
            timezonedb_url: DEFAULT_TIMEZONEDB_URL.to_string(),
            news_max_articles: 5,
            news_default_country: "it".to_string(),
            news_sources: Vec::new(),
            http_timeout: Duration::from_secs(10),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
