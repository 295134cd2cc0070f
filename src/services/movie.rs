use crate::config::Config;
use crate::error::{require_key, AssistantError, ProviderResult};
use crate::services::http::{HttpResponse, HttpTransport};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

const LANGUAGE: &str = "it-IT";
const MAX_CAST: usize = 3;

#[derive(Debug, Clone, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
struct SearchHit {
    id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub credits: Option<Credits>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub name: String,
}

/// TMDB title search followed by a detail fetch with credits
pub struct MovieService {
    http: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    base_url: String,
}

impl MovieService {
    pub fn new(http: Arc<dyn HttpTransport>, config: &Config) -> Self {
        Self {
            http,
            api_key: config.tmdb_api_key.clone(),
            base_url: config.tmdb_base_url.clone(),
        }
    }

    /// Looks up the best match for `title`. No detail request is made when the search is empty.
    pub async fn get_movie(&self, title: &str) -> Result<MovieDetails, AssistantError> {
        let api_key = require_key(&self.api_key, "i film")?;

        let search_url = format!("{}/search/movie", self.base_url);
        let search_query = [
            ("api_key", api_key.to_string()),
            ("query", title.to_string()),
            ("language", LANGUAGE.to_string()),
        ];
        let search: SearchResponse = self.fetch_json(&search_url, &search_query).await?;

        let movie_id = match search.results.first() {
            Some(hit) => hit.id,
            None => {
                return Err(AssistantError::User(format!(
                    "🎬 Mi dispiace, non ho trovato un film con il titolo: {}.",
                    title
                )))
            }
        };
        log::info!("Film: '{}' -> id {}", title, movie_id);

        let details_url = format!("{}/movie/{}", self.base_url, movie_id);
        let details_query = [
            ("api_key", api_key.to_string()),
            ("language", LANGUAGE.to_string()),
            ("append_to_response", "credits".to_string()),
        ];
        self.fetch_json(&details_url, &details_query).await
    }

    /// Fetches and formats title, year, plot and main cast
    pub async fn format_movie_info(&self, title: &str) -> ProviderResult {
        let movie = self.get_movie(title).await?;
        Ok(format_details(&movie))
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, AssistantError> {
        let response: HttpResponse = self.http.get(url, query).await.map_err(|e| {
            log::warn!("Film: errore di connessione: {}", e);
            provider_error(e)
        })?;

        if !response.is_success() {
            log::warn!("Film: HTTP {} da {}", response.status, url);
            return Err(provider_error(format!("HTTP {}", response.status)));
        }

        serde_json::from_str(&response.body).map_err(provider_error)
    }
}

fn provider_error(cause: impl std::fmt::Display) -> AssistantError {
    AssistantError::Provider(format!(
        "🤯 Ops! Errore di connessione o API per i film: {}",
        cause
    ))
}

fn format_details(movie: &MovieDetails) -> String {
    let title = non_blank(&movie.title).unwrap_or("N/A");
    let year: String = match non_blank(&movie.release_date) {
        Some(date) => date.chars().take(4).collect(),
        None => "N/A".to_string(),
    };
    let overview = non_blank(&movie.overview).unwrap_or("Trama non disponibile");

    let cast: Vec<&str> = movie
        .credits
        .as_ref()
        .map(|c| c.cast.iter().take(MAX_CAST).map(|m| m.name.as_str()).collect())
        .unwrap_or_default();
    let cast = if cast.is_empty() {
        "Non disponibile".to_string()
    } else {
        cast.join(", ")
    };

    format!(
        "✨ {} ({})\n   - Trama: {}\n   - Cast principale: {}",
        title, year, overview, cast
    )
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::mock::MockTransport;

    const SEARCH_HIT: &str = r#"{"page": 1, "results": [{"id": 157336, "title": "Interstellar"}, {"id": 301959}]}"#;
    const DETAILS: &str = r#"{
        "title": "Interstellar",
        "release_date": "2014-11-05",
        "overview": "Un gruppo di esploratori viaggia attraverso un wormhole.",
        "credits": {"cast": [
            {"name": "Matthew McConaughey"},
            {"name": "Anne Hathaway"},
            {"name": "Jessica Chastain"},
            {"name": "Michael Caine"}
        ]}
    }"#;

    fn service(mock: &Arc<MockTransport>) -> MovieService {
        let mut config = Config::empty();
        config.tmdb_api_key = Some("tmdb-key".to_string());
        config.tmdb_base_url = "http://tmdb.test/3".to_string();
        MovieService::new(mock.clone(), &config)
    }

    #[tokio::test]
    async fn search_then_details() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(200, SEARCH_HIT).respond(200, DETAILS);

        let text = service(&mock).format_movie_info("interstellar").await.unwrap();
        assert_eq!(
            text,
            "✨ Interstellar (2014)\n   - Trama: Un gruppo di esploratori viaggia attraverso un wormhole.\n   - Cast principale: Matthew McConaughey, Anne Hathaway, Jessica Chastain"
        );

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "http://tmdb.test/3/search/movie");
        assert_eq!(calls[1].0, "http://tmdb.test/3/movie/157336");
        assert_eq!(mock.param(0, "query").as_deref(), Some("interstellar"));
        assert_eq!(mock.param(0, "language").as_deref(), Some("it-IT"));
        assert_eq!(mock.param(1, "append_to_response").as_deref(), Some("credits"));
    }

    #[tokio::test]
    async fn empty_search_is_a_user_error_without_detail_call() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(200, r#"{"page": 1, "results": []}"#);

        let result = service(&mock).format_movie_info("zzzz qqqq").await;
        assert_eq!(
            result,
            Err(AssistantError::User(
                "🎬 Mi dispiace, non ho trovato un film con il titolo: zzzz qqqq.".to_string()
            ))
        );
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn failure_at_either_call_is_a_provider_error() {
        let mock = Arc::new(MockTransport::new());
        mock.fail("dns error");
        assert!(matches!(
            service(&mock).format_movie_info("alien").await,
            Err(AssistantError::Provider(_))
        ));

        let mock = Arc::new(MockTransport::new());
        mock.respond(200, SEARCH_HIT).respond(503, "unavailable");
        assert!(matches!(
            service(&mock).format_movie_info("alien").await,
            Err(AssistantError::Provider(_))
        ));
    }

    #[tokio::test]
    async fn missing_key_skips_the_request() {
        let mock = Arc::new(MockTransport::new());
        let movies = MovieService::new(mock.clone(), &Config::empty());

        assert!(matches!(
            movies.format_movie_info("alien").await,
            Err(AssistantError::Configuration(_))
        ));
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let movie: MovieDetails = serde_json::from_str(r#"{"title": "Senza dati", "overview": ""}"#).unwrap();
        assert_eq!(
            format_details(&movie),
            "✨ Senza dati (N/A)\n   - Trama: Trama non disponibile\n   - Cast principale: Non disponibile"
        );
    }
}
