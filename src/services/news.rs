use crate::config::Config;
use crate::core::countries;
use crate::error::{require_key, AssistantError, ProviderResult};
use crate::services::http::HttpTransport;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub title: String,
    pub source: Source,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    pub name: String,
}

/// GNews article search
pub struct NewsService {
    http: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    url: String,
    top_headlines_url: String,
    max_articles: usize,
    sources: Vec<String>,
}

impl NewsService {
    pub fn new(http: Arc<dyn HttpTransport>, config: &Config) -> Self {
        Self {
            http,
            api_key: config.gnews_api_key.clone(),
            url: config.gnews_url.clone(),
            top_headlines_url: config.gnews_top_headlines_url.clone(),
            max_articles: config.news_max_articles,
            sources: config.news_sources.clone(),
        }
    }

    /// Searches articles about `query` in `country`. An empty query asks for top headlines.
    pub async fn get_articles(&self, query: &str, country: &str) -> Result<Vec<Article>, AssistantError> {
        let api_key = require_key(&self.api_key, "le notizie")?;
        let country = country.to_lowercase();

        let query = query.trim();

        // /search requires q; without a topic ask for the headlines instead
        let (url, mut params) = if query.is_empty() {
            (&self.top_headlines_url, Vec::new())
        } else {
            (&self.url, vec![("q", query.to_string())])
        };
        params.extend([
            ("lang", countries::language_for(&country).to_string()),
            ("country", country.clone()),
            ("max", self.max_articles.to_string()),
            ("apikey", api_key.to_string()),
        ]);
        if !self.sources.is_empty() {
            params.push(("sources", self.sources.join(",")));
        }

        let response = self.http.get(url, &params).await.map_err(|e| {
            log::warn!("Notizie: errore di connessione: {}", e);
            AssistantError::Provider(format!(
                "🤯 Ops! Errore di connessione o API per le notizie: {}",
                e
            ))
        })?;

        if !response.is_success() {
            log::warn!("Notizie: HTTP {} ({})", response.status, response.body);
            return Err(AssistantError::Provider(format!(
                "🤯 Ops! Errore di connessione o API per le notizie: HTTP {}",
                response.status
            )));
        }

        let data: SearchResponse = serde_json::from_str(&response.body).map_err(|e| {
            AssistantError::Provider(format!("🤯 Ops! Risposta notizie non valida: {}", e))
        })?;

        let mut articles = data.articles;
        articles.truncate(self.max_articles);
        log::info!("Notizie: {} articoli per '{}' ({})", articles.len(), query, country);
        Ok(articles)
    }

    /// Fetches and formats articles, one bullet per article
    pub async fn format_news(&self, query: &str, country: &str) -> ProviderResult {
        let articles = self.get_articles(query, country).await?;
        let country = country.to_uppercase();

        if articles.is_empty() {
            return Err(AssistantError::User(format!(
                "😔 Oh no! Non ho trovato notizie da {} per: {}",
                country,
                topic_label(query)
            )));
        }

        let bullets: Vec<String> = articles
            .iter()
            .map(|a| {
                format!(
                    "• {} (Fonte: {})\n  Leggi l'articolo originale: {}",
                    a.title, a.source.name, a.url
                )
            })
            .collect();

        Ok(format!(
            "📰 Certo! Ho trovato queste chicche da {}:\n\n{}",
            country,
            bullets.join("\n")
        ))
    }
}

/// How a news query is described to the user
pub fn topic_label(query: &str) -> &str {
    if query.trim().is_empty() {
        "i titoli principali"
    } else {
        query
    }
}
