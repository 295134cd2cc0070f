use crate::config::Config;
use crate::error::{require_key, AssistantError, ProviderResult};
use crate::services::http::HttpTransport;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
struct WeatherResponse {
    name: Option<String>,
    main: MainReadings,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Clone, Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherInfo {
    pub city: String,
    pub temperature: f64,
    pub description: String,
    pub humidity: f64,
}

/// Current conditions from OpenWeatherMap
pub struct WeatherService {
    http: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    url: String,
}

impl WeatherService {
    pub fn new(http: Arc<dyn HttpTransport>, config: &Config) -> Self {
        Self {
            http,
            api_key: config.openweather_api_key.clone(),
            url: config.openweather_url.clone(),
        }
    }

    /// Fetches the current weather for a city.
    /// 404 means the city is unknown and is reported as a user error.
    pub async fn get_weather(&self, city: &str) -> Result<WeatherInfo, AssistantError> {
        let api_key = require_key(&self.api_key, "il meteo")?;

        let query = [
            ("q", city.to_string()),
            ("appid", api_key.to_string()),
            ("units", "metric".to_string()),
            ("lang", "it".to_string()),
        ];

        let response = self.http.get(&self.url, &query).await.map_err(|e| {
            log::warn!("Meteo: errore di connessione per '{}': {}", city, e);
            AssistantError::Provider(format!(
                "🤯 Ops! Errore di connessione o API per il meteo: {}",
                e
            ))
        })?;

        if response.status == 404 {
            return Err(AssistantError::User(format!("Città non trovata: {}.", city)));
        }
        if !response.is_success() {
            log::warn!("Meteo: HTTP {} per '{}'", response.status, city);
            return Err(AssistantError::Provider(format!(
                "🤯 Ops! Errore HTTP nel recupero del meteo: {}",
                response.status
            )));
        }

        let data: WeatherResponse = serde_json::from_str(&response.body).map_err(|e| {
            AssistantError::Provider(format!("🤯 Ops! Risposta meteo non valida: {}", e))
        })?;

        let description = data
            .weather
            .first()
            .map(|c| capitalize(&c.description))
            .unwrap_or_else(|| "Non disponibile".to_string());

        Ok(WeatherInfo {
            city: data
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| city.to_string()),
            temperature: data.main.temp,
            description,
            humidity: data.main.humidity,
        })
    }

    /// Fetches and formats the weather for display
    pub async fn format_weather_info(&self, city: &str) -> ProviderResult {
        let weather = self.get_weather(city).await?;
        Ok(format!(
            "☀️ Il tempo a {} è questo:\n   - Condizione: {}\n   - Temperatura: {:.1}°C\n   - Umidità: {}%",
            weather.city, weather.description, weather.temperature, weather.humidity
        ))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
