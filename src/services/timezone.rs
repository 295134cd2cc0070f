use crate::config::Config;
use crate::error::{require_key, AssistantError, ProviderResult};
use crate::services::http::HttpTransport;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeZoneResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    formatted: String,
    #[serde(default)]
    zone_name: String,
    #[serde(default)]
    gmt_offset: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityTime {
    pub time: String,
    pub zone_name: String,
    pub gmt_offset: i64,
}

/// Local time of a city from TimeZoneDB
pub struct TimeZoneService {
    http: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    url: String,
}

impl TimeZoneService {
    pub fn new(http: Arc<dyn HttpTransport>, config: &Config) -> Self {
        Self {
            http,
            api_key: config.timezonedb_api_key.clone(),
            url: config.timezonedb_url.clone(),
        }
    }

    pub async fn get_time(&self, city: &str) -> Result<CityTime, AssistantError> {
        let api_key = require_key(&self.api_key, "il fuso orario")?;

        let query = [
            ("key", api_key.to_string()),
            ("format", "json".to_string()),
            ("by", "city".to_string()),
            ("city", city.to_string()),
        ];

        let response = self.http.get(&self.url, &query).await.map_err(|e| {
            log::warn!("Fuso orario: errore di connessione per '{}': {}", city, e);
            AssistantError::Provider(format!(
                "🤯 Ops! Errore di connessione o API per il fuso orario: {}",
                e
            ))
        })?;

        if !response.is_success() {
            return Err(AssistantError::Provider(format!(
                "🤯 Ops! Errore HTTP nel recupero del fuso orario: {}",
                response.status
            )));
        }

        let data: TimeZoneResponse = serde_json::from_str(&response.body).map_err(|e| {
            AssistantError::Provider(format!("🤯 Ops! Risposta fuso orario non valida: {}", e))
        })?;

        // TimeZoneDB answers 200 with status FAILED for unknown cities
        if !data.status.eq_ignore_ascii_case("OK") || !data.message.trim().is_empty() {
            let detail = if data.message.trim().is_empty() {
                data.status.clone()
            } else {
                data.message.clone()
            };
            return Err(AssistantError::User(format!(
                "🕰️ Fuso orario non trovato per la città {}: {}",
                city, detail
            )));
        }

        Ok(CityTime {
            time: time_of_day(&data.formatted).to_string(),
            zone_name: data.zone_name,
            gmt_offset: data.gmt_offset,
        })
    }

    pub async fn format_time_info(&self, city: &str) -> ProviderResult {
        let info = self.get_time(city).await?;
        Ok(format!(
            "🕰️ A {} sono le {}\n   - Fuso orario: {} ({})",
            city,
            info.time,
            info.zone_name,
            format_gmt_offset(info.gmt_offset)
        ))
    }
}

/// "2026-10-16 14:03:22" -> "14:03:22"
fn time_of_day(formatted: &str) -> &str {
    formatted.split(' ').nth(1).unwrap_or(formatted)
}

/// Signed seconds east of UTC as whole hours, e.g. 7200 -> "GMT+2".
/// Half-hour zones round to the nearest even hour: 19800 (India) -> "GMT+6".
pub fn format_gmt_offset(seconds: i64) -> String {
    format!("GMT{:+.0}", seconds as f64 / 3600.0)
}
