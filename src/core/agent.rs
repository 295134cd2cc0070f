use crate::config::Config;
use crate::core::command::{self, Command, Keyword};
use crate::error::{AssistantError, ProviderResult, UNEXPECTED_ERROR};
use crate::services::news::topic_label;
use crate::services::{HttpTransport, MovieService, NewsService, TimeZoneService, WeatherService};
use std::sync::Arc;

pub const HELP: &str = "Prova uno di questi comandi:\n\
    - news [Paese] [argomento]: cerca notizie. Es. 'news spagna calcio' o 'news usa'\n\
    - movie <titolo>: informazioni su un film. Es. 'movie interstellar'\n\
    - weather <città>: meteo attuale. Es. 'weather palermo'\n\
    - timezone <città>: ora locale e fuso orario. Es. 'timezone tokyo'\n\
    (vanno bene anche notizie, film, meteo, fuso)";

const NOT_UNDERSTOOD: &str = "🤔 Non ho capito bene... puoi ripetere il comando? \
    Ricorda di usare `news`, `movie`, `weather` o `timezone`!";

/// Routes parsed commands to the matching provider
pub struct DiGioAgent {
    default_country: String,
    news: NewsService,
    movies: MovieService,
    weather: WeatherService,
    timezone: TimeZoneService,
}

impl DiGioAgent {
    pub fn new(config: &Config, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            default_country: config.news_default_country.clone(),
            news: NewsService::new(http.clone(), config),
            movies: MovieService::new(http.clone(), config),
            weather: WeatherService::new(http.clone(), config),
            timezone: TimeZoneService::new(http, config),
        }
    }

    pub fn parse(&self, user_input: &str) -> Result<Command, AssistantError> {
        command::parse(user_input, &self.default_country)
    }

    /// Calls the provider for `command`
    pub async fn dispatch(&self, command: &Command) -> ProviderResult {
        log::info!("Comando {:?}: '{}'", command.keyword, command.argument);

        match command.keyword {
            Keyword::News => {
                let country = command
                    .country_hint
                    .as_deref()
                    .unwrap_or(self.default_country.as_str());
                self.news.format_news(&command.argument, country).await
            }
            Keyword::Movie => self.movies.format_movie_info(&command.argument).await,
            Keyword::Weather => self.weather.format_weather_info(&command.argument).await,
            Keyword::TimeZone => self.timezone.format_time_info(&command.argument).await,
            Keyword::Unrecognized => Ok(format!("{}\n\n{}", NOT_UNDERSTOOD, HELP)),
        }
    }

    /// Parses, dispatches and renders failures as messages
    pub async fn get_response(&self, user_input: &str) -> String {
        let result = match self.parse(user_input) {
            Ok(command) => self.dispatch(&command).await,
            Err(e) => Err(e),
        };
        render(result)
    }
}

/// Notice shown while a provider call is in flight
pub fn status_line(command: &Command) -> Option<String> {
    let text = match command.keyword {
        Keyword::News => format!(
            "Cerco notizie da {} su: {}...",
            command.country_hint.as_deref().unwrap_or_default().to_uppercase(),
            topic_label(&command.argument)
        ),
        Keyword::Movie => format!("Cerco dettagli su '{}'...", command.argument),
        Keyword::Weather => format!("Cerco il meteo per '{}'...", command.argument),
        Keyword::TimeZone => format!("Cerco l'ora locale di '{}'...", command.argument),
        Keyword::Unrecognized => return None,
    };
    Some(format!("🤖 DiGio: {}", text))
}

/// Runs one request in its own task; a panic is reported as UNEXPECTED_ERROR
pub async fn handle(digio: Arc<DiGioAgent>, input: String) -> String {
    let task = tokio::spawn(async move {
        if let Ok(command) = digio.parse(&input) {
            if let Some(status) = status_line(&command) {
                println!("{}", status);
            }
        }
        digio.get_response(&input).await
    });

    match task.await {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("Errore inaspettato: {}", e);
            UNEXPECTED_ERROR.to_string()
        }
    }
}

pub fn render(result: ProviderResult) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Richiesta fallita ({}): {}", e.kind(), e);
            e.to_string()
        }
    }
}
