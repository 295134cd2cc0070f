//! Error kinds surfaced to the user
//!
//! Every variant carries the message shown in place of data.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// API key unset or blank
    #[error("{0}")]
    Configuration(String),

    /// Well-formed request with no usable data (city, movie or news not found)
    #[error("{0}")]
    User(String),

    /// Transport failure, unexpected HTTP status or malformed response
    #[error("{0}")]
    Provider(String),

    /// Command missing its required argument
    #[error("{0}")]
    Parse(String),
}

impl AssistantError {
    pub fn kind(&self) -> &'static str {
        match self {
            AssistantError::Configuration(_) => "configuration",
            AssistantError::User(_) => "user",
            AssistantError::Provider(_) => "provider",
            AssistantError::Parse(_) => "parse",
        }
    }
}

/// Outcome of one provider call: display text or a typed failure
pub type ProviderResult = Result<String, AssistantError>;

/// Generic reply for failures nobody anticipated (a panicking request)
pub const UNEXPECTED_ERROR: &str = "Si è verificato un errore inaspettato in DiGio. Riprova!";

/// Returns the configured key, or a configuration error naming the provider
pub fn require_key<'a>(key: &'a Option<String>, provider: &str) -> Result<&'a str, AssistantError> {
    match key.as_deref().map(str::trim) {
        Some(k) if !k.is_empty() => Ok(k),
        _ => Err(AssistantError::Configuration(format!(
            "⚠️ Per {}, devi configurare la chiave API!",
            provider
        ))),
    }
}
