use std::env;

/// Application configuration pulled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the generation endpoint; absent means generation
    /// calls short-circuit to their placeholder text
    pub gemini_api_key: Option<String>,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        AppConfig {
            gemini_api_key,
            log_level,
        }
    }
}
