use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{EventGroup, PerformanceStat, TrainingPhase};
use crate::services::prompts;

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for both operations
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

// Placeholder texts shown when an operation cannot produce a plan. Callers
// never see an error; they always receive displayable text.
const PLAN_MISSING_KEY_TEXT: &str =
    "Error: API Key missing. Set GEMINI_API_KEY in your environment.";
const PLAN_UNAVAILABLE_TEXT: &str =
    "Error connecting to AI Coach assistant. Please check API Key.";
const ANALYSIS_MISSING_KEY_TEXT: &str = "API Key missing.";
const ANALYSIS_UNAVAILABLE_TEXT: &str = "AI Analysis temporarily unavailable.";

/// Result of a generation call.
///
/// The condition stays tagged until the UI boundary so callers can refuse to
/// persist placeholder text; `plan_text`/`analysis_text` flatten to the
/// operation's display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The remote service produced text
    Generated(String),
    /// No credential configured; no transport attempt was made
    MissingApiKey,
    /// Transport or remote failure, caught at the client boundary
    Unavailable,
}

impl GenerationOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, GenerationOutcome::Generated(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Generated(text) => Some(text),
            _ => None,
        }
    }

    /// Display text for the workout-plan panel
    pub fn plan_text(&self) -> &str {
        match self {
            GenerationOutcome::Generated(text) => text,
            GenerationOutcome::MissingApiKey => PLAN_MISSING_KEY_TEXT,
            GenerationOutcome::Unavailable => PLAN_UNAVAILABLE_TEXT,
        }
    }

    /// Display text for the performance-insight panel
    pub fn analysis_text(&self) -> &str {
        match self {
            GenerationOutcome::Generated(text) => text,
            GenerationOutcome::MissingApiKey => ANALYSIS_MISSING_KEY_TEXT,
            GenerationOutcome::Unavailable => ANALYSIS_UNAVAILABLE_TEXT,
        }
    }
}

/// Internal failure taxonomy; never crosses the service boundary
#[derive(Error, Debug)]
enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No content in response")]
    Empty,
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

// ============================================================================
// Service
// ============================================================================

/// Client for the remote text-generation endpoint.
///
/// Both operations follow the same contract: they always resolve to a
/// `GenerationOutcome` and never raise an error to the caller. There is no
/// retry, no streaming and no cancellation; at most one request is in flight
/// at a time, enforced by the calling store.
#[derive(Debug, Clone)]
pub struct GenerationService {
    api_key: Option<String>,
    client: Client,
    base_url: String,
    model: String,
}

impl GenerationService {
    /// Create a client; `api_key` may be absent, in which case every call
    /// short-circuits to `MissingApiKey`.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            client: Client::new(),
            base_url: API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Point the client at a different endpoint (tests)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model id
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generate a daily workout plan for one training group
    pub async fn generate_workout_plan(
        &self,
        group: EventGroup,
        phase: TrainingPhase,
        focus: &str,
    ) -> GenerationOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("workout plan requested without a configured API key");
            return GenerationOutcome::MissingApiKey;
        };

        let prompt = prompts::workout_plan_prompt(group, phase, focus);
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: prompts::PLAN_SYSTEM_INSTRUCTION.to_string(),
                }],
            }),
            generation_config: Some(GenerationConfig {
                temperature: Some(prompts::PLAN_TEMPERATURE),
            }),
        };

        match self.generate(api_key, &request).await {
            Ok(text) => GenerationOutcome::Generated(text),
            Err(e) => {
                warn!(error = %e, "workout plan generation failed");
                GenerationOutcome::Unavailable
            }
        }
    }

    /// Summarize the trend in a recorded performance series
    pub async fn analyze_performance(
        &self,
        athlete_name: &str,
        event_name: &str,
        series: &[PerformanceStat],
    ) -> GenerationOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("performance analysis requested without a configured API key");
            return GenerationOutcome::MissingApiKey;
        };

        let prompt = prompts::performance_analysis_prompt(athlete_name, event_name, series);
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: None,
            generation_config: None,
        };

        match self.generate(api_key, &request).await {
            Ok(text) => GenerationOutcome::Generated(text),
            Err(e) => {
                warn!(error = %e, "performance analysis failed");
                GenerationOutcome::Unavailable
            }
        }
    }

    fn build_url(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={api_key}",
            self.base_url, self.model
        )
    }

    async fn generate(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<String, GenerationError> {
        let url = self.build_url(api_key);

        debug!(model = %self.model, "sending generation request");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GenerateContentResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .map_or_else(|| body.clone(), |e| e.message);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
            .ok_or(GenerationError::Empty)?;

        if text.is_empty() {
            return Err(GenerationError::Empty);
        }

        Ok(text)
    }
}
