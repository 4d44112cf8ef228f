//! Client for the Gemini generative-language REST API.
//!
//! Two call shapes: free-form travel chat (with best-effort search
//! grounding) and a structured booking analysis constrained by a JSON
//! response schema. The client is cheap to clone and shared through
//! application state.

use serde_json::json;
use tracing::{debug, warn};

use crate::{
    error::advisor::AdvisorError,
    model::{
        advisor::{
            BookingAnalysisDto, Content, GenerateContentRequest, GenerateContentResponse,
            GenerationConfig,
        },
        booking::Booking,
    },
};

const GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Canned reply served when the chat provider is unreachable or empty.
pub const CHAT_FALLBACK: &str =
    "Sorry, the travel assistant is unavailable right now. Please try again later.";

const CHAT_SYSTEM_INSTRUCTION: &str = "You are a friendly and knowledgeable travel assistant for \
     a hotel booking service. Answer questions about destinations, hotels, and trip planning. \
     Keep answers concise and practical.";

/// Client for the advisory provider.
#[derive(Clone)]
pub struct AdvisorClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AdvisorClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different endpoint, used by tests.
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Free-form travel chat.
    ///
    /// Search grounding is requested but is advisory only; the provider may
    /// ignore it. Errors are returned to the caller, which decides whether
    /// to degrade gracefully.
    pub async fn chat(&self, prompt: &str) -> Result<String, AdvisorError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            system_instruction: Some(Content::text(CHAT_SYSTEM_INSTRUCTION)),
            tools: vec![json!({ "google_search": {} })],
            generation_config: None,
        };

        let response = self.generate(&request).await?;

        first_candidate_text(&response).ok_or(AdvisorError::EmptyResponse)
    }

    /// Structured analysis of a booking.
    ///
    /// The response is constrained to a JSON schema matching
    /// [`BookingAnalysisDto`] and parsed before anything reaches the caller.
    pub async fn analyze(&self, booking: &Booking) -> Result<BookingAnalysisDto, AdvisorError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(&analysis_prompt(booking))],
            system_instruction: None,
            tools: Vec::new(),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Some(analysis_response_schema()),
            }),
        };

        let response = self.generate(&request).await?;

        let text = first_candidate_text(&response).ok_or(AdvisorError::EmptyResponse)?;
        let analysis = serde_json::from_str(&text)?;

        Ok(analysis)
    }

    /// Issues one `generateContent` call against the configured model.
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AdvisorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, self.api_key
        );

        debug!("calling advisory provider model {}", GEMINI_MODEL);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                warn!("advisory provider returned an error status: {}", e);
                e
            })?;

        Ok(response.json().await?)
    }
}

/// Text of the first candidate's parts, concatenated; `None` when the
/// response carries no usable text.
fn first_candidate_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;

    let text: String = content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Prompt asking for an analysis of one concrete booking.
fn analysis_prompt(booking: &Booking) -> String {
    format!(
        "Analyze this hotel booking and respond in the requested JSON format.\n\
         Hotel: {}\n\
         City: {}\n\
         Check-in: {}\n\
         Check-out: {}\n\
         Total price: {} USD\n\
         Give a short title for the trip, say whether the price seems reasonable \
         for this city and date range, suggest 3 activities near the hotel, and \
         finish with a one-sentence summary.",
        booking.hotel_name, booking.city, booking.check_in, booking.check_out, booking.price
    )
}

/// JSON schema constraining the analysis response to the shape of
/// [`BookingAnalysisDto`]. Type names are uppercase per the provider's
/// OpenAPI-subset schema dialect.
fn analysis_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "price_analysis": { "type": "STRING" },
            "activity_suggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["name", "reason"]
                }
            },
            "summary": { "type": "STRING" }
        },
        "required": ["title", "price_analysis", "activity_suggestions", "summary"]
    })
}
