//! Advisory-provider wire types and the public DTOs built from them.
//!
//! The wire types mirror the Gemini `generateContent` REST contract
//! (camelCase field names); the DTOs at the bottom are what this API exposes
//! to its own callers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the provider's `generateContent` call.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Provider capabilities such as search grounding; best-effort only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Content block with no role, used for system instructions.
    pub fn text(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    /// User-role content block carrying the prompt.
    pub fn user_text(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

/// Response body from the provider. Only the fields this application reads.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// Request body for `POST /api/gemini/chat`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChatRequestDto {
    pub prompt: String,
}

/// Response for the chat endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChatResponseDto {
    pub response: String,
}

/// Request body for `POST /api/gemini/analyze`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AnalyzeRequestDto {
    pub booking_id: i32,
}

/// One suggested activity in a booking analysis.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivitySuggestionDto {
    pub name: String,
    pub reason: String,
}

/// Structured booking analysis, passed through from the provider unmodified
/// once it parses against this shape.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingAnalysisDto {
    pub title: String,
    pub price_analysis: String,
    pub activity_suggestions: Vec<ActivitySuggestionDto>,
    pub summary: String,
}
