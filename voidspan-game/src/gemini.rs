//! Wire format of the Gemini `generateContent` REST call.
//!
//! Only the fields the game sends or reads are modelled; everything else in
//! the provider's payload is ignored on decode.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{IMAGE_ASPECT_RATIO, LOG_TARGET_API};
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: Some(text.into()),
                inline_data: None,
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default = "default_mime")]
    pub mime_type: String,
    pub data: String,
}

fn default_mime() -> String {
    "image/png".to_string()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    String,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    const fn scalar(kind: SchemaType) -> Self {
        Self {
            kind,
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Object schema where every listed field is required.
    #[must_use]
    pub fn object(fields: &[(&str, SchemaType)]) -> Self {
        Self {
            kind: SchemaType::Object,
            properties: fields
                .iter()
                .map(|(name, kind)| ((*name).to_string(), Self::scalar(*kind)))
                .collect(),
            required: fields.iter().map(|(name, _)| (*name).to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
}

#[must_use]
pub fn item_schema() -> Schema {
    Schema::object(&[
        ("cost", SchemaType::Number),
        ("timeKilledYears", SchemaType::String),
        ("sanityChange", SchemaType::Number),
        ("story", SchemaType::String),
        ("synergyAnalysis", SchemaType::String),
    ])
}

#[must_use]
pub fn ending_schema() -> Schema {
    Schema::object(&[
        ("title", SchemaType::String),
        ("story", SchemaType::String),
        ("evaluation", SchemaType::String),
        ("scoreGrade", SchemaType::String),
    ])
}

/// JSON-mode request constrained by `schema`.
#[must_use]
pub fn json_request(prompt: &str, system: Option<&str>, schema: Schema) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(prompt)],
        system_instruction: system.map(Content::text),
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            image_config: None,
        }),
    }
}

#[must_use]
pub fn image_request(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(prompt)],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            image_config: Some(ImageConfig {
                aspect_ratio: IMAGE_ASPECT_RATIO.to_string(),
            }),
            ..GenerationConfig::default()
        }),
    }
}

#[must_use]
pub fn endpoint(api_base: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        api_base.trim_end_matches('/'),
        model
    )
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text of the first candidate.
    #[must_use]
    pub fn text(&self) -> String {
        self.first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect()
    }

    /// First inline image of the first candidate as a `data:` URL.
    #[must_use]
    pub fn image_data_url(&self) -> Option<String> {
        self.first_parts()
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .map(|img| format!("data:{};base64,{}", img.mime_type, img.data))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
}

/// Turn an HTTP status and body into a response or a classified error.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx replies and [`ApiError::Decode`]
/// when a 2xx body is not a `generateContent` response.
pub fn interpret_reply(status: u16, body: &str) -> Result<GenerateContentResponse, ApiError> {
    if !(200..300).contains(&status) {
        let (code, message) = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => (envelope.error.code.unwrap_or(status), envelope.error.message),
            Err(_) => (status, body.trim().to_string()),
        };
        log::debug!(target: LOG_TARGET_API, "provider error {code}: {message}");
        return Err(ApiError::Status { code, message });
    }
    Ok(serde_json::from_str(body)?)
}

/// Decode a JSON-mode reply, tolerating surrounding whitespace and Markdown fences.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the payload does not match `T`.
pub fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let trimmed = strip_code_fence(text.trim());
    let payload = if trimmed.is_empty() { "{}" } else { trimmed };
    Ok(serde_json::from_str(payload)?)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
