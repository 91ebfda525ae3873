// SPDX-License-Identifier: MPL-2.0
//! Generative model ports.
//!
//! [`TextModel`] answers free-text farming questions, [`VisionModel`]
//! classifies a crop photo. Both are backed by the same remote service but
//! kept separate so either can be mocked on its own.

use super::BoxFuture;
use crate::domain::pest::VisionFindings;
use std::fmt;

// =============================================================================
// AssistantError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// No usable API key is configured.
    NotConfigured,
    /// The model answered with an empty or blank reply.
    EmptyResponse,
    /// The HTTP exchange failed (transport or non-success status).
    Http(String),
    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantError::NotConfigured => write!(f, "assistant is not configured"),
            AssistantError::EmptyResponse => write!(f, "assistant returned an empty reply"),
            AssistantError::Http(msg) => write!(f, "assistant request failed: {msg}"),
            AssistantError::Decode(msg) => write!(f, "assistant response invalid: {msg}"),
        }
    }
}

impl std::error::Error for AssistantError {}

// =============================================================================
// EncodedImage
// =============================================================================

/// An image ready to be sent inline: base64 payload plus its mime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub base64: String,
    pub mime_type: String,
}

// =============================================================================
// Traits
// =============================================================================

pub trait TextModel: Send + Sync {
    /// Whether a call has any chance of succeeding.
    fn is_configured(&self) -> bool;

    /// Sends `prompt` and returns the raw reply text.
    ///
    /// Implementations do not retry. A blank reply may come back as `Ok` with
    /// blank text; callers decide how to handle it.
    fn complete(&self, prompt: String) -> BoxFuture<'static, Result<String, AssistantError>>;
}

pub trait VisionModel: Send + Sync {
    /// Classifies `image` following `instruction`.
    fn classify(
        &self,
        image: EncodedImage,
        instruction: String,
    ) -> BoxFuture<'static, Result<VisionFindings, AssistantError>>;
}

/// Interprets a vision reply.
///
/// Markdown code fences are stripped before parsing the JSON object. A reply
/// that still is not valid JSON becomes a generic finding that carries the raw
/// text as its description.
#[must_use]
pub fn parse_vision_reply(reply: &str) -> VisionFindings {
    #[derive(serde::Deserialize)]
    struct Raw {
        name: Option<String>,
        severity: Option<String>,
        description: Option<String>,
        treatment: Option<String>,
    }

    let text = reply.trim();
    let body = strip_code_fence(text);
    match serde_json::from_str::<Raw>(body) {
        Ok(raw) => VisionFindings {
            name: raw.name,
            severity: raw.severity,
            description: raw.description,
            treatment: raw.treatment,
        },
        Err(_) => VisionFindings {
            name: Some("Unknown".to_string()),
            severity: Some("medium".to_string()),
            description: Some(text.to_string()),
            treatment: Some("Consult agronomist.".to_string()),
        },
    }
}

fn strip_code_fence(text: &str) -> &str {
    let mut body = text;
    if let Some(rest) = body.strip_prefix("```") {
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        body = rest;
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}
