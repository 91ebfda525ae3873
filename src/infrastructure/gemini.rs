// SPDX-License-Identifier: MPL-2.0
//! Gemini `generateContent` adapter for chat and crop photo analysis.

use crate::application::port::assistant::parse_vision_reply;
use crate::application::port::{AssistantError, BoxFuture, EncodedImage, TextModel, VisionModel};
use crate::config::MIN_API_KEY_LEN;
use crate::domain::pest::VisionFindings;
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};

/// Appended to every vision instruction so the reply can be parsed.
const VISION_FORMAT_HINT: &str =
    "Respond ONLY as minified JSON with keys: name, severity(one of low|medium|high), description, treatment.";

#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: super::http::client(),
            base_url: base_url.into(),
            model: model.into(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn generate(&self, parts: Vec<Part>) -> BoxFuture<'static, Result<String, AssistantError>> {
        let Some(api_key) = self.api_key.clone().filter(|key| is_usable_key(key)) else {
            return futures_util::future::ready(Err(AssistantError::NotConfigured)).boxed();
        };
        let client = self.client.clone();
        let url = self.endpoint();
        let request = GenerateRequest {
            contents: vec![Content { parts }],
        };

        async move {
            let response = client
                .post(&url)
                .header("x-goog-api-key", api_key)
                .json(&request)
                .send()
                .await
                .map_err(|e| AssistantError::Http(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(AssistantError::Http(format!("HTTP {status}")));
            }

            let body: GenerateResponse = response
                .json()
                .await
                .map_err(|e| AssistantError::Decode(e.to_string()))?;
            Ok(body.text())
        }
        .boxed()
    }
}

fn is_usable_key(key: &str) -> bool {
    key.trim().len() > MIN_API_KEY_LEN
}

impl TextModel for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(is_usable_key)
    }

    fn complete(&self, prompt: String) -> BoxFuture<'static, Result<String, AssistantError>> {
        self.generate(vec![Part::text(prompt)])
    }
}

impl VisionModel for GeminiClient {
    fn classify(
        &self,
        image: EncodedImage,
        instruction: String,
    ) -> BoxFuture<'static, Result<VisionFindings, AssistantError>> {
        let prompt = format!("{instruction}\n{VISION_FORMAT_HINT}");
        let reply = self.generate(vec![Part::text(prompt), Part::inline(image)]);
        reply
            .map(|result| result.map(|text| parse_vision_reply(&text)))
            .boxed()
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(
        rename = "inline_data",
        alias = "inlineData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            inline_data: None,
        }
    }

    fn inline(image: EncodedImage) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type,
                data: image.base64,
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(alias = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Text parts of the first candidate, concatenated. Empty when the model
    /// returned nothing usable.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(key: Option<&str>) -> GeminiClient {
        GeminiClient::new("http://127.0.0.1:9", "gemini-1.5-flash", key.map(str::to_string))
    }

    #[test]
    fn short_or_missing_key_is_not_configured() {
        assert!(!client(None).is_configured());
        assert!(!client(Some("0123456789")).is_configured());
        assert!(client(Some("0123456789a")).is_configured());
    }

    #[tokio::test]
    async fn unconfigured_client_fails_without_network() {
        let result = client(None).complete("hello".to_string()).await;
        assert_eq!(result, Err(AssistantError::NotConfigured));
    }

    #[test]
    fn endpoint_includes_model() {
        assert_eq!(
            GeminiClient::new("https://example.test/v1beta/", "m", None).endpoint(),
            "https://example.test/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn request_serializes_inline_image() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::text("look".to_string()),
                    Part::inline(EncodedImage {
                        base64: "AAAA".to_string(),
                        mime_type: "image/png".to_string(),
                    }),
                ],
            }],
        };
        let json = serde_json::to_value(&request).expect("serializes");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "look");
        assert_eq!(json["contents"][0]["parts"][1]["inline_data"]["mime_type"], "image/png");
        assert!(json["contents"][0]["parts"][0].get("inline_data").is_none());
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [
                {"content": {"parts": [{"text": "Use "}, {"text": "mulch."}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]}"#,
        )
        .expect("valid body");
        assert_eq!(body.text(), "Use mulch.");
    }

    #[test]
    fn response_without_candidates_is_empty_text() {
        let body: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).expect("valid body");
        assert_eq!(body.text(), "");
    }
}
