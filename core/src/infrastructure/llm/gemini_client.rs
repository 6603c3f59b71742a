use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    nutrition::{ports::LLMClient, value_objects::GenerationRequest},
};

const DEFAULT_RETRY_DELAY_SECS: u64 = 30;
const MAX_RETRY_DELAY_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    max_retry_wait: Duration,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl From<GenerationRequest> for GeminiRequest {
    fn from(request: GenerationRequest) -> Self {
        Self {
            system_instruction: request.system_instruction.map(|text| Content {
                parts: vec![Part { text }],
            }),
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            },
        }
    }
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            max_retry_wait: config.max_retry_wait,
            client: Client::new(),
        }
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(CoreError::ServiceNotConfigured(
                "GEMINI_API_KEY is not configured. Set it in the environment or in .env."
                    .to_string(),
            )),
        }
    }

    async fn post(&self, api_key: &str, request: &GeminiRequest) -> Result<reqwest::Response, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        self.client
            .post(&url)
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Gemini: {}", e))
            })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let api_key = self.api_key()?;

        let mut response = self.post(api_key, &request).await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            let delay = Duration::from_secs(parse_retry_delay_seconds(&body)).min(self.max_retry_wait);
            warn!(delay_secs = delay.as_secs(), "Gemini rate limit reached, retrying once");

            tokio::time::sleep(delay).await;
            response = self.post(api_key, &request).await?;
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Gemini: {} {}",
                status.as_u16(),
                error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse Gemini response: {}", e))
        })?;

        response_text(gemini_response)
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_text(&self, request: GenerationRequest) -> Result<String, CoreError> {
        self.call_gemini_api(request.into()).await
    }
}

/// Joins the texts of the first candidate's parts.
fn response_text(response: GeminiResponse) -> Result<String, CoreError> {
    let parts: Vec<String> = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let text = parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();
    if text.is_empty() {
        return Err(CoreError::ExternalServiceError(
            "Empty response from Gemini".to_string(),
        ));
    }

    Ok(text)
}

/// Seconds to wait before retrying a rate-limited request.
///
/// Reads the `retryDelay` of the `RetryInfo` entry in `error.details`, capped
/// at 60. Anything missing or unreadable yields 30.
pub fn parse_retry_delay_seconds(body: &str) -> u64 {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return DEFAULT_RETRY_DELAY_SECS;
    };

    let delay = value
        .pointer("/error/details")
        .and_then(Value::as_array)
        .and_then(|details| {
            details.iter().find_map(|detail| {
                let kind = detail.get("@type")?.as_str()?;
                if !kind.contains("RetryInfo") {
                    return None;
                }
                detail.get("retryDelay")?.as_str()
            })
        })
        .and_then(|delay| {
            let digits: String = delay
                .chars()
                .skip_while(|c| !c.is_ascii_digit())
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse::<u64>().ok()
        });

    delay.map_or(DEFAULT_RETRY_DELAY_SECS, |secs| secs.min(MAX_RETRY_DELAY_SECS))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(parts: &[&str]) -> GeminiResponse {
        serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": parts.iter().map(|t| json!({ "text": t })).collect::<Vec<_>>() }
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_retry_delay_reads_retry_info() {
        let body = json!({
            "error": {
                "code": 429,
                "details": [
                    { "@type": "type.googleapis.com/google.rpc.QuotaFailure" },
                    { "@type": "type.googleapis.com/google.rpc.RetryInfo", "retryDelay": "17s" }
                ]
            }
        })
        .to_string();

        assert_eq!(parse_retry_delay_seconds(&body), 17);
    }

    #[test]
    fn test_parse_retry_delay_caps_and_defaults() {
        let long = json!({
            "error": { "details": [{ "@type": "google.rpc.RetryInfo", "retryDelay": "120.5s" }] }
        })
        .to_string();
        assert_eq!(parse_retry_delay_seconds(&long), 60);

        let no_digits = json!({
            "error": { "details": [{ "@type": "google.rpc.RetryInfo", "retryDelay": "soon" }] }
        })
        .to_string();
        assert_eq!(parse_retry_delay_seconds(&no_digits), 30);

        assert_eq!(parse_retry_delay_seconds("quota exceeded"), 30);
        assert_eq!(parse_retry_delay_seconds("{}"), 30);
    }

    #[test]
    fn test_request_body_uses_camel_case() {
        let request: GeminiRequest = GenerationRequest {
            system_instruction: Some("sys".to_string()),
            prompt: "oi".to_string(),
            temperature: 0.5,
            max_output_tokens: 500,
        }
        .into();

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "sys");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "oi");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 500);
        assert_eq!(body["generationConfig"]["temperature"], 0.5);
        assert!(body["generationConfig"].get("responseMimeType").is_none());
    }

    #[test]
    fn test_response_text_joins_parts() {
        let text = response_text(response(&["{\"calorias\":", " 10}"])).unwrap();
        assert_eq!(text, "{\"calorias\":\n 10}");
    }

    #[test]
    fn test_response_text_skips_empty_parts() {
        let text = response_text(response(&["", "Aqui:", "", "{\"calorias\": 10}"])).unwrap();
        assert_eq!(text, "Aqui:\n{\"calorias\": 10}");
    }

    #[test]
    fn test_empty_response_is_an_error() {
        let empty: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            response_text(empty),
            Err(CoreError::ExternalServiceError(msg)) if msg == "Empty response from Gemini"
        ));
        assert!(response_text(response(&["  "])).is_err());
    }

    #[tokio::test]
    async fn test_missing_api_key_is_not_configured() {
        let client = GeminiLLMClient::new(&LLMConfig {
            gemini_api_key: Some("  ".to_string()),
            ..LLMConfig::default()
        });

        let result = client
            .generate_text(GenerationRequest {
                system_instruction: None,
                prompt: "oi".to_string(),
                temperature: 0.2,
                max_output_tokens: 10,
            })
            .await;

        assert!(matches!(result, Err(CoreError::ServiceNotConfigured(_))));
    }
}
