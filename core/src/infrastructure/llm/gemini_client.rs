use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    label_analysis::{
        ports::LLMClient,
        value_objects::{GenerationSettings, LabelImage},
    },
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    base_url: String,
    vision_model: String,
    analysis_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
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
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig, client: Client) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            vision_model: config.vision_model.clone(),
            analysis_model: config.analysis_model.clone(),
            client,
        }
    }

    async fn call_gemini_api(&self, model: &str, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        extract_candidate_text(gemini_response)
    }
}

fn extract_candidate_text(response: GeminiResponse) -> Result<String, CoreError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))?;

    Ok(candidate
        .content
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .unwrap_or_default())
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: LabelImage,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            data: image.to_base64(),
                            mime_type: image.media_type,
                        },
                    },
                ],
            }],
            system_instruction: None,
            generation_config: GenerationConfig {
                temperature: settings.temperature,
                max_output_tokens: settings.max_tokens,
                response_mime_type: None,
                response_schema: None,
            },
        };

        self.call_gemini_api(&self.vision_model, request).await
    }

    async fn generate_with_text(
        &self,
        system_prompt: String,
        content: String,
        response_schema: serde_json::Value,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: content }],
            }],
            system_instruction: Some(Content {
                parts: vec![Part::Text {
                    text: system_prompt,
                }],
            }),
            generation_config: GenerationConfig {
                temperature: settings.temperature,
                max_output_tokens: settings.max_tokens,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(response_schema),
            },
        };

        self.call_gemini_api(&self.analysis_model, request).await
    }
}
