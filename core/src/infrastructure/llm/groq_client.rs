use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    label_analysis::{
        ports::LLMClient,
        value_objects::{GenerationSettings, LabelImage},
    },
};

/// Client for Groq's OpenAI-compatible chat completions API.
#[derive(Debug, Clone)]
pub struct GroqLLMClient {
    api_key: String,
    base_url: String,
    vision_model: String,
    analysis_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl GroqLLMClient {
    pub fn new(config: &LLMConfig, client: Client) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            vision_model: config.vision_model.clone(),
            analysis_model: config.analysis_model.clone(),
            client,
        }
    }

    async fn call_chat_completions(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %request.model, "Calling Groq chat completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Groq API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Groq API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Groq response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        first_choice_text(completion)
    }
}

/// A choice with no content reads as empty text; no choice at all is an error.
fn first_choice_text(completion: ChatCompletionResponse) -> Result<String, CoreError> {
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
}

impl LLMClient for GroqLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: LabelImage,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.vision_model.clone(),
            messages: vec![Message {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text { text: prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image.to_data_uri(),
                        },
                    },
                ]),
            }],
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            response_format: None,
        };

        self.call_chat_completions(request).await
    }

    /// Groq's JSON mode does not take a schema; the system prompt spells out the shape.
    async fn generate_with_text(
        &self,
        system_prompt: String,
        content: String,
        _response_schema: serde_json::Value,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.analysis_model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(system_prompt),
                },
                Message {
                    role: "user",
                    content: MessageContent::Text(content),
                },
            ],
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            response_format: Some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        self.call_chat_completions(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_vision_request_shape() {
        let request = ChatCompletionRequest {
            model: "vision".to_string(),
            messages: vec![Message {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: "read this".to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: "data:image/jpeg;base64,AAAA".to_string(),
                        },
                    },
                ]),
            }],
            temperature: 0.25,
            max_tokens: 1024,
            response_format: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "vision",
                "messages": [{
                    "role": "user",
                    "content": [
                        { "type": "text", "text": "read this" },
                        { "type": "image_url", "image_url": { "url": "data:image/jpeg;base64,AAAA" } }
                    ]
                }],
                "temperature": 0.25,
                "max_tokens": 1024
            })
        );
    }

    #[test]
    fn test_json_mode_request_shape() {
        let request = ChatCompletionRequest {
            model: "analysis".to_string(),
            messages: vec![Message {
                role: "system",
                content: MessageContent::Text("prompt".to_string()),
            }],
            temperature: 0.5,
            max_tokens: 2048,
            response_format: Some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["content"], "prompt");
        assert_eq!(value["response_format"], json!({ "type": "json_object" }));
    }

    #[test]
    fn test_first_choice_text() {
        let completion: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Sugar, Salt" } }]
        }))
        .unwrap();
        assert_eq!(first_choice_text(completion).unwrap(), "Sugar, Salt");

        let null_content: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        }))
        .unwrap();
        assert_eq!(first_choice_text(null_content).unwrap(), "");

        let no_choices: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(first_choice_text(no_choices).is_err());
    }
}
