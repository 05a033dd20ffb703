use reqwest::Client;

use crate::domain::{
    common::{LLMConfig, LLMProvider, entities::app_errors::CoreError},
    label_analysis::{
        ports::LLMClient,
        value_objects::{GenerationSettings, LabelImage},
    },
};

pub mod gemini_client;
pub mod groq_client;

pub use gemini_client::GeminiLLMClient;
pub use groq_client::GroqLLMClient;

/// The configured model provider, picked once at startup.
#[derive(Debug, Clone)]
pub enum LLMClientKind {
    Groq(GroqLLMClient),
    Gemini(GeminiLLMClient),
}

impl LLMClientKind {
    pub fn from_config(config: &LLMConfig) -> Self {
        let client = Client::new();
        match config.provider {
            LLMProvider::Groq => Self::Groq(GroqLLMClient::new(config, client)),
            LLMProvider::Gemini => Self::Gemini(GeminiLLMClient::new(config, client)),
        }
    }

    pub fn provider(&self) -> LLMProvider {
        match self {
            Self::Groq(_) => LLMProvider::Groq,
            Self::Gemini(_) => LLMProvider::Gemini,
        }
    }
}

impl LLMClient for LLMClientKind {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: LabelImage,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        match self {
            Self::Groq(client) => client.generate_with_image(prompt, image, settings).await,
            Self::Gemini(client) => client.generate_with_image(prompt, image, settings).await,
        }
    }

    async fn generate_with_text(
        &self,
        system_prompt: String,
        content: String,
        response_schema: serde_json::Value,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        match self {
            Self::Groq(client) => {
                client
                    .generate_with_text(system_prompt, content, response_schema, settings)
                    .await
            }
            Self::Gemini(client) => {
                client
                    .generate_with_text(system_prompt, content, response_schema, settings)
                    .await
            }
        }
    }
}
