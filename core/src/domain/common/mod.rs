use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LabelLensConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LLMProvider {
    #[default]
    Groq,
    Gemini,
}

impl LLMProvider {
    pub fn as_str(&self) -> &str {
        match self {
            LLMProvider::Groq => "groq",
            LLMProvider::Gemini => "gemini",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            LLMProvider::Groq => "https://api.groq.com/openai/v1",
            LLMProvider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
        }
    }

    pub fn default_vision_model(&self) -> &'static str {
        match self {
            LLMProvider::Groq => "meta-llama/llama-4-scout-17b-16e-instruct",
            LLMProvider::Gemini => "gemini-2.0-flash",
        }
    }

    pub fn default_analysis_model(&self) -> &'static str {
        match self {
            LLMProvider::Groq => "llama-3.3-70b-versatile",
            LLMProvider::Gemini => "gemini-2.0-flash",
        }
    }
}

impl fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groq" => Ok(LLMProvider::Groq),
            "gemini" => Ok(LLMProvider::Gemini),
            other => Err(format!(
                "unsupported LLM provider `{}`, expected `groq` or `gemini`",
                other
            )),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    pub api_key: String,
    pub base_url: String,
    pub vision_model: String,
    pub analysis_model: String,
}

impl LLMConfig {
    /// Builds a config for `provider`, filling every unset field with the provider default.
    pub fn for_provider(
        provider: LLMProvider,
        api_key: String,
        base_url: Option<String>,
        vision_model: Option<String>,
        analysis_model: Option<String>,
    ) -> Self {
        Self {
            provider,
            api_key,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| provider.default_base_url().to_string()),
            vision_model: vision_model
                .unwrap_or_else(|| provider.default_vision_model().to_string()),
            analysis_model: analysis_model
                .unwrap_or_else(|| provider.default_analysis_model().to_string()),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
