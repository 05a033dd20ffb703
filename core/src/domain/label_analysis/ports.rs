use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    label_analysis::{
        entities::AnalysisResponse,
        value_objects::{AnalyzeImageInput, AnalyzeTextInput, GenerationSettings, LabelImage},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Send `prompt` together with a label image and return the model's raw text.
    fn generate_with_image(
        &self,
        prompt: String,
        image: LabelImage,
        settings: GenerationSettings,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Send a system prompt plus user content in JSON mode and return the raw reply.
    fn generate_with_text(
        &self,
        system_prompt: String,
        content: String,
        response_schema: serde_json::Value,
        settings: GenerationSettings,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for label analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait LabelAnalysisService: Send + Sync {
    fn extract_text(
        &self,
        image: LabelImage,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn analyze_ingredients(
        &self,
        text: String,
    ) -> impl Future<Output = Result<AnalysisResponse, CoreError>> + Send;

    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<AnalysisResponse, CoreError>> + Send;

    fn analyze_text(
        &self,
        input: AnalyzeTextInput,
    ) -> impl Future<Output = Result<AnalysisResponse, CoreError>> + Send;
}
