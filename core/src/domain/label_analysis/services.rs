use tracing::Instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    label_analysis::{
        entities::{AnalysisResponse, InputType},
        helpers::parse_analysis_response,
        ports::{LLMClient, LabelAnalysisService},
        prompt::{ANALYSIS_PROMPT, ANALYSIS_SETTINGS, OCR_INSTRUCTION, OCR_SETTINGS},
        schema::get_label_analysis_schema,
        value_objects::{AnalyzeImageInput, AnalyzeTextInput, LabelImage},
    },
};

impl<LLM> LabelAnalysisService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn extract_text(&self, image: LabelImage) -> Result<String, CoreError> {
        tracing::debug!(
            media_type = %image.media_type,
            bytes = image.data.len(),
            "Starting OCR"
        );

        let extracted = self
            .llm_client
            .generate_with_image(OCR_INSTRUCTION.to_string(), image, OCR_SETTINGS)
            .await?;

        if extracted.trim().is_empty() {
            tracing::warn!("No text extracted from image");
            return Err(CoreError::ExtractionFailed);
        }

        tracing::debug!(chars = extracted.len(), "OCR complete");
        Ok(extracted)
    }

    async fn analyze_ingredients(&self, text: String) -> Result<AnalysisResponse, CoreError> {
        let raw_response = self
            .llm_client
            .generate_with_text(
                ANALYSIS_PROMPT.to_string(),
                text.clone(),
                get_label_analysis_schema(),
                ANALYSIS_SETTINGS,
            )
            .await?;

        let analysis = parse_analysis_response(&raw_response, Some(text))?;

        tracing::info!(
            ingredients = analysis.ingredients.len(),
            red = analysis.overall_score.red,
            yellow = analysis.overall_score.yellow,
            green = analysis.overall_score.green,
            flagged = analysis.harmful_flags.len(),
            "Analysis complete"
        );

        Ok(analysis)
    }

    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<AnalysisResponse, CoreError> {
        if input.image.data.is_empty() {
            return Err(CoreError::MissingInput("No image provided".to_string()));
        }

        let span = analysis_span(InputType::Image);
        async move {
            let extracted = self.extract_text(input.image).await?;
            self.analyze_ingredients(extracted).await
        }
        .instrument(span)
        .await
    }

    async fn analyze_text(&self, input: AnalyzeTextInput) -> Result<AnalysisResponse, CoreError> {
        if input.text.trim().is_empty() {
            return Err(CoreError::MissingInput("No text provided".to_string()));
        }

        self.analyze_ingredients(input.text)
            .instrument(analysis_span(InputType::Text))
            .await
    }
}

fn analysis_span(input_type: InputType) -> tracing::Span {
    tracing::info_span!(
        "label_analysis",
        analysis_id = %generate_uuid_v7(),
        input_type = input_type.as_str()
    )
}
