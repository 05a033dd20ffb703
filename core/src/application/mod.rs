use crate::{
    domain::common::{LabelLensConfig, services::Service},
    infrastructure::llm::LLMClientKind,
};

pub type LabelLensService = Service<LLMClientKind>;

pub fn create_service(config: LabelLensConfig) -> LabelLensService {
    if config.llm.api_key.trim().is_empty() {
        tracing::warn!(
            provider = %config.llm.provider,
            "No API key configured, model calls will be rejected by the provider"
        );
    }

    tracing::info!(
        provider = %config.llm.provider,
        base_url = %config.llm.base_url,
        vision_model = %config.llm.vision_model,
        analysis_model = %config.llm.analysis_model,
        "Label analysis service configured"
    );

    Service::new(LLMClientKind::from_config(&config.llm))
}
