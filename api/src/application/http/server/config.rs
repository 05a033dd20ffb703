use axum::extract::State;
use labellens_core::domain::{common::LLMConfig, label_analysis::LabelAnalysisService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// Runtime configuration safe to show to front ends. Never carries the API keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub version: String,
    pub root_path: String,
    pub llm_provider: String,
    pub vision_model: String,
    pub analysis_model: String,
}

pub async fn get_config<S>(
    State(state): State<AppState<S>>,
) -> Result<Response<ConfigResponse>, ApiError>
where
    S: LabelAnalysisService + Clone + 'static,
{
    let args = state.args.as_ref();
    let llm = LLMConfig::for_provider(
        args.llm.provider,
        String::new(),
        args.llm.base_url.clone(),
        args.llm.vision_model.clone(),
        args.llm.analysis_model.clone(),
    );

    Ok(Response::OK(ConfigResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: args.server.root_path.clone(),
        llm_provider: llm.provider.to_string(),
        vision_model: llm.vision_model,
        analysis_model: llm.analysis_model,
    }))
}
