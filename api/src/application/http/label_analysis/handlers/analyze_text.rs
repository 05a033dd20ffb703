use axum::extract::State;
use labellens_core::domain::label_analysis::{
    AnalysisResponse, AnalyzeTextInput, InputType, LabelAnalysisService,
};

use super::analysis_error;
use crate::application::http::{
    label_analysis::validators::AnalyzeTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze-text",
    tag = "label-analysis",
    summary = "Analyze pasted label text",
    description = "Rates every ingredient in the pasted text and checks the marketing claims.",
    responses(
        (status = 200, body = AnalysisResponse),
        (status = 400, description = "Blank or oversized text", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn analyze_text<S>(
    State(state): State<AppState<S>>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<AnalysisResponse>, ApiError>
where
    S: LabelAnalysisService + Clone + 'static,
{
    let analysis = state
        .service
        .analyze_text(AnalyzeTextInput { text: payload.text })
        .await
        .map_err(|e| analysis_error(InputType::Text, e))?;

    Ok(Response::OK(analysis))
}
