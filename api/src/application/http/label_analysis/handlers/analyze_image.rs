use axum::extract::State;
use labellens_core::domain::label_analysis::{
    AnalysisResponse, AnalyzeImageInput, InputType, LabelAnalysisService, LabelImage,
};

use super::analysis_error;
use crate::application::http::{
    label_analysis::validators::AnalyzeImageRequest,
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
    path = "/analyze",
    tag = "label-analysis",
    summary = "Analyze a label photo",
    description = "Reads the label text from a base64 image, then rates every ingredient and checks the marketing claims.",
    responses(
        (status = 200, body = AnalysisResponse),
        (status = 400, description = "Missing or undecodable image, or no text found", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
    request_body = AnalyzeImageRequest
)]
pub async fn analyze_image<S>(
    State(state): State<AppState<S>>,
    ValidateJson(payload): ValidateJson<AnalyzeImageRequest>,
) -> Result<Response<AnalysisResponse>, ApiError>
where
    S: LabelAnalysisService + Clone + 'static,
{
    let image = LabelImage::from_data_uri(&payload.image).map_err(ApiError::from)?;

    let analysis = state
        .service
        .analyze_image(AnalyzeImageInput { image })
        .await
        .map_err(|e| analysis_error(InputType::Image, e))?;

    Ok(Response::OK(analysis))
}
