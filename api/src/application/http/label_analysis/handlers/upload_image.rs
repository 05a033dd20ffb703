use axum::extract::{Multipart, State};
use labellens_core::domain::label_analysis::{
    AnalysisResponse, AnalyzeImageInput, InputType, LabelAnalysisService, LabelImage,
};
use tracing::error;
use utoipa::ToSchema;

use super::analysis_error;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10 MiB

#[derive(ToSchema)]
pub struct UploadImageForm {
    /// The label photo, at most 10 MiB.
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/analyze/upload",
    tag = "label-analysis",
    summary = "Analyze an uploaded label photo",
    description = "Same as `/analyze`, but the photo is sent as the multipart field `image`.",
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalysisResponse),
        (status = 400, description = "Missing or empty image", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    )
)]
pub async fn upload_image<S>(
    State(state): State<AppState<S>>,
    mut multipart: Multipart,
) -> Result<Response<AnalysisResponse>, ApiError>
where
    S: LabelAnalysisService + Clone + 'static,
{
    let mut image: Option<LabelImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("image") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read image bytes: {}", e);
            ApiError::BadRequest(format!("Failed to read image: {}", e))
        })?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some(LabelImage::from_upload(data.to_vec(), content_type.as_deref()));
    }

    let image = image
        .filter(|image| !image.data.is_empty())
        .ok_or_else(|| ApiError::BadRequest("No image provided".to_string()))?;

    let analysis = state
        .service
        .analyze_image(AnalyzeImageInput { image })
        .await
        .map_err(|e| analysis_error(InputType::Image, e))?;

    Ok(Response::OK(analysis))
}
