use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use labellens_core::domain::label_analysis::LabelAnalysisService;
use utoipa::OpenApi;

use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    analyze_text::{__path_analyze_text, analyze_text},
    get_samples::{__path_get_samples, get_samples},
    upload_image::{__path_upload_image, upload_image},
};
use crate::application::http::server::app_state::AppState;

/// Room for a 10 MiB image after base64 inflation.
pub const MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_image, upload_image, analyze_text, get_samples))]
pub struct LabelAnalysisApiDoc;

pub fn label_analysis_routes<S>(state: AppState<S>) -> Router<AppState<S>>
where
    S: LabelAnalysisService + Clone + 'static,
{
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/analyze", root_path), post(analyze_image::<S>))
        .route(
            &format!("{}/analyze/upload", root_path),
            post(upload_image::<S>),
        )
        .route(&format!("{}/analyze-text", root_path), post(analyze_text::<S>))
        .route(&format!("{}/samples", root_path), get(get_samples))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}
