use labellens_core::domain::{common::entities::app_errors::CoreError, label_analysis::InputType};

use crate::application::http::server::api_entities::api_error::ApiError;

pub mod analyze_image;
pub mod analyze_text;
pub mod get_samples;
pub mod upload_image;

/// Client errors keep their message. Downstream failures are logged and prefixed with
/// what was being analyzed.
pub(crate) fn analysis_error(input_type: InputType, error: CoreError) -> ApiError {
    if error.is_client_error() {
        tracing::warn!(input_type = input_type.as_str(), error = %error, "Rejected analysis input");
        return ApiError::from(error);
    }

    tracing::error!(input_type = input_type.as_str(), error = %error, "Label analysis failed");
    ApiError::InternalServerError(format!(
        "Failed to analyze {}: {}",
        input_type.as_str(),
        error
    ))
}
