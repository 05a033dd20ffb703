use labellens_core::domain::label_analysis::{SampleProduct, samples::sample_products};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetSamplesResponse {
    pub data: Vec<SampleProduct>,
}

#[utoipa::path(
    get,
    path = "/samples",
    tag = "label-analysis",
    summary = "List demo labels",
    description = "Example products for trying the analyzer without a photo.",
    responses(
        (status = 200, body = GetSamplesResponse)
    )
)]
pub async fn get_samples() -> Result<Response<GetSamplesResponse>, ApiError> {
    Ok(Response::OK(GetSamplesResponse {
        data: sample_products(),
    }))
}
