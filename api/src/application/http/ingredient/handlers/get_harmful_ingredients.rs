use labellens_core::domain::ingredient::{HarmfulIngredientEntry, catalog};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct GetHarmfulIngredientsResponse {
    pub data: Vec<HarmfulIngredientEntry>,
}

#[utoipa::path(
    get,
    path = "/harmful",
    tag = "ingredient",
    summary = "List harmful ingredients",
    description = "The keyword catalog in match priority order: sugars, then preservatives, then additives.",
    responses(
        (status = 200, body = GetHarmfulIngredientsResponse)
    )
)]
pub async fn get_harmful_ingredients() -> Result<Response<GetHarmfulIngredientsResponse>, ApiError>
{
    Ok(Response::OK(GetHarmfulIngredientsResponse {
        data: catalog().to_vec(),
    }))
}
