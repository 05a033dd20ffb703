use labellens_core::domain::ingredient::{
    IngredientClassification, classification_report, split_ingredient_list,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    ingredient::validators::ClassifyIngredientsRequest,
    server::api_entities::{
        api_error::{ApiError, ApiErrorResponse, ValidateJson},
        response::Response,
    },
};

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct ClassifyIngredientsResponse {
    pub data: Vec<IngredientClassification>,
}

#[utoipa::path(
    post,
    path = "/classify",
    tag = "ingredient",
    summary = "Classify ingredients",
    description = "Runs the keyword classifier over the given names and/or a pasted ingredient list. No model is called.",
    responses(
        (status = 200, body = ClassifyIngredientsResponse),
        (status = 400, description = "No ingredients given", body = ApiErrorResponse)
    ),
    request_body = ClassifyIngredientsRequest
)]
pub async fn classify_ingredients(
    ValidateJson(payload): ValidateJson<ClassifyIngredientsRequest>,
) -> Result<Response<ClassifyIngredientsResponse>, ApiError> {
    let mut names = payload.ingredients.unwrap_or_default();
    if let Some(text) = payload.text {
        names.extend(split_ingredient_list(&text));
    }

    let data = classification_report(&names);
    tracing::debug!(
        ingredients = data.len(),
        harmful = data.iter().filter(|c| c.result.is_harmful()).count(),
        "Classified ingredients"
    );

    Ok(Response::OK(ClassifyIngredientsResponse { data }))
}
