use axum::{
    Router,
    routing::{get, post},
};
use labellens_core::domain::label_analysis::LabelAnalysisService;
use utoipa::OpenApi;

use super::handlers::{
    classify_ingredients::{__path_classify_ingredients, classify_ingredients},
    get_harmful_ingredients::{__path_get_harmful_ingredients, get_harmful_ingredients},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(classify_ingredients, get_harmful_ingredients))]
pub struct IngredientApiDoc;

pub fn ingredient_routes<S>(state: AppState<S>) -> Router<AppState<S>>
where
    S: LabelAnalysisService + Clone + 'static,
{
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/ingredients/classify", root_path),
            post(classify_ingredients),
        )
        .route(
            &format!("{}/ingredients/harmful", root_path),
            get(get_harmful_ingredients),
        )
}
