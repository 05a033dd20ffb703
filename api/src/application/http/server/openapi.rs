use utoipa::OpenApi;

use crate::application::http::{
    ingredient::router::IngredientApiDoc, label_analysis::router::LabelAnalysisApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LabelLens API"
    ),
    nest(
        (path = "", api = LabelAnalysisApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
    )
)]
pub struct ApiDoc;
