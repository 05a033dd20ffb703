use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::http::label_analysis::validators::MAX_TEXT_LENGTH;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "has_ingredients"))]
pub struct ClassifyIngredientsRequest {
    /// One ingredient per entry.
    #[serde(default)]
    #[validate(length(max = 500, message = "At most 500 ingredients per request"))]
    pub ingredients: Option<Vec<String>>,

    /// A pasted ingredient list, split on commas and semicolons outside parentheses.
    #[serde(default)]
    #[validate(length(
        max = MAX_TEXT_LENGTH,
        message = "Text must be at most 20000 characters"
    ))]
    pub text: Option<String>,
}

fn has_ingredients(request: &ClassifyIngredientsRequest) -> Result<(), ValidationError> {
    let has_list = request
        .ingredients
        .as_ref()
        .is_some_and(|names| names.iter().any(|name| !name.trim().is_empty()));
    let has_text = request
        .text
        .as_ref()
        .is_some_and(|text| !text.trim().is_empty());

    if has_list || has_text {
        return Ok(());
    }

    Err(ValidationError::new("missing_ingredients")
        .with_message(Cow::Borrowed("No ingredients provided")))
}
