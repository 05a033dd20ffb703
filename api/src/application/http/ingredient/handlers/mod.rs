pub mod classify_ingredients;
pub mod get_harmful_ingredients;
