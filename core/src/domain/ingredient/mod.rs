//! Deterministic harmful-ingredient classifier.
//!
//! Works without any model call: names are normalized and matched by substring against
//! three static lists (hidden sugars, preservatives, artificial additives).

pub mod catalog;
pub mod entities;
pub mod services;

pub use catalog::catalog;
pub use entities::*;
pub use services::{
    classification_report, classify, classify_ingredients, normalize, split_ingredient_list,
};
