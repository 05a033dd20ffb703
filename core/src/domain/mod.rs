pub mod common;
pub mod ingredient;
pub mod label_analysis;
