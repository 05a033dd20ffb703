pub mod health;
pub mod ingredient;
pub mod label_analysis;
pub mod server;
