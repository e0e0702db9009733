pub mod common;
pub mod ingredient;
pub mod llm;
pub mod profile;
pub mod recipe;
