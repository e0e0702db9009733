pub mod health;
pub mod ingredient;
pub mod profile;
pub mod recipe;
pub mod server;
