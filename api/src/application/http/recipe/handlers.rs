pub mod generate_omakase_recipe;
pub mod generate_recipe;
pub mod get_recipe_history;
