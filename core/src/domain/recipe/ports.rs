use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{GeneratedRecipe, RecipeHistoryItem},
        value_objects::{GenerateOmakaseRecipeInput, GenerateRecipeInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeHistoryRepository: Send + Sync {
    fn fetch_history(
        &self,
    ) -> impl Future<Output = Result<Vec<RecipeHistoryItem>, CoreError>> + Send;

    fn save_history(
        &self,
        history: Vec<RecipeHistoryItem>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for dinner generation and the history that keeps menus varied
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Generates a menu from the user's confirmed ingredients
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    /// Generates a menu without an ingredient list, letting the model pick seasonal staples
    fn generate_omakase_recipe(
        &self,
        input: GenerateOmakaseRecipeInput,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    fn get_recipe_history(
        &self,
    ) -> impl Future<Output = Result<Vec<RecipeHistoryItem>, CoreError>> + Send;
}
