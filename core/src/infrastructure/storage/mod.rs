pub mod json_store;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::Profile, ports::ProfileRepository},
    recipe::{entities::RecipeHistoryItem, ports::RecipeHistoryRepository},
};

pub use json_store::JsonCollectionStore;

pub const PROFILES_FILE: &str = "profiles.json";
pub const RECIPE_HISTORY_FILE: &str = "recipe_history.json";

pub type JsonProfileRepository = JsonCollectionStore<Profile>;
pub type JsonRecipeHistoryRepository = JsonCollectionStore<RecipeHistoryItem>;

impl ProfileRepository for JsonProfileRepository {
    async fn fetch_profiles(&self) -> Result<Vec<Profile>, CoreError> {
        Ok(self.read_all().await)
    }

    async fn save_profiles(&self, profiles: Vec<Profile>) -> Result<(), CoreError> {
        self.write_all(profiles).await
    }
}

impl RecipeHistoryRepository for JsonRecipeHistoryRepository {
    async fn fetch_history(&self) -> Result<Vec<RecipeHistoryItem>, CoreError> {
        Ok(self.read_all().await)
    }

    async fn save_history(&self, history: Vec<RecipeHistoryItem>) -> Result<(), CoreError> {
        self.write_all(history).await
    }
}
