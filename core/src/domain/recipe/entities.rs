use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    pub energy: String,
    pub protein: String,
    pub fat: String,
    pub carbs: String,
}

/// A dinner menu as proposed by the recipe model. Every field is free text in Japanese.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub meal_name: String,
    pub main_dish: String,
    pub side_dish: String,
    pub soup: String,
    pub staple_amount: String,
    pub cook_time: String,
    pub nutrition: Nutrition,
    pub nutritionist_comment: String,
    pub shopping_list: Vec<String>,
    pub alternative_ingredients: Vec<String>,
    pub tips_for_kids: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeHistoryItem {
    pub meal_name: String,
    /// Milliseconds since the Unix epoch.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub generated_at: DateTime<Utc>,
}

impl RecipeHistoryItem {
    pub fn new(meal_name: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            meal_name: meal_name.into(),
            generated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GeneratedRecipe {
    pub recipe: Recipe,
    /// Ingredients handed to the model after exclusions were removed.
    pub ingredients: Vec<String>,
    /// Confirmed ingredients dropped because a selected profile excludes them.
    pub excluded_ingredients: Vec<String>,
}
