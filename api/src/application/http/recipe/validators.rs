use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    #[validate(length(min = 1, message = "select at least one profile"))]
    pub profile_ids: Vec<Uuid>,

    #[validate(length(min = 1, message = "confirm at least one ingredient"))]
    pub confirmed_ingredients: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateOmakaseRecipeValidator {
    #[serde(default)]
    pub profile_ids: Vec<Uuid>,
}
