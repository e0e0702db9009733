use serde::{Deserialize, Serialize};
use supomeshi_core::domain::profile::entities::{DEFAULT_AGE, Difficulty, ExerciseIntensity};
use utoipa::ToSchema;
use validator::Validate;

fn default_age() -> u8 {
    DEFAULT_AGE
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProfileValidator {
    #[validate(length(min = 1, max = 50, message = "name is required"))]
    pub name: String,

    #[serde(default = "default_age")]
    #[validate(range(min = 6, max = 12, message = "age must be between 6 and 12"))]
    pub age: u8,

    #[serde(default)]
    pub exercise_intensity: ExerciseIntensity,

    #[serde(default)]
    pub difficulty: Difficulty,

    /// Space separated, e.g. "ピーマン にんじん".
    #[serde(default)]
    pub disliked_ingredients: String,

    /// Space separated, e.g. "卵 乳".
    #[serde(default)]
    pub allergies: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(range(min = 6, max = 12, message = "age must be between 6 and 12"))]
    pub age: Option<u8>,

    #[serde(default)]
    pub exercise_intensity: Option<ExerciseIntensity>,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub disliked_ingredients: Option<String>,

    #[serde(default)]
    pub allergies: Option<String>,
}
