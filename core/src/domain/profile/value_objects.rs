use uuid::Uuid;

use crate::domain::profile::entities::{Difficulty, ExerciseIntensity};

#[derive(Debug, Clone)]
pub struct CreateProfileInput {
    pub name: String,
    pub age: u8,
    pub exercise_intensity: ExerciseIntensity,
    pub difficulty: Difficulty,
    pub disliked_ingredients: String,
    pub allergies: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub profile_id: Uuid,
    pub name: Option<String>,
    pub age: Option<u8>,
    pub exercise_intensity: Option<ExerciseIntensity>,
    pub difficulty: Option<Difficulty>,
    pub disliked_ingredients: Option<String>,
    pub allergies: Option<String>,
}

pub struct GetProfileInput {
    pub profile_id: Uuid,
}

pub struct DeleteProfileInput {
    pub profile_id: Uuid,
}
