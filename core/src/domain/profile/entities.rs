use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

pub const DEFAULT_AGE: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub age: u8,
    pub exercise_intensity: ExerciseIntensity,
    pub difficulty: Difficulty,
    /// Whitespace-delimited ingredient names the child will not eat.
    pub disliked_ingredients: String,
    /// Whitespace-delimited allergen ingredient names.
    pub allergies: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ExerciseIntensity {
    None,
    Light,
    #[default]
    Medium,
    High,
}

impl ExerciseIntensity {
    pub fn as_str(&self) -> &str {
        match self {
            ExerciseIntensity::None => "None",
            ExerciseIntensity::Light => "Light",
            ExerciseIntensity::Medium => "Medium",
            ExerciseIntensity::High => "High",
        }
    }
}

impl fmt::Display for ExerciseIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Profile {
    pub fn new(
        name: String,
        age: u8,
        exercise_intensity: ExerciseIntensity,
        difficulty: Difficulty,
        disliked_ingredients: String,
        allergies: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            age,
            exercise_intensity,
            difficulty,
            disliked_ingredients,
            allergies,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: Option<String>,
        age: Option<u8>,
        exercise_intensity: Option<ExerciseIntensity>,
        difficulty: Option<Difficulty>,
        disliked_ingredients: Option<String>,
        allergies: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(age) = age {
            self.age = age;
        }
        if let Some(exercise_intensity) = exercise_intensity {
            self.exercise_intensity = exercise_intensity;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(disliked_ingredients) = disliked_ingredients {
            self.disliked_ingredients = disliked_ingredients;
        }
        if let Some(allergies) = allergies {
            self.allergies = allergies;
        }
        self.updated_at = Utc::now();
    }
}
