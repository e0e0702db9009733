use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct GenerateRecipeInput {
    pub profile_ids: Vec<Uuid>,
    pub confirmed_ingredients: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateOmakaseRecipeInput {
    pub profile_ids: Vec<Uuid>,
}
