use uuid::Uuid;

use crate::domain::llm::value_objects::ImageInput;

#[derive(Debug, Clone, Default)]
pub struct AnalyzeIngredientsInput {
    /// Whitespace-delimited ingredient names typed by the user.
    pub manual_text: String,
    pub images: Vec<ImageInput>,
    pub profile_ids: Vec<Uuid>,
}
