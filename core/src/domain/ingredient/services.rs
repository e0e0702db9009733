use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    ingredient::{
        entities::IngredientAnalysis,
        helpers::parse_vision_response,
        ports::IngredientService,
        prompts::render_vision_prompt,
        reconciliation::{confirmed_subset, low_confidence, reconcile},
        schema::get_ingredient_schema,
        value_objects::AnalyzeIngredientsInput,
    },
    llm::ports::LLMClient,
    profile::{helpers::select_profiles, ports::ProfileRepository},
    recipe::ports::RecipeHistoryRepository,
};

impl<P, H, LLM, CK> IngredientService for Service<P, H, LLM, CK>
where
    P: ProfileRepository,
    H: RecipeHistoryRepository,
    LLM: LLMClient,
    CK: Clock,
{
    #[instrument(
        skip(self, input),
        fields(images = input.images.len(), profiles = input.profile_ids.len())
    )]
    async fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> Result<IngredientAnalysis, CoreError> {
        if input.images.is_empty() && input.manual_text.trim().is_empty() {
            return Err(CoreError::InvalidRequest(
                "provide at least one image or some ingredient text".to_string(),
            ));
        }

        if input.profile_ids.is_empty() {
            return Err(CoreError::InvalidRequest(
                "select at least one profile".to_string(),
            ));
        }

        let profiles = self.profile_repository.fetch_profiles().await?;
        if select_profiles(&profiles, &input.profile_ids).is_empty() {
            return Err(CoreError::InvalidRequest(
                "none of the selected profiles exist".to_string(),
            ));
        }

        let mut vision_observations = Vec::new();
        if !input.images.is_empty() {
            let raw = self
                .llm_client
                .generate_with_images(render_vision_prompt(), input.images, get_ingredient_schema())
                .await?;
            vision_observations.push(parse_vision_response(&raw)?);
        }

        let ingredients = reconcile(&input.manual_text, &vision_observations);
        let confirmed = confirmed_subset(&ingredients);
        let suggestions = low_confidence(&ingredients);

        info!(
            ingredients = ingredients.len(),
            confirmed = confirmed.len(),
            "ingredients analyzed"
        );

        Ok(IngredientAnalysis {
            ingredients,
            confirmed,
            suggestions,
        })
    }
}
