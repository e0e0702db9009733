use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    ingredient::entities::ConfirmedSet,
    llm::ports::LLMClient,
    profile::{
        entities::Profile,
        exclusions::{ExclusionSet, compute_exclusions, filter_excluded},
        helpers::select_profiles,
        ports::ProfileRepository,
    },
    recipe::{
        entities::{GeneratedRecipe, Recipe, RecipeHistoryItem},
        helpers::parse_recipe_response,
        history::{recent_meal_names, record_generation, retention_filter},
        ports::{RecipeHistoryRepository, RecipeService},
        prompts::{RECIPE_SYSTEM_INSTRUCTION, build_recipe_prompt},
        schema::get_recipe_schema,
        value_objects::{GenerateOmakaseRecipeInput, GenerateRecipeInput},
    },
};

impl<P, H, LLM, CK> Service<P, H, LLM, CK>
where
    P: ProfileRepository,
    H: RecipeHistoryRepository,
    LLM: LLMClient,
    CK: Clock,
{
    /// Calls the recipe model and records the meal. History is written only
    /// after a reply was parsed successfully.
    async fn generate_and_record(
        &self,
        profiles: &[Profile],
        exclusions: &ExclusionSet,
        ingredients: &[String],
    ) -> Result<Recipe, CoreError> {
        let history = self.recipe_history_repository.fetch_history().await?;
        let recent = recent_meal_names(&history, self.clock.now());

        let prompt = build_recipe_prompt(profiles, exclusions, ingredients, &recent);
        let raw = self
            .llm_client
            .generate_with_text(
                Some(RECIPE_SYSTEM_INSTRUCTION.to_string()),
                prompt,
                get_recipe_schema(),
            )
            .await?;
        let recipe = parse_recipe_response(&raw)?;

        // Re-read under the lock: other generations may have finished while
        // the model was running.
        let _guard = self.history_lock.lock().await;
        let history = self.recipe_history_repository.fetch_history().await?;
        let history = record_generation(history, recipe.meal_name.clone(), self.clock.now());
        self.recipe_history_repository.save_history(history).await?;

        info!(meal_name = %recipe.meal_name, "recipe generated");
        Ok(recipe)
    }
}

impl<P, H, LLM, CK> RecipeService for Service<P, H, LLM, CK>
where
    P: ProfileRepository,
    H: RecipeHistoryRepository,
    LLM: LLMClient,
    CK: Clock,
{
    #[instrument(
        skip(self, input),
        fields(
            profiles = input.profile_ids.len(),
            ingredients = input.confirmed_ingredients.len()
        )
    )]
    async fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> Result<GeneratedRecipe, CoreError> {
        let stored = self.profile_repository.fetch_profiles().await?;
        let profiles = select_profiles(&stored, &input.profile_ids);
        if profiles.is_empty() {
            return Err(CoreError::InvalidRequest(
                "select at least one profile".to_string(),
            ));
        }

        let confirmed = ConfirmedSet::from_names(
            input
                .confirmed_ingredients
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
        );
        if confirmed.is_empty() {
            return Err(CoreError::InvalidRequest(
                "confirm at least one ingredient".to_string(),
            ));
        }

        let exclusions = compute_exclusions(&profiles);
        let ingredients = filter_excluded(confirmed.as_slice(), &exclusions);
        if ingredients.is_empty() {
            return Err(CoreError::AllIngredientsExcluded);
        }

        let excluded_ingredients = confirmed
            .as_slice()
            .iter()
            .filter(|name| exclusions.contains(name))
            .cloned()
            .collect();

        let recipe = self
            .generate_and_record(&profiles, &exclusions, &ingredients)
            .await?;

        Ok(GeneratedRecipe {
            recipe,
            ingredients,
            excluded_ingredients,
        })
    }

    #[instrument(skip(self, input), fields(profiles = input.profile_ids.len()))]
    async fn generate_omakase_recipe(
        &self,
        input: GenerateOmakaseRecipeInput,
    ) -> Result<GeneratedRecipe, CoreError> {
        let stored = self.profile_repository.fetch_profiles().await?;
        let profiles = select_profiles(&stored, &input.profile_ids);
        let exclusions = compute_exclusions(&profiles);

        let recipe = self.generate_and_record(&profiles, &exclusions, &[]).await?;

        Ok(GeneratedRecipe {
            recipe,
            ingredients: Vec::new(),
            excluded_ingredients: Vec::new(),
        })
    }

    #[instrument(skip(self))]
    async fn get_recipe_history(&self) -> Result<Vec<RecipeHistoryItem>, CoreError> {
        let history = self.recipe_history_repository.fetch_history().await?;
        Ok(retention_filter(history, self.clock.now()))
    }
}
