use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    common::ports::Clock, llm::ports::LLMClient, profile::ports::ProfileRepository,
    recipe::ports::RecipeHistoryRepository,
};

/// Application service shared by every domain. Each domain implements its
/// service trait on this struct in its own `services.rs`.
pub struct Service<P, H, LLM, CK>
where
    P: ProfileRepository,
    H: RecipeHistoryRepository,
    LLM: LLMClient,
    CK: Clock,
{
    pub(crate) profile_repository: Arc<P>,
    pub(crate) recipe_history_repository: Arc<H>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) clock: Arc<CK>,
    /// Held across every fetch-modify-save of the profile collection.
    pub(crate) profile_lock: Arc<Mutex<()>>,
    /// Held across every fetch-modify-save of the recipe history.
    pub(crate) history_lock: Arc<Mutex<()>>,
}

impl<P, H, LLM, CK> Service<P, H, LLM, CK>
where
    P: ProfileRepository,
    H: RecipeHistoryRepository,
    LLM: LLMClient,
    CK: Clock,
{
    pub fn new(
        profile_repository: P,
        recipe_history_repository: H,
        llm_client: LLM,
        clock: CK,
    ) -> Self {
        Self {
            profile_repository: Arc::new(profile_repository),
            recipe_history_repository: Arc::new(recipe_history_repository),
            llm_client: Arc::new(llm_client),
            clock: Arc::new(clock),
            profile_lock: Arc::new(Mutex::new(())),
            history_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn llm_client(&self) -> &LLM {
        &self.llm_client
    }
}

impl<P, H, LLM, CK> Clone for Service<P, H, LLM, CK>
where
    P: ProfileRepository,
    H: RecipeHistoryRepository,
    LLM: LLMClient,
    CK: Clock,
{
    fn clone(&self) -> Self {
        Self {
            profile_repository: Arc::clone(&self.profile_repository),
            recipe_history_repository: Arc::clone(&self.recipe_history_repository),
            llm_client: Arc::clone(&self.llm_client),
            clock: Arc::clone(&self.clock),
            profile_lock: Arc::clone(&self.profile_lock),
            history_lock: Arc::clone(&self.history_lock),
        }
    }
}
