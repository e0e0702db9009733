use tracing::info;

use crate::{
    domain::{
        common::{SupomeshiConfig, entities::app_errors::CoreError, ports::Clock, services::Service},
        recipe::{history::retention_filter, ports::RecipeHistoryRepository},
    },
    infrastructure::{
        clock::SystemClock,
        llm::LLMProvider,
        storage::{
            JsonProfileRepository, JsonRecipeHistoryRepository, PROFILES_FILE,
            RECIPE_HISTORY_FILE,
        },
    },
};

pub type SupomeshiService =
    Service<JsonProfileRepository, JsonRecipeHistoryRepository, LLMProvider, SystemClock>;

pub async fn create_service(config: SupomeshiConfig) -> Result<SupomeshiService, CoreError> {
    let (profiles, history) = match &config.storage.data_dir {
        Some(dir) => (
            JsonProfileRepository::open(dir.join(PROFILES_FILE)).await,
            JsonRecipeHistoryRepository::open(dir.join(RECIPE_HISTORY_FILE)).await,
        ),
        None => (
            JsonProfileRepository::in_memory(),
            JsonRecipeHistoryRepository::in_memory(),
        ),
    };

    let clock = SystemClock;
    prune_history(&history, &clock).await?;

    let llm_client = LLMProvider::from_config(&config.llm)?;
    info!(
        provider = llm_client.kind().as_str(),
        persistent = config.storage.data_dir.is_some(),
        "supomeshi service ready"
    );

    Ok(Service::new(profiles, history, llm_client, clock))
}

/// Applies the retention window to the stored log, writing it back only when
/// something expired.
async fn prune_history<H: RecipeHistoryRepository, CK: Clock>(
    repository: &H,
    clock: &CK,
) -> Result<(), CoreError> {
    let history = repository.fetch_history().await?;
    let before = history.len();
    let kept = retention_filter(history, clock.now());

    if kept.len() != before {
        info!(expired = before - kept.len(), "pruned recipe history");
        repository.save_history(kept).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::domain::{
        common::{LLMConfig, LLMProviderKind, StorageConfig, ports::MockClock},
        recipe::entities::RecipeHistoryItem,
    };

    #[tokio::test]
    async fn pruning_drops_expired_entries() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        let repository = JsonRecipeHistoryRepository::with_items(vec![
            RecipeHistoryItem::new("すき焼き", now - Duration::days(31)),
            RecipeHistoryItem::new("肉じゃが", now - Duration::days(1)),
        ]);

        prune_history(&repository, &clock).await.unwrap();

        assert_eq!(
            repository.fetch_history().await.unwrap(),
            vec![RecipeHistoryItem::new("肉じゃが", now - Duration::days(1))]
        );
    }

    #[tokio::test]
    async fn service_persists_to_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = SupomeshiConfig {
            storage: StorageConfig {
                data_dir: Some(dir.path().to_path_buf()),
            },
            llm: LLMConfig {
                provider: LLMProviderKind::Fake,
                gemini_api_key: String::new(),
                gemini_vision_model: "gemini-2.5-flash".to_string(),
                gemini_recipe_model: "gemini-2.5-pro".to_string(),
            },
        };

        let service = create_service(config).await.unwrap();
        service
            .recipe_history_repository
            .save_history(vec![RecipeHistoryItem::new("親子丼", Utc::now())])
            .await
            .unwrap();

        assert!(dir.path().join(RECIPE_HISTORY_FILE).exists());
    }
}
