use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    llm::ports::LLMClient,
    profile::{
        entities::Profile,
        ports::{ProfileRepository, ProfileService},
        value_objects::{
            CreateProfileInput, DeleteProfileInput, GetProfileInput, UpdateProfileInput,
        },
    },
    recipe::ports::RecipeHistoryRepository,
};

fn validate_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::InvalidRequest(
            "profile name must not be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

impl<P, H, LLM, CK> ProfileService for Service<P, H, LLM, CK>
where
    P: ProfileRepository,
    H: RecipeHistoryRepository,
    LLM: LLMClient,
    CK: Clock,
{
    #[instrument(skip(self))]
    async fn list_profiles(&self) -> Result<Vec<Profile>, CoreError> {
        self.profile_repository.fetch_profiles().await
    }

    #[instrument(skip(self, input), fields(profile_id = %input.profile_id))]
    async fn get_profile(&self, input: GetProfileInput) -> Result<Profile, CoreError> {
        self.profile_repository
            .fetch_profiles()
            .await?
            .into_iter()
            .find(|profile| profile.id == input.profile_id)
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input))]
    async fn create_profile(&self, input: CreateProfileInput) -> Result<Profile, CoreError> {
        let name = validate_name(&input.name)?;

        let profile = Profile::new(
            name,
            input.age,
            input.exercise_intensity,
            input.difficulty,
            input.disliked_ingredients,
            input.allergies,
        );

        let _guard = self.profile_lock.lock().await;
        let mut profiles = self.profile_repository.fetch_profiles().await?;
        profiles.push(profile.clone());
        self.profile_repository.save_profiles(profiles).await?;

        info!(profile_id = %profile.id, "profile created");
        Ok(profile)
    }

    #[instrument(skip(self, input), fields(profile_id = %input.profile_id))]
    async fn update_profile(&self, input: UpdateProfileInput) -> Result<Profile, CoreError> {
        let name = input.name.as_deref().map(validate_name).transpose()?;

        let _guard = self.profile_lock.lock().await;
        let mut profiles = self.profile_repository.fetch_profiles().await?;
        let profile = profiles
            .iter_mut()
            .find(|profile| profile.id == input.profile_id)
            .ok_or(CoreError::NotFound)?;

        profile.update(
            name,
            input.age,
            input.exercise_intensity,
            input.difficulty,
            input.disliked_ingredients,
            input.allergies,
        );
        let updated = profile.clone();

        self.profile_repository.save_profiles(profiles).await?;

        Ok(updated)
    }

    #[instrument(skip(self, input), fields(profile_id = %input.profile_id))]
    async fn delete_profile(&self, input: DeleteProfileInput) -> Result<(), CoreError> {
        let _guard = self.profile_lock.lock().await;
        let mut profiles = self.profile_repository.fetch_profiles().await?;
        let before = profiles.len();
        profiles.retain(|profile| profile.id != input.profile_id);

        if profiles.len() == before {
            return Err(CoreError::NotFound);
        }

        self.profile_repository.save_profiles(profiles).await?;
        info!("profile deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::{
        domain::{
            common::ports::MockClock,
            profile::entities::{Difficulty, ExerciseIntensity},
        },
        infrastructure::{
            llm::fake_client::FakeLLMClient,
            storage::{JsonProfileRepository, JsonRecipeHistoryRepository},
        },
    };

    type TestService =
        Service<JsonProfileRepository, JsonRecipeHistoryRepository, FakeLLMClient, MockClock>;

    fn service() -> TestService {
        Service::new(
            JsonProfileRepository::in_memory(),
            JsonRecipeHistoryRepository::in_memory(),
            FakeLLMClient::new(),
            MockClock::new(),
        )
    }

    fn create_input(name: &str) -> CreateProfileInput {
        CreateProfileInput {
            name: name.to_string(),
            age: 7,
            exercise_intensity: ExerciseIntensity::High,
            difficulty: Difficulty::Easy,
            disliked_ingredients: "ピーマン".to_string(),
            allergies: String::new(),
        }
    }

    #[tokio::test]
    async fn create_then_list_returns_profile() {
        let service = service();

        let created = service.create_profile(create_input("  はなこ ")).await.unwrap();
        let profiles = service.list_profiles().await.unwrap();

        assert_eq!(created.name, "はなこ");
        assert_eq!(profiles, vec![created]);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let service = service();

        let result = service.create_profile(create_input("   ")).await;

        assert!(matches!(result, Err(CoreError::InvalidRequest(_))));
        assert!(service.list_profiles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let service = service();
        let created = service.create_profile(create_input("じろう")).await.unwrap();

        let updated = service
            .update_profile(UpdateProfileInput {
                profile_id: created.id,
                allergies: Some("卵 乳".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "じろう");
        assert_eq!(updated.allergies, "卵 乳");
        assert_eq!(updated.disliked_ingredients, "ピーマン");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        let service = service();
        let missing = Uuid::new_v4();

        let get = service
            .get_profile(GetProfileInput { profile_id: missing })
            .await;
        let delete = service
            .delete_profile(DeleteProfileInput { profile_id: missing })
            .await;

        assert_eq!(get, Err(CoreError::NotFound));
        assert_eq!(delete, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_profile() {
        let service = service();
        let created = service.create_profile(create_input("さくら")).await.unwrap();

        service
            .delete_profile(DeleteProfileInput {
                profile_id: created.id,
            })
            .await
            .unwrap();

        assert!(service.list_profiles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_creates_on_disk_keep_every_profile() {
        let dir = tempfile::tempdir().unwrap();
        let service = Service::new(
            JsonProfileRepository::open(dir.path().join("profiles.json")).await,
            JsonRecipeHistoryRepository::in_memory(),
            FakeLLMClient::new(),
            MockClock::new(),
        );

        let (first, second) = tokio::join!(
            service.create_profile(create_input("たろう")),
            service.create_profile(create_input("はなこ"))
        );
        first.unwrap();
        second.unwrap();

        let reopened = JsonProfileRepository::open(dir.path().join("profiles.json")).await;
        assert_eq!(service.list_profiles().await.unwrap().len(), 2);
        assert_eq!(reopened.fetch_profiles().await.unwrap().len(), 2);
    }
}
