use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::Profile,
        value_objects::{CreateProfileInput, DeleteProfileInput, GetProfileInput, UpdateProfileInput},
    },
};

/// Persistence port for the profile collection. Reads and writes the whole
/// collection at once.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn fetch_profiles(&self) -> impl Future<Output = Result<Vec<Profile>, CoreError>> + Send;

    fn save_profiles(
        &self,
        profiles: Vec<Profile>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProfileService: Send + Sync {
    fn list_profiles(&self) -> impl Future<Output = Result<Vec<Profile>, CoreError>> + Send;

    fn get_profile(
        &self,
        input: GetProfileInput,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn create_profile(
        &self,
        input: CreateProfileInput,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn update_profile(
        &self,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn delete_profile(
        &self,
        input: DeleteProfileInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
