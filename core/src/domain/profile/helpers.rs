use uuid::Uuid;

use crate::domain::profile::entities::Profile;

/// Stored profiles whose id is in `profile_ids`, in stored order. Unknown ids are ignored.
pub fn select_profiles(profiles: &[Profile], profile_ids: &[Uuid]) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|profile| profile_ids.contains(&profile.id))
        .cloned()
        .collect()
}
