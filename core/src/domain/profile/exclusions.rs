use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{ingredient::reconciliation::tokenize, profile::entities::Profile};

/// Ingredient names that must not appear in a generated recipe, gathered from
/// the selected profiles. Dislikes and allergies stay apart so prompts can
/// phrase them differently, but membership checks cover both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExclusionSet {
    disliked: Vec<String>,
    allergies: Vec<String>,
    #[serde(skip)]
    members: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_disliked(&mut self, name: String) {
        if !self.disliked.contains(&name) {
            self.members.insert(name.clone());
            self.disliked.push(name);
        }
    }

    fn push_allergy(&mut self, name: String) {
        if !self.allergies.contains(&name) {
            self.members.insert(name.clone());
            self.allergies.push(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn disliked(&self) -> &[String] {
        &self.disliked
    }

    pub fn allergies(&self) -> &[String] {
        &self.allergies
    }

    /// Every excluded name once, dislikes first, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        let mut seen = HashSet::new();
        self.disliked
            .iter()
            .chain(self.allergies.iter())
            .filter(move |name| seen.insert(name.as_str()))
    }
}

pub fn compute_exclusions(profiles: &[Profile]) -> ExclusionSet {
    let mut exclusions = ExclusionSet::new();

    for profile in profiles {
        for name in tokenize(&profile.disliked_ingredients) {
            exclusions.push_disliked(name);
        }
        for name in tokenize(&profile.allergies) {
            exclusions.push_allergy(name);
        }
    }

    exclusions
}

/// Keeps the names that are not excluded, in their original order. Matching is
/// by exact string equality.
pub fn filter_excluded(confirmed: &[String], exclusions: &ExclusionSet) -> Vec<String> {
    confirmed
        .iter()
        .filter(|name| !exclusions.contains(name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::{Difficulty, ExerciseIntensity};

    fn profile(disliked: &str, allergies: &str) -> Profile {
        Profile::new(
            "たろう".to_string(),
            8,
            ExerciseIntensity::Medium,
            Difficulty::Normal,
            disliked.to_string(),
            allergies.to_string(),
        )
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn unions_dislikes_and_allergies_across_profiles() {
        let profiles = vec![profile("トマト", ""), profile("", "えび")];
        let exclusions = compute_exclusions(&profiles);

        let result = filter_excluded(&names(&["トマト", "えび", "玉ねぎ"]), &exclusions);

        assert_eq!(result, names(&["玉ねぎ"]));
        assert_eq!(exclusions.disliked(), names(&["トマト"]).as_slice());
        assert_eq!(exclusions.allergies(), names(&["えび"]).as_slice());
    }

    #[test]
    fn no_profiles_means_nothing_excluded() {
        let exclusions = compute_exclusions(&[]);

        assert!(exclusions.is_empty());
        let input = names(&["にんじん", "じゃがいも"]);
        assert_eq!(filter_excluded(&input, &exclusions), input);
    }

    #[test]
    fn matches_exact_tokens_only() {
        let exclusions = compute_exclusions(&[profile("トマト", "")]);

        let result = filter_excluded(&names(&["ミニトマト", "トマト"]), &exclusions);

        assert_eq!(result, names(&["ミニトマト"]));
    }

    #[test]
    fn duplicate_tokens_collapse() {
        let profiles = vec![
            profile("ピーマン  ピーマン", "卵"),
            profile("ピーマン", "卵 ピーマン"),
        ];
        let exclusions = compute_exclusions(&profiles);

        assert_eq!(exclusions.len(), 2);
        assert_eq!(
            exclusions.iter().cloned().collect::<Vec<_>>(),
            names(&["ピーマン", "卵"])
        );
    }

    #[test]
    fn filtering_everything_yields_empty() {
        let exclusions = compute_exclusions(&[profile("なす", "小麦")]);

        assert!(filter_excluded(&names(&["なす", "小麦"]), &exclusions).is_empty());
    }
}
