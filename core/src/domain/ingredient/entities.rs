use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single sighting of an ingredient, either typed by the user or detected in a photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientObservation {
    pub name: String,
    /// Certainty in `[0, 1]` that the ingredient is on hand.
    pub confidence: f64,
}

impl IngredientObservation {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }

    /// Typed-in ingredients are always fully trusted.
    pub fn manual(name: impl Into<String>) -> Self {
        Self::new(name, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAnalysis {
    /// Every reconciled ingredient, highest confidence first.
    pub ingredients: Vec<IngredientObservation>,
    /// Names pre-selected for recipe generation.
    pub confirmed: Vec<String>,
    /// Low-confidence candidates the user may promote with a toggle.
    pub suggestions: Vec<IngredientObservation>,
}

/// Insertion-ordered set of ingredient names the user accepted for generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ConfirmedSet(Vec<String>);

impl ConfirmedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from arbitrary names, keeping the first occurrence of each.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            let name = name.into();
            if !set.contains(&name) {
                set.0.push(name);
            }
        }
        set
    }

    /// Removes `name` if present, otherwise appends it at the end.
    pub fn toggle(&mut self, name: &str) {
        match self.0.iter().position(|n| n == name) {
            Some(index) => {
                self.0.remove(index);
            }
            None => self.0.push(name.to_string()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_removes_present_name() {
        let mut set = ConfirmedSet::from_names(["豚肉", "玉ねぎ", "にんじん"]);
        set.toggle("玉ねぎ");
        assert_eq!(set.as_slice(), ["豚肉", "にんじん"]);
    }

    #[test]
    fn toggle_appends_missing_name_at_end() {
        let mut set = ConfirmedSet::from_names(["豚肉"]);
        set.toggle("しいたけ");
        assert_eq!(set.as_slice(), ["豚肉", "しいたけ"]);
    }

    #[test]
    fn double_toggle_is_identity() {
        let original = ConfirmedSet::from_names(["豚肉", "玉ねぎ"]);

        let mut set = original.clone();
        set.toggle("しいたけ");
        set.toggle("しいたけ");
        assert_eq!(set, original);

        let mut set = original.clone();
        set.toggle("豚肉");
        set.toggle("豚肉");
        assert_eq!(set.as_slice(), ["玉ねぎ", "豚肉"]);
        assert_eq!(set.len(), original.len());
    }

    #[test]
    fn from_names_keeps_first_occurrence() {
        let set = ConfirmedSet::from_names(["えび", "玉ねぎ", "えび"]);
        assert_eq!(set.into_vec(), vec!["えび".to_string(), "玉ねぎ".to_string()]);
    }
}
