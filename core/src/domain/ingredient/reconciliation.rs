use std::collections::HashMap;

use crate::domain::ingredient::entities::IngredientObservation;

/// Minimum confidence for an ingredient to be pre-selected for generation.
pub const CONFIRMATION_THRESHOLD: f64 = 0.6;

/// Splits free text on whitespace runs. Never yields empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Merges typed and detected ingredients into one list, one entry per name,
/// highest confidence first.
///
/// Manual tokens are scanned before any vision observation. A later duplicate
/// replaces the stored entry only when its confidence is strictly greater, and
/// the entry keeps the position of the name's first sighting so that ties sort
/// in first-seen order.
pub fn reconcile(
    manual_text: &str,
    vision_observations: &[Vec<IngredientObservation>],
) -> Vec<IngredientObservation> {
    let manual = tokenize(manual_text)
        .into_iter()
        .map(IngredientObservation::manual);
    let vision = vision_observations.iter().flatten().cloned();

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<IngredientObservation> = Vec::new();

    for observation in manual.chain(vision) {
        match positions.get(&observation.name) {
            Some(&index) => {
                if merged[index].confidence < observation.confidence {
                    merged[index] = observation;
                }
            }
            None => {
                positions.insert(observation.name.clone(), merged.len());
                merged.push(observation);
            }
        }
    }

    // sort_by is stable
    merged.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    merged
}

/// Names of every entry at or above [`CONFIRMATION_THRESHOLD`], in list order.
pub fn confirmed_subset(reconciled: &[IngredientObservation]) -> Vec<String> {
    reconciled
        .iter()
        .filter(|ingredient| ingredient.confidence >= CONFIRMATION_THRESHOLD)
        .map(|ingredient| ingredient.name.clone())
        .collect()
}

/// Entries below [`CONFIRMATION_THRESHOLD`], offered to the user as suggestions.
pub fn low_confidence(reconciled: &[IngredientObservation]) -> Vec<IngredientObservation> {
    reconciled
        .iter()
        .filter(|ingredient| ingredient.confidence < CONFIRMATION_THRESHOLD)
        .cloned()
        .collect()
}
