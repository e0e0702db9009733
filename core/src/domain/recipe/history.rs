use chrono::{DateTime, Duration, Utc};

use crate::domain::recipe::entities::RecipeHistoryItem;

pub const RETENTION_DAYS: i64 = 30;

/// Drops every entry generated at or before `now - RETENTION_DAYS`.
pub fn retention_filter(
    history: Vec<RecipeHistoryItem>,
    now: DateTime<Utc>,
) -> Vec<RecipeHistoryItem> {
    let cutoff = now - Duration::days(RETENTION_DAYS);
    history
        .into_iter()
        .filter(|item| item.generated_at > cutoff)
        .collect()
}

pub fn record_generation(
    mut history: Vec<RecipeHistoryItem>,
    meal_name: impl Into<String>,
    now: DateTime<Utc>,
) -> Vec<RecipeHistoryItem> {
    history.push(RecipeHistoryItem::new(meal_name, now));
    retention_filter(history, now)
}

/// Names of meals still inside the retention window. Repeats are kept.
pub fn recent_meal_names(history: &[RecipeHistoryItem], now: DateTime<Utc>) -> Vec<String> {
    let cutoff = now - Duration::days(RETENTION_DAYS);
    history
        .iter()
        .filter(|item| item.generated_at > cutoff)
        .map(|item| item.meal_name.clone())
        .collect()
}
