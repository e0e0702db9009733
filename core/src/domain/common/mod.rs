use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod ports;
pub mod services;

#[derive(Clone, Debug)]
pub struct SupomeshiConfig {
    pub storage: StorageConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug, Default)]
pub struct StorageConfig {
    /// Directory holding `profiles.json` and `recipe_history.json`.
    /// Without it both collections live in memory only.
    pub data_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LLMProviderKind {
    #[default]
    Gemini,
    Fake,
}

impl LLMProviderKind {
    pub fn as_str(&self) -> &str {
        match self {
            LLMProviderKind::Gemini => "gemini",
            LLMProviderKind::Fake => "fake",
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProviderKind,
    pub gemini_api_key: String,
    pub gemini_vision_model: String,
    pub gemini_recipe_model: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
