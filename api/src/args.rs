use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueEnum};
use supomeshi_core::domain::common::{LLMConfig, LLMProviderKind, StorageConfig, SupomeshiConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "supomeshi-api", version, about = "Dinner planning API for young athletes")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix added to every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    /// Directory for profiles and recipe history. Data is kept in memory when unset.
    #[arg(long, env = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProvider {
    Gemini,
    Fake,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value_t = LlmProvider::Gemini)]
    pub provider: LlmProvider,

    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_VISION_MODEL", default_value = "gemini-2.5-flash")]
    pub vision_model: String,

    #[arg(long, env = "GEMINI_RECIPE_MODEL", default_value = "gemini-2.5-pro")]
    pub recipe_model: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<LlmProvider> for LLMProviderKind {
    fn from(value: LlmProvider) -> Self {
        match value {
            LlmProvider::Gemini => LLMProviderKind::Gemini,
            LlmProvider::Fake => LLMProviderKind::Fake,
        }
    }
}

impl From<Args> for SupomeshiConfig {
    fn from(args: Args) -> Self {
        SupomeshiConfig {
            storage: StorageConfig {
                data_dir: args.storage.data_dir,
            },
            llm: LLMConfig {
                provider: args.llm.provider.into(),
                gemini_api_key: args.llm.gemini_api_key,
                gemini_vision_model: args.llm.vision_model,
                gemini_recipe_model: args.llm.recipe_model,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_into_config() {
        let args = Args::parse_from([
            "supomeshi-api",
            "--llm-provider",
            "fake",
            "--data-dir",
            "/tmp/supomeshi",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(args.server.port, 3333);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );

        let config = SupomeshiConfig::from(args);
        assert_eq!(config.llm.provider, LLMProviderKind::Fake);
        assert_eq!(config.llm.gemini_recipe_model, "gemini-2.5-pro");
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/tmp/supomeshi"))
        );
    }
}
