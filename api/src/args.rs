use std::path::PathBuf;
use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use dieta_core::domain::common::{DietaConfig, LLMConfig, StorageConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "dieta", version, about = "Diet tracker API with AI macro estimation")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api". Empty serves from the root.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    /// Directory holding one JSON file per stored record.
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    /// Longest wait before retrying a rate-limited request.
    #[arg(long, env = "GEMINI_MAX_RETRY_WAIT_SECS", default_value_t = 60)]
    pub gemini_max_retry_wait_secs: u64,
}

impl From<Args> for DietaConfig {
    fn from(args: Args) -> Self {
        DietaConfig {
            storage: StorageConfig {
                data_dir: args.storage.data_dir,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key.filter(|key| !key.trim().is_empty()),
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                max_retry_wait: Duration::from_secs(args.llm.gemini_max_retry_wait_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from([
            "dieta",
            "--data-dir",
            "/tmp/dieta",
            "--gemini-api-key",
            "abc",
            "--gemini-model",
            "gemini-test",
            "--gemini-max-retry-wait-secs",
            "0",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = DietaConfig::from(args);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/dieta"));
        assert_eq!(config.llm.gemini_api_key.as_deref(), Some("abc"));
        assert_eq!(config.llm.gemini_model, "gemini-test");
        assert_eq!(config.llm.max_retry_wait, Duration::ZERO);
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let args = Args::parse_from(["dieta", "--gemini-api-key", "  "]);

        assert_eq!(DietaConfig::from(args).llm.gemini_api_key, None);
    }
}
