use clap::Parser;
use tastefusion_core::domain::common::{LLMConfig, TasteFusionConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "tastefusion-api", version, about = "TasteFusion API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "openrouter-api-key", env = "OPENROUTER_API_KEY", default_value = "")]
    pub api_key: String,

    #[arg(
        long = "openrouter-base-url",
        env = "OPENROUTER_BASE_URL",
        default_value = "https://openrouter.ai/api/v1"
    )]
    pub base_url: String,

    #[arg(
        long = "llm-model",
        env = "LLM_MODEL",
        default_value = "google/gemini-2.0-flash-exp:free"
    )]
    pub model: String,

    #[arg(long = "llm-max-attempts", env = "LLM_MAX_ATTEMPTS", default_value_t = 3)]
    pub max_attempts: u32,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for TasteFusionConfig {
    fn from(args: Args) -> Self {
        TasteFusionConfig {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                base_url: args.llm.base_url,
                model: args.llm.model,
                max_attempts: args.llm.max_attempts,
                timeout_secs: args.llm.timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_into_core_config() {
        let args = Args::parse_from([
            "tastefusion-api",
            "--server-port",
            "9000",
            "--allowed-origins",
            "http://localhost:3000,http://localhost:5173",
            "--openrouter-api-key",
            "sk-test",
            "--llm-max-attempts",
            "5",
        ]);

        assert_eq!(args.server.port, 9000);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );

        let config = TasteFusionConfig::from(args);
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.llm.max_attempts, 5);
    }
}
