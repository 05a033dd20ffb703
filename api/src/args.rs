use std::net::{AddrParseError, IpAddr, SocketAddr};

use clap::Parser;
use labellens_core::domain::common::{LLMConfig, LLMProvider, LabelLensConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "labellens-api", version, about = "Food label analysis API")]
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
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// `groq` or `gemini`
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", default_value = "groq")]
    pub provider: LLMProvider,

    #[arg(long = "groq-api-key", env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_api_key: Option<String>,

    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long = "vision-model", env = "LLM_VISION_MODEL")]
    pub vision_model: Option<String>,

    #[arg(long = "analysis-model", env = "LLM_ANALYSIS_MODEL")]
    pub analysis_model: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Overridden by `RUST_LOG` when set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl ServerArgs {
    /// Works for IPv6 hosts such as `::` as well as IPv4.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.trim().parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl LlmArgs {
    /// The key for the selected provider; the other provider's key is ignored.
    pub fn api_key(&self) -> String {
        let key = match self.provider {
            LLMProvider::Groq => &self.groq_api_key,
            LLMProvider::Gemini => &self.gemini_api_key,
        };
        key.clone().unwrap_or_default()
    }
}

impl From<Args> for LabelLensConfig {
    fn from(args: Args) -> Self {
        let provider = args.llm.provider;
        let api_key = args.llm.api_key();

        LabelLensConfig {
            llm: LLMConfig::for_provider(
                provider,
                api_key,
                args.llm.base_url,
                args.llm.vision_model,
                args.llm.analysis_model,
            ),
        }
    }
}
