use clap::Parser;
use consumewise_core::domain::common::{ConsumeWiseConfig, LlmConfig, OcrConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "consumewise-api", about = "ConsumeWise backend API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix for every route, e.g. "/consumewise".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OcrArgs {
    #[arg(long = "ocr-endpoint", env = "OCR_API_URL")]
    pub endpoint: String,

    #[arg(long = "ocr-api-key", env = "OCR_API_KEY")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GENAI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-1.5-flash"
    )]
    pub gemini_model: String,
}

impl From<Args> for ConsumeWiseConfig {
    fn from(args: Args) -> Self {
        Self {
            ocr: OcrConfig {
                endpoint: args.ocr.endpoint,
                api_key: args.ocr.api_key,
            },
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
        }
    }
}
