use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;

#[derive(Clone, Debug)]
pub struct ConsumeWiseConfig {
    pub ocr: OcrConfig,
    pub llm: LlmConfig,
}

#[derive(Clone, Debug)]
pub struct OcrConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
