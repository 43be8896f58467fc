use crate::domain::{analysis::services::AnalysisServiceImpl, common::ConsumeWiseConfig};
use crate::infrastructure::{llm::GeminiLlmClient, ocr::RemoteOcrClient};

/// Concrete service type with the production adapters plugged in.
pub type ConsumeWiseService = AnalysisServiceImpl<RemoteOcrClient, GeminiLlmClient>;

pub fn create_service(config: ConsumeWiseConfig) -> ConsumeWiseService {
    let ocr_client = RemoteOcrClient::new(config.ocr.endpoint, config.ocr.api_key);
    let llm_client = GeminiLlmClient::new(config.llm.gemini_api_key, config.llm.gemini_model);

    AnalysisServiceImpl::new(ocr_client, llm_client)
}
