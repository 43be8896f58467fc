use std::future::Future;

use crate::domain::{
    analysis::{
        entities::AnalysisRecord,
        value_objects::{AnalyzeImageInput, AnalyzeTextInput, OcrExtraction},
    },
    common::entities::app_errors::CoreError,
};

/// Client trait for the external OCR collaborator
#[cfg_attr(test, mockall::automock)]
pub trait OcrClient: Send + Sync {
    fn extract_text(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<OcrExtraction, CoreError>> + Send;
}

/// Client trait for the generative AI collaborator
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the label analysis pipeline
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    /// Full pipeline: OCR, LLM interpretation, score, review, highlights.
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<AnalysisRecord, CoreError>> + Send;

    /// LLM interpretation of already-extracted label text.
    fn analyze_text(
        &self,
        input: AnalyzeTextInput,
    ) -> impl Future<Output = Result<AnalysisRecord, CoreError>> + Send;

    /// OCR only, backing the OCR proxy route.
    fn extract_text(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<OcrExtraction, CoreError>> + Send;
}
