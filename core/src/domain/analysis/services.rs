use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    analysis::{
        entities::{AnalysisRecord, AnalysisResult, InputType},
        highlight::classify_regions,
        ports::{AnalysisService, LlmClient, OcrClient},
        prompt::build_analysis_prompt,
        schema::get_analysis_schema,
        score::{compute_health_score, overall_review},
        value_objects::{AnalyzeImageInput, AnalyzeTextInput, OcrExtraction},
    },
    common::entities::app_errors::CoreError,
};

/// Label analysis pipeline over the two external collaborators.
#[derive(Debug, Clone)]
pub struct AnalysisServiceImpl<O, L> {
    ocr_client: O,
    llm_client: L,
}

impl<O, L> AnalysisServiceImpl<O, L>
where
    O: OcrClient,
    L: LlmClient,
{
    pub fn new(ocr_client: O, llm_client: L) -> Self {
        Self {
            ocr_client,
            llm_client,
        }
    }

    async fn interpret(&self, label_text: &str) -> Result<(AnalysisResult, String), CoreError> {
        let prompt = build_analysis_prompt(label_text);
        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_analysis_schema())
            .await?;

        let analysis = parse_analysis_response(&raw_response)?;
        Ok((analysis, raw_response))
    }
}

impl<O, L> AnalysisService for AnalysisServiceImpl<O, L>
where
    O: OcrClient,
    L: LlmClient,
{
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<AnalysisRecord, CoreError> {
        let extraction = self.ocr_client.extract_text(input.image_data).await?;
        if extraction.text.trim().is_empty() {
            return Err(CoreError::NoTextDetected);
        }

        let (analysis, raw_response) = self.interpret(&extraction.text).await?;

        let health_score = compute_health_score(&analysis);
        let review = overall_review(&analysis, health_score);
        let highlights = classify_regions(&analysis, &extraction.regions);

        let record = AnalysisRecord::new(
            InputType::Image,
            analysis,
            health_score,
            review,
            highlights,
            extraction.annotated_image,
            raw_response,
        );
        tracing::info!(
            analysis_id = %record.id,
            health_score = record.health_score,
            "label image analyzed"
        );

        Ok(record)
    }

    async fn analyze_text(&self, input: AnalyzeTextInput) -> Result<AnalysisRecord, CoreError> {
        if input.text.trim().is_empty() {
            return Err(CoreError::Invalid("text must not be empty".to_string()));
        }

        let (analysis, raw_response) = self.interpret(&input.text).await?;

        let health_score = compute_health_score(&analysis);
        let review = overall_review(&analysis, health_score);

        let record = AnalysisRecord::new(
            InputType::Text,
            analysis,
            health_score,
            review,
            Vec::new(),
            None,
            raw_response,
        );
        tracing::info!(
            analysis_id = %record.id,
            health_score = record.health_score,
            "label text analyzed"
        );

        Ok(record)
    }

    async fn extract_text(&self, image_data: Vec<u8>) -> Result<OcrExtraction, CoreError> {
        let extraction = self.ocr_client.extract_text(image_data).await?;
        if extraction.text.trim().is_empty() {
            return Err(CoreError::NoTextDetected);
        }

        Ok(extraction)
    }
}

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Salvages the outermost JSON object from a raw LLM reply, tolerating prose
/// or stray tokens around it, and deserializes the analysis payload.
pub fn parse_analysis_response(raw_response: &str) -> Result<AnalysisResult, CoreError> {
    let json_str = JSON_OBJECT
        .find(raw_response)
        .map(|m| m.as_str())
        .ok_or_else(|| {
            tracing::error!("no JSON object found in LLM response");
            CoreError::AnalysisFailed("no JSON object in model response".to_string())
        })?;

    serde_json::from_str(json_str).map_err(|e| {
        tracing::error!("failed to parse LLM response: {}", e);
        CoreError::AnalysisFailed(format!("invalid analysis payload: {e}"))
    })
}
