use axum::extract::State;
use consumewise_core::domain::analysis::{
    entities::{AnalysisRecord, AnalysisResult},
    ports::AnalysisService,
    value_objects::AnalyzeTextInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::AnalyzeTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeTextResponse {
    pub analysis: AnalysisResult,
    pub health_score: u8,
    pub overall_review: String,
}

impl From<AnalysisRecord> for AnalyzeTextResponse {
    fn from(record: AnalysisRecord) -> Self {
        Self {
            analysis: record.analysis,
            health_score: record.health_score,
            overall_review: record.overall_review,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analysis",
    summary = "Analyze extracted label text",
    description = "Runs the nutritional analysis over text already pulled off a label.",
    responses(
        (status = 200, body = AnalyzeTextResponse)
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<AnalyzeTextResponse>, ApiError> {
    let record = state
        .service
        .analyze_text(AnalyzeTextInput { text: payload.text })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(record.into()))
}
