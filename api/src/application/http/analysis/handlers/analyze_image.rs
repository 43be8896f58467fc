use axum::extract::{Multipart, State};
use consumewise_core::domain::analysis::{
    entities::{AnalysisRecord, AnalysisResult},
    ports::AnalysisService,
    value_objects::{AnalyzeImageInput, LabelHighlight},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub analysis: AnalysisResult,
    pub health_score: u8,
    pub overall_review: String,
    pub highlights: Vec<LabelHighlight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_image: Option<String>,
}

impl From<AnalysisRecord> for AnalyzeImageResponse {
    fn from(record: AnalysisRecord) -> Self {
        Self {
            analysis: record.analysis,
            health_score: record.health_score,
            overall_review: record.overall_review,
            highlights: record.highlights,
            highlighted_image: record.highlighted_image,
        }
    }
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze a food label photo",
    description = "Accepts a multipart upload (field `file` = image bytes), runs OCR and the \
                   nutritional analysis, and returns the structured payload with its health score.",
    responses(
        (status = 200, body = AnalyzeImageResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {e}")))?;

            if data.len() > MAX_IMAGE_SIZE {
                return Err(ApiError::BadRequest(format!(
                    "Image too large. Max size is {MAX_IMAGE_SIZE} bytes"
                )));
            }

            image_data = Some(data.to_vec());
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    let record = state
        .service
        .analyze_image(AnalyzeImageInput { image_data })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(record.into()))
}
