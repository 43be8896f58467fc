use axum::extract::State;
use base64::{Engine as _, engine::general_purpose};
use consumewise_core::domain::analysis::ports::AnalysisService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::OcrProxyRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OcrProxyResponse {
    pub text: String,
}

#[utoipa::path(
    post,
    path = "/api/ocr",
    tag = "analysis",
    summary = "Extract text from a label image",
    description = "Proxies a base64 image (plain or data URL) to the OCR service.",
    responses(
        (status = 200, body = OcrProxyResponse)
    ),
    request_body = OcrProxyRequest
)]
pub async fn ocr_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<OcrProxyRequest>,
) -> Result<Response<OcrProxyResponse>, ApiError> {
    // Browsers send the canvas capture as a data URL; strip the prefix.
    let encoded = match payload.image.split_once("base64,") {
        Some((_, rest)) => rest,
        None => payload.image.as_str(),
    };

    let image_data = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| ApiError::BadRequest("image is not valid base64".to_string()))?;

    let extraction = state
        .service
        .extract_text(image_data)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OcrProxyResponse {
        text: extraction.text,
    }))
}
