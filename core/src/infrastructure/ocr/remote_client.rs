use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    analysis::{
        ports::OcrClient,
        value_objects::{OcrExtraction, OcrRegion},
    },
    common::entities::app_errors::CoreError,
};

/// Client for the external OCR service.
///
/// Contract: `POST {endpoint}` with `{"image": "<base64>"}` (bearer key when
/// configured); the service answers `{"text": "...", "regions": [...],
/// "annotated_image": "..."}` with `regions` and `annotated_image` optional,
/// or `{"error": "..."}` with a non-2xx status.
#[derive(Debug, Clone)]
pub struct RemoteOcrClient {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct OcrRequest {
    image: String,
}

#[derive(Debug, Deserialize)]
struct OcrResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    regions: Option<Vec<OcrRegionPayload>>,
    #[serde(default)]
    annotated_image: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OcrRegionPayload {
    text: String,
    quad: [[f32; 2]; 4],
}

impl RemoteOcrClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            endpoint,
            api_key,
            client: Client::new(),
        }
    }
}

impl OcrClient for RemoteOcrClient {
    async fn extract_text(&self, image_data: Vec<u8>) -> Result<OcrExtraction, CoreError> {
        let request = OcrRequest {
            image: general_purpose::STANDARD.encode(&image_data),
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(api_key) = self.api_key.as_deref() {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("OCR API request failed: {}", e);
            CoreError::ExternalServiceError(format!("OCR API error: {e}"))
        })?;

        let status = response.status();
        let payload: OcrResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OCR response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse OCR response: {e}"))
        })?;

        if !status.is_success() {
            let message = payload.error.unwrap_or_else(|| "OCR failed".to_string());
            tracing::error!("OCR API error: {} - {}", status, message);
            return Err(CoreError::ExternalServiceError(message));
        }

        let regions = payload
            .regions
            .unwrap_or_default()
            .into_iter()
            .map(|region| OcrRegion {
                text: region.text,
                quad: region.quad,
            })
            .collect();

        Ok(OcrExtraction {
            text: payload.text.unwrap_or_default(),
            regions,
            annotated_image: payload.annotated_image,
        })
    }
}
