use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct OcrProxyRequest {
    /// Base64-encoded image, with or without a `data:...;base64,` prefix.
    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "text must be between 1 and 5000 characters"
    ))]
    pub text: String,
}
