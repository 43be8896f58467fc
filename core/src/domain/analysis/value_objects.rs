use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeTextInput {
    pub text: String,
}

/// Text pulled off a label image by the OCR service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OcrExtraction {
    pub text: String,
    pub regions: Vec<OcrRegion>,
    /// Annotated copy of the input image (base64), if the service drew one.
    pub annotated_image: Option<String>,
}

/// One recognized text span and its bounding quad on the label,
/// `[[x, y]; 4]` in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OcrRegion {
    pub text: String,
    pub quad: [[f32; 2]; 4],
}

/// An OCR region classified against the harmful-ingredient list, so the
/// dashboard can color the corresponding patch of the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabelHighlight {
    pub text: String,
    pub quad: [[f32; 2]; 4],
    pub verdict: HighlightVerdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HighlightVerdict {
    Harmful,
    Neutral,
}
