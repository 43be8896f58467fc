use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    analyze_text::{__path_analyze_text, analyze_text},
    ocr_text::{__path_ocr_text, ocr_text},
    render_report::{__path_render_label_report, render_label_report},
};
use crate::application::http::server::app_state::AppState;

// Images go up to 10MB; leave headroom for multipart framing.
const MAX_REQUEST_BODY_SIZE: usize = 12 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_image, ocr_text, analyze_text, render_label_report))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/analyze"), post(analyze_image))
        .route(&format!("{root_path}/api/ocr"), post(ocr_text))
        .route(&format!("{root_path}/api/analyze"), post(analyze_text))
        .route(&format!("{root_path}/api/report"), post(render_label_report))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE))
}
