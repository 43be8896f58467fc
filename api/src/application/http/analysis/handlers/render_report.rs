use axum::{Json, response::Html};
use consumewise_core::domain::analysis::{
    entities::AnalysisResult,
    report::render_report,
    score::{compute_health_score, overall_review},
};

use crate::application::http::server::api_entities::api_error::ApiError;

#[utoipa::path(
    post,
    path = "/api/report",
    tag = "analysis",
    summary = "Render an analysis payload as HTML",
    description = "Stateless rendering of an analysis payload into the dashboard's HTML sections.",
    responses(
        (status = 200, description = "HTML report", content_type = "text/html", body = String)
    ),
    request_body = AnalysisResult
)]
pub async fn render_label_report(
    Json(analysis): Json<AnalysisResult>,
) -> Result<Html<String>, ApiError> {
    let health_score = compute_health_score(&analysis);
    let review = overall_review(&analysis, health_score);

    Ok(Html(render_report(&analysis, health_score, &review)))
}
