use crate::application::http::{analysis::router::AnalysisApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ConsumeWise API"
    )
)]
struct BaseDoc;

pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(AnalysisApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
