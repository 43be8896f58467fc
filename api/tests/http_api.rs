//! HTTP-layer tests for the routing, validation, and stateless rendering
//! surface. Everything here runs without reaching the OCR or Gemini
//! services: requests either fail validation before the pipeline runs or
//! hit the stateless report endpoint.

use std::sync::{Arc, LazyLock};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use consumewise_api::application::http::server::http_server::{router, state};
use consumewise_api::args::{Args, LlmArgs, OcrArgs, ServerArgs};
use serde_json::{Value, json};
use tower::ServiceExt;

// The metrics layer installs a process-global recorder, so the router is
// built once and cloned per test.
static APP: LazyLock<Router> = LazyLock::new(|| {
    let args = Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: "".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            log_json: false,
        },
        ocr: OcrArgs {
            endpoint: "http://127.0.0.1:9/ocr".to_string(),
            api_key: None,
        },
        llm: LlmArgs {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
        },
    };

    router(state(Arc::new(args))).expect("router should build")
});

async fn body_string(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

fn json_request(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = APP
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value =
        serde_json::from_str(&body_string(response.into_body()).await).expect("json body");
    assert_eq!(body["status"], "ok");
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn get_on_post_routes_is_rejected_with_allow_header() {
    for uri in ["/api/ocr", "/api/analyze", "/api/report", "/analyze"] {
        let response = APP
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "GET {uri} should be rejected"
        );
        let allow = response
            .headers()
            .get(header::ALLOW)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        assert!(allow.contains("POST"), "Allow header for {uri}: {allow:?}");
    }
}

#[tokio::test]
async fn analyze_text_rejects_empty_text() {
    let response = APP
        .clone()
        .oneshot(json_request("/api/analyze", json!({ "text": "" })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value =
        serde_json::from_str(&body_string(response.into_body()).await).expect("json body");
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|message| message.contains("between 1 and 5000")),
        "unexpected error body: {body}"
    );
}

#[tokio::test]
async fn analyze_text_rejects_oversized_text() {
    let response = APP
        .clone()
        .oneshot(json_request(
            "/api/analyze",
            json!({ "text": "a".repeat(5001) }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ocr_rejects_missing_image() {
    let response = APP
        .clone()
        .oneshot(json_request("/api/ocr", json!({ "image": "" })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ocr_rejects_invalid_base64() {
    let response = APP
        .clone()
        .oneshot(json_request(
            "/api/ocr",
            json!({ "image": "data:image/png;base64,not!!valid" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value =
        serde_json::from_str(&body_string(response.into_body()).await).expect("json body");
    assert_eq!(body["error"], "image is not valid base64");
}

#[tokio::test]
async fn analyze_image_rejects_multipart_without_file_field() {
    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"caption\"\r\n\r\n\
         not an image\r\n\
         --{boundary}--\r\n"
    );

    let response = APP
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value =
        serde_json::from_str(&body_string(response.into_body()).await).expect("json body");
    assert_eq!(body["error"], "Missing file field");
}

#[tokio::test]
async fn analyze_image_rejects_an_oversized_upload() {
    let boundary = "test-boundary";
    // Just over the 10MB per-image cap, still under the request body limit.
    let oversized = vec![b'x'; 10 * 1024 * 1024 + 1];
    let mut body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"label.jpg\"\r\n\
         Content-Type: image/jpeg\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(&oversized);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let response = APP
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value =
        serde_json::from_str(&body_string(response.into_body()).await).expect("json body");
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|message| message.contains("Image too large")),
        "unexpected error body: {body}"
    );
}

#[tokio::test]
async fn report_endpoint_renders_html_for_empty_payload() {
    let response = APP
        .clone()
        .oneshot(json_request("/api/report", json!({})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/html"));

    let html = body_string(response.into_body()).await;
    assert!(html.contains("100/100"));
    assert!(html.contains("No harmful ingredients detected."));
}

#[tokio::test]
async fn report_endpoint_scores_the_posted_payload() {
    let payload = json!({
        "HarmfulIngredients": [
            { "Ingredient": "Red 40", "Reason": "Synthetic dye" }
        ],
        "ProcessingLevel": { "Level": "High" }
    });

    let response = APP
        .clone()
        .oneshot(json_request("/api/report", payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response.into_body()).await;
    assert!(html.contains("75/100"));
    assert!(html.contains("Red 40"));
}

#[tokio::test]
async fn metrics_endpoint_is_exposed() {
    let response = APP
        .clone()
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}
