use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::pipeline::ParsedResume;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let mut upload: Option<Bytes> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            upload = Some(field.bytes().await?);
            break;
        }
    }

    let bytes = upload
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::Validation(format!("Missing or empty '{FILE_FIELD}' field")))?;

    // PDF decoding and extraction are CPU-bound.
    let parser = state.parser.clone();
    let parsed = tokio::task::spawn_blocking(move || parser.parse_pdf(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF parse: {e}")))?;
    Ok(Json(parsed))
}

/// POST /api/v1/resumes/parse-text
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    let parser = state.parser.clone();
    let parsed = tokio::task::spawn_blocking(move || parser.parse_text(&req.text))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in text parse: {e}"))
        })?;
    Ok(Json(parsed))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::extraction::ResumeParser;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn app() -> axum::Router {
        let config = Config::from_lookup(|_| None).unwrap();
        build_router(AppState {
            config,
            parser: Arc::new(ResumeParser::new(None)),
        })
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn multipart_request(field: &str, payload: &[u8]) -> Request<Body> {
        let boundary = "X-RESUME-BOUNDARY";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"resume.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/parse")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_parse_text_returns_result_envelope() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/parse-text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"text": "Jane Smith\nSenior Software Engineer\nEmail: jane@x.com"}"#,
            ))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(body["parse_id"].is_string());
        assert!(body["parsed_at"].is_string());
        assert_eq!(body["result"]["name"], "Jane Smith");
        assert_eq!(body["result"]["email"], "jane@x.com");
        assert_eq!(body["result"]["achievements"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_missing_file_field_is_validation_error() {
        let response = app()
            .oneshot(multipart_request("attachment", b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_undecodable_pdf_is_empty_result() {
        let response = app()
            .oneshot(multipart_request("file", b"not a pdf at all"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["result"]["name"], "");
        assert_eq!(body["result"]["awards"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_pdf_that_crashes_the_decoder_is_empty_result() {
        let pdf = crate::document::single_page_pdf("BT Tf (Hello) Tj ET");
        let response = app().oneshot(multipart_request("file", &pdf)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["parse_id"].is_string());
        assert_eq!(body["result"]["name"], "");
        assert_eq!(body["result"]["achievements"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected() {
        let config = Config::from_lookup(|key| (key == "MAX_UPLOAD_BYTES").then(|| "64".to_string()))
            .unwrap();
        let app = build_router(AppState {
            config,
            parser: Arc::new(ResumeParser::new(None)),
        });
        let response = app
            .oneshot(multipart_request("file", &[b'x'; 4096]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
