use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use labellens_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use labellens_core::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    label_analysis::{GenerationSettings, LLMClient, LabelImage},
};
use serde_json::{Value, json};

const ANALYSIS_JSON: &str = r#"{
    "productName": "Diet Soda",
    "ingredients": [
        {"name": "Carbonated Water", "category": "green", "risk": "Safe", "explanation": "Water with CO2."},
        {"name": "Aspartame", "category": "red", "risk": "High Risk", "explanation": "Artificial sweetener."},
        {"name": "Caramel Color", "category": "RED", "risk": "Moderate Risk", "explanation": "May contain 4-MEI."}
    ],
    "marketingClaims": [{"claim": "ZERO SUGAR", "reality": "Sweetened with aspartame."}],
    "overallScore": {"red": 5, "yellow": 0, "green": 1},
    "summary": "Sugar-free, not additive-free."
}"#;

/// Stands in for the model provider and counts how often it was called.
#[derive(Clone)]
struct FakeLLM {
    ocr: Result<String, CoreError>,
    analysis: Result<String, CoreError>,
    calls: Arc<AtomicUsize>,
}

impl FakeLLM {
    fn new(ocr: &str, analysis: &str) -> Self {
        Self {
            ocr: Ok(ocr.to_string()),
            analysis: Ok(analysis.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn failing(error: CoreError) -> Self {
        Self {
            ocr: Err(error.clone()),
            analysis: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl LLMClient for FakeLLM {
    async fn generate_with_image(
        &self,
        _prompt: String,
        _image: LabelImage,
        _settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.ocr.clone()
    }

    async fn generate_with_text(
        &self,
        _system_prompt: String,
        _content: String,
        _response_schema: Value,
        _settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.analysis.clone()
    }
}

fn server(llm: FakeLLM) -> TestServer {
    let args = Args::try_parse_from(["labellens-api", "--groq-api-key", "secret-key"]).unwrap();
    let state = AppState::new(Arc::new(args), Service::new(llm));
    TestServer::new(router(state).unwrap()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = server(FakeLLM::new("", "{}"));

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_analyze_text_returns_sanitized_analysis() {
    let server = server(FakeLLM::new("", ANALYSIS_JSON));
    let text = "Carbonated Water, Aspartame, Caramel Color";

    let response = server
        .post("/api/analyze-text")
        .json(&json!({ "text": text }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["productName"], "Diet Soda");
    assert_eq!(body["extractedText"], text);
    assert_eq!(body["overallScore"], json!({ "red": 2, "yellow": 0, "green": 1 }));
    assert_eq!(body["ingredients"][2]["category"], "red");
    assert_eq!(body["ingredients"][2]["risk"], "High Risk");
    assert_eq!(
        body["harmfulFlags"],
        json!([
            { "name": "Caramel Color", "category": "additive", "severity": "moderate" }
        ])
    );
}

#[tokio::test]
async fn test_analyze_text_blank_is_bad_request() {
    let llm = FakeLLM::new("", ANALYSIS_JSON);
    let calls = llm.calls.clone();
    let server = server(llm);

    for body in [json!({ "text": "   " }), json!({})] {
        let response = server.post("/api/analyze-text").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "No text provided");
        assert_eq!(body["code"], "E_BAD_REQUEST");
        assert_eq!(body["status"], 400);
    }

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_analyze_text_downstream_failure() {
    let server = server(FakeLLM::failing(CoreError::ExternalServiceError(
        "LLM API returned error: 503 Service Unavailable".to_string(),
    )));

    let response = server
        .post("/api/analyze-text")
        .json(&json!({ "text": "Sugar, Water" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Failed to analyze text: LLM API returned error: 503 Service Unavailable"
    );
}

#[tokio::test]
async fn test_malformed_analysis_is_server_error() {
    let server = server(FakeLLM::new("", "I cannot help with that."));

    let response = server
        .post("/api/analyze-text")
        .json(&json!({ "text": "Sugar" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to analyze text: Failed to parse analysis response")
    );
}

#[tokio::test]
async fn test_analyze_image_uses_ocr_text() {
    let ocr = "Ingredients: Carbonated Water, Aspartame, Caramel Color.";
    let server = server(FakeLLM::new(ocr, ANALYSIS_JSON));

    let response = server
        .post("/api/analyze")
        .json(&json!({ "image": "data:image/png;base64,iVBORw0KGgo=" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["extractedText"], ocr);
    assert_eq!(body["ingredients"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_analyze_image_accepts_bare_base64() {
    let server = server(FakeLLM::new("Sugar", ANALYSIS_JSON));

    let response = server
        .post("/api/analyze")
        .json(&json!({ "image": "/9j/4AAQSkZJRg==" }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_analyze_image_without_text_is_bad_request() {
    let server = server(FakeLLM::new("  \n  ", ANALYSIS_JSON));

    let response = server
        .post("/api/analyze")
        .json(&json!({ "image": "data:image/jpeg;base64,/9j/4AAQSkZJRg==" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Could not extract text from image");
}

#[tokio::test]
async fn test_analyze_image_rejects_missing_and_invalid_images() {
    let llm = FakeLLM::new("Sugar", ANALYSIS_JSON);
    let calls = llm.calls.clone();
    let server = server(llm);

    let response = server.post("/api/analyze").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "No image provided");

    let response = server
        .post("/api/analyze")
        .json(&json!({ "image": "data:image/png;base64,@@not base64@@" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/analyze")
        .json(&json!({ "image": "data:text/plain;base64,aGVsbG8=" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_invalid_json_body_is_bad_request() {
    let server = server(FakeLLM::new("", ANALYSIS_JSON));

    let response = server
        .post("/api/analyze-text")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn test_upload_image() {
    let ocr = "Ingredients: Aspartame";
    let server = server(FakeLLM::new(ocr, ANALYSIS_JSON));

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![0x89, 0x50, 0x4E, 0x47])
            .file_name("label.png")
            .mime_type("image/png"),
    );
    let response = server.post("/api/analyze/upload").multipart(form).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["extractedText"], ocr);
}

#[tokio::test]
async fn test_upload_without_image_field_is_bad_request() {
    let server = server(FakeLLM::new("Sugar", ANALYSIS_JSON));

    let form = MultipartForm::new().add_text("note", "no photo here");
    let response = server.post("/api/analyze/upload").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "No image provided");
}

#[tokio::test]
async fn test_classify_ingredients() {
    let server = server(FakeLLM::new("", "{}"));

    let response = server
        .post("/api/ingredients/classify")
        .json(&json!({
            "ingredients": ["Maltodextrin", "  "],
            "text": "Ingredients: Water, Sodium Benzoate (E211), Red 40."
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["data"],
        json!([
            { "name": "Maltodextrin", "harmful": true, "category": "sugar", "severity": "moderate" },
            { "name": "Water", "harmful": false },
            { "name": "Sodium Benzoate (E211)", "harmful": true, "category": "preservative", "severity": "high" },
            { "name": "Red 40", "harmful": true, "category": "additive", "severity": "moderate" }
        ])
    );
}

#[tokio::test]
async fn test_classify_without_ingredients_is_bad_request() {
    let server = server(FakeLLM::new("", "{}"));

    let response = server
        .post("/api/ingredients/classify")
        .json(&json!({ "ingredients": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "No ingredients provided");
}

#[tokio::test]
async fn test_harmful_ingredients_catalog() {
    let server = server(FakeLLM::new("", "{}"));

    let response = server.get("/api/ingredients/harmful").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(
        data[0],
        json!({ "matchPhrase": "dextrose", "category": "sugar", "severity": "moderate" })
    );
    assert_eq!(data.last().unwrap()["matchPhrase"], "tbhq");
}

#[tokio::test]
async fn test_samples() {
    let server = server(FakeLLM::new("", "{}"));

    let response = server.get("/api/samples").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 6);
    assert_eq!(data[0]["name"], "Protein Bar (Misleading)");
    assert_eq!(data[5]["safe"], true);
    assert!(data[0]["frontLabel"].is_string());
}

#[tokio::test]
async fn test_config_does_not_expose_api_key() {
    let server = server(FakeLLM::new("", "{}"));

    let response = server.get("/api/config").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(!text.contains("secret-key"));
    let body: Value = response.json();
    assert_eq!(body["llmProvider"], "groq");
    assert_eq!(body["analysisModel"], "llama-3.3-70b-versatile");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let server = server(FakeLLM::new("", "{}"));

    let response = server.get("/api/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/analyze",
        "/api/analyze/upload",
        "/api/analyze-text",
        "/api/samples",
        "/api/ingredients/classify",
        "/api/ingredients/harmful",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
