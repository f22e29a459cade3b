use std::io::Write;
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mindshift::app::run_analysis;
use mindshift::presentation::{Mode, PathView, project_as};
use mindshift::{Config, GeminiAnalyzer, catalog};

use crate::analyzer_harness::health_response;

const MODEL_PATH: &str = "/models/gemini-3-flash-preview:generateContent";

fn gemini_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

async fn mount_health(server: &MockServer) {
    let body = serde_json::to_string(&health_response()).unwrap();
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "e2e-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(&body)))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn scenario_analysis_renders_both_modes() {
    let server = MockServer::start().await;
    mount_health(&server).await;

    let analyzer = GeminiAnalyzer::new(Some("e2e-key")).with_api_base(&server.uri());
    let session = run_analysis(Arc::new(analyzer), Some("health"), None)
        .await
        .unwrap();

    let sent = server.received_requests().await.unwrap();
    let request: serde_json::Value = serde_json::from_slice(&sent[0].body).unwrap();
    let prompt = request["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains(catalog::find("health").unwrap().prompt));
    assert_eq!(
        request["generationConfig"]["responseSchema"]["required"]
            .as_array()
            .unwrap()
            .len(),
        6
    );

    let survival = project_as(session.state(), Mode::Survival);
    assert_eq!(survival.motto, "Stop the bleeding.");
    let creative = project_as(session.state(), Mode::Creative);
    assert_eq!(creative.motto, "Build the vision.");
    let PathView::Steps(steps) = creative.path else {
        panic!("expected committed steps");
    };
    assert_eq!(steps[0].label, "Step 01");
    assert_eq!(steps[3].title, "Design step 4");
}

#[tokio::test]
async fn config_file_drives_the_client() {
    let server = MockServer::start().await;
    mount_health(&server).await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "api_key = \"e2e-key\"\n\n[gemini]\napi_base = \"{}\"\ntimeout_secs = 5",
        server.uri()
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    config.validate().unwrap();
    let analyzer = GeminiAnalyzer::from_config(&config);

    let session = run_analysis(Arc::new(analyzer), None, Some("free text"))
        .await
        .unwrap();
    assert_eq!(session.state().custom_text.as_deref(), Some("free text"));
    assert!(session.state().analysis.is_some());
}

#[tokio::test]
async fn api_failure_becomes_a_single_analysis_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "internal", "status": "INTERNAL" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let analyzer = GeminiAnalyzer::new(Some("e2e-key")).with_api_base(&server.uri());
    let err = run_analysis(Arc::new(analyzer), Some("career"), None)
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("analysis failed"));
}

#[tokio::test]
async fn missing_key_fails_without_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let analyzer = GeminiAnalyzer::new(None).with_api_base(&server.uri());
    let err = run_analysis(Arc::new(analyzer), None, None).await.unwrap_err();
    assert!(err.to_string().contains("API key"));
}

#[tokio::test]
async fn unknown_scenario_is_rejected_before_calling() {
    let analyzer = GeminiAnalyzer::new(Some("k")).with_api_base("http://127.0.0.1:9");
    let err = run_analysis(Arc::new(analyzer), Some("lottery"), None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("lottery"));
}
