//! Voice session and cloning tests against a mocked Vapi API.
//!
//! Run with: cargo test -p vapi-client --test vapi_mock

use serde_json::json;
use vapi_client::{SessionStatus, VapiClient, VapiConfig, VapiError, VoiceClones, VoiceSessions};
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ASSISTANT: &str = "3f1c2a4e-8b7d-4c6e-9a1f-0b2c3d4e5f60";

fn config(server: &MockServer) -> VapiConfig {
    VapiConfig::builder()
        .base_url(server.uri())
        .api_key("sk-test")
        .assistant_id(ASSISTANT)
        .build()
}

fn sessions(config: VapiConfig) -> VoiceSessions {
    VoiceSessions::new(VapiClient::new(config).unwrap())
}

fn clones(server: &MockServer) -> VoiceClones {
    VoiceClones::new(VapiClient::new(config(server)).unwrap())
}

// ============================================================================
// Session start
// ============================================================================

#[tokio::test]
async fn test_start_web_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/call"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(json!({ "assistantId": ASSISTANT })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "call-abc",
            "status": "queued",
            "websocketUrl": "wss://audio.example/call-abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = sessions(config(&server)).start(Some("en"), None).await;

    assert_eq!(session.id, "call-abc");
    assert_eq!(session.status, SessionStatus::Queued);
    assert_eq!(session.websocket_url.as_deref(), Some("wss://audio.example/call-abc"));
    assert!(session.note.is_none());
}

#[tokio::test]
async fn test_start_phone_call_with_voice_id() {
    let server = MockServer::start().await;
    let voice_id = "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d";
    Mock::given(method("POST"))
        .and(path("/call/phone"))
        .and(body_json(json!({ "assistantId": voice_id, "phoneNumberId": "pn-1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "callId": "call-phone",
            "status": "ringing"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = VapiConfig::builder()
        .base_url(server.uri())
        .api_key("sk-test")
        .assistant_id(ASSISTANT)
        .phone_number_id("pn-1")
        .build();
    let session = sessions(config).start(None, Some(voice_id)).await;

    assert_eq!(session.id, "call-phone");
    assert_eq!(session.status.as_str(), "ringing");
    assert!(session.websocket_url.is_none());
}

#[tokio::test]
async fn test_non_uuid_voice_id_uses_default_assistant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/call"))
        .and(body_json(json!({ "assistantId": ASSISTANT })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "call-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let session = sessions(config(&server)).start(None, Some("alloy")).await;

    assert_eq!(session.id, "call-1");
    assert_eq!(session.status, SessionStatus::Queued);
}

#[tokio::test]
async fn test_invalid_default_assistant_is_error_without_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let config = VapiConfig::builder()
        .base_url(server.uri())
        .api_key("sk-test")
        .assistant_id("my-assistant")
        .build();
    let session = sessions(config).start(None, Some("not-a-uuid")).await;

    assert_eq!(session.status, SessionStatus::Error);
    assert!(session
        .note
        .as_deref()
        .unwrap_or_default()
        .contains("Invalid assistant ID format"));
}

#[tokio::test]
async fn test_phone_number_error_yields_demo_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/call"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": ["phoneNumberId must be a UUID", "customer.number is required"],
            "error": "Bad Request",
            "statusCode": 400
        })))
        .mount(&server)
        .await;

    let session = sessions(config(&server)).start(None, None).await;

    assert_eq!(session.status, SessionStatus::Demo);
    assert!(session.id.starts_with("demo-"));
    assert!(session.note.unwrap().contains("VAPI_PHONE_NUMBER_ID"));
}

#[tokio::test]
async fn test_other_failure_yields_error_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/call"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let session = sessions(config(&server)).start(None, None).await;

    assert_eq!(session.status, SessionStatus::Error);
    assert!(!session.id.is_empty());
    let note = session.note.unwrap();
    assert!(note.starts_with("Failed to start session"));
    assert!(note.contains("401"));
}

// ============================================================================
// Session stop / status
// ============================================================================

#[tokio::test]
async fn test_stop_demo_session_is_idempotent_and_offline() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sessions = sessions(config(&server));
    let first = sessions.stop("demo-1234").await;
    let second = sessions.stop("demo-1234").await;

    assert_eq!(first.status, SessionStatus::Stopped);
    assert_eq!(second.status, SessionStatus::Stopped);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_stop_falls_through_to_versioned_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/call/call-9/end"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/call/call-9/end"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ended" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/call/phone/call-9/end"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = sessions(config(&server)).stop("call-9").await;

    assert_eq!(outcome.status, SessionStatus::Ended);
    assert_eq!(outcome.message, "Session stopped successfully");
}

#[tokio::test]
async fn test_stop_with_empty_body_defaults_to_ended() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/call/call-7/end"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let outcome = sessions(config(&server)).stop("call-7").await;

    assert_eq!(outcome.status, SessionStatus::Ended);
}

#[tokio::test]
async fn test_stop_reports_stopped_when_all_paths_fail() {
    let server = MockServer::start().await;

    let outcome = sessions(config(&server)).stop("call-gone").await;

    assert_eq!(outcome.status, SessionStatus::Stopped);
    assert_eq!(outcome.message, "Session stopped (endpoint not available)");
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_status_reads_duration() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/call/call-5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/call/call-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "in-progress",
            "duration_seconds": 42.5
        })))
        .mount(&server)
        .await;

    let outcome = sessions(config(&server)).status("call-5").await;

    assert_eq!(outcome.status.as_str(), "in-progress");
    assert_eq!(outcome.duration_seconds, 42.5);
}

#[tokio::test]
async fn test_status_defaults_to_active_when_unreachable() {
    let server = MockServer::start().await;

    let outcome = sessions(config(&server)).status("call-lost").await;

    assert_eq!(outcome.status, SessionStatus::Active);
    assert_eq!(outcome.duration_seconds, 0.0);
    assert!(outcome.note.is_some());
}

#[tokio::test]
async fn test_status_of_demo_session() {
    let server = MockServer::start().await;

    let outcome = sessions(config(&server)).status("Demo-42").await;

    assert_eq!(outcome.status, SessionStatus::Demo);
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/health"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let client = VapiClient::new(config(&server)).unwrap();
    assert!(client.health_check().await.is_ok());
}

#[tokio::test]
async fn test_health_check_unreachable_endpoint() {
    let server = MockServer::start().await;

    let client = VapiClient::new(config(&server)).unwrap();
    let err = client.health_check().await.unwrap_err();
    assert!(matches!(err, VapiError::EndpointNotFound { .. }));
}

// ============================================================================
// Voice cloning
// ============================================================================

#[tokio::test]
async fn test_upload_sends_multipart_with_inferred_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/voices"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_string_contains("filename=\"me.WAV\""))
        .and(body_string_contains("Content-Type: audio/wav"))
        .and(body_string_contains("my voice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "voice_sample_id": "vs-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let sample = clones(&server)
        .upload(b"RIFF....WAVE".to_vec(), "me.WAV", Some("my voice"))
        .await
        .unwrap();

    assert_eq!(sample.voice_sample_id, "vs-1");
    assert_eq!(sample.status, "uploaded");
    assert_eq!(sample.filename, "me.WAV");
}

#[tokio::test]
async fn test_create_clone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/voices/vs-1/clone"))
        .and(body_json(json!({ "name": "Twin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "clone-1",
            "estimated_time_seconds": 120
        })))
        .mount(&server)
        .await;

    let created = clones(&server).create_clone("vs-1", Some("Twin")).await.unwrap();

    assert_eq!(created.clone_id, "clone-1");
    assert_eq!(created.status, "processing");
    assert_eq!(created.estimated_time_seconds, Some(120));
}

#[tokio::test]
async fn test_clone_status_and_preview() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/voices/clone-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ready",
            "progress_percent": 100.0
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/voices/clone-1/preview"))
        .and(body_json(json!({ "text": "Hello there" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audio_url": "https://cdn.example/preview.mp3",
            "duration_seconds": 1.8
        })))
        .mount(&server)
        .await;

    let clones = clones(&server);
    let status = clones.get_status("clone-1").await.unwrap();
    let preview = clones.preview("clone-1", "Hello there").await.unwrap();

    assert_eq!(status.clone_id, "clone-1");
    assert_eq!(status.status, "ready");
    assert_eq!(status.progress_percent, Some(100.0));
    assert_eq!(preview.audio_url, "https://cdn.example/preview.mp3");
    assert_eq!(preview.duration_seconds, 1.8);
}

#[tokio::test]
async fn test_clone_failure_carries_provider_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/voices/vs-bad/clone"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": "sample too short"
        })))
        .mount(&server)
        .await;

    let err = clones(&server).create_clone("vs-bad", None).await.unwrap_err();

    match err {
        VapiError::Api { status, detail } => {
            assert_eq!(status, 422);
            assert!(detail.contains("sample too short"));
        }
        other => panic!("unexpected error: {}", other),
    }
}
