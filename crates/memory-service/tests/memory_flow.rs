//! End-to-end memory flows against an in-memory database.

use std::sync::Arc;

use database::{memory, user, Database};
use memory_service::{
    CallEvent, MemoryError, MemoryService, SavedItems, WEBHOOK_USER_EMAIL, WEBHOOK_USER_NAME,
};
use mock_brain::ScriptedBrain;
use serde_json::json;

async fn setup(reply: &str) -> (MemoryService, Arc<ScriptedBrain>) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.migrate().await.unwrap();
    let brain = Arc::new(ScriptedBrain::new(reply, "models/gemini-1.5-flash"));
    (MemoryService::new(db, brain.clone()), brain)
}

fn event(value: serde_json::Value) -> CallEvent {
    serde_json::from_value(value).unwrap()
}

fn saved_items(outcome: &memory_service::WebhookOutcome) -> Vec<String> {
    match &outcome.saved {
        Some(SavedItems::Items(items)) => items.clone(),
        other => panic!("expected saved items, got {:?}", other),
    }
}

#[tokio::test]
async fn test_save_then_list() {
    let (service, brain) = setup("Summary: Ada planned a trip to Lisbon.").await;
    let ada = service.create_user("Ada", "ada@example.com").await.unwrap();

    let saved = service
        .save_memory(ada.id, "asst-1", "User: I want to visit Lisbon.")
        .await
        .unwrap();
    assert_eq!(saved.summary, "Ada planned a trip to Lisbon.");

    let memories = service.list_memories(ada.id, None).await.unwrap();
    assert_eq!(memories.len(), 1);
    assert_eq!(memories[0].id, saved.memory_id);
    assert_eq!(memories[0].assistant_id, "asst-1");
    assert_eq!(memories[0].transcript, "User: I want to visit Lisbon.");
    assert_eq!(memories[0].summary, saved.summary);

    let requests = brain.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model.as_deref(), Some("gemini-1.5-flash"));
    assert!(requests[0].message.contains("User: I want to visit Lisbon."));
}

#[tokio::test]
async fn test_save_for_unknown_user_writes_nothing() {
    let (service, brain) = setup("A summary.").await;

    let result = service.save_memory(42, "asst-1", "hello").await;
    match result {
        Err(MemoryError::NotFound(msg)) => assert_eq!(msg, "User with id 42 not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(brain.call_count(), 0);

    let count: i64 = memory_count(&service).await;
    assert_eq!(count, 0);
}

async fn memory_count(service: &MemoryService) -> i64 {
    let users = user::list_users(service.database().pool()).await.unwrap();
    let mut total = 0;
    for u in users {
        total += memory::count_memories_for_user(service.database().pool(), u.id)
            .await
            .unwrap();
    }
    total
}

#[tokio::test]
async fn test_invalid_assistant_rejected_before_summary() {
    let (service, brain) = setup("A summary.").await;
    let ada = service.create_user("Ada", "ada@example.com").await.unwrap();

    let too_long = "a".repeat(101);
    for assistant in ["", "   ", too_long.as_str()] {
        let result = service.save_memory(ada.id, assistant, "User: hello").await;
        assert!(matches!(result, Err(MemoryError::Invalid(_))), "{:?}", result);
    }

    assert_eq!(brain.call_count(), 0);
    assert_eq!(memory_count(&service).await, 0);
}

#[tokio::test]
async fn test_empty_summary_placeholder() {
    let (service, _brain) = setup("   ").await;
    let ada = service.create_user("Ada", "ada@example.com").await.unwrap();

    let saved = service.save_memory(ada.id, "asst-1", "hi").await.unwrap();
    assert_eq!(saved.summary, "No summary generated");
}

#[tokio::test]
async fn test_degraded_brain_reply_is_stored() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.migrate().await.unwrap();
    let brain = Arc::new(ScriptedBrain::fallback("Gemini is not configured."));
    let service = MemoryService::new(db, brain);
    let ada = service.create_user("Ada", "ada@example.com").await.unwrap();

    let saved = service.save_memory(ada.id, "asst-1", "hi").await.unwrap();
    assert_eq!(saved.summary, "Gemini is not configured.");
}

#[tokio::test]
async fn test_list_limit_and_missing_user() {
    let (service, _brain) = setup("Short summary.").await;
    let ada = service.create_user("Ada", "ada@example.com").await.unwrap();
    for i in 0..3 {
        service
            .save_memory(ada.id, "asst-1", &format!("call {}", i))
            .await
            .unwrap();
    }

    let limited = service.list_memories(ada.id, Some(2)).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].transcript, "call 2");

    let all = service.list_memories(ada.id, None).await.unwrap();
    assert_eq!(all.len(), 3);

    assert!(matches!(
        service.list_memories(999, None).await,
        Err(MemoryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let (service, _brain) = setup("Short summary.").await;
    let ada = service.create_user("Ada", "ada@example.com").await.unwrap();
    let saved = service.save_memory(ada.id, "asst-1", "hello").await.unwrap();

    service.delete_user(ada.id).await.unwrap();

    assert!(matches!(
        service.get_user(ada.id).await,
        Err(MemoryError::NotFound(_))
    ));
    assert!(memory::get_memory(service.database().pool(), saved.memory_id)
        .await
        .is_err());
}

#[tokio::test]
async fn test_delete_memory_not_found() {
    let (service, _brain) = setup("Short summary.").await;

    match service.delete_memory(7).await {
        Err(MemoryError::NotFound(msg)) => assert!(msg.contains('7')),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_duplicate_email_conflict() {
    let (service, _brain) = setup("Short summary.").await;
    service.create_user("Ada", "ada@example.com").await.unwrap();

    match service.create_user("Other", "ada@example.com").await {
        Err(MemoryError::Conflict(msg)) => assert!(msg.contains("ada@example.com")),
        other => panic!("expected Conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_user_input() {
    let (service, _brain) = setup("Short summary.").await;

    assert!(matches!(
        service.create_user("", "ada@example.com").await,
        Err(MemoryError::Invalid(_))
    ));
    assert!(matches!(
        service.create_user("Ada", "not-an-email").await,
        Err(MemoryError::Invalid(_))
    ));
}

#[tokio::test]
async fn test_webhook_summary_creates_one_memory() {
    let (service, brain) = setup("unused").await;

    let outcome = service
        .ingest_call_event(&event(json!({
            "type": "end-of-call-report",
            "call": {
                "assistantId": "asst-1",
                "transcript": "AI: hello\nUser: hi there",
                "analysis": {"structuredOutputs": {"callSummary": "  A friendly hello call.  "}}
            }
        })))
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.message, "Webhook processed");
    let items = saved_items(&outcome);
    assert_eq!(items.len(), 1);
    assert!(items[0].starts_with("Memory with summary (id: "));

    let system = user::get_user_by_email(service.database().pool(), WEBHOOK_USER_EMAIL)
        .await
        .unwrap();
    assert_eq!(system.name, WEBHOOK_USER_NAME);
    let memories = service.list_memories(system.id, None).await.unwrap();
    assert_eq!(memories.len(), 1);
    assert_eq!(memories[0].summary, "A friendly hello call.");
    assert_eq!(memories[0].transcript, "AI: hello\nUser: hi there");
    assert_eq!(memories[0].assistant_id, "asst-1");

    // Webhook ingestion never summarizes through the brain.
    assert_eq!(brain.call_count(), 0);
}

#[tokio::test]
async fn test_webhook_short_fields_are_skipped() {
    let (service, _brain) = setup("unused").await;

    let outcome = service
        .ingest_call_event(&event(json!({
            "call": {"analysis": {"structuredOutputs": {"callSummary": "ok", "memoryCandidate": "hm"}}}
        })))
        .await;

    assert!(outcome.is_success());
    assert_eq!(
        outcome.saved,
        Some(SavedItems::Note(
            "No data to save (webhook payload might need user_id)".to_string()
        ))
    );
    assert_eq!(memory_count(&service).await, 0);
}

#[tokio::test]
async fn test_webhook_candidate_appended_to_new_summary() {
    let (service, _brain) = setup("unused").await;

    let outcome = service
        .ingest_call_event(&event(json!({
            "call": {
                "assistantId": "asst-1",
                "transcript": "User: I love green tea.",
                "analysis": {"structuredOutputs": {
                    "callSummary": "Talked about drinks.",
                    "memoryCandidate": " User likes green tea. "
                }}
            }
        })))
        .await;

    let items = saved_items(&outcome);
    assert_eq!(items.len(), 2);
    assert!(items[1].starts_with("Updated memory "));

    let system = user::get_user_by_email(service.database().pool(), WEBHOOK_USER_EMAIL)
        .await
        .unwrap();
    let memories = service.list_memories(system.id, None).await.unwrap();
    assert_eq!(memories.len(), 1);
    assert_eq!(
        memories[0].summary,
        "Talked about drinks.\n\nMemory: User likes green tea."
    );
}

#[tokio::test]
async fn test_webhook_candidate_targets_latest_matching_memory() {
    let (service, _brain) = setup("unused").await;

    service
        .ingest_call_event(&event(json!({
            "call": {
                "assistantId": "asst-1",
                "analysis": {"structuredOutputs": {"callSummary": "First call summary."}}
            }
        })))
        .await;

    // Candidate only, same assistant: appended to the existing memory.
    let outcome = service
        .ingest_call_event(&event(json!({
            "call": {
                "assistantId": "asst-1",
                "analysis": {"structuredOutputs": {"memoryCandidate": "Prefers morning calls."}}
            }
        })))
        .await;
    let items = saved_items(&outcome);
    assert_eq!(items.len(), 1);
    assert!(items[0].starts_with("Updated memory "));

    // Candidate only, different assistant: stored as a new memory.
    let outcome = service
        .ingest_call_event(&event(json!({
            "call": {
                "assistantId": "asst-2",
                "analysis": {"structuredOutputs": {"memoryCandidate": "Has a dog named Rex."}}
            }
        })))
        .await;
    let items = saved_items(&outcome);
    assert!(items[0].starts_with("Memory candidate (id: "));

    let system = user::get_user_by_email(service.database().pool(), WEBHOOK_USER_EMAIL)
        .await
        .unwrap();
    let memories = service.list_memories(system.id, None).await.unwrap();
    assert_eq!(memories.len(), 2);

    let first = memories.iter().find(|m| m.assistant_id == "asst-1").unwrap();
    assert_eq!(
        first.summary,
        "First call summary.\n\nMemory: Prefers morning calls."
    );
    let second = memories.iter().find(|m| m.assistant_id == "asst-2").unwrap();
    assert_eq!(second.summary, "Has a dog named Rex.");
    assert_eq!(second.transcript, "Has a dog named Rex.");
}

#[tokio::test]
async fn test_webhook_oversized_assistant_stored_as_unknown() {
    let (service, _brain) = setup("unused").await;

    let outcome = service
        .ingest_call_event(&event(json!({
            "call": {
                "assistantId": "x".repeat(150),
                "analysis": {"structuredOutputs": {"callSummary": "Summary that must not be lost."}}
            }
        })))
        .await;

    assert_eq!(saved_items(&outcome).len(), 1);
    let system = user::get_user_by_email(service.database().pool(), WEBHOOK_USER_EMAIL)
        .await
        .unwrap();
    let memories = service.list_memories(system.id, None).await.unwrap();
    assert_eq!(memories.len(), 1);
    assert_eq!(memories[0].assistant_id, "unknown");
    assert_eq!(memories[0].summary, "Summary that must not be lost.");
}

#[tokio::test]
async fn test_webhook_reuses_system_user() {
    let (service, _brain) = setup("unused").await;
    let payload = json!({
        "call": {"analysis": {"structuredOutputs": {"callSummary": "Some summary text."}}}
    });

    service.ingest_call_event(&event(payload.clone())).await;
    service.ingest_call_event(&event(payload)).await;

    let users = user::list_users(service.database().pool()).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, WEBHOOK_USER_EMAIL);

    let memories = service.list_memories(users[0].id, None).await.unwrap();
    assert_eq!(memories.len(), 2);
    assert!(memories.iter().all(|m| m.assistant_id == "unknown"));
}
