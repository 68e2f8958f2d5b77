use std::time::Duration;

use serde_json::json;

use oregon_trail::config::Config;
use oregon_trail::core::enemy::EnemyKind;
use oregon_trail::dialogue::*;

fn offline() -> DialogueService {
    DialogueService::new(&Config::from_json(r#"{"gemini_api_key": "TU_API_KEY_AQUI"}"#).unwrap())
}

#[test]
fn placeholder_key_means_offline() {
    let service = offline();
    assert!(!service.is_configured());
    assert_eq!(service.generate_text("hello"), NOT_CONFIGURED);
}

#[test]
fn offline_request_answers_immediately() {
    let rx = offline().request(DialogueKind::EnemyDefeated(EnemyKind::Wolf));
    let line = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert!(line.contains("wolf"));
}

#[test]
fn unreachable_endpoint_falls_back_to_text() {
    let config = Config::from_json(r#"{"gemini_api_key": "k", "gemini_api_url": "http://127.0.0.1:9/generate"}"#).unwrap();
    let service = DialogueService::new(&config);
    assert!(service.is_configured());
    let text = service.generate_text("hello");
    assert!(text.starts_with("Connection error"), "{text}");
}

#[test]
fn failure_text_never_shows_the_key() {
    let config =
        Config::from_json(r#"{"gemini_api_key": "SECRET123", "gemini_api_url": "http://127.0.0.1:9/generate"}"#).unwrap();
    let text = DialogueService::new(&config).generate_text("hello");
    assert!(!text.contains("SECRET123"), "{text}");
    assert!(!text.contains("key="), "{text}");
}

#[test]
fn prompts_name_their_subject() {
    assert!(DialogueKind::EnemyDefeated(EnemyKind::Bear).prompt().contains("grizzly bear"));
    assert!(DialogueKind::RandomEvent(TrailEvent::FloodedRiver).prompt().contains("'flooded river'"));
    assert!(DialogueKind::Merchant.prompt().contains("Independence"));
    assert!(DialogueKind::FriendlyTraveler.prompt().contains("1848"));
}

#[test]
fn reply_text_is_first_text_field() {
    let reply = json!({
        "candidates": [{ "content": { "parts": [{ "text": "Westward!" }, { "text": "ignored" }] } }],
        "usageMetadata": { "totalTokenCount": 12 }
    });
    assert_eq!(extract_text(&reply), Some("Westward!"));
    assert_eq!(extract_text(&json!({ "error": { "code": 400 } })), None);
}
