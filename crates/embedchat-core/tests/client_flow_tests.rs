//! Client flow tests
//!
//! Walks the same sequences the pages drive, using recorded backend
//! payloads instead of a live server.

use embedchat_core::{
    files::check_upload, insights::parse_key_topics, ChatEnvelope, ClientConfig,
    DataDistribution, Endpoints, FileKind, FileLibrary, MessageKind, StoredFile, TopicCarousel,
    TopicSettings, Transcript, User,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn endpoints() -> Endpoints {
    let config = ClientConfig::resolve(Some("https://api.example.com/"), None, None).unwrap();
    Endpoints::new(&config.api_base)
}

// ============================================================================
// Chat
// ============================================================================

#[test]
fn test_chat_turn_appends_one_before_and_one_after() {
    let mut transcript = Transcript::with_conversation_id("conv-1");

    let request = transcript.submit("user-1", "is it safe to travel with a newborn?").unwrap();
    assert_eq!(transcript.messages().len(), 1);

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
        body,
        json!({
            "user_id": "user-1",
            "query": "is it safe to travel with a newborn?",
            "conversation_id": "conv-1"
        })
    );
    assert_eq!(endpoints().search(), "https://api.example.com/search");

    let response = r#"{
        "session_id": "conv-1",
        "type": "ai",
        "data": {"content": "It tends to be safer to avoid unnecessary travel."}
    }"#;
    let envelope: ChatEnvelope = serde_json::from_str(response).unwrap();
    transcript.receive(envelope);

    let kinds: Vec<MessageKind> = transcript.messages().iter().map(|m| m.kind.clone()).collect();
    assert_eq!(kinds, vec![MessageKind::Human, MessageKind::Ai]);
    assert!(!transcript.is_pending());
}

#[test]
fn test_several_turns_share_conversation_id() {
    let mut transcript = Transcript::new();
    let first = transcript.submit("u", "one").unwrap();
    transcript.receive(ChatEnvelope {
        kind: MessageKind::Ai,
        data: serde_json::from_value(json!({"content": "1"})).unwrap(),
        session_id: None,
    });
    let second = transcript.submit("u", "two").unwrap();

    assert_eq!(first.conversation_id, second.conversation_id);
    assert_eq!(transcript.messages().len(), 3);
}

// ============================================================================
// Sidebar
// ============================================================================

#[test]
fn test_upload_then_refresh() {
    let api = endpoints();
    let mut library = FileLibrary::default();

    check_upload("handbook.pdf").unwrap();
    assert_eq!(api.upload("user-1"), "https://api.example.com/upload?user_id=user-1");
    library.record_upload("handbook.pdf", "application/pdf");
    assert_eq!(library.len(), 1);

    let listed: Vec<StoredFile> = serde_json::from_value(json!([
        {"name": "handbook.pdf", "url": "https://cdn.example.com/handbook.pdf", "type": "application/pdf"},
        {"name": "intro.mp4", "url": "https://cdn.example.com/intro.mp4", "type": "mp4"}
    ]))
    .unwrap();
    library.replace(listed);

    let kinds: Vec<FileKind> = library
        .files()
        .iter()
        .map(|f| FileKind::from_type_field(&f.file_type))
        .collect();
    assert_eq!(kinds, vec![FileKind::Pdf, FileKind::Video]);
}

#[test]
fn test_unsupported_upload_never_reaches_library() {
    let library = FileLibrary::default();
    assert!(check_upload("virus.exe").is_err());
    assert!(library.is_empty());
}

// ============================================================================
// Auth and insights
// ============================================================================

#[test]
fn test_signin_response_decodes_to_user() {
    let user = User::from_profile_body(r#"{"id":"7c1d","name":"Sam","email":"sam@example.com"}"#)
        .unwrap()
        .unwrap();
    assert_eq!(user.name, "Sam");
}

#[test]
fn test_insights_round() {
    let settings = TopicSettings::default().with_topics(2).with_words(3);
    assert_eq!(
        endpoints().key_topics("u", settings),
        "https://api.example.com/get-key-topics?user_id=u&num_topics=2&num_words=3"
    );

    let mut carousel = TopicCarousel::default();
    carousel.set_slides(parse_key_topics(json!(["0.05*\"refund\"", "0.04*\"policy\""])).unwrap());
    assert_eq!(carousel.slides().len(), 2);

    let dist: DataDistribution =
        serde_json::from_value(json!({"png": 2, "jpg": 0, "pdf": 6, "mov": 0, "jpeg": 0, "mp4": 0}))
            .unwrap();
    let labels: Vec<&str> = dist.slices().iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["PNG", "PDF"]);
}
