//! Codec Tests
//!
//! Tests for interaction decoding and response encoding.

use inventory_bridge::protocol::{
    decode_interaction, encode_deferred, encode_edit, encode_pong, encode_reply, Embed,
    InteractionKind, Reply, EPHEMERAL_FLAG,
};
use inventory_bridge::BridgeError;
use serde_json::json;

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_ping() {
    let interaction = decode_interaction(br#"{"type":1,"id":"1","token":"t"}"#).unwrap();

    assert_eq!(interaction.kind(), InteractionKind::Ping);
    assert!(interaction.command_request().is_none());
}

#[test]
fn test_decode_application_command() {
    let body = json!({
        "type": 2,
        "id": "99",
        "token": "tok",
        "guild_id": "5678",
        "data": {
            "name": "change_status",
            "options": [
                { "name": "serial", "type": 3, "value": "SN001" },
                { "name": "status", "type": 3, "value": "Broken" }
            ]
        }
    });
    let interaction = decode_interaction(body.to_string().as_bytes()).unwrap();

    assert_eq!(interaction.kind(), InteractionKind::ApplicationCommand);
    assert_eq!(interaction.token.as_deref(), Some("tok"));

    let request = interaction.command_request().unwrap();
    assert_eq!(request.name, "change_status");
    assert_eq!(request.options.get("serial").map(String::as_str), Some("SN001"));
    assert_eq!(request.options.get("status").map(String::as_str), Some("Broken"));
}

#[test]
fn test_decode_non_string_option_values() {
    let body = json!({
        "type": 2,
        "data": {
            "name": "check",
            "options": [
                { "name": "name", "type": 4, "value": 42 },
                { "name": "ignored", "type": 3 }
            ]
        }
    });
    let request = decode_interaction(body.to_string().as_bytes())
        .unwrap()
        .command_request()
        .unwrap();

    assert_eq!(request.options.get("name").map(String::as_str), Some("42"));
    assert!(!request.options.contains_key("ignored"));
}

#[test]
fn test_decode_other_interaction_types() {
    let interaction = decode_interaction(br#"{"type":3}"#).unwrap();
    assert_eq!(interaction.kind(), InteractionKind::Other(3));
}

#[test]
fn test_decode_malformed_body() {
    let err = decode_interaction(b"{not json").unwrap_err();
    assert!(matches!(err, BridgeError::Protocol(_)));
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_pong_and_deferred() {
    assert_eq!(encode_pong(), json!({ "type": 1 }));
    assert_eq!(encode_deferred(), json!({ "type": 5 }));
}

#[test]
fn test_encode_public_text_reply() {
    let value = encode_reply(&Reply::text("Created item `Radio9`."));

    assert_eq!(value["type"], 4);
    assert_eq!(value["data"]["content"], "Created item `Radio9`.");
    assert_eq!(value["data"]["embeds"], json!([]));
    assert!(value["data"].get("flags").is_none());
}

#[test]
fn test_encode_ephemeral_reply_sets_flag() {
    let value = encode_reply(&Reply::text("No item named `X`.").ephemeral());
    assert_eq!(value["data"]["flags"], EPHEMERAL_FLAG);
    assert_eq!(EPHEMERAL_FLAG, 64);
}

#[test]
fn test_encode_card() {
    let reply = Reply::card(Embed::new("Inventory: Radio1").field("Band", "UHF"));
    let value = encode_reply(&reply);

    assert_eq!(value["data"]["content"], "");
    assert_eq!(
        value["data"]["embeds"],
        json!([{
            "title": "Inventory: Radio1",
            "fields": [{ "name": "Band", "value": "UHF", "inline": true }]
        }])
    );
}

#[test]
fn test_encode_edit_never_sets_flags() {
    let value = encode_edit(&Reply::text("No item with serial `SN9`.").ephemeral());

    assert_eq!(value["content"], "No item with serial `SN9`.");
    assert!(value.get("flags").is_none());
    assert!(value.get("type").is_none());
}
