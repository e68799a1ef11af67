//! Command Tests
//!
//! Tests for command parsing and the registration payload.

use inventory_bridge::protocol::{definitions, option, Command, CommandRequest, CommandType};
use inventory_bridge::sheet::Status;
use inventory_bridge::BridgeError;

fn create_request() -> CommandRequest {
    CommandRequest::new("create")
        .option(option::NAME, "Radio1")
        .option(option::DESCRIPTION, "desc")
        .option(option::BAND, "UHF")
        .option(option::MODEL, "M100")
        .option(option::SERIAL, "SN001")
        .option(option::LAST_INV, "01/01/2024")
        .option(option::STATUS, "In Service")
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_create() {
    let command = Command::parse(&create_request()).unwrap().unwrap();

    let Command::Create { record } = command else {
        panic!("Expected create");
    };
    assert_eq!(record.name, "Radio1");
    assert_eq!(record.band, "UHF");
    assert_eq!(record.last_inspection, "01/01/2024");
    assert_eq!(record.status, "In Service");
}

#[test]
fn test_parse_create_rejects_unknown_band() {
    let request = create_request().option(option::BAND, "HF");
    let err = Command::parse(&request).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Invalid band `HF`.");
}

#[test]
fn test_parse_blank_option_is_missing() {
    let request = create_request().option(option::SERIAL, "  ");
    let err = Command::parse(&request).unwrap_err();

    assert!(matches!(err, BridgeError::Validation(ref m) if m == "Missing required option `serial`."));
}

#[test]
fn test_parse_change_status() {
    let request = CommandRequest::new("change_status")
        .option(option::SERIAL, "SN001")
        .option(option::STATUS, "Not in use (acc only)");

    assert_eq!(
        Command::parse(&request).unwrap(),
        Some(Command::ChangeStatus {
            serial: "SN001".to_string(),
            status: Status::NotInUse,
        })
    );
}

#[test]
fn test_parse_inventory_keeps_date_literal() {
    let request = CommandRequest::new("inventory")
        .option(option::SERIAL, "SN001")
        .option(option::DATE, "2024-13-45");

    assert_eq!(
        Command::parse(&request).unwrap(),
        Some(Command::Inventory {
            serial: "SN001".to_string(),
            date: "2024-13-45".to_string(),
        })
    );
}

#[test]
fn test_parse_unknown_name() {
    assert_eq!(Command::parse(&CommandRequest::new("nope")).unwrap(), None);
}

#[test]
fn test_command_type_names_round_trip() {
    for ty in CommandType::ALL {
        assert_eq!(CommandType::from_name(ty.name()), Some(ty));
    }
}

// =============================================================================
// Registration Payload Tests
// =============================================================================

#[test]
fn test_definitions_cover_all_commands() {
    let names: Vec<&str> = definitions().iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["check", "create", "change_status", "inventory"]);
}

#[test]
fn test_create_definition_serializes_choices() {
    let value = serde_json::to_value(definitions()).unwrap();
    let create = &value[1];

    assert_eq!(create["type"], 1);
    let options = create["options"].as_array().unwrap();
    assert_eq!(options.len(), 7);
    assert!(options.iter().all(|o| o["required"] == true && o["type"] == 3));

    let band = &options[2];
    assert_eq!(band["name"], "band");
    assert_eq!(band["choices"].as_array().unwrap().len(), 4);

    let status = &options[6];
    assert_eq!(status["choices"][2]["name"], "Sold");
    assert_eq!(status["choices"][2]["value"], "Sold (Remove)");
    assert_eq!(status["choices"][3]["value"], "Not in use (acc only)");

    assert!(options[0].get("choices").is_none());
}
