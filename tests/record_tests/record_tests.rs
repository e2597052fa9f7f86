//! Tests for FormRecord and Config
//!
//! These tests verify:
//! - Projection keys and values
//! - Storage serialization shape
//! - Config defaults and builder

use formstore::config::{Config, DATA_FILE_ENV};
use formstore::record::{FormRecord, KEY_DATE_OF_BIRTH, KEY_FULL_NAME, KEY_LOCATION, KEY_NAME};

// =============================================================================
// Projection Tests
// =============================================================================

#[test]
fn test_to_map_uses_fixed_keys() {
    let record = FormRecord::new("A", "A Smith", "NYC", "1990-01-01");
    let map = record.to_map();

    assert_eq!(map.len(), 4);
    assert_eq!(map[KEY_NAME], "A");
    assert_eq!(map[KEY_FULL_NAME], "A Smith");
    assert_eq!(map[KEY_LOCATION], "NYC");
    assert_eq!(map[KEY_DATE_OF_BIRTH], "1990-01-01");
}

#[test]
fn test_projection_serializes_camel_case() {
    let map = FormRecord::new("A", "A Smith", "NYC", "1990-01-01").to_map();

    let value = serde_json::to_value(&map).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "A",
            "fullName": "A Smith",
            "location": "NYC",
            "dateOfBirth": "1990-01-01"
        })
    );
}

#[test]
fn test_projection_keeps_field_order() {
    let map = FormRecord::new("A", "A Smith", "NYC", "1990-01-01").to_map();

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![KEY_NAME, KEY_FULL_NAME, KEY_LOCATION, KEY_DATE_OF_BIRTH]);

    assert_eq!(
        serde_json::to_string(&map).unwrap(),
        r#"{"name":"A","fullName":"A Smith","location":"NYC","dateOfBirth":"1990-01-01"}"#
    );
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_record_serializes_pascal_case() {
    let record = FormRecord::new("A", "A Smith", "NYC", "1990-01-01");

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r#"{"Name":"A","FullName":"A Smith","Location":"NYC","DateOfBirth":"1990-01-01"}"#
    );
}

#[test]
fn test_sequence_reloads_identically() {
    let records = vec![
        FormRecord::new("A", "A Smith", "NYC", "1990-01-01"),
        FormRecord::new("", "", "", ""),
        FormRecord::new("C", "C \"Quoted\" Lee", "Köln", "2000-12-31"),
    ];

    let json = serde_json::to_string_pretty(&records).unwrap();
    let reloaded: Vec<FormRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded, records);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let json = r#"{"Name":"A","FullName":"B","Location":"C","DateOfBirth":"D","Extra":1}"#;

    let record: FormRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record, FormRecord::new("A", "B", "C", "D"));
}

#[test]
fn test_null_fields_decode_as_empty() {
    let json = r#"{"Name":null,"FullName":"B","Location":null,"DateOfBirth":"D"}"#;

    let record: FormRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record, FormRecord::new("", "B", "", "D"));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(config.data_file.ends_with("form_data.json"));
    assert!(config.pretty);
    assert!(config.sync_on_write);
}

#[test]
fn test_config_builder() {
    let config = Config::builder()
        .data_file("/tmp/elsewhere.json")
        .pretty(false)
        .sync_on_write(false)
        .build();

    assert_eq!(config.data_file, std::path::PathBuf::from("/tmp/elsewhere.json"));
    assert!(!config.pretty);
    assert!(!config.sync_on_write);
}

// Only test in this binary that touches the environment
#[test]
fn test_config_from_env() {
    std::env::set_var(DATA_FILE_ENV, "/var/lib/forms/records.json");
    let config = Config::from_env().unwrap();
    assert_eq!(config.data_file, std::path::PathBuf::from("/var/lib/forms/records.json"));

    std::env::set_var(DATA_FILE_ENV, "");
    assert!(Config::from_env().is_err());

    std::env::remove_var(DATA_FILE_ENV);
    let config = Config::from_env().unwrap();
    assert_eq!(config.data_file, Config::default().data_file);
}
