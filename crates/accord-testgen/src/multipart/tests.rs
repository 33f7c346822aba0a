// crates/accord-testgen/src/multipart/tests.rs
// ============================================================================
// Module: Multipart Encoder Unit Tests
// Description: Unit coverage for file-part and field-part fragments.
// Purpose: Pin the two-variant dispatch and declaration-order emission.
// Dependencies: accord-contract, accord-testgen, serde_json
// ============================================================================

//! ## Overview
//! Covers the file-part/field-part distinction, optional content types, and
//! order preservation across mixed entries.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions and helpers are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use accord_contract::model::FieldValue;
use accord_contract::model::MultipartEntry;
use accord_contract::model::MultipartValue;
use accord_contract::model::NamedProperty;
use serde_json::json;

use crate::emit::CodeBuffer;
use crate::multipart::encode;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

fn file_entry(name: &str, file_name: &str, content: &str, content_type: Option<&str>) -> MultipartEntry {
    MultipartEntry {
        name: name.to_string(),
        value: MultipartValue::Named(NamedProperty {
            file_name: FieldValue::Literal(json!(file_name)),
            content: FieldValue::Literal(json!(content)),
            content_type: content_type.map(|value| FieldValue::Literal(json!(value))),
        }),
    }
}

fn field_entry(name: &str, value: &str) -> MultipartEntry {
    MultipartEntry {
        name: name.to_string(),
        value: MultipartValue::Field(FieldValue::Literal(json!(value))),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn file_entries_produce_file_part_fragments() {
    let entries = [file_entry("file", "report.csv", "id,name", Some("text/csv"))];
    let mut buffer = CodeBuffer::new();
    encode(&entries, &mut buffer);
    assert_eq!(buffer.fragments().len(), 1);
    assert_eq!(
        buffer.fragments()[0].text,
        ".file_part(\"file\", \"report.csv\", \"id,name\", \"text/csv\")"
    );
}

#[test]
fn file_entries_without_content_type_omit_the_reference() {
    let entries = [file_entry("file", "notes.txt", "hello", None)];
    let mut buffer = CodeBuffer::new();
    encode(&entries, &mut buffer);
    assert_eq!(buffer.fragments()[0].text, ".file_part(\"file\", \"notes.txt\", \"hello\")");
}

#[test]
fn field_entries_produce_field_part_fragments_without_content_type() {
    let entries = [field_entry("note", "hello")];
    let mut buffer = CodeBuffer::new();
    encode(&entries, &mut buffer);
    let text = &buffer.fragments()[0].text;
    assert_eq!(text, ".field_part(\"note\", \"hello\")");
    assert!(!text.contains("text/"));
}

#[test]
fn mixed_entries_emit_in_declaration_order() {
    let entries = [
        field_entry("first", "1"),
        file_entry("second", "a.bin", "data", None),
        field_entry("third", "3"),
    ];
    let mut buffer = CodeBuffer::new();
    encode(&entries, &mut buffer);
    let texts: Vec<&str> =
        buffer.fragments().iter().map(|fragment| fragment.text.as_str()).collect();
    assert_eq!(texts.len(), 3);
    assert!(texts[0].starts_with(".field_part(\"first\""));
    assert!(texts[1].starts_with(".file_part(\"second\""));
    assert!(texts[2].starts_with(".field_part(\"third\""));
}
