// crates/accord-testgen/src/multipart.rs
// ============================================================================
// Module: Multipart Encoder
// Description: Renders one fragment per declared multipart entry.
// Purpose: Distinguish file-bearing entries from plain field entries.
// Dependencies: accord-contract
// ============================================================================

//! ## Overview
//! Each multipart entry renders to exactly one fragment, in declaration
//! order. File-bearing entries carry the field name, resolved file name,
//! resolved content, and the declared content type when present; plain
//! field entries carry the field name and resolved value with no
//! content-type reference. The entry payload is a closed two-variant union,
//! so the dispatch is total.

// ============================================================================
// SECTION: Imports
// ============================================================================

use accord_contract::model::FieldValue;
use accord_contract::model::MultipartEntry;
use accord_contract::model::MultipartValue;
use accord_contract::model::NamedProperty;
use accord_contract::resolve::ResolutionMode;
use accord_contract::resolve::scalar_text;

use crate::emit::CodeBuffer;
use crate::emit::string_literal;

// ============================================================================
// SECTION: Multipart Encoding
// ============================================================================

/// Emits one fragment per multipart entry in declaration order.
pub fn encode(entries: &[MultipartEntry], buffer: &mut CodeBuffer) {
    for entry in entries {
        match &entry.value {
            MultipartValue::Named(property) => {
                buffer.line(file_part_fragment(&entry.name, property));
            }
            MultipartValue::Field(value) => {
                buffer.line(field_part_fragment(&entry.name, value));
            }
        }
    }
}

/// Renders a file-part fragment for a named property.
fn file_part_fragment(name: &str, property: &NamedProperty) -> String {
    let file_name = scalar_text(property.file_name.resolve(ResolutionMode::Assertion));
    let content = scalar_text(property.content.resolve(ResolutionMode::Assertion));
    match &property.content_type {
        Some(content_type) => {
            let resolved = scalar_text(content_type.resolve(ResolutionMode::Assertion));
            format!(
                ".file_part({}, {}, {}, {})",
                string_literal(name),
                string_literal(&file_name),
                string_literal(&content),
                string_literal(&resolved)
            )
        }
        None => format!(
            ".file_part({}, {}, {})",
            string_literal(name),
            string_literal(&file_name),
            string_literal(&content)
        ),
    }
}

/// Renders a field-part fragment for a plain value.
fn field_part_fragment(name: &str, value: &FieldValue) -> String {
    let resolved = scalar_text(value.resolve(ResolutionMode::Assertion));
    format!(".field_part({}, {})", string_literal(name), string_literal(&resolved))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
