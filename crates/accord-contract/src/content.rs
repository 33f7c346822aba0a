// crates/accord-contract/src/content.rs
// ============================================================================
// Module: Content Handling
// Description: Canonical body serialization and content-type resolution.
// Purpose: Produce deterministic body text and infer logical content types.
// Dependencies: serde, serde_jcs, serde_json
// ============================================================================

//! ## Overview
//! Structured body values are canonicalized to deterministic text before
//! they are asserted against or sniffed: RFC 8785 canonical JSON fixes key
//! order and number formatting, a `\uXXXX` escape pass keeps the text ASCII
//! so it embeds safely in generated source, and bare string roots lose
//! exactly the outer quote pair the generic encoder added.
//!
//! Content-type resolution prefers a recognized `Content-Type` header and
//! falls back to sniffing the canonical body text. The sniffing rules are
//! deliberately small and explicit: a leading `{` or `[` is structured
//! data, a leading `<` is markup, anything else is [`ContentType::Unknown`].
//! Because sniffing reads only the canonical form, map iteration order
//! cannot influence the result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::ContractError;
use crate::model::Header;
use crate::resolve::ResolutionMode;
use crate::resolve::scalar_text;

// ============================================================================
// SECTION: Content Types
// ============================================================================

/// Logical content type of a request or response body.
///
/// # Invariants
/// - Variants are stable for serialization and renderer dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Structured data (JSON or a JSON-derived media type).
    Json,
    /// Markup (XML or an XML-derived media type).
    Xml,
    /// Plain text media types.
    Text,
    /// Unrecognized; not an error, assertion rendering is the renderer's
    /// concern.
    Unknown,
}

impl ContentType {
    /// Returns a stable lowercase label for this content type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Text => "text",
            Self::Unknown => "unknown",
        }
    }
}

// ============================================================================
// SECTION: Canonical Body Serialization
// ============================================================================

/// Canonicalizes a structured value to deterministic ASCII text.
///
/// The encoding is RFC 8785 canonical JSON with non-ASCII characters
/// escaped as `\uXXXX` UTF-16 units. When the root value is a bare string,
/// exactly the outer quote pair added by the encoder is stripped; interior
/// escaped quotes are untouched. The function is pure: repeated calls on
/// the same value yield identical text.
///
/// # Errors
/// Returns [`ContractError::Serialization`] when the value is not
/// representable in the canonical encoding.
pub fn canonical_text(value: &Value) -> Result<String, ContractError> {
    let canonical =
        serde_jcs::to_string(value).map_err(|err| ContractError::Serialization(err.to_string()))?;
    let escaped = ascii_escaped(&canonical);
    if value.is_string() {
        Ok(strip_string_root(escaped))
    } else {
        Ok(escaped)
    }
}

/// Escapes every non-ASCII character as `\uXXXX` UTF-16 units, leaving
/// ASCII text (including existing escapes) untouched.
///
/// This is the one escaping policy shared by canonical body text and the
/// string literals in generated fragments, so generated source containing
/// non-ASCII content stays valid in the output format.
#[must_use]
pub fn ascii_escaped(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            let mut units = [0_u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}

/// Strips the outer quote pair from an encoded string root.
fn strip_string_root(escaped: String) -> String {
    let inner = escaped.strip_prefix('"').and_then(|rest| rest.strip_suffix('"'));
    match inner {
        Some(inner) => inner.to_string(),
        None => escaped,
    }
}

// ============================================================================
// SECTION: Content-Type Resolution
// ============================================================================

/// Infers the logical content type of a body.
///
/// Policy, in order: a recognized `Content-Type` header wins; otherwise the
/// body's canonical text is sniffed; otherwise [`ContentType::Unknown`].
/// `body` is the already-resolved body value when one is present.
/// Resolution is never fatal; a body that cannot be canonicalized sniffs to
/// `Unknown`.
#[must_use]
pub fn resolve_content_type(headers: &[Header], body: Option<&Value>) -> ContentType {
    if let Some(declared) = declared_content_type(headers) {
        if declared != ContentType::Unknown {
            return declared;
        }
    }
    match body.map(canonical_text) {
        Some(Ok(text)) => sniff(&text),
        _ => ContentType::Unknown,
    }
}

/// Maps a declared `Content-Type` header to a logical content type.
///
/// Header names compare case-insensitively; the value is resolved on the
/// assertion side.
fn declared_content_type(headers: &[Header]) -> Option<ContentType> {
    let header = headers.iter().find(|header| header.name.eq_ignore_ascii_case("content-type"))?;
    let raw = scalar_text(header.value.resolve(ResolutionMode::Assertion));
    Some(from_media_type(&raw))
}

/// Maps a media-type string to a logical content type.
///
/// Parameters such as `;charset=` are stripped before matching. A `json`
/// subtype or `+json` suffix is structured data, an `xml` subtype or
/// `+xml` suffix is markup, any `text/*` type is plain text.
fn from_media_type(raw: &str) -> ContentType {
    let media = raw.split(';').next().unwrap_or(raw).trim().to_ascii_lowercase();
    let Some((kind, subtype)) = media.split_once('/') else {
        return ContentType::Unknown;
    };
    if subtype == "json" || subtype.ends_with("+json") {
        ContentType::Json
    } else if subtype == "xml" || subtype.ends_with("+xml") {
        ContentType::Xml
    } else if kind == "text" {
        ContentType::Text
    } else {
        ContentType::Unknown
    }
}

/// Sniffs canonical body text for structural markers.
fn sniff(text: &str) -> ContentType {
    match text.trim_start().as_bytes().first() {
        Some(b'{' | b'[') => ContentType::Json,
        Some(b'<') => ContentType::Xml,
        _ => ContentType::Unknown,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
