// crates/accord-contract/src/model.rs
// ============================================================================
// Module: Contract Model
// Description: Immutable value objects describing one request/response pair.
// Purpose: Provide the canonical contract shapes produced by the parser.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! One [`Contract`] pairs a [`Request`] with the [`Response`] it provokes.
//! Every field that may legitimately differ between the stubbed server and
//! the generated test carries a [`FieldValue`]: either a plain literal or a
//! [`MatchingStrategy`] holding both representations. Collections that the
//! contract declares in a meaningful order (headers, query parameters,
//! multipart entries) are vectors, never sorted maps, so declaration order
//! survives into generated output.
//!
//! Entities are created once per contract by the external parser and are
//! read-only for the rest of the pipeline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::ContractError;

// ============================================================================
// SECTION: Contract
// ============================================================================

/// A paired declarative description of one request and its response.
///
/// # Invariants
/// - Immutable once constructed; lifetime is one generation pass.
/// - `request` satisfies the url/url_path exclusivity invariant when the
///   contract is well formed; see [`Request::url_spec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// The request a client may send.
    pub request: Request,
    /// The response the server promises to return.
    pub response: Response,
}

impl Contract {
    /// Checks the structural invariants a well-formed contract must satisfy.
    ///
    /// # Errors
    /// Returns [`ContractError::Malformed`] when the request sets neither or
    /// both of `url` and `url_path`.
    pub fn validate(&self) -> Result<(), ContractError> {
        self.request.url_spec().map(|_| ())
    }
}

// ============================================================================
// SECTION: Request
// ============================================================================

/// The request half of a contract.
///
/// # Invariants
/// - Exactly one of `url` and `url_path` is set on a well-formed request;
///   violating this is a fatal contract error, not a recoverable one.
/// - `headers` and `multipart` preserve declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method literal, e.g. `GET`.
    pub method: String,
    /// Absolute URL, mutually exclusive with `url_path`.
    #[serde(default)]
    pub url: Option<Url>,
    /// URL path, mutually exclusive with `url`.
    #[serde(default)]
    pub url_path: Option<Url>,
    /// Request headers in declaration order; may be empty.
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Optional structured request body.
    #[serde(default)]
    pub body: Option<FieldValue>,
    /// Optional multipart entries in declaration order, keyed by name.
    #[serde(default)]
    pub multipart: Option<Vec<MultipartEntry>>,
}

impl Request {
    /// Returns the single configured URL specification.
    ///
    /// This is the one authority for the url/url_path exclusivity invariant.
    ///
    /// # Errors
    /// Returns [`ContractError::Malformed`] when neither or both fields are
    /// set.
    pub fn url_spec(&self) -> Result<&Url, ContractError> {
        match (&self.url, &self.url_path) {
            (Some(url), None) | (None, Some(url)) => Ok(url),
            (Some(_), Some(_)) => Err(ContractError::Malformed(
                "request must set exactly one of url or url_path; both are set".to_string(),
            )),
            (None, None) => Err(ContractError::Malformed(
                "request must set exactly one of url or url_path; neither is set".to_string(),
            )),
        }
    }

    /// Returns true when the request carries arrange-phase input: headers, a
    /// body, or at least one multipart entry.
    #[must_use]
    pub fn has_input(&self) -> bool {
        !self.headers.is_empty()
            || self.body.is_some()
            || self.multipart.as_ref().is_some_and(|entries| !entries.is_empty())
    }
}

// ============================================================================
// SECTION: Response
// ============================================================================

/// The response half of a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Promised HTTP status code literal.
    pub status: u16,
    /// Optional response headers in declaration order.
    #[serde(default)]
    pub headers: Option<Vec<Header>>,
    /// Optional structured response body.
    #[serde(default)]
    pub body: Option<FieldValue>,
}

// ============================================================================
// SECTION: URL and Query Parameters
// ============================================================================

/// A URL or URL path with its optional query parameters.
///
/// # Invariants
/// - `value` carries the dual serving/assertion representation of the base.
/// - `query_parameters` preserves declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Url {
    /// Base URL or path value.
    pub value: FieldValue,
    /// Query parameters in declaration order.
    #[serde(default)]
    pub query_parameters: Option<Vec<QueryParameter>>,
}

/// One query parameter: a literal name and a dual-valued value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParameter {
    /// Parameter name literal.
    pub name: String,
    /// Parameter value, literal or matching strategy.
    pub value: FieldValue,
}

// ============================================================================
// SECTION: Headers
// ============================================================================

/// One header: a literal name and a dual-valued value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Header name literal.
    pub name: String,
    /// Header value, literal or matching strategy.
    pub value: FieldValue,
}

// ============================================================================
// SECTION: Field Values and Matching Strategies
// ============================================================================

/// A contract field value: a plain literal or a matching-strategy
/// placeholder carrying both representations.
///
/// This closed union replaces runtime shape inspection; consumers match the
/// variant tag exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// A literal value, identical on both sides.
    Literal(Value),
    /// A matching strategy with distinct serving and assertion sides.
    Matcher(MatchingStrategy),
}

/// A placeholder value carrying a match kind plus both of its
/// representations.
///
/// # Invariants
/// - At resolution time exactly one side is selected per pass; no field
///   resolves to both sides simultaneously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingStrategy {
    /// Match kind tag.
    pub kind: MatchKind,
    /// Value used when the described server behavior is stubbed or served.
    pub serving: Value,
    /// Value used when the generated test validates actual behavior.
    pub assertion: Value,
}

/// Match kinds supported by matching strategies.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The field equals the given value.
    EqualTo,
    /// The field contains the given value.
    Containing,
    /// The field must not be present on the wire; excluded from generated
    /// output.
    Absent,
    /// The field matches the given pattern.
    Pattern,
}

// ============================================================================
// SECTION: Multipart Entries
// ============================================================================

/// One multipart entry, keyed by its field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipartEntry {
    /// Multipart field name literal.
    pub name: String,
    /// Entry payload: a file descriptor or a plain field value.
    pub value: MultipartValue,
}

/// Multipart entry payload, a closed two-variant union.
///
/// No other shapes are valid; exhaustive matching makes the dispatch total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipartValue {
    /// A file-bearing entry.
    Named(NamedProperty),
    /// A plain field entry.
    Field(FieldValue),
}

/// A structured multipart file descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedProperty {
    /// File name presented for the part.
    pub file_name: FieldValue,
    /// File content for the part.
    pub content: FieldValue,
    /// Optional content type for the part.
    #[serde(default)]
    pub content_type: Option<FieldValue>,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
