// crates/accord-contract/src/resolve.rs
// ============================================================================
// Module: Value Resolver
// Description: Dual-representation resolution for contract field values.
// Purpose: Select the serving-side or assertion-side value of any field.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The same contract describes both how the server should behave when
//! stubbed and what the client-facing test should assert; the two may
//! legitimately differ. Resolution picks exactly one side per pass: a
//! literal field yields the literal unchanged in either mode, while a
//! matching strategy yields its serving-side value under
//! [`ResolutionMode::Serving`] and its assertion-side value under
//! [`ResolutionMode::Assertion`].
//!
//! Every generator component operates in assertion mode except where noted;
//! serving mode is carried for stub-side emitters.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::model::FieldValue;
use crate::model::MatchKind;
use crate::model::MatchingStrategy;

// ============================================================================
// SECTION: Resolution Mode
// ============================================================================

/// Which representation of a dual-valued field to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// The value used when the described server behavior is stubbed/served.
    Serving,
    /// The value used when the generated test validates actual behavior.
    Assertion,
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

impl MatchingStrategy {
    /// Returns the side of this strategy selected by `mode`.
    #[must_use]
    pub const fn side(&self, mode: ResolutionMode) -> &Value {
        match mode {
            ResolutionMode::Serving => &self.serving,
            ResolutionMode::Assertion => &self.assertion,
        }
    }
}

impl FieldValue {
    /// Resolves this field to exactly one representation.
    ///
    /// Literals are returned unchanged in either mode.
    #[must_use]
    pub const fn resolve(&self, mode: ResolutionMode) -> &Value {
        match self {
            Self::Literal(value) => value,
            Self::Matcher(strategy) => strategy.side(mode),
        }
    }

    /// Returns the match kind when this field holds a matching strategy.
    #[must_use]
    pub const fn matcher_kind(&self) -> Option<MatchKind> {
        match self {
            Self::Literal(_) => None,
            Self::Matcher(strategy) => Some(strategy.kind),
        }
    }

    /// Returns true when this field is an absent-kind matching strategy and
    /// must never appear on the wire.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self.matcher_kind(), Some(MatchKind::Absent))
    }
}

// ============================================================================
// SECTION: Scalar Rendering
// ============================================================================

/// Renders a resolved value for an inline position such as a header value,
/// query parameter value, or multipart field value.
///
/// Strings render without surrounding quotes; every other value renders as
/// its compact JSON text. Inline positions are scalar in practice, but the
/// rendering is total so a structured value degrades to deterministic JSON
/// rather than an error.
#[must_use]
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
