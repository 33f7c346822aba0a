// crates/accord-testgen/src/render.rs
// ============================================================================
// Module: Rendering Strategies
// Description: Pluggable invocation-prefix and assertion-rendering seams.
// Purpose: Let output flavors vary syntax while sharing the assembly.
// Dependencies: accord-contract
// ============================================================================

//! ## Overview
//! Two collaborator seams keep the phase algorithm single and shared across
//! output flavors. [`InvocationPrefix`] supplies the act-phase opening
//! line; [`AssertionRenderer`] supplies the status, header, and body
//! validations. Both are injected strategies, not subclass overrides, and
//! both ship with built-in implementations the configuration selects.

// ============================================================================
// SECTION: Imports
// ============================================================================

use accord_contract::content::ContentType;
use accord_contract::model::Request;

use crate::emit::string_literal;

// ============================================================================
// SECTION: Invocation Prefix
// ============================================================================

/// Strategy supplying the act-phase invocation-opening line.
pub trait InvocationPrefix: Send + Sync {
    /// Returns the opening line for the act phase of this request.
    fn input_prefix(&self, request: &Request) -> String;
}

/// Built-in prefix binding the response from the shared client handle.
///
/// When the request carried arrange-phase input, the call chains the
/// prepared request specification; otherwise it opens a bare client call.
#[derive(Debug, Clone, Copy)]
pub struct ClientCallPrefix {
    /// True when the binding uses a `let` introduction.
    binds_with_let: bool,
}

impl ClientCallPrefix {
    /// Creates the prefix strategy with the given binding style.
    #[must_use]
    pub const fn new(binds_with_let: bool) -> Self {
        Self {
            binds_with_let,
        }
    }
}

impl InvocationPrefix for ClientCallPrefix {
    fn input_prefix(&self, request: &Request) -> String {
        let call = if request.has_input() {
            "client().spec(&request)"
        } else {
            "client()"
        };
        if self.binds_with_let {
            format!("let response = {call}")
        } else {
            format!("response = {call}")
        }
    }
}

// ============================================================================
// SECTION: Assertion Rendering
// ============================================================================

/// Renderer producing status, header, and body validation fragments.
///
/// Implementations own the assertion-library syntax; the assembler owns
/// ordering, separators, and terminator policy.
pub trait AssertionRenderer: Send + Sync {
    /// Renders the status-code validation line.
    fn status_assertion(&self, status: u16) -> String;

    /// Renders one header validation line for a resolved header value.
    fn header_assertion(&self, name: &str, value: &str) -> String;

    /// Renders the body-validation block for canonical body text and its
    /// resolved content type.
    fn body_assertion(&self, canonical_body: &str, content_type: ContentType) -> Vec<String>;
}

/// Built-in fluent `assert_that` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssertThatRenderer;

impl AssertionRenderer for AssertThatRenderer {
    fn status_assertion(&self, status: u16) -> String {
        format!("assert_that(response.status()).is_equal_to({status})")
    }

    fn header_assertion(&self, name: &str, value: &str) -> String {
        format!(
            "assert_that(response.header({})).is_equal_to({})",
            string_literal(name),
            string_literal(value)
        )
    }

    fn body_assertion(&self, canonical_body: &str, content_type: ContentType) -> Vec<String> {
        let literal = string_literal(canonical_body);
        let line = match content_type {
            ContentType::Json => {
                format!("assert_that(response.body()).as_json().is_equal_to({literal})")
            }
            ContentType::Xml => {
                format!("assert_that(response.body()).as_xml().is_equal_to({literal})")
            }
            ContentType::Text => {
                format!("assert_that(response.body()).as_text().is_equal_to({literal})")
            }
            ContentType::Unknown => {
                format!("assert_that(response.body()).is_equal_to({literal})")
            }
        };
        vec![line]
    }
}

/// Built-in expectation-style renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectRenderer;

impl AssertionRenderer for ExpectRenderer {
    fn status_assertion(&self, status: u16) -> String {
        format!("expect(response.status()).to_equal({status})")
    }

    fn header_assertion(&self, name: &str, value: &str) -> String {
        format!(
            "expect(response.header({})).to_equal({})",
            string_literal(name),
            string_literal(value)
        )
    }

    fn body_assertion(&self, canonical_body: &str, content_type: ContentType) -> Vec<String> {
        let literal = string_literal(canonical_body);
        let line = match content_type {
            ContentType::Json => format!("expect(response.body()).as_json().to_equal({literal})"),
            ContentType::Xml => format!("expect(response.body()).as_xml().to_equal({literal})"),
            ContentType::Text => format!("expect(response.body()).as_text().to_equal({literal})"),
            ContentType::Unknown => format!("expect(response.body()).to_equal({literal})"),
        };
        vec![line]
    }
}
