// crates/accord-testgen/src/url.rs
// ============================================================================
// Module: URL Builder
// Description: Renders the request path with its filtered query string.
// Purpose: Produce the assertion-side URL text sent by the generated test.
// Dependencies: accord-contract
// ============================================================================

//! ## Overview
//! The built URL is the assertion-side base value plus a query string
//! assembled from the declared parameters. Parameters whose value is an
//! absent-kind matching strategy must never appear in the path the test
//! sends and are filtered out; the remainder render `name=value` joined
//! with `&` in declaration order. A list that is empty after filtering
//! renders no `?` at all.

// ============================================================================
// SECTION: Imports
// ============================================================================

use accord_contract::model::Request;
use accord_contract::resolve::ResolutionMode;
use accord_contract::resolve::scalar_text;

use crate::GenError;

// ============================================================================
// SECTION: URL Building
// ============================================================================

/// Builds the URL text the generated test sends.
///
/// # Errors
/// Returns [`GenError::MalformedContract`] when the request sets neither or
/// both of url and url_path; no fragment is emitted for such a contract.
pub fn build_url(request: &Request) -> Result<String, GenError> {
    let url = request.url_spec().map_err(|err| GenError::contract(err, "request.url"))?;
    let base = scalar_text(url.value.resolve(ResolutionMode::Assertion));
    let Some(parameters) = &url.query_parameters else {
        return Ok(base);
    };
    let rendered: Vec<String> = parameters
        .iter()
        .filter(|parameter| !parameter.value.is_absent())
        .map(|parameter| {
            let value = scalar_text(parameter.value.resolve(ResolutionMode::Assertion));
            format!("{}={value}", parameter.name)
        })
        .collect();
    if rendered.is_empty() {
        Ok(base)
    } else {
        Ok(format!("{base}?{}", rendered.join("&")))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
