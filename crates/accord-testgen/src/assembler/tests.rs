// crates/accord-testgen/src/assembler/tests.rs
// ============================================================================
// Module: Assembler Unit Tests
// Description: Unit coverage for the arrange/act/assert phase machine.
// Purpose: Pin phase ordering, nesting discipline, and terminator policy.
// Dependencies: accord-contract, accord-testgen, serde_json
// ============================================================================

//! ## Overview
//! Covers the empty arrange phase, the act phase's nested call line, assert
//! ordering with the phase separator, and both terminator policies.

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

use accord_contract::model::Contract;
use accord_contract::model::FieldValue;
use accord_contract::model::Header;
use accord_contract::model::Request;
use accord_contract::model::Response;
use accord_contract::model::Url;
use serde_json::json;

use crate::AssertionStyle;
use crate::GenConfig;
use crate::GenError;
use crate::OutputFlavor;
use crate::assembler::Assembler;
use crate::emit::CodeBuffer;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

fn get_contract(path: &str) -> Contract {
    Contract {
        request: Request {
            method: "GET".to_string(),
            url: None,
            url_path: Some(Url {
                value: FieldValue::Literal(json!(path)),
                query_parameters: None,
            }),
            headers: Vec::new(),
            body: None,
            multipart: None,
        },
        response: Response {
            status: 200,
            headers: None,
            body: None,
        },
    }
}

fn assemble(contract: &Contract, config: GenConfig) -> Result<CodeBuffer, GenError> {
    let prefix = config.flavor.default_prefix();
    let renderer = config.assertions.renderer();
    let assembler = Assembler::new(contract, &config, prefix.as_ref(), renderer.as_ref());
    let mut buffer = CodeBuffer::new();
    assembler.assemble(&mut buffer)?;
    Ok(buffer)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn arrange_phase_is_empty_without_request_input() -> Result<(), GenError> {
    let buffer = assemble(&get_contract("/ping"), GenConfig::default())?;
    let first = &buffer.fragments()[0].text;
    assert!(first.starts_with("let response ="), "arrange must emit nothing, got {first}");
    Ok(())
}

#[test]
fn act_phase_nests_the_call_one_level_under_the_prefix() -> Result<(), GenError> {
    let buffer = assemble(&get_contract("/ping"), GenConfig::default())?;
    let fragments = buffer.fragments();
    assert_eq!(fragments[0].depth, 0);
    assert_eq!(fragments[0].text, "let response = client()");
    assert_eq!(fragments[1].depth, 1);
    assert_eq!(fragments[1].text, ".get(\"/ping\");");
    Ok(())
}

#[test]
fn method_name_is_lower_cased() -> Result<(), GenError> {
    let mut contract = get_contract("/items");
    contract.request.method = "DELETE".to_string();
    let buffer = assemble(&contract, GenConfig::default())?;
    assert_eq!(buffer.fragments()[1].text, ".delete(\"/items\");");
    Ok(())
}

#[test]
fn arrange_phase_chains_headers_under_the_binding() -> Result<(), GenError> {
    let mut contract = get_contract("/ping");
    contract.request.headers.push(Header {
        name: "Accept".to_string(),
        value: FieldValue::Literal(json!("application/json")),
    });
    let buffer = assemble(&contract, GenConfig::default())?;
    let fragments = buffer.fragments();
    assert_eq!(fragments[0].text, "let request = request()");
    assert_eq!(fragments[0].depth, 0);
    assert_eq!(fragments[1].text, ".header(\"Accept\", \"application/json\");");
    assert_eq!(fragments[1].depth, 1);
    assert_eq!(fragments[2].text, "let response = client().spec(&request)");
    Ok(())
}

#[test]
fn assert_phase_separates_body_validation_with_a_blank_fragment() -> Result<(), GenError> {
    let mut contract = get_contract("/users");
    contract.response.body = Some(FieldValue::Literal(json!({"name": "bob"})));
    let buffer = assemble(&contract, GenConfig::default())?;
    let texts: Vec<&str> =
        buffer.fragments().iter().map(|fragment| fragment.text.as_str()).collect();
    let separator = texts
        .iter()
        .position(|text| text.is_empty())
        .ok_or_else(|| GenError::MalformedContract("missing separator".to_string()))?;
    assert!(texts[separator - 1].contains("response.status()"));
    assert!(texts[separator + 1].contains("as_json()"));
    Ok(())
}

#[test]
fn script_flavor_emits_no_terminators() -> Result<(), GenError> {
    let config = GenConfig {
        flavor: OutputFlavor::Script,
        assertions: AssertionStyle::AssertThat,
    };
    let mut contract = get_contract("/ping");
    contract.request.headers.push(Header {
        name: "Accept".to_string(),
        value: FieldValue::Literal(json!("text/plain")),
    });
    let buffer = assemble(&contract, config)?;
    for fragment in buffer.fragments() {
        assert!(!fragment.text.ends_with(';'), "unexpected terminator in {}", fragment.text);
    }
    assert_eq!(buffer.fragments()[0].text, "request = request()");
    Ok(())
}

#[test]
fn nesting_opens_equal_closes_for_every_phase_mix() -> Result<(), GenError> {
    let mut contract = get_contract("/users");
    contract.request.headers.push(Header {
        name: "Accept".to_string(),
        value: FieldValue::Literal(json!("application/json")),
    });
    contract.request.body = Some(FieldValue::Literal(json!({"q": 1})));
    contract.response.headers = Some(vec![Header {
        name: "Content-Type".to_string(),
        value: FieldValue::Literal(json!("application/json")),
    }]);
    contract.response.body = Some(FieldValue::Literal(json!({"ok": true})));
    let buffer = assemble(&contract, GenConfig::default())?;
    assert_eq!(buffer.scopes_opened(), buffer.scopes_closed());
    assert_eq!(buffer.depth(), 0);
    Ok(())
}
