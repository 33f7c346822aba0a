// crates/accord-testgen/src/assembler.rs
// ============================================================================
// Module: Method Body Assembler
// Description: Orchestrates the arrange/act/assert phases of a test body.
// Purpose: Assemble resolved contract values into ordered fragments.
// Dependencies: accord-contract
// ============================================================================

//! ## Overview
//! The assembler walks one contract through three ordered phases. Arrange
//! prepares the request specification when the request carries headers, a
//! body, or multipart entries. Act opens the invocation with the injected
//! prefix strategy and nests the built URL under the lower-cased method
//! name. Assert always validates the status code, then headers when
//! declared, then the canonicalized body after a phase separator.
//!
//! Each phase restores the buffer's indentation before returning; the
//! nesting guard makes that hold on every exit path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use accord_contract::content::canonical_text;
use accord_contract::content::resolve_content_type;
use accord_contract::model::Contract;
use accord_contract::resolve::ResolutionMode;
use accord_contract::resolve::scalar_text;

use crate::GenConfig;
use crate::GenError;
use crate::emit::CodeBuffer;
use crate::emit::string_literal;
use crate::multipart;
use crate::render::AssertionRenderer;
use crate::render::InvocationPrefix;
use crate::url;

// ============================================================================
// SECTION: Assembler
// ============================================================================

/// Assembles the fragment sequence for one contract.
///
/// # Invariants
/// - Holds no state across invocations; one assembler serves one contract.
/// - Every nesting level a phase opens is closed before the phase returns.
pub(crate) struct Assembler<'a> {
    /// Contract under generation.
    contract: &'a Contract,
    /// Flavor and assertion configuration.
    config: &'a GenConfig,
    /// Injected invocation-prefix strategy.
    prefix: &'a dyn InvocationPrefix,
    /// Injected assertion renderer.
    renderer: &'a dyn AssertionRenderer,
}

impl<'a> Assembler<'a> {
    /// Creates an assembler for one contract.
    pub(crate) const fn new(
        contract: &'a Contract,
        config: &'a GenConfig,
        prefix: &'a dyn InvocationPrefix,
        renderer: &'a dyn AssertionRenderer,
    ) -> Self {
        Self {
            contract,
            config,
            prefix,
            renderer,
        }
    }

    /// Runs the three phases in order against the buffer.
    ///
    /// # Errors
    /// Returns [`GenError`] on a malformed contract or a body that cannot
    /// be canonicalized.
    pub(crate) fn assemble(&self, buffer: &mut CodeBuffer) -> Result<(), GenError> {
        self.arrange(buffer)?;
        self.act(buffer)?;
        self.then(buffer)
    }

    /// Arrange phase: request headers, body, and multipart entries.
    fn arrange(&self, buffer: &mut CodeBuffer) -> Result<(), GenError> {
        let request = &self.contract.request;
        if !request.has_input() {
            return Ok(());
        }
        buffer.line(self.config.flavor.request_binding());
        {
            let mut scope = buffer.indented();
            for header in &request.headers {
                let value = scalar_text(header.value.resolve(ResolutionMode::Assertion));
                scope.line(format!(
                    ".header({}, {})",
                    string_literal(&header.name),
                    string_literal(&value)
                ));
            }
            if let Some(body) = &request.body {
                let resolved = body.resolve(ResolutionMode::Assertion);
                let text = canonical_text(resolved)
                    .map_err(|err| GenError::contract(err, "request.body"))?;
                scope.line(format!(".body({})", string_literal(&text)));
            }
            if let Some(entries) = &request.multipart {
                multipart::encode(entries, &mut scope);
            }
        }
        if let Some(terminator) = self.config.flavor.terminator() {
            buffer.append_last(terminator);
        }
        Ok(())
    }

    /// Act phase: invocation prefix, then the URL under the method name.
    fn act(&self, buffer: &mut CodeBuffer) -> Result<(), GenError> {
        let built = url::build_url(&self.contract.request)?;
        let method = self.contract.request.method.to_ascii_lowercase();
        buffer.line(self.prefix.input_prefix(&self.contract.request));
        let mut scope = buffer.indented();
        let mut call = format!(".{method}({})", string_literal(&built));
        if let Some(terminator) = self.config.flavor.terminator() {
            call.push_str(terminator);
        }
        scope.line(call);
        Ok(())
    }

    /// Assert phase: status code, declared headers, then the body after a
    /// phase separator.
    fn then(&self, buffer: &mut CodeBuffer) -> Result<(), GenError> {
        let response = &self.contract.response;
        self.statement(buffer, self.renderer.status_assertion(response.status));
        if let Some(headers) = &response.headers {
            for header in headers {
                let value = scalar_text(header.value.resolve(ResolutionMode::Assertion));
                self.statement(buffer, self.renderer.header_assertion(&header.name, &value));
            }
        }
        if let Some(body) = &response.body {
            let resolved = body.resolve(ResolutionMode::Assertion);
            let text =
                canonical_text(resolved).map_err(|err| GenError::contract(err, "response.body"))?;
            let declared = response.headers.as_deref().unwrap_or(&[]);
            let content_type = resolve_content_type(declared, Some(resolved));
            buffer.blank();
            for line in self.renderer.body_assertion(&text, content_type) {
                self.statement(buffer, line);
            }
        }
        Ok(())
    }

    /// Emits one top-level statement line under the flavor's terminator
    /// policy.
    fn statement(&self, buffer: &mut CodeBuffer, mut line: String) {
        if let Some(terminator) = self.config.flavor.terminator() {
            line.push_str(terminator);
        }
        buffer.line(line);
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
