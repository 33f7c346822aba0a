// crates/accord-testgen/src/lib.rs
// ============================================================================
// Module: Accord Test Generator Library
// Description: Deterministic test-body generation from interaction contracts.
// Purpose: Emit arrange/act/assert fragments for one contract per pass.
// Dependencies: accord-contract, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate turns one materialized Accord contract into the ordered
//! fragment sequence of an executable verification test body. The
//! arrange/act/assert assembly is single and shared; output flavors vary
//! only through the injected invocation-prefix strategy, the statement
//! terminator policy, and the assertion renderer.
//!
//! ### Design Notes
//! - Generation is pure and deterministic: the same contract and
//!   configuration always produce the same fragments, so retrying an
//!   identical input is meaningless and no retry layer exists here.
//! - The core holds no shared mutable state across invocations; drivers may
//!   generate many contracts in parallel, each with its own buffer.
//! - Fragments are committed atomically per contract: a malformed contract
//!   or an unserializable body leaves the caller's buffer untouched.
//!
//! ## Index
//! - Facade: [`TestBodyGenerator`], [`GenConfig`], [`OutputFlavor`],
//!   [`AssertionStyle`]
//! - Collaborator seams: [`render::InvocationPrefix`],
//!   [`render::AssertionRenderer`]
//! - Buffer: [`emit::CodeBuffer`], [`emit::Fragment`]
//! - Errors: [`GenError`]

// ============================================================================
// SECTION: Imports
// ============================================================================

use accord_contract::ContractError;
use accord_contract::model::Contract;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Modules
// ============================================================================

mod assembler;
pub mod emit;
pub mod multipart;
pub mod render;
pub mod url;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use emit::CodeBuffer;
pub use emit::Fragment;
pub use render::AssertionRenderer;
pub use render::InvocationPrefix;

use assembler::Assembler;
use render::AssertThatRenderer;
use render::ClientCallPrefix;
use render::ExpectRenderer;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by test-body generation.
///
/// # Invariants
/// - Variant meanings are stable for drivers deciding whether to stop a
///   batch or skip the failed contract.
#[derive(Debug, Error)]
pub enum GenError {
    /// The contract violates a structural invariant; generation for this
    /// contract aborts with no partial output.
    #[error("malformed contract: {0}")]
    MalformedContract(String),
    /// A body value could not be canonicalized, reported with the offending
    /// field path.
    #[error("serialization error at {path}: {message}")]
    Serialization {
        /// Contract field path of the offending value.
        path: String,
        /// Underlying encoder message.
        message: String,
    },
}

impl GenError {
    /// Maps a contract-crate error into this crate's taxonomy, attaching
    /// the field path for serialization failures.
    pub(crate) fn contract(err: ContractError, path: &str) -> Self {
        match err {
            ContractError::Malformed(message) => Self::MalformedContract(message),
            ContractError::Serialization(message) => Self::Serialization {
                path: path.to_string(),
                message,
            },
        }
    }
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Output flavor selecting invocation syntax and terminator policy.
///
/// # Invariants
/// - Variants are stable for driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFlavor {
    /// Fluent chained calls with `;` statement terminators.
    Fluent,
    /// Script-style output without statement terminators.
    Script,
}

impl OutputFlavor {
    /// Returns the statement terminator for this flavor, if any.
    #[must_use]
    pub const fn terminator(self) -> Option<&'static str> {
        match self {
            Self::Fluent => Some(";"),
            Self::Script => None,
        }
    }

    /// Returns the arrange-phase line binding the request specification.
    #[must_use]
    pub const fn request_binding(self) -> &'static str {
        match self {
            Self::Fluent => "let request = request()",
            Self::Script => "request = request()",
        }
    }

    /// Returns the built-in invocation-prefix strategy for this flavor.
    #[must_use]
    pub fn default_prefix(self) -> Box<dyn InvocationPrefix> {
        match self {
            Self::Fluent => Box::new(ClientCallPrefix::new(true)),
            Self::Script => Box::new(ClientCallPrefix::new(false)),
        }
    }
}

/// Assertion-library selector for validation rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionStyle {
    /// Fluent `assert_that(...)` assertions.
    AssertThat,
    /// Expectation-style `expect(...)` assertions.
    Expect,
}

impl AssertionStyle {
    /// Returns the built-in renderer for this style.
    #[must_use]
    pub fn renderer(self) -> Box<dyn AssertionRenderer> {
        match self {
            Self::AssertThat => Box::new(AssertThatRenderer),
            Self::Expect => Box::new(ExpectRenderer),
        }
    }
}

/// Configuration bundle supplied by the external driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenConfig {
    /// Output flavor for invocation syntax and terminators.
    pub flavor: OutputFlavor,
    /// Assertion-library selector.
    pub assertions: AssertionStyle,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            flavor: OutputFlavor::Fluent,
            assertions: AssertionStyle::AssertThat,
        }
    }
}

// ============================================================================
// SECTION: Generator Facade
// ============================================================================

/// Test-body generator configured for one output flavor.
///
/// # Invariants
/// - Holds no mutable state; one generator may serve many contracts, each
///   writing into its own buffer.
/// - Fragments reach the caller's buffer only when generation succeeds.
///
/// # Examples
/// ```
/// use accord_contract::model::Contract;
/// use accord_testgen::CodeBuffer;
/// use accord_testgen::GenConfig;
/// use accord_testgen::TestBodyGenerator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let contract: Contract = serde_json::from_value(serde_json::json!({
///     "request": {"method": "GET", "url_path": {"value": {"literal": "/ping"}}},
///     "response": {"status": 200}
/// }))?;
/// let generator = TestBodyGenerator::new(GenConfig::default());
/// let mut buffer = CodeBuffer::new();
/// generator.generate(&contract, &mut buffer)?;
/// assert!(buffer.render("    ").contains(".get(\"/ping\");"));
/// # Ok(())
/// # }
/// ```
pub struct TestBodyGenerator {
    /// Flavor and assertion configuration.
    config: GenConfig,
    /// Invocation-prefix strategy; defaults to the flavor's built-in.
    prefix: Box<dyn InvocationPrefix>,
    /// Assertion renderer; defaults to the configured style's built-in.
    renderer: Box<dyn AssertionRenderer>,
}

impl TestBodyGenerator {
    /// Creates a generator with the built-in strategies for `config`.
    #[must_use]
    pub fn new(config: GenConfig) -> Self {
        Self {
            config,
            prefix: config.flavor.default_prefix(),
            renderer: config.assertions.renderer(),
        }
    }

    /// Replaces the invocation-prefix strategy.
    #[must_use]
    pub fn with_invocation_prefix(mut self, prefix: Box<dyn InvocationPrefix>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Replaces the assertion renderer.
    #[must_use]
    pub fn with_assertion_renderer(mut self, renderer: Box<dyn AssertionRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Returns the generator's configuration.
    #[must_use]
    pub const fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Generates the test body for one contract into the caller's buffer.
    ///
    /// Assembly runs against a scratch buffer that is absorbed only on
    /// success, so a failed contract commits no partial fragments.
    ///
    /// # Errors
    /// Returns [`GenError`] on a malformed contract or a body value that
    /// cannot be canonicalized.
    pub fn generate(&self, contract: &Contract, buffer: &mut CodeBuffer) -> Result<(), GenError> {
        let mut scratch = CodeBuffer::at_depth(buffer.depth());
        let assembler =
            Assembler::new(contract, &self.config, self.prefix.as_ref(), self.renderer.as_ref());
        assembler.assemble(&mut scratch)?;
        buffer.absorb(scratch);
        Ok(())
    }
}
