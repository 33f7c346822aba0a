// crates/accord-contract/src/lib.rs
// ============================================================================
// Module: Accord Contract Library
// Description: Contract model and resolvers for HTTP interaction contracts.
// Purpose: Provide the canonical shapes consumed by Accord test generation.
// Dependencies: serde, serde_jcs, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate defines the immutable model of one HTTP interaction contract, a
//! request a client may send paired with the response a server promises to
//! return, together with the resolvers that operate purely on model data:
//! selecting the serving-side or assertion-side representation of
//! dual-valued fields, canonicalizing structured body content to
//! deterministic text, and inferring a logical content type from declared
//! headers or body text.
//!
//! The model is materialized by an external parser (serde is the seam) and
//! is read-only for the remainder of the generation pipeline. Nothing in
//! this crate mutates a contract after construction.
//!
//! ## Index
//! - Model: [`model`]
//! - Value resolution: [`resolve`]
//! - Content handling: [`content`]
//! - Errors: [`ContractError`]

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod content;
pub mod model;
pub mod resolve;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use content::ContentType;
pub use model::Contract;
pub use model::Request;
pub use model::Response;
pub use resolve::ResolutionMode;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while interpreting a contract.
///
/// # Invariants
/// - Variant meanings are stable for downstream error mapping.
///
/// # Examples
/// ```
/// use accord_contract::ContractError;
///
/// let err = ContractError::Malformed("neither url nor url_path is set".to_string());
/// assert!(matches!(err, ContractError::Malformed(message) if message.contains("url")));
/// ```
#[derive(Debug, Error)]
pub enum ContractError {
    /// The contract violates a structural invariant.
    #[error("malformed contract: {0}")]
    Malformed(String),
    /// A structured value could not be canonicalized.
    #[error("serialization error: {0}")]
    Serialization(String),
}
