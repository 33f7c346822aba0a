// crates/accord-testgen/src/emit.rs
// ============================================================================
// Module: Output Buffer
// Description: Fragment buffer with scoped indentation and text rendering.
// Purpose: Collect ordered fragments at explicit nesting depths.
// Dependencies: accord-contract, serde_json, std
// ============================================================================

//! ## Overview
//! Generated output is an ordered sequence of [`Fragment`]s, each one line
//! of text at an indentation depth. The buffer is a stack-discipline
//! resource: [`CodeBuffer::indented`] pushes a nesting level and returns a
//! guard that pops it on drop, so every scope closes on every exit path,
//! including early error returns. Scope counters stay observable so callers
//! can check that opens and closes balance.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ops::Deref;
use std::ops::DerefMut;

use accord_contract::content::ascii_escaped;

// ============================================================================
// SECTION: Fragments
// ============================================================================

/// One unit of generated output text at a given indentation depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Indentation depth in nesting levels.
    pub depth: usize,
    /// Fragment text; empty text renders as a blank line.
    pub text: String,
}

// ============================================================================
// SECTION: Code Buffer
// ============================================================================

/// Ordered fragment buffer owned by the caller of the generator.
///
/// # Invariants
/// - Fragments are appended in order and never reordered.
/// - `scopes_opened` equals `scopes_closed` whenever no [`Indented`] guard
///   is live.
#[derive(Debug, Default)]
pub struct CodeBuffer {
    /// Collected fragments in emission order.
    fragments: Vec<Fragment>,
    /// Current indentation depth for new fragments.
    depth: usize,
    /// Number of nesting levels pushed so far.
    opened: usize,
    /// Number of nesting levels popped so far.
    closed: usize,
}

impl CodeBuffer {
    /// Creates an empty buffer at depth zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer whose fragments start at the given depth.
    ///
    /// Useful when generated output is spliced into an enclosing block.
    #[must_use]
    pub fn at_depth(depth: usize) -> Self {
        Self {
            fragments: Vec::new(),
            depth,
            opened: 0,
            closed: 0,
        }
    }

    /// Appends one fragment at the current depth.
    pub fn line(&mut self, text: impl Into<String>) {
        self.fragments.push(Fragment {
            depth: self.depth,
            text: text.into(),
        });
    }

    /// Appends a blank separator fragment.
    pub fn blank(&mut self) {
        self.fragments.push(Fragment {
            depth: self.depth,
            text: String::new(),
        });
    }

    /// Appends a suffix to the most recent fragment, if any.
    ///
    /// Statement terminators attach to the closing fragment of a chain, so
    /// this is the seam the assembler uses for terminator policy.
    pub fn append_last(&mut self, suffix: &str) {
        if let Some(fragment) = self.fragments.last_mut() {
            fragment.text.push_str(suffix);
        }
    }

    /// Pushes one nesting level and returns the guard that pops it.
    pub fn indented(&mut self) -> Indented<'_> {
        self.depth += 1;
        self.opened += 1;
        Indented {
            buffer: self,
        }
    }

    /// Returns the collected fragments in emission order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns true when no fragment has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns the current indentation depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns how many nesting levels have been pushed.
    #[must_use]
    pub const fn scopes_opened(&self) -> usize {
        self.opened
    }

    /// Returns how many nesting levels have been popped.
    #[must_use]
    pub const fn scopes_closed(&self) -> usize {
        self.closed
    }

    /// Moves every fragment of `other` into this buffer, accumulating its
    /// scope counters.
    ///
    /// Generation assembles into a scratch buffer and absorbs it on success
    /// only, so a failed contract commits no partial output.
    pub fn absorb(&mut self, other: Self) {
        self.opened += other.opened;
        self.closed += other.closed;
        self.fragments.extend(other.fragments);
    }

    /// Renders the fragments to final text using the given indent unit.
    #[must_use]
    pub fn render(&self, indent_unit: &str) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            if fragment.text.is_empty() {
                out.push('\n');
                continue;
            }
            for _ in 0 .. fragment.depth {
                out.push_str(indent_unit);
            }
            out.push_str(&fragment.text);
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// SECTION: Indentation Guard
// ============================================================================

/// Guard representing one pushed nesting level.
///
/// Dereferences to the underlying buffer; dropping the guard restores the
/// prior depth, so nesting balances even under early returns.
#[derive(Debug)]
pub struct Indented<'a> {
    /// Buffer whose depth this guard restores on drop.
    buffer: &'a mut CodeBuffer,
}

impl Deref for Indented<'_> {
    type Target = CodeBuffer;

    fn deref(&self) -> &CodeBuffer {
        self.buffer
    }
}

impl DerefMut for Indented<'_> {
    fn deref_mut(&mut self) -> &mut CodeBuffer {
        self.buffer
    }
}

impl Drop for Indented<'_> {
    fn drop(&mut self) {
        self.buffer.depth = self.buffer.depth.saturating_sub(1);
        self.buffer.closed += 1;
    }
}

// ============================================================================
// SECTION: String Literals
// ============================================================================

/// Renders text as a quoted string literal for generated fragments.
///
/// Uses JSON encoding for correct escaping, then applies the shared ASCII
/// escape policy; falls back to a best-effort quoted string on error.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let quoted = serde_json::to_string(value)
        .unwrap_or_else(|_| format!("\"{}\"", value.replace('"', "\\\"")));
    ascii_escaped(&quoted)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
