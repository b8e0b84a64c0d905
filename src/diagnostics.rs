//! Diagnostics for the Rill syntax frontend
//!
//! Two tiers of problems come out of this crate:
//!
//! - [`LexDiagnostic`]: soft findings recorded while scanning. The lexer
//!   never aborts; it notes the problem, emits a placeholder token, and
//!   keeps going.
//! - [`ParseError`]: hard failures. The parser stops at the first one and
//!   returns no partial tree.
//!
//! Both carry the human-readable position (line and column) and a byte span,
//! so callers can print `message` at `position` directly or attach the source
//! text and render a labeled report through [`miette`].

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::tokens::{Position, Token};

/// A problem found while scanning, recorded without stopping the lexer.
///
/// ## Notes
/// - The token stream stays total: each diagnostic pairs with a placeholder
///   token (`Illegal`, or an empty string literal) at the same position.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{message}")]
pub struct LexDiagnostic {
    pub message: String,
    pub position: Position,
    #[label("here")]
    pub span: SourceSpan,
}

impl LexDiagnostic {
    /// Record a diagnostic covering `len` bytes at `position`.
    pub fn new(message: String, position: Position, len: usize) -> Self {
        Self {
            message,
            position,
            span: SourceSpan::from((position.offset, len)),
        }
    }
}

/// A fatal parse failure.
///
/// Parsing is all-or-nothing: the first mismatch aborts with a single
/// `ParseError` and no partial [`Program`](crate::ast::Program). The message
/// is meant to be surfaced verbatim alongside `position`.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub position: Position,
    #[label("unexpected token")]
    pub span: SourceSpan,
}

impl ParseError {
    fn new(message: String, token: &Token) -> Self {
        Self {
            message,
            position: token.position,
            span: SourceSpan::from((token.position.offset, token.literal.len())),
        }
    }

    /// Failure of an `expect` check: `"{message}, found {KIND}"`.
    pub fn expected(message: &str, found: &Token) -> Self {
        Self::new(format!("{}, found {}", message, found.kind), found)
    }

    /// Failure on a token no production can start with: `"Unexpected token {KIND}"`.
    pub fn unexpected(found: &Token) -> Self {
        Self::new(format!("Unexpected token {}", found.kind), found)
    }
}
