//! Parser for the Rill language
//!
//! Converts a token stream into an AST by recursive descent. Parsing is
//! fail-fast: the first syntax error aborts with no partial tree.
//!
//! ## Examples
//!
//! ```rust
//! use rill_syntax::{lexer, parser};
//!
//! let output = lexer::tokenize(r#"let x = "Hello, world!";"#);
//! let program = parser::parse(&output.tokens).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
