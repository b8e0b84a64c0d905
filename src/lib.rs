#![forbid(unsafe_code)]
//! Syntax frontend for the Rill language: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across future Rill
//! tooling (compiler, formatter, interactive drivers).
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does no name resolution,
//!   type checking, or evaluation.
//! - The two phases are strictly batch and synchronous: [`lexer::tokenize`]
//!   always runs to the end of the source and records problems as soft
//!   diagnostics; [`parser::parse`] then consumes the finished token stream
//!   and fails fast on the first syntax error.
//!
//! ## Examples
//! ```rust
//! use rill_syntax::{lexer, parser};
//!
//! let output = lexer::tokenize(r#"let x = "Hello, world!";"#);
//! assert!(output.diagnostics.is_empty());
//!
//! let program = parser::parse(&output.tokens).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
