//! String scanning for the Rill lexer
//!
//! Handles single- and double-quoted string literals.

use super::Lexer;
use super::tokens::{Position, TokenKind};
use crate::diagnostics::LexDiagnostic;

impl<'a> Lexer<'a> {
    /// Scan a string literal. Called with the opening quote already consumed.
    ///
    /// The literal is the raw text between the quotes: no escape processing,
    /// newlines are taken as content, and only `quote` itself closes the
    /// string. A `'`-delimited string may freely contain `"` and vice versa.
    ///
    /// Reaching end of input before the closing quote records an
    /// "Unterminated string literal" diagnostic and emits a string token with
    /// an empty literal, so the stream still terminates normally.
    pub(super) fn scan_string(&mut self, start: Position, quote: char) {
        let content_start = self.offset;

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    let literal = self.source[content_start..self.offset].to_string();
                    self.advance();
                    self.add_token(TokenKind::String, literal, start);
                    return;
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    self.diagnostics.push(LexDiagnostic::new(
                        "Unterminated string literal".to_string(),
                        start,
                        1,
                    ));
                    self.add_token(TokenKind::String, String::new(), start);
                    return;
                }
            }
        }
    }
}
