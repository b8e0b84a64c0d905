//! Number scanning for the Rill lexer
//!
//! Handles numeric literals.

use super::Lexer;
use super::tokens::{Position, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan a numeric literal. Called with the first digit already consumed.
    ///
    /// Consumes the maximal run of ASCII digits and `.` characters and emits
    /// it verbatim as a single token. No numeric validation happens here:
    /// `1.2.3` and `1..2` are each one number token, left for later phases
    /// to reject.
    pub(super) fn scan_number(&mut self, start: Position) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                self.advance();
            } else {
                break;
            }
        }

        let literal = self.source[start.offset..self.offset].to_string();
        self.add_token(TokenKind::Number, literal, start);
    }
}
