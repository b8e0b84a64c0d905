//! Lexer for the Rill language
//!
//! Handles tokenization including:
//! - Keywords (let, loop, while, struct, etc.) and identifiers
//! - Numeric and string literals (single or double quoted)
//! - Single-character punctuation
//! - Whitespace and `//` line comments
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Position)
//! - `strings` - String literal scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Position, Token, TokenKind, keyword_kind};

use crate::diagnostics::LexDiagnostic;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for Rill source code.
///
/// Converts source text into a stream of tokens, handling:
/// - Keywords and identifiers (identifiers may contain `-`)
/// - Numeric and string literals
/// - Single-character punctuation
/// - Whitespace and `//` line comments
///
/// Scanning never aborts: unrecognized characters become
/// [`TokenKind::Illegal`] tokens and unterminated strings become empty
/// [`TokenKind::String`] tokens, each with a diagnostic recorded alongside
/// the token stream.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    offset: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
    diagnostics: Vec<LexDiagnostic>,
}

/// Result of tokenizing a source string.
///
/// The token stream is always usable: problems are recorded as
/// [`LexDiagnostic`]s instead of failing the scan, so `tokens` ends with a
/// [`TokenKind::Eof`] token even when `diagnostics` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexDiagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            offset: 0,
            line: 1,
            column: 0,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The returned token stream always ends with an `Eof` token positioned
    /// just past the last character. Problems found while scanning are
    /// recorded in [`LexOutput::diagnostics`]; they never abort the scan.
    pub fn tokenize(mut self) -> LexOutput {
        while !self.is_at_end() {
            self.scan_token();
        }

        let end = self.position();
        self.tokens.push(Token::new(TokenKind::Eof, String::new(), end));

        LexOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.offset..].char_indices();
        iter.next(); // skip current
        iter.next().map(|(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.offset = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    /// Position of the next character to be consumed.
    ///
    /// Captured before a token's first character is consumed, this is the
    /// token's start position.
    fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    /// Skip whitespace and `//` line comments before the next token.
    ///
    /// Comments run to the end of the line; the terminating newline is
    /// consumed as part of the comment. Whitespace and comments may
    /// interleave arbitrarily.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    while let Some(c) = self.advance() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                _ => return,
            }
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        self.skip_trivia();

        let start = self.position();
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Punctuation
            '=' => self.add_punct(TokenKind::Assign, c, start),
            ':' => self.add_punct(TokenKind::Colon, c, start),
            ';' => self.add_punct(TokenKind::Semicolon, c, start),
            '(' => self.add_punct(TokenKind::LParen, c, start),
            ')' => self.add_punct(TokenKind::RParen, c, start),
            '{' => self.add_punct(TokenKind::LBrace, c, start),
            '}' => self.add_punct(TokenKind::RBrace, c, start),
            '[' => self.add_punct(TokenKind::LBracket, c, start),
            ']' => self.add_punct(TokenKind::RBracket, c, start),
            ',' => self.add_punct(TokenKind::Comma, c, start),
            '.' => self.add_punct(TokenKind::Dot, c, start),
            '+' => self.add_punct(TokenKind::Plus, c, start),
            '-' => self.add_punct(TokenKind::Minus, c, start),
            '*' => self.add_punct(TokenKind::Asterisk, c, start),
            '/' => self.add_punct(TokenKind::Slash, c, start),
            '!' => self.add_punct(TokenKind::Bang, c, start),
            '<' => self.add_punct(TokenKind::Lt, c, start),
            '>' => self.add_punct(TokenKind::Gt, c, start),

            // Strings (closed only by the same quote character)
            '"' | '\'' => self.scan_string(start, c),

            // Numbers
            '0'..='9' => self.scan_number(start),

            // Identifiers and keywords
            _ if is_letter(c) => self.scan_identifier(start),

            _ => {
                self.diagnostics.push(LexDiagnostic::new(
                    format!(
                        "Unexpected character '{}': {}",
                        c,
                        self.context_window(start.offset)
                    ),
                    start,
                    c.len_utf8(),
                ));
                self.add_punct(TokenKind::Illegal, c, start);
            }
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, literal: String, start: Position) {
        self.tokens.push(Token::new(kind, literal, start));
    }

    fn add_punct(&mut self, kind: TokenKind, c: char, start: Position) {
        self.add_token(kind, c.to_string(), start);
    }

    /// Up to ten characters of source on each side of `offset`, clamped to
    /// char boundaries. Shown in unexpected-character diagnostics.
    fn context_window(&self, offset: usize) -> &str {
        let start = self.source[..offset]
            .char_indices()
            .rev()
            .nth(9)
            .map_or(0, |(i, _)| i);
        let end = self.source[offset..]
            .char_indices()
            .nth(10)
            .map_or(self.source.len(), |(i, _)| offset + i);
        &self.source[start..end]
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: Position) {
        while let Some(c) = self.peek() {
            if is_identifier_char(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = self.source[start.offset..self.offset].to_string();
        let kind = keyword_kind(&spelling).unwrap_or(TokenKind::Ident);
        self.add_token(kind, spelling, start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
///
/// `-` is accepted, so `kebab-case` scans as one identifier and `let-x` is
/// an identifier rather than the `let` keyword.
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Convenience function to tokenize a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> LexOutput {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
