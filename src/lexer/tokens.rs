//! Token types for the Rill lexer.
//!
//! Tokens carry their kind, the exact source spelling (`literal`), and the
//! position where the token begins.
//!
//! ## Notes
//! - [`TokenKind`] is a closed vocabulary: new syntax means a new variant here
//!   plus a scanning rule, never a stringly-typed token.
//! - Kind names printed by [`TokenKind`]'s `Display` are the canonical
//!   uppercase names used in diagnostics (`IDENT`, `NUMBER`, `EOF`, ...).

use std::fmt;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keywords ==========
    Let,
    Var,
    Int,
    Float,
    Str,
    Bool,
    Char,
    Arr,
    List,
    Dict,
    Struct,
    Loop,
    Repeat,
    While,
    For,
    In,
    Function,

    // ========== Identifiers and literals ==========
    Ident,
    Number,
    String,

    // ========== Punctuation ==========
    Assign,
    Colon,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Bang,
    Lt,
    Gt,

    // ========== Special ==========
    /// A character no scanning rule recognizes. Non-fatal; scanning continues.
    Illegal,
    /// End of input. Always the last token of a stream.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Let => "LET",
            TokenKind::Var => "VAR",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Str => "STR",
            TokenKind::Bool => "BOOL",
            TokenKind::Char => "CHAR",
            TokenKind::Arr => "ARR",
            TokenKind::List => "LIST",
            TokenKind::Dict => "DICT",
            TokenKind::Struct => "STRUCT",
            TokenKind::Loop => "LOOP",
            TokenKind::Repeat => "REPEAT",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::In => "IN",
            TokenKind::Function => "FUNCTION",
            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Bang => "BANG",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// Source location where a token begins.
///
/// `line` is 1-based. `column` is 0-based, counts characters, and resets at
/// each newline. `offset` is the byte offset into the source, usable for
/// slicing and for diagnostic labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token with its kind, literal spelling, and source position.
///
/// ## Notes
/// - `literal` is the exact matched text, except for string tokens (content
///   without the quotes) and the `Eof` token (empty).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub position: Position,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, literal: String, position: Position) -> Self {
        Self {
            kind,
            literal,
            position,
        }
    }
}

/// Resolve an identifier spelling to a keyword kind, if reserved.
///
/// The lookup is exact and case-sensitive: `Let` and `LET` are ordinary
/// identifiers. A spelling that merely contains a keyword (`let-x`) never
/// matches, because the lexer hands over the full maximal run.
pub fn keyword_kind(spelling: &str) -> Option<TokenKind> {
    let kind = match spelling {
        "let" => TokenKind::Let,
        "var" => TokenKind::Var,
        "int" => TokenKind::Int,
        "float" => TokenKind::Float,
        "str" => TokenKind::Str,
        "bool" => TokenKind::Bool,
        "char" => TokenKind::Char,
        "arr" => TokenKind::Arr,
        "list" => TokenKind::List,
        "dict" => TokenKind::Dict,
        "struct" => TokenKind::Struct,
        "loop" => TokenKind::Loop,
        "repeat" => TokenKind::Repeat,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "in" => TokenKind::In,
        "fn" => TokenKind::Function,
        _ => return None,
    };
    Some(kind)
}
