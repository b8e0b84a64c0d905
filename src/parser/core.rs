/// Parser state.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods
///   in a single module while avoiding one large source file.
/// - The parser is single-pass and fail-fast: the first syntax error aborts
///   parsing with no partial tree and no recovery. Callers that want multiple
///   errors re-run after fixing the first.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `rill_syntax::lexer`, including
    ///   the terminating `Eof` token.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.declaration()?);
        }

        Ok(Program { body })
    }
}
