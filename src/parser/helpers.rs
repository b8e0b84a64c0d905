/// Token-stream primitives.
///
/// This chunk contains the low-level cursor operations every production is
/// written in terms of: peeking and consuming tokens, kind checks, and
/// `expect`. Productions never index the token slice directly.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Return the most recently consumed token.
    fn previous(&self) -> &Token {
        &self.tokens[self.pos - 1]
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// The cursor never moves past the `Eof` terminator.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos - 1]
    }

    /// Return `true` if the current token has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// If the current token has one of the given kinds, consume it and
    /// return `true`.
    fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Consume a token of the given kind, or fail with `msg` and the kind
    /// actually found.
    fn expect(&mut self, kind: TokenKind, msg: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(msg, self.peek()))
        }
    }
}
