/// Expression parsing methods.
///
/// Only string literals are accepted today. New expression forms become
/// further branches here, without touching the statement grammar.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Expression, ParseError> {
        if self.match_token(&[TokenKind::String]) {
            let value = self.previous().literal.clone();
            return Ok(Expression::Literal(Literal { value }));
        }

        Err(ParseError::unexpected(self.peek()))
    }
}
