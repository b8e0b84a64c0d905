/// Statement parsing methods.
///
/// This chunk implements the statement grammar: variable declarations (with
/// or without a leading `let`), `loop` statements, and braced blocks.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse a single statement.
    ///
    /// Statements start with `let`, a bare identifier, or `loop`. Any other
    /// leading token fails the whole parse; keywords like `var` are reserved
    /// but not accepted here.
    fn declaration(&mut self) -> Result<Statement, ParseError> {
        if self.match_token(&[TokenKind::Let]) || self.check(TokenKind::Ident) {
            return Ok(Statement::VariableDeclaration(self.variable_declaration()?));
        }

        if self.match_token(&[TokenKind::Loop]) {
            return Ok(Statement::Loop(self.loop_statement()?));
        }

        Err(ParseError::unexpected(self.peek()))
    }

    /// Parse `IDENT "=" Expression ";"`, the leading `let` (if any) having
    /// been consumed by [`Parser::declaration`].
    fn variable_declaration(&mut self) -> Result<VariableDeclaration, ParseError> {
        let name = self.expect(TokenKind::Ident, "Expected variable name")?.literal.clone();
        self.expect(TokenKind::Assign, r#"Expected "=" after variable name"#)?;
        let initializer = self.expression()?;
        self.expect(TokenKind::Semicolon, r#"Expected ";" after variable declaration"#)?;

        Ok(VariableDeclaration {
            identifier: Identifier { name },
            initializer,
        })
    }

    /// Parse the body of a `loop` statement, the `loop` keyword having been
    /// consumed by [`Parser::declaration`].
    fn loop_statement(&mut self) -> Result<LoopStatement, ParseError> {
        let body = self.block()?;
        Ok(LoopStatement { body })
    }

    /// Parse a braced block of statements.
    fn block(&mut self) -> Result<BlockStatement, ParseError> {
        let mut body = Vec::new();

        self.expect(TokenKind::LBrace, r#"Expected "{" at the start of block"#)?;
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            body.push(self.declaration()?);
        }
        self.expect(TokenKind::RBrace, r#"Expected "}" at the end of block"#)?;

        Ok(BlockStatement { body })
    }
}
