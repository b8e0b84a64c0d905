/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `rill_syntax::lexer`, which always
///   terminates the stream with an `Eof` token.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered; parsing stops there and no
/// partial [`Program`] is produced.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}
