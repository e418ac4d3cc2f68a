// Parser module: Converts a list of tokens into an abstract syntax tree (AST)
//
// Module organization:
// - parser.rs: Core Parser struct, token navigation and top-level parsing
// - statements.rs: Statement parsing (var, assignment, if, while, def, return, etc.)
// - expressions.rs: Relational/additive expressions, terms and call arguments

mod parser;
mod expressions;
mod statements;

use model::{Dialect, ParseError, Program, Token};
use parser::Parser;

/// Parse a list of tokens into a Program AST
///
/// # Arguments
/// * `tokens` - Slice of tokens from the lexer, terminated by `Eof`
/// * `dialect` - `Base` rejects `def` and `return`; `Extended` accepts them
///
/// # Returns
/// * `Ok(Program)` - Successfully parsed top-level statements
/// * `Err(ParseError)` - The first token that did not fit the grammar
pub fn parse_tokens(tokens: &[Token], dialect: Dialect) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens, dialect);
    parser.parse_program()
}
