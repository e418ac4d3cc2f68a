use model::{Dialect, ParseError, Program, Token, TokenKind, Type};
use crate::statements::StatementParser;

/// Combined depth of nested blocks, call argument lists and additive chains.
pub(crate) const MAX_NESTING: usize = 256;

/// Core parser struct that maintains parsing state
pub(crate) struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
    pub(crate) dialect: Dialect,
    pub(crate) depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], dialect: Dialect) -> Self {
        Parser {
            tokens,
            pos: 0,
            dialect,
            depth: 0,
        }
    }

    /// Parse statements until the end-of-input token
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_stmt()?);
        }

        Ok(Program { statements })
    }

    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        let ty = match self.peek_kind() {
            Some(TokenKind::Int) => Type::Int,
            Some(TokenKind::Real) => Type::Real,
            Some(TokenKind::Bool) => Type::Bool,
            Some(TokenKind::Void) => Type::Void,
            _ => return Err(self.error("TYPE")),
        };
        self.advance();
        Ok(ty)
    }

    /// Consume an identifier, returning its text and line
    pub(crate) fn expect_identifier(&mut self) -> Result<(String, usize), ParseError> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Identifier => {
                let result = (tok.lexeme.clone(), tok.line);
                self.advance();
                Ok(result)
            }
            _ => Err(self.error(TokenKind::Identifier.name())),
        }
    }

    // Token navigation utilities
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek_kind(), None | Some(TokenKind::Eof))
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    pub(crate) fn previous(&self) -> Option<&Token> {
        if self.pos == 0 {
            None
        } else {
            self.tokens.get(self.pos - 1)
        }
    }

    pub(crate) fn advance(&mut self) -> Option<&Token> {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.match_token(kind) {
            Ok(())
        } else {
            Err(self.error(kind.name()))
        }
    }

    /// Enter one nesting level, failing at the current token past the limit
    pub(crate) fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(&format!("at most {MAX_NESTING} levels of nesting")));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Build an error describing the current token
    pub(crate) fn error(&self, expected: &str) -> ParseError {
        let (found, line) = match self.peek() {
            Some(tok) => (tok.to_string(), tok.line),
            None => (
                "end of input".to_string(),
                self.tokens.last().map_or(1, |t| t.line),
            ),
        };
        ParseError {
            expected: expected.to_string(),
            found,
            line,
        }
    }
}
