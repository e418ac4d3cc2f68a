use model::{BinaryOp, Call, Expr, ParseError, TokenKind};
use crate::parser::Parser;

/// Expression parsing functionality.
///
/// Grammar, loosest first:
///   expr   := simple (relop simple)?
///   simple := term (('+' | '-') term)*
///   term   := INT | TRUE | FALSE | ID | ID '(' args ')'
pub(crate) trait ExpressionParser {
    fn parse_expr(&mut self) -> Result<Expr, ParseError>;
    /// Parse `( expr, ... )` with the opening parenthesis as the current token
    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError>;
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_simple()?;

        // Non-associative: at most one relational operator per expression
        match self.peek_kind().and_then(relational_op) {
            Some(op) => {
                self.advance();
                let right = self.parse_simple()?;
                Ok(Expr::binary(left, op, right))
            }
            None => Ok(left),
        }
    }

    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.descend()?;
        self.expect(TokenKind::OpenParenthesis)?;
        let mut args = Vec::new();
        if !self.check(TokenKind::CloseParenthesis) {
            loop {
                args.push(self.parse_expr()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::CloseParenthesis)?;
        self.ascend(1);
        Ok(args)
    }
}

fn relational_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Less => Some(BinaryOp::Less),
        TokenKind::Greater => Some(BinaryOp::Greater),
        TokenKind::EqualEqual => Some(BinaryOp::EqualEqual),
        TokenKind::BangEqual => Some(BinaryOp::NotEqual),
        TokenKind::LessEqual => Some(BinaryOp::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOp::GreaterEqual),
        _ => None,
    }
}

fn additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    // Left-associative additive chain; each operator deepens the tree by one
    fn parse_simple(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;
        let mut levels = 0;

        while let Some(op) = self.peek_kind().and_then(additive_op) {
            self.descend()?;
            levels += 1;
            self.advance();
            let right = self.parse_term()?;
            left = Expr::binary(left, op, right);
        }

        self.ascend(levels);
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let Some(tok) = self.peek() else {
            return Err(self.error("expression"));
        };
        let (kind, lexeme, line) = (tok.kind, tok.lexeme.clone(), tok.line);

        match kind {
            TokenKind::IntLiteral => {
                self.advance();
                Ok(Expr::IntLiteral(lexeme))
            }
            TokenKind::True | TokenKind::False => {
                self.advance();
                Ok(Expr::BoolLiteral(kind == TokenKind::True))
            }
            TokenKind::Identifier => {
                self.advance();
                if self.check(TokenKind::OpenParenthesis) {
                    let args = self.parse_call_args()?;
                    Ok(Expr::Call(Call { name: lexeme, args, line }))
                } else {
                    Ok(Expr::Variable(lexeme))
                }
            }
            _ => Err(self.error("expression")),
        }
    }
}
