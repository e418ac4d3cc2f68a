use model::{Block, Call, Dialect, ParseError, Stmt, TokenKind};
use crate::parser::Parser;
use crate::expressions::ExpressionParser;

/// Statement parsing functionality
pub(crate) trait StatementParser {
    fn parse_stmt(&mut self) -> Result<Stmt, ParseError>;
    fn parse_block(&mut self) -> Result<Block, ParseError>;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.descend()?;
        self.expect(TokenKind::OpenBrace)?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::CloseBrace) && !self.is_at_end() {
            statements.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::CloseBrace)?;
        self.ascend(1);
        Ok(Block { statements })
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let extended = self.dialect == Dialect::Extended;
        match self.peek_kind() {
            Some(TokenKind::Var) => self.parse_var_decl(),
            Some(TokenKind::Identifier) => self.parse_assign_or_call(),
            Some(TokenKind::Print) => self.parse_print_stmt(),
            Some(TokenKind::If) => self.parse_if_stmt(),
            Some(TokenKind::While) => self.parse_while_stmt(),
            Some(TokenKind::Def) if extended => self.parse_func_decl(),
            Some(TokenKind::Return) if extended => self.parse_return_stmt(),
            _ => Err(self.error("statement")),
        }
    }
}

impl<'a> Parser<'a> {
    // var ID : TYPE = expr ;
    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Var)?;
        let (name, line) = self.expect_identifier()?;
        self.expect(TokenKind::Colon)?;
        let r#type = self.parse_type()?;
        self.expect(TokenKind::Equal)?;
        let init = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::VarDecl { name, r#type, init, line })
    }

    // ID = expr ;  |  ID ( args ) ;
    fn parse_assign_or_call(&mut self) -> Result<Stmt, ParseError> {
        let (name, line) = self.expect_identifier()?;

        if self.check(TokenKind::OpenParenthesis) {
            let args = self.parse_call_args()?;
            self.expect(TokenKind::Semicolon)?;
            return Ok(Stmt::Call(Call { name, args, line }));
        }

        self.expect(TokenKind::Equal)?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Assign { name, value, line })
    }

    fn parse_print_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Print)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Print(expr))
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::OpenParenthesis)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::CloseParenthesis)?;
        let then_block = self.parse_block()?;

        let else_block = if self.match_token(TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Stmt::If { cond, then_block, else_block })
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::OpenParenthesis)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::CloseParenthesis)?;
        let body = self.parse_block()?;
        Ok(Stmt::While { cond, body })
    }

    // def ID ( params ) : TYPE block
    fn parse_func_decl(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Def)?;
        let (name, line) = self.expect_identifier()?;
        self.expect(TokenKind::OpenParenthesis)?;

        let mut params = Vec::new();
        if !self.check(TokenKind::CloseParenthesis) {
            loop {
                let (param, _) = self.expect_identifier()?;
                params.push(param);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::CloseParenthesis)?;

        self.expect(TokenKind::Colon)?;
        let return_type = self.parse_type()?;
        let body = self.parse_block()?;

        Ok(Stmt::FuncDecl { name, params, return_type, body, line })
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Return)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Return(expr))
    }
}
