// Debug inspectors for the --tokens and --ast driver modes.
use std::fmt::Write;

use crate::{Block, Call, Expr, Program, Stmt, Token};

/// One token per line: source line, kind, lexeme.
pub fn dump_tokens(tokens: &[Token]) -> String {
    let mut s = String::new();
    for tok in tokens {
        if tok.lexeme.is_empty() {
            let _ = writeln!(s, "{:>4}  {}", tok.line, tok.kind.name());
        } else {
            let _ = writeln!(s, "{:>4}  {:<12} {}", tok.line, tok.kind.name(), tok.lexeme);
        }
    }
    s
}

/// Indented tree: node name, then each child field one level deeper.
pub fn dump_program(program: &Program) -> String {
    let mut s = String::from("Program\n");
    for stmt in &program.statements {
        dump_stmt(&mut s, stmt, 1);
    }
    s
}

fn line(s: &mut String, depth: usize, text: &str) {
    let _ = writeln!(s, "{}{}", "  ".repeat(depth), text);
}

fn dump_block(s: &mut String, label: &str, block: &Block, depth: usize) {
    line(s, depth, &format!("{label}:"));
    for stmt in &block.statements {
        dump_stmt(s, stmt, depth + 1);
    }
}

fn dump_call(s: &mut String, call: &Call, depth: usize) {
    line(s, depth, "Call");
    line(s, depth + 1, &format!("name: {}", call.name));
    line(s, depth + 1, "args:");
    for arg in &call.args {
        dump_expr(s, arg, depth + 2);
    }
}

fn dump_stmt(s: &mut String, stmt: &Stmt, depth: usize) {
    match stmt {
        Stmt::VarDecl { name, r#type, init, .. } => {
            line(s, depth, "VarDecl");
            line(s, depth + 1, &format!("name: {name}"));
            line(s, depth + 1, &format!("type: {}", r#type));
            line(s, depth + 1, "init:");
            dump_expr(s, init, depth + 2);
        }
        Stmt::Assign { name, value, .. } => {
            line(s, depth, "Assign");
            line(s, depth + 1, &format!("name: {name}"));
            line(s, depth + 1, "value:");
            dump_expr(s, value, depth + 2);
        }
        Stmt::Print(expr) => {
            line(s, depth, "Print");
            dump_expr(s, expr, depth + 1);
        }
        Stmt::If { cond, then_block, else_block } => {
            line(s, depth, "If");
            line(s, depth + 1, "cond:");
            dump_expr(s, cond, depth + 2);
            dump_block(s, "then", then_block, depth + 1);
            if let Some(block) = else_block {
                dump_block(s, "else", block, depth + 1);
            }
        }
        Stmt::While { cond, body } => {
            line(s, depth, "While");
            line(s, depth + 1, "cond:");
            dump_expr(s, cond, depth + 2);
            dump_block(s, "body", body, depth + 1);
        }
        Stmt::FuncDecl { name, params, return_type, body, .. } => {
            line(s, depth, "FuncDecl");
            line(s, depth + 1, &format!("name: {name}"));
            line(s, depth + 1, &format!("params: [{}]", params.join(", ")));
            line(s, depth + 1, &format!("returns: {return_type}"));
            dump_block(s, "body", body, depth + 1);
        }
        Stmt::Return(expr) => {
            line(s, depth, "Return");
            dump_expr(s, expr, depth + 1);
        }
        Stmt::Call(call) => dump_call(s, call, depth),
    }
}

fn dump_expr(s: &mut String, expr: &Expr, depth: usize) {
    match expr {
        Expr::IntLiteral(digits) => line(s, depth, &format!("IntLiteral {digits}")),
        Expr::BoolLiteral(value) => line(s, depth, &format!("BoolLiteral {value}")),
        Expr::Variable(name) => line(s, depth, &format!("Variable {name}")),
        Expr::Binary { left, op, right } => {
            line(s, depth, &format!("Binary {}", op.symbol()));
            dump_expr(s, left, depth + 1);
            dump_expr(s, right, depth + 1);
        }
        Expr::Call(call) => dump_call(s, call, depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BinaryOp, TokenKind, Type};

    #[test]
    fn token_dump_has_one_line_per_token() {
        let tokens = vec![
            Token::new(TokenKind::Print, "print", 1),
            Token::new(TokenKind::IntLiteral, "7", 1),
            Token::new(TokenKind::Eof, "", 2),
        ];
        let out = dump_tokens(&tokens);
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().next().unwrap().contains("PRINT"));
        assert!(out.lines().last().unwrap().trim_start().starts_with("2  EOF"));
    }

    #[test]
    fn token_dump_lines_have_no_trailing_whitespace() {
        let tokens = vec![
            Token::new(TokenKind::Semicolon, ";", 1),
            Token::new(TokenKind::Eof, "", 1),
        ];
        let out = dump_tokens(&tokens);
        assert!(out.lines().all(|l| l == l.trim_end()), "{out:?}");
        assert!(out.ends_with("   1  EOF\n"));
    }

    #[test]
    fn ast_dump_indents_children() {
        let program = Program {
            statements: vec![Stmt::VarDecl {
                name: "x".to_string(),
                r#type: Type::Int,
                init: Expr::binary(
                    Expr::IntLiteral("1".to_string()),
                    BinaryOp::Add,
                    Expr::Variable("y".to_string()),
                ),
                line: 1,
            }],
        };
        let expected = "\
Program
  VarDecl
    name: x
    type: int
    init:
      Binary +
        IntLiteral 1
        Variable y
";
        assert_eq!(dump_program(&program), expected);
    }
}
