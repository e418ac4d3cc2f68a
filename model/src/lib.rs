mod dump;
pub mod error;
mod token;

use std::fmt;

pub use dump::{dump_program, dump_tokens};
pub use error::{CompileError, LexError, ParseError, SemanticError};
pub use token::{Token, TokenKind};

/// Which grammar the parser accepts.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Dialect {
    /// Variables, assignment, print, if/else, while and calls.
    Base,
    /// Base plus `def` and `return`.
    #[default]
    Extended,
}

/// Declared type of a variable or function result. Recorded, never checked.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Type {
    Int,
    Real,
    Bool,
    Void,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Type::Int => "int",
            Type::Real => "real",
            Type::Bool => "bool",
            Type::Void => "void",
        })
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Call {
    pub name: String,
    pub args: Vec<Expr>,
    pub line: usize,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    VarDecl {
        name: String,
        r#type: Type,
        init: Expr,
        line: usize,
    },
    Assign {
        name: String,
        value: Expr,
        line: usize,
    },
    Print(Expr),
    If {
        cond: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },
    While {
        cond: Expr,
        body: Block,
    },
    FuncDecl {
        name: String,
        params: Vec<String>,
        return_type: Type,
        body: Block,
        line: usize,
    },
    Return(Expr),
    Call(Call),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    /// Digits exactly as written in the source.
    IntLiteral(String),
    BoolLiteral(bool),
    Variable(String),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Call(Call),
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Sub,
    Less,
    Greater,
    EqualEqual,
    NotEqual,
    LessEqual,
    GreaterEqual,
}

impl BinaryOp {
    /// Source spelling, emitted unchanged by the code generator.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::EqualEqual => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
        }
    }

    pub fn is_relational(&self) -> bool {
        !matches!(self, BinaryOp::Add | BinaryOp::Sub)
    }
}
