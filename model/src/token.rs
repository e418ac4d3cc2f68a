use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenKind {
    // Literals
    IntLiteral,
    True,
    False,
    Identifier,
    // Keywords
    Var,
    Def,
    If,
    Else,
    While,
    Return,
    Print,
    Int,
    Real,
    Bool,
    Void,
    And, // reserved, no grammar rule
    Or,  // reserved, no grammar rule
    Not, // reserved, no grammar rule
    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Less,
    Greater,
    EqualEqual,
    BangEqual,
    LessEqual,
    GreaterEqual,
    Equal,
    // Punctuation
    OpenParenthesis,
    CloseParenthesis,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Colon,
    Comma,
    Eof,
}

impl TokenKind {
    /// Upper-case name used by the token dump and in parse error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IntLiteral => "INT",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Identifier => "ID",
            Self::Var => "VAR",
            Self::Def => "DEF",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Return => "RETURN",
            Self::Print => "PRINT",
            // "INT" is taken by the literal
            Self::Int => "INT_TYPE",
            Self::Real => "REAL",
            Self::Bool => "BOOL",
            Self::Void => "VOID",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "MUL",
            Self::Slash => "DIV",
            Self::Less => "LT",
            Self::Greater => "GT",
            Self::EqualEqual => "EQ",
            Self::BangEqual => "NE",
            Self::LessEqual => "LE",
            Self::GreaterEqual => "GE",
            Self::Equal => "ASSIGN",
            Self::OpenParenthesis => "LPAREN",
            Self::CloseParenthesis => "RPAREN",
            Self::OpenBrace => "LBRACE",
            Self::CloseBrace => "RBRACE",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::Comma => "COMMA",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            _ => write!(f, "{} '{}'", self.kind, self.lexeme),
        }
    }
}
