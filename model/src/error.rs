//! Error types for every pipeline stage.
//!
//! Each stage stops at its first error and hands it back unchanged.
//! [`CompileError`] is the union the driver reports.

use std::fmt;

/// A character the lexer has no rule for.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LexError {
    pub ch: char,
    pub line: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: invalid character '{}'", self.line, self.ch)
    }
}

impl std::error::Error for LexError {}

/// The parser needed `expected` but the current token was `found`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParseError {
    /// Token kind name (`SEMICOLON`) or grammar category (`expression`).
    pub expected: String,
    /// Display form of the offending token.
    pub found: String,
    /// Line of the offending token.
    pub line: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: expected {}, found {}",
            self.line, self.expected, self.found
        )
    }
}

impl std::error::Error for ParseError {}

/// Declaration/use inconsistencies found by the semantic pass.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SemanticError {
    /// A variable was declared twice in the same scope.
    DuplicateDeclaration { name: String, line: usize },
    /// An assignment targets a name no enclosing scope declares.
    UndeclaredVariable { name: String, line: usize },
    /// A function name was defined twice.
    DuplicateFunction { name: String, line: usize },
    /// A call names a function that is not (yet) defined.
    UndeclaredFunction { name: String, line: usize },
}

impl SemanticError {
    /// The identifier the error is about.
    pub fn name(&self) -> &str {
        match self {
            Self::DuplicateDeclaration { name, .. }
            | Self::UndeclaredVariable { name, .. }
            | Self::DuplicateFunction { name, .. }
            | Self::UndeclaredFunction { name, .. } => name,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::DuplicateDeclaration { line, .. }
            | Self::UndeclaredVariable { line, .. }
            | Self::DuplicateFunction { line, .. }
            | Self::UndeclaredFunction { line, .. } => *line,
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDeclaration { name, line } => {
                write!(f, "line {line}: variable '{name}' is already declared in this scope")
            }
            Self::UndeclaredVariable { name, line } => {
                write!(f, "line {line}: variable '{name}' is not declared")
            }
            Self::DuplicateFunction { name, line } => {
                write!(f, "line {line}: function '{name}' is already defined")
            }
            Self::UndeclaredFunction { name, line } => {
                write!(f, "line {line}: function '{name}' is not defined")
            }
        }
    }
}

impl std::error::Error for SemanticError {}

/// Exactly one of these ends a failed compilation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Semantic(SemanticError),
}

impl CompileError {
    pub fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::Parse(e) => e.line,
            Self::Semantic(e) => e.line(),
        }
    }

    /// Short stage name for diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Lex(_) => "lexical",
            Self::Parse(_) => "syntax",
            Self::Semantic(_) => "semantic",
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{} error: {e}", self.stage()),
            Self::Parse(e) => write!(f, "{} error: {e}", self.stage()),
            Self::Semantic(e) => write!(f, "{} error: {e}", self.stage()),
        }
    }
}

// Display already includes the stage error's message, so no source() chain.
impl std::error::Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for CompileError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<SemanticError> for CompileError {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}
