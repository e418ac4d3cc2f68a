// Stage wrappers used by the CLI. Each returns the whole stage output or the
// first error; nothing here touches files or the console.

use codegen::Codegen;
use model::{CompileError, Dialect, Program, Token};
use parser::parse_tokens;
use semantic::{SemanticAnalyzer, SemanticOptions};

#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    pub dialect: Dialect,
    pub semantic: SemanticOptions,
}

impl Pipeline {
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, CompileError> {
        Ok(lexer::lex(source)?)
    }

    pub fn parse(&self, tokens: &[Token]) -> Result<Program, CompileError> {
        Ok(parse_tokens(tokens, self.dialect)?)
    }

    /// Validate, then render. Nothing is generated for an invalid tree.
    pub fn generate(&self, program: &Program) -> Result<String, CompileError> {
        SemanticAnalyzer::new(self.semantic).analyze(program)?;
        Ok(Codegen::new().gen_program(program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::SemanticError;

    fn compile(pipeline: &Pipeline, source: &str) -> Result<String, CompileError> {
        let tokens = pipeline.tokenize(source)?;
        let program = pipeline.parse(&tokens)?;
        pipeline.generate(&program)
    }

    #[test]
    fn compiles_full_program() {
        let src = "\
var n: int = 0;
def bump(x): int { return x + 1; }
while (n < 3) {
    n = bump(n);
    if (n == 2) { print true; }
}
print n;
";
        let expected = "\
n = 0
def bump(x):
    return (x + 1)
while (n < 3):
    n = bump(n)
    if (n == 2):
        print(True)
print(n)
";
        assert_eq!(compile(&Pipeline::default(), src).unwrap(), expected);
    }

    #[test]
    fn same_source_same_output() {
        let src = "var i: int = 0; while (i < 10) { i = i + 1; } print i;";
        let pipeline = Pipeline::default();
        assert_eq!(compile(&pipeline, src).unwrap(), compile(&pipeline, src).unwrap());
    }

    #[test]
    fn each_stage_reports_its_own_error() {
        let pipeline = Pipeline::default();
        assert!(matches!(compile(&pipeline, "x = 1 @ 2;"), Err(CompileError::Lex(_))));
        assert!(matches!(compile(&pipeline, "x = ;"), Err(CompileError::Parse(_))));
        assert_eq!(
            compile(&pipeline, "x = 1;"),
            Err(CompileError::Semantic(SemanticError::UndeclaredVariable {
                name: "x".to_string(),
                line: 1,
            }))
        );
    }

    #[test]
    fn base_dialect_with_scope_checking() {
        let pipeline = Pipeline {
            dialect: Dialect::Base,
            semantic: SemanticOptions::scope_checking(),
        };
        assert_eq!(compile(&pipeline, "var x: int = 1; print x;").unwrap(), "x = 1\nprint(x)\n");
        assert!(matches!(compile(&pipeline, "def f(): void { }"), Err(CompileError::Parse(_))));
    }

    #[test]
    fn function_cannot_rebind_global() {
        // Python would make `n` local to `inc` and fail at runtime
        let src = "var n: int = 0; def inc(): void { n = n + 1; } inc(); print n;";
        assert_eq!(
            compile(&Pipeline::default(), src),
            Err(CompileError::Semantic(SemanticError::UndeclaredVariable {
                name: "n".to_string(),
                line: 1,
            }))
        );
    }

    #[test]
    fn deep_nesting_fails_as_syntax_error() {
        let src = format!("{}{}", "if (true) { ".repeat(20_000), "} ".repeat(20_000));
        let err = compile(&Pipeline::default(), &src).unwrap_err();
        assert_eq!(err.stage(), "syntax");
    }
}
