mod expressions;

use model::{Block, Program, Stmt};
use expressions::{gen_call, gen_expr};

const INDENT: &str = "    ";

/// Renders a validated AST as Python 3 source.
///
/// The tree is trusted: no invariant is re-checked here, so an unvalidated
/// program still renders, just possibly into invalid output.
#[derive(Debug, Default)]
pub struct Codegen;

impl Codegen {
    pub fn new() -> Self {
        Self
    }

    pub fn gen_program(&mut self, prog: &Program) -> String {
        let mut output = String::new();
        for stmt in &prog.statements {
            output.push_str(&self.gen_stmt(stmt, 0));
            output.push('\n');
        }
        output
    }

    /// Render one statement with every line indented to `depth`, no trailing newline.
    fn gen_stmt(&self, stmt: &Stmt, depth: usize) -> String {
        let ind = INDENT.repeat(depth);
        match stmt {
            Stmt::VarDecl { name, init: value, .. } | Stmt::Assign { name, value, .. } => {
                format!("{ind}{name} = {}", gen_expr(value))
            }
            Stmt::Print(expr) => format!("{ind}print({})", gen_expr(expr)),
            Stmt::Return(expr) => format!("{ind}return {}", gen_expr(expr)),
            Stmt::Call(call) => format!("{ind}{}", gen_call(call)),
            Stmt::If { cond, then_block, else_block } => {
                let mut code = format!("{ind}if {}:\n", gen_expr(cond));
                code.push_str(&self.gen_block(then_block, depth + 1));
                // An empty else adds nothing to the program
                if let Some(block) = else_block.as_ref().filter(|b| !b.is_empty()) {
                    code.push_str(&format!("{ind}else:\n"));
                    code.push_str(&self.gen_block(block, depth + 1));
                }
                code.trim_end().to_string()
            }
            Stmt::While { cond, body } => {
                let mut code = format!("{ind}while {}:\n", gen_expr(cond));
                code.push_str(&self.gen_block(body, depth + 1));
                code.trim_end().to_string()
            }
            Stmt::FuncDecl { name, params, body, .. } => {
                let mut code = format!("{ind}def {name}({}):\n", params.join(", "));
                code.push_str(&self.gen_block(body, depth + 1));
                code.trim_end().to_string()
            }
        }
    }

    fn gen_block(&self, block: &Block, depth: usize) -> String {
        if block.is_empty() {
            return format!("{}pass\n", INDENT.repeat(depth));
        }
        let mut code = String::new();
        for stmt in &block.statements {
            code.push_str(&self.gen_stmt(stmt, depth));
            code.push('\n');
        }
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexer::lex;
    use model::{BinaryOp, Dialect, Expr};
    use parser::parse_tokens;

    fn compile(src: &str) -> String {
        let tokens = lex(src).unwrap();
        let program = parse_tokens(&tokens, Dialect::Extended).unwrap();
        Codegen::new().gen_program(&program)
    }

    #[test]
    fn gen_while_from_tree() {
        let program = Program {
            statements: vec![Stmt::While {
                cond: Expr::binary(
                    Expr::Variable("i".to_string()),
                    BinaryOp::Less,
                    Expr::IntLiteral("10".to_string()),
                ),
                body: Block::new(vec![Stmt::Assign {
                    name: "i".to_string(),
                    value: Expr::binary(
                        Expr::Variable("i".to_string()),
                        BinaryOp::Add,
                        Expr::IntLiteral("1".to_string()),
                    ),
                    line: 1,
                }]),
            }],
        };
        assert_eq!(Codegen::new().gen_program(&program), "while (i < 10):\n    i = (i + 1)\n");
    }

    #[test]
    fn gen_declarations_and_print() {
        let out = compile("var x: int = 5;\nvar ok: bool = false;\nx = x - 2;\nprint x;");
        assert_eq!(out, "x = 5\nok = False\nx = (x - 2)\nprint(x)\n");
    }

    #[test]
    fn gen_if_else() {
        let out = compile("if (x >= 1) { print true; } else { print 0; }");
        assert_eq!(out, "if (x >= 1):\n    print(True)\nelse:\n    print(0)\n");
    }

    #[test]
    fn gen_nested_blocks_indent_per_depth() {
        let src = "while (i < 3) { if (i == 1) { print i; } else { print 0; } i = i + 1; }";
        let expected = "\
while (i < 3):
    if (i == 1):
        print(i)
    else:
        print(0)
    i = (i + 1)
";
        assert_eq!(compile(src), expected);
    }

    #[test]
    fn gen_function_and_calls() {
        let src = "def add(a, b): int { return a + b; }\nprint add(1, add(2, 3));\nadd(0, 0);";
        let expected = "\
def add(a, b):
    return (a + b)
print(add(1, add(2, 3)))
add(0, 0)
";
        assert_eq!(compile(src), expected);
    }

    #[test]
    fn gen_empty_blocks_render_pass() {
        let out = compile("def f(): void { }\nwhile (false) { }\nif (true) { } else { }");
        assert_eq!(out, "def f():\n    pass\nwhile False:\n    pass\nif True:\n    pass\n");
    }

    #[test]
    fn gen_is_deterministic() {
        let src = "var i: int = 0;\nwhile (i < 10) { i = i + 1; }\nprint i;";
        assert_eq!(compile(src), compile(src));
    }

    #[test]
    fn gen_empty_program() {
        assert_eq!(compile(""), "");
    }
}
