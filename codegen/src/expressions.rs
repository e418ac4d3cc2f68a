// Expression rendering. Every binary node is parenthesized so the host
// language's precedence rules never regroup the source tree.
use model::{Call, Expr};

pub(crate) fn gen_expr(expr: &Expr) -> String {
    match expr {
        Expr::IntLiteral(digits) => digits.clone(),
        Expr::BoolLiteral(true) => "True".to_string(),
        Expr::BoolLiteral(false) => "False".to_string(),
        Expr::Variable(name) => name.clone(),
        Expr::Binary { left, op, right } => {
            format!("({} {} {})", gen_expr(left), op.symbol(), gen_expr(right))
        }
        Expr::Call(call) => gen_call(call),
    }
}

pub(crate) fn gen_call(call: &Call) -> String {
    let args: Vec<String> = call.args.iter().map(gen_expr).collect();
    format!("{}({})", call.name, args.join(", "))
}
