use model::{Block, Call, Expr, Program, SemanticError, Stmt, Type};
use rustc_hash::{FxHashMap, FxHashSet};

/// Which declaration/use checks the analyzer performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticOptions {
    /// Block-scoped variables: no redeclaration in one scope, no assignment to undeclared names.
    pub scopes: bool,
    /// Function table: no duplicate `def`, no call to an undefined function.
    pub functions: bool,
    /// Register every top-level `def` before visiting, so calls may precede definitions.
    pub forward_calls: bool,
}

impl SemanticOptions {
    /// Base-language policy.
    pub fn scope_checking() -> Self {
        Self { scopes: true, functions: false, forward_calls: false }
    }

    /// Extended-language policy, variables unchecked.
    pub fn function_table() -> Self {
        Self { scopes: false, functions: true, forward_calls: false }
    }
}

impl Default for SemanticOptions {
    fn default() -> Self {
        Self { scopes: true, functions: true, forward_calls: false }
    }
}

pub struct SemanticAnalyzer {
    options: SemanticOptions,
    // Innermost scope last. Parameters map to None.
    scopes: Vec<FxHashMap<String, Option<Type>>>,
    functions: FxHashSet<String>,
    block_depth: usize,
    // Index of the innermost `def` body scope; 0 outside any function.
    function_scope: usize,
}

impl SemanticAnalyzer {
    pub fn new(options: SemanticOptions) -> Self {
        Self {
            options,
            scopes: Vec::new(),
            functions: FxHashSet::default(),
            block_depth: 0,
            function_scope: 0,
        }
    }

    /// Validate the whole program, stopping at the first inconsistency.
    pub fn analyze(&mut self, program: &Program) -> Result<(), SemanticError> {
        self.scopes = vec![FxHashMap::default()];
        self.functions.clear();
        self.block_depth = 0;
        self.function_scope = 0;

        if self.options.functions && self.options.forward_calls {
            for stmt in &program.statements {
                if let Stmt::FuncDecl { name, line, .. } = stmt {
                    self.register_function(name, *line)?;
                }
            }
        }

        for stmt in &program.statements {
            self.analyze_stmt(stmt)?;
        }
        Ok(())
    }

    fn enter_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
        self.block_depth += 1;
    }

    fn exit_scope(&mut self) {
        self.scopes.pop();
        self.block_depth -= 1;
    }

    fn declare(&mut self, name: &str, ty: Option<Type>, line: usize) -> Result<(), SemanticError> {
        if let Some(scope) = self.scopes.last_mut() {
            if scope.contains_key(name) {
                return Err(SemanticError::DuplicateDeclaration { name: name.to_string(), line });
            }
            scope.insert(name.to_string(), ty);
        }
        Ok(())
    }

    // Assignment inside a function creates a Python local, so the search stops
    // at the function's own scope.
    fn lookup_symbol(&self, name: &str) -> Option<Option<Type>> {
        self.scopes[self.function_scope..]
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }

    fn register_function(&mut self, name: &str, line: usize) -> Result<(), SemanticError> {
        if !self.functions.insert(name.to_string()) {
            return Err(SemanticError::DuplicateFunction { name: name.to_string(), line });
        }
        Ok(())
    }

    fn analyze_block(&mut self, block: &Block, params: &[String], line: usize) -> Result<(), SemanticError> {
        self.enter_scope();
        if self.options.scopes {
            for param in params {
                self.declare(param, None, line)?;
            }
        }
        for stmt in &block.statements {
            self.analyze_stmt(stmt)?;
        }
        self.exit_scope();
        Ok(())
    }

    fn analyze_stmt(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::VarDecl { name, r#type, init, line } => {
                self.analyze_expr(init)?;
                if self.options.scopes {
                    self.declare(name, Some(*r#type), *line)?;
                }
            }
            Stmt::Assign { name, value, line } => {
                if self.options.scopes && self.lookup_symbol(name).is_none() {
                    return Err(SemanticError::UndeclaredVariable { name: name.clone(), line: *line });
                }
                self.analyze_expr(value)?;
            }
            Stmt::Print(expr) | Stmt::Return(expr) => {
                self.analyze_expr(expr)?;
            }
            Stmt::If { cond, then_block, else_block } => {
                self.analyze_expr(cond)?;
                self.analyze_block(then_block, &[], 0)?;
                if let Some(block) = else_block {
                    self.analyze_block(block, &[], 0)?;
                }
            }
            Stmt::While { cond, body } => {
                self.analyze_expr(cond)?;
                self.analyze_block(body, &[], 0)?;
            }
            Stmt::FuncDecl { name, params, body, line, .. } => {
                // Registered before the body so recursion resolves
                let prescanned = self.options.forward_calls && self.block_depth == 0;
                if self.options.functions && !prescanned {
                    self.register_function(name, *line)?;
                }
                let enclosing = self.function_scope;
                self.function_scope = self.scopes.len();
                self.analyze_block(body, params, *line)?;
                self.function_scope = enclosing;
            }
            Stmt::Call(call) => {
                self.analyze_call(call)?;
            }
        }
        Ok(())
    }

    fn analyze_call(&mut self, call: &Call) -> Result<(), SemanticError> {
        if self.options.functions && !self.functions.contains(&call.name) {
            return Err(SemanticError::UndeclaredFunction { name: call.name.clone(), line: call.line });
        }
        for arg in &call.args {
            self.analyze_expr(arg)?;
        }
        Ok(())
    }

    fn analyze_expr(&mut self, expr: &Expr) -> Result<(), SemanticError> {
        match expr {
            Expr::Binary { left, right, .. } => {
                self.analyze_expr(left)?;
                self.analyze_expr(right)?;
            }
            Expr::Call(call) => {
                self.analyze_call(call)?;
            }
            Expr::IntLiteral(_) => {}
            Expr::BoolLiteral(_) => {}
            Expr::Variable(_) => {}
        }
        Ok(())
    }
}
