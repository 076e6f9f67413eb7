//! Depth-first traversal over the typed syntax tree.
//!
//! The walk visits every node exactly once, parent before children, and
//! never mutates the tree. Locators built on top of it capture the first
//! node of the kind an exercise requires; the walk itself always completes.

use crate::ast::{CallExpr, Expr, ForInit, ForStmt, Pat, PatTarget, Program, Stmt, VarDecl};

/// Callbacks keyed by node category. Implementations override the hooks
/// they care about; everything else defaults to a no-op.
pub trait Visitor<'ast> {
    fn enter_stmt(&mut self, _stmt: &'ast Stmt) {}
    /// Every variable declaration, including one in a `for` header.
    fn enter_var_decl(&mut self, _decl: &'ast VarDecl) {}
    fn enter_expr(&mut self, _expr: &'ast Expr) {}
    fn enter_pat(&mut self, _pat: &'ast Pat) {}
}

pub fn walk_program<'ast>(program: &'ast Program, visitor: &mut dyn Visitor<'ast>) {
    for stmt in &program.body {
        walk_stmt(stmt, visitor);
    }
}

pub fn walk_stmt<'ast>(stmt: &'ast Stmt, visitor: &mut dyn Visitor<'ast>) {
    visitor.enter_stmt(stmt);
    match stmt {
        Stmt::VarDecl(decl) => walk_var_decl(decl, visitor),
        Stmt::Expr(expr) => walk_expr(expr, visitor),
        Stmt::For(for_stmt) => walk_for(for_stmt, visitor),
        Stmt::If(if_stmt) => {
            walk_expr(&if_stmt.test, visitor);
            for stmt in &if_stmt.consequent {
                walk_stmt(stmt, visitor);
            }
            if let Some(alternate) = &if_stmt.alternate {
                for stmt in alternate {
                    walk_stmt(stmt, visitor);
                }
            }
        }
        Stmt::Return(Some(expr)) => walk_expr(expr, visitor),
        Stmt::Block(body) => {
            for stmt in body {
                walk_stmt(stmt, visitor);
            }
        }
        Stmt::Function(function) => {
            for param in &function.params {
                walk_pat(param, visitor);
            }
            for stmt in &function.body {
                walk_stmt(stmt, visitor);
            }
        }
        Stmt::Return(None) | Stmt::Break | Stmt::Continue | Stmt::Empty | Stmt::Other(_) => {}
    }
}

fn walk_var_decl<'ast>(decl: &'ast VarDecl, visitor: &mut dyn Visitor<'ast>) {
    visitor.enter_var_decl(decl);
    for declarator in &decl.declarators {
        walk_pat(&declarator.id, visitor);
        if let Some(init) = &declarator.init {
            walk_expr(init, visitor);
        }
    }
}

fn walk_for<'ast>(for_stmt: &'ast ForStmt, visitor: &mut dyn Visitor<'ast>) {
    match &for_stmt.init {
        Some(ForInit::Decl(decl)) => walk_var_decl(decl, visitor),
        Some(ForInit::Expr(expr)) => walk_expr(expr, visitor),
        None => {}
    }
    if let Some(test) = &for_stmt.test {
        walk_expr(test, visitor);
    }
    if let Some(update) = &for_stmt.update {
        walk_expr(update, visitor);
    }
    for stmt in &for_stmt.body {
        walk_stmt(stmt, visitor);
    }
}

pub fn walk_expr<'ast>(expr: &'ast Expr, visitor: &mut dyn Visitor<'ast>) {
    visitor.enter_expr(expr);
    match expr {
        Expr::Array(elements) => {
            for element in elements {
                walk_expr(element, visitor);
            }
        }
        Expr::Object(object) => {
            for prop in &object.properties {
                walk_expr(&prop.value, visitor);
            }
        }
        Expr::Member(member) => {
            walk_expr(&member.object, visitor);
            walk_expr(&member.property, visitor);
        }
        Expr::Call(call) => {
            walk_expr(&call.callee, visitor);
            for argument in &call.arguments {
                walk_expr(argument, visitor);
            }
        }
        Expr::Function(function) => {
            for param in &function.params {
                walk_pat(param, visitor);
            }
            for stmt in &function.body {
                walk_stmt(stmt, visitor);
            }
        }
        Expr::Binary(binary) => {
            walk_expr(&binary.left, visitor);
            walk_expr(&binary.right, visitor);
        }
        Expr::Logical(logical) => {
            walk_expr(&logical.left, visitor);
            walk_expr(&logical.right, visitor);
        }
        Expr::Update(update) => walk_expr(&update.argument, visitor),
        Expr::Unary(unary) => walk_expr(&unary.argument, visitor),
        Expr::OptionalChain(inner) => walk_expr(inner, visitor),
        Expr::Identifier(_)
        | Expr::String(_)
        | Expr::Number(_)
        | Expr::Bool(_)
        | Expr::Null
        | Expr::Undefined
        | Expr::Other(_) => {}
    }
}

pub fn walk_pat<'ast>(pat: &'ast Pat, visitor: &mut dyn Visitor<'ast>) {
    visitor.enter_pat(pat);
    if let Pat::Object(object) = pat {
        for prop in &object.properties {
            if let PatTarget::Pattern(inner) = &prop.value {
                walk_pat(inner, visitor);
            }
        }
    }
}

/// First variable declaration in walk order (a `for` header's declaration
/// counts), if any.
pub fn find_variable_declaration(program: &Program) -> Option<&VarDecl> {
    struct Finder<'ast> {
        found: Option<&'ast VarDecl>,
    }
    impl<'ast> Visitor<'ast> for Finder<'ast> {
        fn enter_var_decl(&mut self, decl: &'ast VarDecl) {
            if self.found.is_none() {
                self.found = Some(decl);
            }
        }
    }

    let mut finder = Finder { found: None };
    walk_program(program, &mut finder);
    finder.found
}

/// First `for` statement in walk order, if any.
pub fn find_for_statement(program: &Program) -> Option<&ForStmt> {
    struct Finder<'ast> {
        found: Option<&'ast ForStmt>,
    }
    impl<'ast> Visitor<'ast> for Finder<'ast> {
        fn enter_stmt(&mut self, stmt: &'ast Stmt) {
            if self.found.is_none() {
                if let Stmt::For(for_stmt) = stmt {
                    self.found = Some(for_stmt);
                }
            }
        }
    }

    let mut finder = Finder { found: None };
    walk_program(program, &mut finder);
    finder.found
}

/// First expression statement calling a method with the given name, e.g.
/// `articles.forEach(...)`. Only statement-position calls count.
pub fn find_method_call_statement<'ast>(
    program: &'ast Program,
    method: &str,
) -> Option<&'ast CallExpr> {
    struct Finder<'ast> {
        method: String,
        found: Option<&'ast CallExpr>,
    }
    impl<'ast> Visitor<'ast> for Finder<'ast> {
        fn enter_stmt(&mut self, stmt: &'ast Stmt) {
            if self.found.is_some() {
                return;
            }
            if let Stmt::Expr(Expr::Call(call)) = stmt {
                if let Expr::Member(callee) = call.callee.as_ref() {
                    if callee.property.identifier_name() == Some(self.method.as_str()) {
                        self.found = Some(call);
                    }
                }
            }
        }
    }

    let mut finder = Finder {
        method: method.to_string(),
        found: None,
    };
    walk_program(program, &mut finder);
    finder.found
}
