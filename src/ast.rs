//! Typed syntax tree for the subset of JavaScript the checkers inspect.
//!
//! The tree is produced once per check by the parser module, is never
//! mutated, and is dropped with the result. Constructs the checkers do not
//! model are preserved as [`Stmt::Other`] / [`Expr::Other`] / [`Pat::Other`]
//! so that traversal stays total over any valid snippet.

/// A parsed snippet: the top-level statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// Binding keyword of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Const,
    Let,
    Var,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Const => "const",
            DeclKind::Let => "let",
            DeclKind::Var => "var",
        }
    }
}

/// `const x = init` — one declarator of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub id: Pat,
    pub init: Option<Expr>,
}

/// A variable declaration statement.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub kind: DeclKind,
    pub declarators: Vec<Declarator>,
}

impl VarDecl {
    /// The first declarator, which is the one every check inspects.
    pub fn first_declarator(&self) -> Option<&Declarator> {
        self.declarators.first()
    }
}

/// A classic `for (init; test; update)` loop with a normalized body.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<ForInit>,
    pub test: Option<Expr>,
    pub update: Option<Expr>,
    pub body: Vec<Stmt>,
}

/// The first clause of a `for` header.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Decl(VarDecl),
    Expr(Expr),
}

/// An `if` statement; branch bodies are normalized to statement lists
/// whether or not the snippet wrote braces.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub test: Expr,
    pub consequent: Vec<Stmt>,
    pub alternate: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDecl),
    Expr(Expr),
    For(ForStmt),
    If(IfStmt),
    Break,
    Continue,
    Return(Option<Expr>),
    Block(Vec<Stmt>),
    Function(FunctionExpr),
    Empty,
    /// A statement kind the checkers do not model (kind name kept for logs).
    Other(String),
}

impl Stmt {
    pub fn as_var_decl(&self) -> Option<&VarDecl> {
        match self {
            Stmt::VarDecl(decl) => Some(decl),
            _ => None,
        }
    }
}

/// `object.property`, `object["property"]`, `object?.property`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: Box<Expr>,
    /// Bracket access.
    pub computed: bool,
    /// `?.` immediately before this access.
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub optional: bool,
}

/// Function expression, arrow function, or function declaration body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub name: Option<String>,
    pub params: Vec<Pat>,
    pub body: Vec<Stmt>,
    pub is_arrow: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// `&&`, `||` and `??`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpr {
    pub operator: String,
    pub argument: Box<Expr>,
    pub prefix: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: String,
    pub argument: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLit {
    pub value: f64,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLit {
    pub properties: Vec<ObjectProp>,
}

/// One property of an object literal. Spread entries carry an empty key and
/// an opaque value.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProp {
    pub key: String,
    pub value: Expr,
    pub shorthand: bool,
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(String),
    String(String),
    Number(NumberLit),
    Bool(bool),
    Null,
    Undefined,
    Array(Vec<Expr>),
    Object(ObjectLit),
    Member(MemberExpr),
    Call(CallExpr),
    Function(FunctionExpr),
    Binary(BinaryExpr),
    Logical(LogicalExpr),
    Update(UpdateExpr),
    Unary(UnaryExpr),
    /// Wrapper around an access chain that contains at least one `?.` link,
    /// so "is this an optional chain" is a plain kind test.
    OptionalChain(Box<Expr>),
    /// An expression kind the checkers do not model.
    Other(String),
}

impl Expr {
    /// Name of a plain identifier expression.
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Expr::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// String, number, boolean or null literal.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expr::String(_) | Expr::Number(_) | Expr::Bool(_) | Expr::Null
        )
    }

    pub fn string_value(&self) -> Option<&str> {
        match self {
            Expr::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn number_value(&self) -> Option<f64> {
        match self {
            Expr::Number(lit) => Some(lit.value),
            _ => None,
        }
    }

    pub fn as_member(&self) -> Option<&MemberExpr> {
        match self {
            Expr::Member(member) => Some(member),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&CallExpr> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectLit> {
        match self {
            Expr::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionExpr> {
        match self {
            Expr::Function(function) => Some(function),
            _ => None,
        }
    }
}

impl MemberExpr {
    /// True when the accessed property is the given name, written either as
    /// a dot identifier or as a string inside brackets.
    pub fn property_named(&self, expected: &str) -> bool {
        match self.property.as_ref() {
            Expr::Identifier(name) => name == expected,
            Expr::String(value) => value == expected,
            _ => false,
        }
    }
}

/// Binding pattern on the left of a declaration or in a parameter list.
#[derive(Debug, Clone, PartialEq)]
pub enum Pat {
    Identifier(String),
    Object(ObjectPat),
    Other(String),
}

impl Pat {
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Pat::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectPat> {
        match self {
            Pat::Object(pattern) => Some(pattern),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPat {
    pub properties: Vec<PatProp>,
}

/// One destructured property: `{ key }`, `{ key: alias }` or
/// `{ key: { nested } }`.
#[derive(Debug, Clone, PartialEq)]
pub struct PatProp {
    pub key: String,
    pub value: PatTarget,
    pub shorthand: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatTarget {
    Identifier(String),
    Pattern(Box<Pat>),
}

impl PatTarget {
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            PatTarget::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Pat> {
        match self {
            PatTarget::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }
}
