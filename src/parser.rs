//! Syntax tree provider.
//!
//! Wraps the tree-sitter JavaScript grammar and converts its concrete
//! syntax tree into the crate's typed AST. The grammar is treated as an
//! external, already-correct collaborator: this module only detects parse
//! failure and reshapes the tree. Conversion is total — any valid construct
//! the checkers do not model becomes an `Other` node instead of an error.

use thiserror::Error;

use crate::ast::{
    BinaryExpr, CallExpr, DeclKind, Declarator, Expr, ForInit, ForStmt, FunctionExpr, IfStmt,
    LogicalExpr, MemberExpr, NumberLit, ObjectLit, ObjectPat, ObjectProp, Pat, PatProp, PatTarget,
    Program, Stmt, UnaryExpr, UpdateExpr, VarDecl,
};

/// Error raised when a snippet is not syntactically valid JavaScript.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}, column {column}: {detail}")]
    Syntax {
        line: usize,
        column: usize,
        detail: String,
    },

    #[error("Parser failure: {0}")]
    Parser(String),
}

/// Parse a snippet into a [`Program`], or fail with a structured error.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .map_err(|e| ParseError::Parser(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::Parser("the parser produced no tree".into()))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(syntax_error(root, source));
    }

    Ok(convert_program(root, source))
}

/// Locate the first error or missing node and describe it.
fn syntax_error(root: tree_sitter::Node, source: &str) -> ParseError {
    fn find_error<'t>(node: tree_sitter::Node<'t>) -> Option<tree_sitter::Node<'t>> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        children.into_iter().find_map(find_error)
    }

    match find_error(root) {
        Some(node) => {
            let position = node.start_position();
            let detail = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                let text = node.utf8_text(source.as_bytes()).unwrap_or("");
                let text = text.trim();
                if text.is_empty() {
                    "unexpected token".to_string()
                } else {
                    let shown: String = text.chars().take(40).collect();
                    format!("unexpected token '{shown}'")
                }
            };
            ParseError::Syntax {
                line: position.row + 1,
                column: position.column + 1,
                detail,
            }
        }
        None => ParseError::Syntax {
            line: 1,
            column: 1,
            detail: "unexpected end of input".into(),
        },
    }
}

fn node_text(node: tree_sitter::Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

fn convert_program(root: tree_sitter::Node, source: &str) -> Program {
    let mut body = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if matches!(child.kind(), "comment" | "hash_bang_line") {
            continue;
        }
        body.push(convert_stmt(child, source));
    }
    Program { body }
}

fn convert_stmt(node: tree_sitter::Node, source: &str) -> Stmt {
    match node.kind() {
        "lexical_declaration" | "variable_declaration" => {
            Stmt::VarDecl(convert_var_decl(node, source))
        }
        "expression_statement" => match node.named_child(0) {
            Some(expr) => Stmt::Expr(convert_expr(expr, source, false)),
            None => Stmt::Other("expression_statement".into()),
        },
        "statement_block" => Stmt::Block(convert_block(node, source)),
        "for_statement" => Stmt::For(convert_for(node, source)),
        "if_statement" => Stmt::If(convert_if(node, source)),
        "break_statement" => Stmt::Break,
        "continue_statement" => Stmt::Continue,
        "return_statement" => Stmt::Return(
            node.named_child(0)
                .map(|expr| convert_expr(expr, source, false)),
        ),
        "function_declaration" => Stmt::Function(convert_function(node, source, false)),
        "empty_statement" => Stmt::Empty,
        other => Stmt::Other(other.into()),
    }
}

/// Statements of a `{ ... }` block, comments skipped.
fn convert_block(node: tree_sitter::Node, source: &str) -> Vec<Stmt> {
    let mut statements = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "comment" {
            continue;
        }
        statements.push(convert_stmt(child, source));
    }
    statements
}

/// A statement position that may or may not be a braced block; either way
/// the result is a statement list.
fn convert_body(node: tree_sitter::Node, source: &str) -> Vec<Stmt> {
    if node.kind() == "statement_block" {
        convert_block(node, source)
    } else {
        vec![convert_stmt(node, source)]
    }
}

fn convert_var_decl(node: tree_sitter::Node, source: &str) -> VarDecl {
    let kind = if node.kind() == "variable_declaration" {
        DeclKind::Var
    } else {
        match node.child(0).map(|token| token.kind()) {
            Some("const") => DeclKind::Const,
            _ => DeclKind::Let,
        }
    };

    let mut declarators = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() != "variable_declarator" {
            continue;
        }
        let id = child
            .child_by_field_name("name")
            .map(|name| convert_pat(name, source))
            .unwrap_or(Pat::Other("missing".into()));
        let init = child
            .child_by_field_name("value")
            .map(|value| convert_expr(value, source, false));
        declarators.push(Declarator { id, init });
    }

    VarDecl { kind, declarators }
}

fn convert_for(node: tree_sitter::Node, source: &str) -> ForStmt {
    // The grammar wraps the first two header clauses in statement nodes
    // because the semicolons belong to them.
    let init = node
        .child_by_field_name("initializer")
        .and_then(|clause| match clause.kind() {
            "lexical_declaration" | "variable_declaration" => {
                Some(ForInit::Decl(convert_var_decl(clause, source)))
            }
            "expression_statement" => clause
                .named_child(0)
                .map(|expr| ForInit::Expr(convert_expr(expr, source, false))),
            _ => None,
        });

    let test = node
        .child_by_field_name("condition")
        .and_then(|clause| match clause.kind() {
            "expression_statement" => clause.named_child(0),
            "empty_statement" => None,
            _ => Some(clause),
        })
        .map(|expr| convert_expr(expr, source, false));

    let update = node
        .child_by_field_name("increment")
        .map(|expr| convert_expr(expr, source, false));

    let body = node
        .child_by_field_name("body")
        .map(|body| convert_body(body, source))
        .unwrap_or_default();

    ForStmt {
        init,
        test,
        update,
        body,
    }
}

fn convert_if(node: tree_sitter::Node, source: &str) -> IfStmt {
    let test = node
        .child_by_field_name("condition")
        .and_then(|cond| cond.named_child(0))
        .map(|expr| convert_expr(expr, source, false))
        .unwrap_or(Expr::Other("missing".into()));

    let consequent = node
        .child_by_field_name("consequence")
        .map(|body| convert_body(body, source))
        .unwrap_or_default();

    let alternate = node
        .child_by_field_name("alternative")
        .and_then(|clause| clause.named_child(0))
        .map(|body| convert_body(body, source));

    IfStmt {
        test,
        consequent,
        alternate,
    }
}

fn convert_function(node: tree_sitter::Node, source: &str, is_arrow: bool) -> FunctionExpr {
    let name = node
        .child_by_field_name("name")
        .map(|name| node_text(name, source));

    let params = if let Some(single) = node.child_by_field_name("parameter") {
        // `x => ...` — a lone parameter without parentheses.
        vec![convert_pat(single, source)]
    } else if let Some(list) = node.child_by_field_name("parameters") {
        let mut params = Vec::new();
        let mut cursor = list.walk();
        for child in list.named_children(&mut cursor) {
            if child.kind() == "comment" {
                continue;
            }
            params.push(convert_pat(child, source));
        }
        params
    } else {
        Vec::new()
    };

    let body = match node.child_by_field_name("body") {
        Some(body) if body.kind() == "statement_block" => convert_block(body, source),
        // Expression-bodied arrow: treat the expression as the single
        // statement of the body.
        Some(expr) => vec![Stmt::Expr(convert_expr(expr, source, false))],
        None => Vec::new(),
    };

    FunctionExpr {
        name,
        params,
        body,
        is_arrow,
    }
}

fn convert_pat(node: tree_sitter::Node, source: &str) -> Pat {
    match node.kind() {
        "identifier" => Pat::Identifier(node_text(node, source)),
        "object_pattern" => {
            let mut properties = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                match child.kind() {
                    "shorthand_property_identifier_pattern" => {
                        let name = node_text(child, source);
                        properties.push(PatProp {
                            key: name.clone(),
                            value: PatTarget::Identifier(name),
                            shorthand: true,
                        });
                    }
                    "pair_pattern" => {
                        let key = child
                            .child_by_field_name("key")
                            .map(|key| property_key(key, source))
                            .unwrap_or_default();
                        let value = match child.child_by_field_name("value") {
                            Some(value) if value.kind() == "identifier" => {
                                PatTarget::Identifier(node_text(value, source))
                            }
                            Some(value) => PatTarget::Pattern(Box::new(convert_pat(value, source))),
                            None => PatTarget::Pattern(Box::new(Pat::Other("missing".into()))),
                        };
                        properties.push(PatProp {
                            key,
                            value,
                            shorthand: false,
                        });
                    }
                    "object_assignment_pattern" => {
                        // `{ key = default }` — shorthand with a default value.
                        let name = child
                            .child_by_field_name("left")
                            .map(|left| node_text(left, source))
                            .unwrap_or_default();
                        properties.push(PatProp {
                            key: name.clone(),
                            value: PatTarget::Identifier(name),
                            shorthand: true,
                        });
                    }
                    "rest_pattern" => {
                        let name = child
                            .named_child(0)
                            .map(|inner| node_text(inner, source))
                            .unwrap_or_default();
                        properties.push(PatProp {
                            key: name.clone(),
                            value: PatTarget::Identifier(name),
                            shorthand: true,
                        });
                    }
                    _ => {}
                }
            }
            Pat::Object(ObjectPat { properties })
        }
        other => Pat::Other(other.into()),
    }
}

/// Key of an object literal property or pair pattern.
fn property_key(node: tree_sitter::Node, source: &str) -> String {
    match node.kind() {
        "string" => string_value(node, source),
        _ => node_text(node, source),
    }
}

fn string_value(node: tree_sitter::Node, source: &str) -> String {
    let mut value = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "string_fragment" => value.push_str(&node_text(child, source)),
            "escape_sequence" => {
                let raw = node_text(child, source);
                let mut chars = raw.chars();
                chars.next(); // the backslash
                match chars.next() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some(other) => value.push(other),
                    None => {}
                }
            }
            _ => {}
        }
    }
    value
}

/// True when an access chain carries a `?.` anywhere along its spine.
fn spine_has_optional(expr: &Expr) -> bool {
    match expr {
        Expr::Member(member) => member.optional || spine_has_optional(&member.object),
        Expr::Call(call) => call.optional || spine_has_optional(&call.callee),
        _ => false,
    }
}

/// Convert an expression node. `in_spine` is true while descending the
/// object/callee spine of an access chain, so that only the outermost link
/// of an optional chain gets the wrapper node.
fn convert_expr(node: tree_sitter::Node, source: &str, in_spine: bool) -> Expr {
    let expr = match node.kind() {
        "identifier" => Expr::Identifier(node_text(node, source)),
        "property_identifier" | "private_property_identifier" => {
            Expr::Identifier(node_text(node, source))
        }
        "string" => Expr::String(string_value(node, source)),
        "number" => {
            let raw = node_text(node, source);
            let value = raw.parse::<f64>().unwrap_or(f64::NAN);
            Expr::Number(NumberLit { value, raw })
        }
        "true" => Expr::Bool(true),
        "false" => Expr::Bool(false),
        "null" => Expr::Null,
        "undefined" => Expr::Undefined,
        "array" => {
            let mut elements = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "comment" {
                    continue;
                }
                elements.push(convert_expr(child, source, false));
            }
            Expr::Array(elements)
        }
        "object" => Expr::Object(convert_object(node, source)),
        "member_expression" => {
            let object = node
                .child_by_field_name("object")
                .map(|object| convert_expr(object, source, true))
                .unwrap_or(Expr::Other("missing".into()));
            let property = node
                .child_by_field_name("property")
                .map(|property| convert_expr(property, source, false))
                .unwrap_or(Expr::Other("missing".into()));
            Expr::Member(MemberExpr {
                object: Box::new(object),
                property: Box::new(property),
                computed: false,
                optional: node.child_by_field_name("optional_chain").is_some(),
            })
        }
        "subscript_expression" => {
            let object = node
                .child_by_field_name("object")
                .map(|object| convert_expr(object, source, true))
                .unwrap_or(Expr::Other("missing".into()));
            let index = node
                .child_by_field_name("index")
                .map(|index| convert_expr(index, source, false))
                .unwrap_or(Expr::Other("missing".into()));
            Expr::Member(MemberExpr {
                object: Box::new(object),
                property: Box::new(index),
                computed: true,
                optional: node.child_by_field_name("optional_chain").is_some(),
            })
        }
        "call_expression" => {
            let callee = node
                .child_by_field_name("function")
                .map(|callee| convert_expr(callee, source, true))
                .unwrap_or(Expr::Other("missing".into()));
            let mut arguments = Vec::new();
            if let Some(list) = node.child_by_field_name("arguments") {
                let mut cursor = list.walk();
                for child in list.named_children(&mut cursor) {
                    if child.kind() == "comment" {
                        continue;
                    }
                    arguments.push(convert_expr(child, source, false));
                }
            }
            Expr::Call(CallExpr {
                callee: Box::new(callee),
                arguments,
                optional: node.child_by_field_name("optional_chain").is_some(),
            })
        }
        "arrow_function" => Expr::Function(convert_function(node, source, true)),
        "function_expression" | "function" => {
            Expr::Function(convert_function(node, source, false))
        }
        "binary_expression" => {
            let operator = node
                .child_by_field_name("operator")
                .map(|op| node_text(op, source))
                .unwrap_or_default();
            let left = node
                .child_by_field_name("left")
                .map(|left| convert_expr(left, source, false))
                .unwrap_or(Expr::Other("missing".into()));
            let right = node
                .child_by_field_name("right")
                .map(|right| convert_expr(right, source, false))
                .unwrap_or(Expr::Other("missing".into()));
            if matches!(operator.as_str(), "&&" | "||" | "??") {
                Expr::Logical(LogicalExpr {
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            } else {
                Expr::Binary(BinaryExpr {
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
        }
        "update_expression" => {
            let operator = node
                .child_by_field_name("operator")
                .map(|op| node_text(op, source))
                .unwrap_or_default();
            let argument = node
                .child_by_field_name("argument")
                .map(|argument| convert_expr(argument, source, false))
                .unwrap_or(Expr::Other("missing".into()));
            let prefix = node
                .child(0)
                .map(|first| matches!(first.kind(), "++" | "--"))
                .unwrap_or(false);
            Expr::Update(UpdateExpr {
                operator,
                argument: Box::new(argument),
                prefix,
            })
        }
        "unary_expression" => {
            let operator = node
                .child_by_field_name("operator")
                .map(|op| node_text(op, source))
                .unwrap_or_default();
            let argument = node
                .child_by_field_name("argument")
                .map(|argument| convert_expr(argument, source, false))
                .unwrap_or(Expr::Other("missing".into()));
            Expr::Unary(UnaryExpr {
                operator,
                argument: Box::new(argument),
            })
        }
        "parenthesized_expression" => match node.named_child(0) {
            Some(inner) => convert_expr(inner, source, false),
            None => Expr::Other("parenthesized_expression".into()),
        },
        other => Expr::Other(other.into()),
    };

    if !in_spine && spine_has_optional(&expr) {
        Expr::OptionalChain(Box::new(expr))
    } else {
        expr
    }
}

fn convert_object(node: tree_sitter::Node, source: &str) -> ObjectLit {
    let mut properties = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "pair" => {
                let (key, computed) = match child.child_by_field_name("key") {
                    Some(key) if key.kind() == "computed_property_name" => {
                        (node_text(key, source), true)
                    }
                    Some(key) => (property_key(key, source), false),
                    None => (String::new(), false),
                };
                let value = child
                    .child_by_field_name("value")
                    .map(|value| convert_expr(value, source, false))
                    .unwrap_or(Expr::Other("missing".into()));
                properties.push(ObjectProp {
                    key,
                    value,
                    shorthand: false,
                    computed,
                });
            }
            "shorthand_property_identifier" => {
                let name = node_text(child, source);
                properties.push(ObjectProp {
                    key: name.clone(),
                    value: Expr::Identifier(name),
                    shorthand: true,
                    computed: false,
                });
            }
            "method_definition" => {
                let key = child
                    .child_by_field_name("name")
                    .map(|name| property_key(name, source))
                    .unwrap_or_default();
                let function = convert_function(child, source, false);
                properties.push(ObjectProp {
                    key: key.clone(),
                    value: Expr::Function(FunctionExpr {
                        name: Some(key),
                        ..function
                    }),
                    shorthand: false,
                    computed: false,
                });
            }
            "spread_element" => {
                properties.push(ObjectProp {
                    key: String::new(),
                    value: Expr::Other("spread_element".into()),
                    shorthand: false,
                    computed: false,
                });
            }
            _ => {}
        }
    }
    ObjectLit { properties }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_simple_declaration() {
        let program = parse("const emptyObject = {};").unwrap();
        assert_eq!(program.body.len(), 1);

        let decl = program.body[0].as_var_decl().unwrap();
        assert_eq!(decl.kind, DeclKind::Const);
        let declarator = decl.first_declarator().unwrap();
        assert_eq!(declarator.id.identifier_name(), Some("emptyObject"));
        let object = declarator.init.as_ref().unwrap().as_object().unwrap();
        assert!(object.properties.is_empty());
    }

    #[test]
    fn extra_semicolon_counts_as_a_statement() {
        let program = parse("const x = 1;;").unwrap();
        assert_eq!(program.body.len(), 2);
        assert_eq!(program.body[1], Stmt::Empty);
    }

    #[test]
    fn rejects_invalid_code() {
        let err = parse("const = {").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
        assert!(err.to_string().starts_with("Syntax error"));
    }

    #[test]
    fn member_access_notations() {
        let program = parse(r#"const a = product["product description"];"#).unwrap();
        let decl = program.body[0].as_var_decl().unwrap();
        let init = decl.first_declarator().unwrap().init.as_ref().unwrap();
        let member = init.as_member().unwrap();
        assert!(member.computed);
        assert_eq!(
            member.property.string_value(),
            Some("product description")
        );

        let program = parse("const b = product.name;").unwrap();
        let decl = program.body[0].as_var_decl().unwrap();
        let init = decl.first_declarator().unwrap().init.as_ref().unwrap();
        let member = init.as_member().unwrap();
        assert!(!member.computed);
        assert_eq!(member.property.identifier_name(), Some("name"));
    }

    #[test]
    fn optional_chain_is_wrapped_once() {
        let program = parse("const u = user.login?.username;").unwrap();
        let decl = program.body[0].as_var_decl().unwrap();
        let init = decl.first_declarator().unwrap().init.as_ref().unwrap();

        let Expr::OptionalChain(inner) = init else {
            panic!("expected an optional chain wrapper, got {init:?}");
        };
        let outer = inner.as_member().unwrap();
        assert!(outer.optional);
        let login = outer.object.as_member().unwrap();
        assert!(!login.optional);
        assert_eq!(login.object.identifier_name(), Some("user"));
    }

    #[test]
    fn plain_access_is_not_wrapped() {
        let program = parse("const u = user.login.username;").unwrap();
        let decl = program.body[0].as_var_decl().unwrap();
        let init = decl.first_declarator().unwrap().init.as_ref().unwrap();
        assert!(init.as_member().is_some());
    }

    #[test]
    fn nullish_coalescing_is_a_logical_expression() {
        let program = parse(r#"const p = product.price ?? "Price unknown";"#).unwrap();
        let decl = program.body[0].as_var_decl().unwrap();
        let init = decl.first_declarator().unwrap().init.as_ref().unwrap();
        let Expr::Logical(logical) = init else {
            panic!("expected a logical expression, got {init:?}");
        };
        assert_eq!(logical.operator, "??");
        assert_eq!(logical.right.string_value(), Some("Price unknown"));
    }

    #[test]
    fn for_loop_header_parts() {
        let program = parse("for (let i = 0; i < books.length; i++) { const t = books[i].title; }")
            .unwrap();
        let Stmt::For(for_stmt) = &program.body[0] else {
            panic!("expected a for statement");
        };

        let Some(ForInit::Decl(init)) = &for_stmt.init else {
            panic!("expected a declaration initializer");
        };
        assert_eq!(init.kind, DeclKind::Let);
        assert_eq!(
            init.first_declarator()
                .and_then(|d| d.init.as_ref())
                .and_then(|e| e.number_value()),
            Some(0.0)
        );

        let Some(Expr::Binary(test)) = &for_stmt.test else {
            panic!("expected a binary test");
        };
        assert_eq!(test.operator, "<");

        let Some(Expr::Update(update)) = &for_stmt.update else {
            panic!("expected an update expression");
        };
        assert_eq!(update.operator, "++");
        assert!(!update.prefix);

        assert_eq!(for_stmt.body.len(), 1);
    }

    #[test]
    fn braceless_if_body_is_normalized() {
        let program = parse("for (let i = 0; i < xs.length; i++) if (i === 3) break;").unwrap();
        let Stmt::For(for_stmt) = &program.body[0] else {
            panic!("expected a for statement");
        };
        let Stmt::If(if_stmt) = &for_stmt.body[0] else {
            panic!("expected an if statement");
        };
        assert_eq!(if_stmt.consequent, vec![Stmt::Break]);
    }

    #[test]
    fn destructuring_patterns() {
        let program = parse("const { summary: synopsis } = blog;").unwrap();
        let decl = program.body[0].as_var_decl().unwrap();
        let pattern = decl.first_declarator().unwrap().id.as_object().unwrap();
        assert_eq!(pattern.properties.len(), 1);
        let prop = &pattern.properties[0];
        assert_eq!(prop.key, "summary");
        assert!(!prop.shorthand);
        assert_eq!(prop.value.identifier_name(), Some("synopsis"));

        let program = parse("const { price: { full } } = product;").unwrap();
        let decl = program.body[0].as_var_decl().unwrap();
        let pattern = decl.first_declarator().unwrap().id.as_object().unwrap();
        let nested = pattern.properties[0].value.as_pattern().unwrap();
        let nested = nested.as_object().unwrap();
        assert!(nested.properties[0].shorthand);
        assert_eq!(nested.properties[0].key, "full");
    }

    #[test]
    fn for_each_call_shape() {
        let program = parse("articles.forEach((article) => { const { headline } = article; });")
            .unwrap();
        let Stmt::Expr(Expr::Call(call)) = &program.body[0] else {
            panic!("expected a call expression statement");
        };
        let callee = call.callee.as_member().unwrap();
        assert_eq!(callee.property.identifier_name(), Some("forEach"));
        assert_eq!(callee.object.identifier_name(), Some("articles"));

        let function = call.arguments[0].as_function().unwrap();
        assert!(function.is_arrow);
        assert_eq!(function.params[0].identifier_name(), Some("article"));
        assert_eq!(function.body.len(), 1);
    }

    #[test]
    fn unmodeled_constructs_become_other() {
        let program = parse("while (x) { y(); }").unwrap();
        assert_eq!(program.body[0], Stmt::Other("while_statement".into()));
    }
}
