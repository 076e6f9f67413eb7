//! For-loop rule sets.
//!
//! The loop header is checked as a bound triple: the initializer's variable
//! name is captured into the binding context and must reappear in the test
//! and update clauses. Body checks dispatch on statement count, with the
//! per-exercise maximum carried as data, and accept either the inline
//! access form (`array[i].property`) or the two-step form through an
//! intermediate variable.

use crate::ast::{Expr, ForInit, ForStmt, Program, Stmt};
use crate::chain::{Bindings, Chain, Verdict};
use crate::diagnostic::{ElementKind, ValidationResult};
use crate::walker;

const LOOP_VARIABLE: &str = "loop variable";
const INTERMEDIATE_VARIABLE: &str = "intermediate variable";

/// Locate the loop and run the shared header chain. Returns the loop only
/// when the header produced no errors (warnings are fine).
fn locate_and_check_header<'p>(
    program: &'p Program,
    res: &mut ValidationResult,
    array: &'static str,
    start_at_zero: bool,
    bindings: &mut Bindings,
) -> Option<&'p ForStmt> {
    let Some(for_stmt) = walker::find_for_statement(program) else {
        return None;
    };
    res.resolve(ElementKind::ForLoop);

    header_chain(array, start_at_zero).run(for_stmt, bindings, &mut res.messages);

    if !res.missing_elements.is_empty() || res.has_errors() {
        return None;
    }
    Some(for_stmt)
}

fn init_declarator(for_stmt: &ForStmt) -> Option<&crate::ast::Declarator> {
    match &for_stmt.init {
        Some(ForInit::Decl(decl)) => decl.first_declarator(),
        _ => None,
    }
}

fn header_chain<'a>(array: &'static str, start_at_zero: bool) -> Chain<'a, ForStmt> {
    Chain::new()
        .rule("initializer-declaration", |f: &ForStmt, _| {
            if init_declarator(f).and_then(|d| d.init.as_ref()).is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(
                    "The first part of the for loop should be a variable declaration, e.g: let i = 0;"
                        .into(),
                )
            }
        })
        .rule("bind-loop-variable", |f, bindings| {
            if let Some(name) = init_declarator(f).and_then(|d| d.id.identifier_name()) {
                bindings.bind(LOOP_VARIABLE, name);
            }
            Verdict::Pass
        })
        .rule("mutable-keyword", |f, _| match &f.init {
            Some(ForInit::Decl(decl)) if decl.kind == crate::ast::DeclKind::Const => Verdict::Fail(
                "The variable declaration in the initial expression must not use const, but let or var: let i = 0;"
                    .into(),
            ),
            _ => Verdict::Pass,
        })
        .rule("numeric-start", |f, _| {
            let value = init_declarator(f)
                .and_then(|d| d.init.as_ref())
                .and_then(Expr::number_value);
            if value.is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(
                    "The variable in the initial expression must be initialised with a number value: let i = 0;"
                        .into(),
                )
            }
        })
        .rule("starts-at-zero", move |f, _| {
            if !start_at_zero {
                return Verdict::Pass;
            }
            let value = init_declarator(f)
                .and_then(|d| d.init.as_ref())
                .and_then(Expr::number_value);
            if value == Some(0.0) {
                Verdict::Pass
            } else {
                Verdict::Fail(
                    "The variable in the initial expression must be initialised with 0: let i = 0;"
                        .into(),
                )
            }
        })
        .rule("conventional-name", |_, bindings| {
            if bindings.name(LOOP_VARIABLE) == "i" {
                Verdict::Pass
            } else {
                Verdict::Warn(
                    "The variable used in the for loop is conventionally named \"i\": let i = 0;"
                        .into(),
                )
            }
        })
        .rule("test-compares-length", move |f, _| {
            let compares_length = match &f.test {
                Some(Expr::Binary(test)) if test.operator == "<" => match test.right.as_ref() {
                    Expr::Member(length) => {
                        length.object.identifier_name() == Some(array)
                            && length.property.identifier_name() == Some("length")
                    }
                    _ => false,
                },
                _ => false,
            };
            if compares_length {
                Verdict::Pass
            } else {
                Verdict::Fail(format!(
                    "The condition expression (the second section) in the for loop should be: i < {array}.length;"
                ))
            }
        })
        .rule("update-increments", move |f, _| {
            if !start_at_zero {
                return Verdict::Pass;
            }
            match &f.update {
                Some(Expr::Update(update)) if update.operator == "++" => Verdict::Pass,
                _ => Verdict::Fail(
                    "Use the increment operator ++ to increment the value of the variable: i++"
                        .into(),
                ),
            }
        })
        .rule("consistent-variable", move |f, bindings| {
            let name = bindings.name(LOOP_VARIABLE);
            let test_name = match &f.test {
                Some(Expr::Binary(test)) => test.left.identifier_name(),
                _ => None,
            };
            let update_name = match &f.update {
                Some(Expr::Update(update)) => update.argument.identifier_name(),
                _ => None,
            };
            if !name.is_empty() && test_name == Some(name) && update_name == Some(name) {
                Verdict::Pass
            } else {
                Verdict::Fail(format!(
                    "The variable name in the first, second and third part of the for loop must be the same: let i = 0; i < {array}.length; i++"
                ))
            }
        })
        .rule("non-empty-body", |f, _| {
            if f.body.is_empty() {
                Verdict::Fail("There are no statements inside the loop".into())
            } else {
                Verdict::Pass
            }
        })
}

/// Messages that differ between the plain body and the after-the-guard body.
struct InlineMessages {
    not_a_declaration: String,
    wrong_variable: String,
}

fn plain_inline_messages(property: &str, variable: &str) -> InlineMessages {
    InlineMessages {
        not_a_declaration: format!(
            "Retrieve each {property} property and assign it to a variable called: {variable}"
        ),
        wrong_variable: format!("The variable inside the loop must be called: {variable}"),
    }
}

fn guarded_inline_messages(property: &str, variable: &str) -> InlineMessages {
    InlineMessages {
        not_a_declaration: format!(
            "After the if statement, retrieve each {property} property and assign it to a variable called: {variable}"
        ),
        wrong_variable: format!("The property must be assigned to a variable called: {variable}"),
    }
}

/// The single-statement form: `const v = array[i].property;`.
fn inline_chain<'a>(
    array: &'static str,
    variable: &'static str,
    property: &'static str,
    messages: InlineMessages,
) -> Chain<'a, Stmt> {
    let InlineMessages {
        not_a_declaration,
        wrong_variable,
    } = messages;

    Chain::new()
        .rule("assigns-to-a-variable", move |stmt: &Stmt, _| {
            if stmt.as_var_decl().is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(not_a_declaration.clone())
            }
        })
        .rule("variable-name", move |stmt, _| {
            let name = stmt
                .as_var_decl()
                .and_then(|d| d.first_declarator())
                .and_then(|d| d.id.identifier_name());
            match name {
                Some(name) if name == variable => Verdict::Pass,
                _ => Verdict::Fail(wrong_variable.clone()),
            }
        })
        .rule("access-shape", move |stmt, _| {
            let shaped = inline_access(stmt).is_some_and(|(outer, index)| {
                index.object.identifier_name() == Some(array)
                    && outer.property.identifier_name() == Some(property)
            });
            if shaped {
                Verdict::Pass
            } else {
                Verdict::Fail(format!(
                    "The {property} property of each item in the {array} array must be assigned to the {variable} variable: const {variable} = {array}[i].{property};"
                ))
            }
        })
        .rule("index-variable", move |stmt, bindings| {
            let loop_variable = bindings.name(LOOP_VARIABLE);
            let indexed = inline_access(stmt).is_some_and(|(_, index)| {
                index.property.identifier_name() == Some(loop_variable)
            });
            if indexed {
                Verdict::Pass
            } else {
                Verdict::Fail(format!(
                    "The variable used as the array index must be the same as the loop variable: {array}[{loop_variable}].title"
                ))
            }
        })
}

/// `array[i].property` split into the outer access and the index access.
fn inline_access(stmt: &Stmt) -> Option<(&crate::ast::MemberExpr, &crate::ast::MemberExpr)> {
    let init = stmt
        .as_var_decl()?
        .first_declarator()?
        .init
        .as_ref()?;
    let outer = init.as_member()?;
    let index = outer.object.as_member()?;
    Some((outer, index))
}

/// The two-statement form: `const item = array[i]; const v = item.property;`.
fn two_step_chain<'a>(
    array: &'static str,
    variable: &'static str,
    property: &'static str,
    first_ordinal: &'static str,
    second_ordinal: &'static str,
    fallback_intermediate: &'static str,
    name_example_after_actual: bool,
) -> Chain<'a, [Stmt]> {
    Chain::new()
        .rule("intermediate-declaration", move |stmts: &[Stmt], _| {
            let shaped = stmts.first().is_some_and(|stmt| {
                stmt.as_var_decl()
                    .and_then(|d| d.first_declarator())
                    .and_then(|d| d.init.as_ref())
                    .and_then(Expr::as_member)
                    .is_some_and(|access| {
                        access.object.identifier_name() == Some(array) && access.computed
                    })
            });
            if shaped {
                Verdict::Pass
            } else {
                let example = if name_example_after_actual {
                    stmts
                        .first()
                        .and_then(Stmt::as_var_decl)
                        .and_then(|d| d.first_declarator())
                        .and_then(|d| d.id.identifier_name())
                        .unwrap_or(fallback_intermediate)
                        .to_string()
                } else {
                    fallback_intermediate.to_string()
                };
                Verdict::Fail(format!(
                    "The {first_ordinal} statement inside the loop should assign each item in the {array} array to a variable: const {example} = {array}[i];"
                ))
            }
        })
        .rule("index-variable", move |stmts, bindings| {
            let loop_variable = bindings.name(LOOP_VARIABLE);
            let indexed = stmts.first().is_some_and(|stmt| {
                stmt.as_var_decl()
                    .and_then(|d| d.first_declarator())
                    .and_then(|d| d.init.as_ref())
                    .and_then(Expr::as_member)
                    .is_some_and(|access| {
                        access.property.identifier_name() == Some(loop_variable)
                    })
            });
            if indexed {
                Verdict::Pass
            } else {
                Verdict::Fail(format!(
                    "The variable used as the array index must be the same as the loop variable: {array}[{loop_variable}]"
                ))
            }
        })
        .rule("bind-intermediate", |stmts, bindings| {
            let name = stmts
                .first()
                .and_then(Stmt::as_var_decl)
                .and_then(|d| d.first_declarator())
                .and_then(|d| d.id.identifier_name());
            if let Some(name) = name {
                bindings.bind(INTERMEDIATE_VARIABLE, name);
            }
            Verdict::Pass
        })
        .rule("final-assignment", move |stmts, bindings| {
            let intermediate = bindings.name(INTERMEDIATE_VARIABLE).to_string();
            let shaped = stmts.get(1).is_some_and(|stmt| {
                let decl = stmt.as_var_decl().and_then(|d| d.first_declarator());
                decl.is_some_and(|d| {
                    d.id.identifier_name() == Some(variable)
                        && d.init
                            .as_ref()
                            .and_then(Expr::as_member)
                            .is_some_and(|access| {
                                access.object.identifier_name() == Some(intermediate.as_str())
                                    && access.property.identifier_name() == Some(property)
                            })
                })
            });
            if shaped {
                Verdict::Pass
            } else {
                Verdict::Fail(format!(
                    "The {second_ordinal} statement in the loop must assign the {property} property to a variable called {variable}: const {variable} = {intermediate}.{property}"
                ))
            }
        })
}

pub fn dot_notation_1(program: &Program, res: &mut ValidationResult) {
    let array = "books";
    let variable = "bookTitle";
    let property = "title";

    let mut bindings = Bindings::new();
    let Some(for_stmt) = locate_and_check_header(program, res, array, true, &mut bindings) else {
        return;
    };

    let inline = inline_chain(array, variable, property, plain_inline_messages(property, variable));
    let two_step = two_step_chain(array, variable, property, "first", "second", "book", false);

    Chain::new()
        .rule("body-dispatch", move |body: &[Stmt], bindings| {
            match body.len() {
                1 => inline.eval(&body[0], bindings),
                2 => two_step.eval(body, bindings),
                n if n > 2 => Verdict::Fail(
                    "There should be a maximum of 2 statements inside the loop".into(),
                ),
                _ => Verdict::Pass,
            }
        })
        .run(&for_stmt.body, &mut bindings, &mut res.messages);
}

/// The guard an exercise requires as the first body statement.
#[derive(Clone, Copy)]
enum Guard {
    /// `if (array[i].property >= value) { continue; }`
    PropertyThreshold {
        property: &'static str,
        operator: &'static str,
        value: f64,
    },
    /// `if (i === value) { break; }`
    IndexSentinel {
        operator: &'static str,
        value: f64,
    },
}

impl Guard {
    fn exit_word(&self) -> &'static str {
        match self {
            Guard::PropertyThreshold { .. } => "continue",
            Guard::IndexSentinel { .. } => "break",
        }
    }

    fn exit_matches(&self, stmt: &Stmt) -> bool {
        match self {
            Guard::PropertyThreshold { .. } => matches!(stmt, Stmt::Continue),
            Guard::IndexSentinel { .. } => matches!(stmt, Stmt::Break),
        }
    }
}

fn guarded_body_chain<'a>(
    array: &'static str,
    variable: &'static str,
    property: &'static str,
    guard: Guard,
) -> Chain<'a, [Stmt]> {
    let inline = inline_chain(
        array,
        variable,
        property,
        guarded_inline_messages(property, variable),
    );
    let two_step = two_step_chain(array, variable, property, "second", "third", "recipe", true);

    let chain = Chain::new().rule("two-statements", |body: &[Stmt], _| {
        if body.len() < 2 {
            Verdict::Fail(
                "Inside the for loop there should be an if statement and then a property assignment to a variable"
                    .into(),
            )
        } else {
            Verdict::Pass
        }
    });

    let chain = match &guard {
        Guard::PropertyThreshold { property: checked, .. } => {
            let checked = *checked;
            chain.rule("starts-with-if", move |body: &[Stmt], _| {
                if matches!(body.first(), Some(Stmt::If(_))) {
                    Verdict::Pass
                } else {
                    Verdict::Fail(format!(
                        "The first statement inside the loop should be an if statement checking the value of the {checked} property"
                    ))
                }
            })
        }
        Guard::IndexSentinel { .. } => chain.rule("starts-with-if", |body, bindings| {
            if matches!(body.first(), Some(Stmt::If(_))) {
                Verdict::Pass
            } else {
                let loop_variable = bindings.name(LOOP_VARIABLE);
                Verdict::Fail(format!(
                    "The first statement inside the loop should be an if statement checking the value of the {loop_variable} variable"
                ))
            }
        }),
    };

    let chain = match guard {
        Guard::PropertyThreshold {
            property: checked,
            operator,
            value,
        } => chain
            .rule("guard-test", move |body, bindings| {
                let loop_variable = bindings.name(LOOP_VARIABLE).to_string();
                let matches = guard_if(body).is_some_and(|test| {
                    property_guard_matches(test, array, checked, operator, value)
                });
                if matches {
                    Verdict::Pass
                } else {
                    Verdict::Fail(format!(
                        "The test in the if statement should be {array}[{loop_variable}].{checked} >= 10"
                    ))
                }
            })
            .rule("guard-index-variable", move |body, bindings| {
                let loop_variable = bindings.name(LOOP_VARIABLE).to_string();
                let indexed = guard_if(body)
                    .and_then(|test| match test {
                        Expr::Binary(comparison) => comparison.left.as_member(),
                        _ => None,
                    })
                    .and_then(|left| left.object.as_member())
                    .is_some_and(|index| {
                        index.property.identifier_name() == Some(loop_variable.as_str())
                    });
                if indexed {
                    Verdict::Pass
                } else {
                    Verdict::Fail(format!(
                        "The variable used as the array index must be the same as the loop variable: {array}[{loop_variable}].{checked}"
                    ))
                }
            }),
        Guard::IndexSentinel { operator, value } => {
            chain.rule("guard-test", move |body, bindings| {
                let loop_variable = bindings.name(LOOP_VARIABLE).to_string();
                let matches = guard_if(body).is_some_and(|test| match test {
                    Expr::Binary(comparison) => {
                        comparison.operator == operator
                            && comparison.left.identifier_name() == Some(loop_variable.as_str())
                            && comparison.right.number_value() == Some(value)
                    }
                    _ => false,
                });
                if matches {
                    Verdict::Pass
                } else {
                    Verdict::Fail(format!(
                        "The test in the if statement should be: {loop_variable} === 3"
                    ))
                }
            })
        }
    };

    chain
        .rule("early-exit", move |body: &[Stmt], _| {
            let Some(Stmt::If(if_stmt)) = body.first() else {
                return Verdict::Pass;
            };
            let exits = if_stmt
                .consequent
                .first()
                .is_some_and(|stmt| guard.exit_matches(stmt));
            if exits {
                Verdict::Pass
            } else {
                Verdict::Fail(format!(
                    "The body of the if statement should be a {} statement",
                    guard.exit_word()
                ))
            }
        })
        .rule("body-dispatch", move |body: &[Stmt], bindings| {
            match body.len() {
                2 => inline.eval(&body[1], bindings),
                3 => two_step.eval(&body[1..], bindings),
                n if n > 3 => Verdict::Fail(
                    "There should be a maximum of 3 statements inside the loop".into(),
                ),
                _ => Verdict::Pass,
            }
        })
}

fn guard_if(body: &[Stmt]) -> Option<&Expr> {
    match body.first() {
        Some(Stmt::If(if_stmt)) => Some(&if_stmt.test),
        _ => None,
    }
}

pub fn continue_1(program: &Program, res: &mut ValidationResult) {
    let array = "recipes";
    let variable = "recipeName";
    let property = "name";

    let mut bindings = Bindings::new();
    let Some(for_stmt) = locate_and_check_header(program, res, array, true, &mut bindings) else {
        return;
    };

    guarded_body_chain(
        array,
        variable,
        property,
        Guard::PropertyThreshold {
            property: "numberOfIngredients",
            operator: ">=",
            value: 10.0,
        },
    )
    .run(&for_stmt.body, &mut bindings, &mut res.messages);
}

pub fn break_1(program: &Program, res: &mut ValidationResult) {
    let array = "blogs";
    let variable = "blogTitle";
    let property = "title";

    let mut bindings = Bindings::new();
    let Some(for_stmt) = locate_and_check_header(program, res, array, true, &mut bindings) else {
        return;
    };

    guarded_body_chain(
        array,
        variable,
        property,
        Guard::IndexSentinel {
            operator: "===",
            value: 3.0,
        },
    )
    .run(&for_stmt.body, &mut bindings, &mut res.messages);
}

fn property_guard_matches(
    test: &Expr,
    array: &str,
    property: &str,
    operator: &str,
    value: f64,
) -> bool {
    let Expr::Binary(comparison) = test else {
        return false;
    };
    if comparison.operator != operator {
        return false;
    }
    let Some(left) = comparison.left.as_member() else {
        return false;
    };
    if left.computed {
        return false;
    }
    let indexed = left
        .object
        .as_member()
        .is_some_and(|index| index.object.identifier_name() == Some(array));
    indexed
        && left.property.identifier_name() == Some(property)
        && comparison.right.number_value() == Some(value)
}

#[cfg(test)]
mod tests {
    use crate::diagnostic::{ElementKind, Severity};
    use crate::engine::check;
    use crate::exercise::Exercise;
    use pretty_assertions::assert_eq;

    fn messages(code: &str, exercise: Exercise) -> Vec<String> {
        check(code, exercise)
            .messages
            .into_iter()
            .map(|m| m.message)
            .collect()
    }

    #[test]
    fn inline_body_passes() {
        let res = check(
            "for (let i = 0; i < books.length; i++) { const bookTitle = books[i].title; }",
            Exercise::DotNotation1,
        );
        assert!(res.is_success());
        assert!(res.messages.is_empty());
    }

    #[test]
    fn two_step_body_passes() {
        let res = check(
            "for (let i = 0; i < books.length; i++) { const book = books[i]; const bookTitle = book.title; }",
            Exercise::DotNotation1,
        );
        assert!(res.is_success());
    }

    #[test]
    fn missing_loop_leaves_element_missing() {
        let res = check("const x = 1;", Exercise::DotNotation1);
        assert_eq!(res.missing_elements, vec![ElementKind::ForLoop]);
        assert!(res.messages.is_empty());
    }

    #[test]
    fn start_value_must_be_zero() {
        assert_eq!(
            messages(
                "for (let i = 1; i < books.length; i++) {}",
                Exercise::DotNotation1
            ),
            vec!["The variable in the initial expression must be initialised with 0: let i = 0;"]
        );
    }

    #[test]
    fn const_keyword_is_rejected() {
        assert_eq!(
            messages(
                "for (const i = 0; i < books.length; i++) {}",
                Exercise::DotNotation1
            ),
            vec![
                "The variable declaration in the initial expression must not use const, but let or var: let i = 0;"
            ]
        );
    }

    #[test]
    fn unconventional_name_warns_but_passes() {
        let res = check(
            "for (let j = 0; j < books.length; j++) { const bookTitle = books[j].title; }",
            Exercise::DotNotation1,
        );
        assert!(res.is_success());
        assert_eq!(res.messages.len(), 1);
        assert_eq!(res.messages[0].severity, Severity::Warning);
        assert_eq!(
            res.messages[0].message,
            "The variable used in the for loop is conventionally named \"i\": let i = 0;"
        );
    }

    #[test]
    fn header_names_must_agree() {
        let res = check(
            "for (let i = 0; j < books.length; i++) {}",
            Exercise::DotNotation1,
        );
        assert_eq!(
            res.messages.last().unwrap().message,
            "The variable name in the first, second and third part of the for loop must be the same: let i = 0; i < books.length; i++"
        );
    }

    #[test]
    fn condition_must_compare_against_length() {
        assert_eq!(
            messages(
                "for (let i = 0; i < books.size; i++) {}",
                Exercise::DotNotation1
            ),
            vec![
                "The condition expression (the second section) in the for loop should be: i < books.length;"
            ]
        );
    }

    #[test]
    fn update_must_increment() {
        assert_eq!(
            messages(
                "for (let i = 0; i < books.length; i--) {}",
                Exercise::DotNotation1
            ),
            vec!["Use the increment operator ++ to increment the value of the variable: i++"]
        );
    }

    #[test]
    fn empty_body_is_rejected() {
        assert_eq!(
            messages(
                "for (let i = 0; i < books.length; i++) {}",
                Exercise::DotNotation1
            ),
            vec!["There are no statements inside the loop"]
        );
    }

    #[test]
    fn inline_body_wrong_variable_name() {
        assert_eq!(
            messages(
                "for (let i = 0; i < books.length; i++) { const title = books[i].title; }",
                Exercise::DotNotation1
            ),
            vec!["The variable inside the loop must be called: bookTitle"]
        );
    }

    #[test]
    fn inline_body_index_must_reuse_loop_variable() {
        assert_eq!(
            messages(
                "for (let i = 0; i < books.length; i++) { const bookTitle = books[0].title; }",
                Exercise::DotNotation1
            ),
            vec![
                "The variable used as the array index must be the same as the loop variable: books[i].title"
            ]
        );
    }

    #[test]
    fn two_step_body_must_reuse_intermediate_variable() {
        assert_eq!(
            messages(
                "for (let i = 0; i < books.length; i++) { const book = books[i]; const bookTitle = item.title; }",
                Exercise::DotNotation1
            ),
            vec![
                "The second statement in the loop must assign the title property to a variable called bookTitle: const bookTitle = book.title"
            ]
        );
    }

    #[test]
    fn body_statement_limit_is_enforced() {
        assert_eq!(
            messages(
                "for (let i = 0; i < books.length; i++) { const a = books[i]; const b = a.title; const c = b; }",
                Exercise::DotNotation1
            ),
            vec!["There should be a maximum of 2 statements inside the loop"]
        );
    }

    #[test]
    fn continue_guard_passes() {
        let res = check(
            "for (let i = 0; i < recipes.length; i++) { if (recipes[i].numberOfIngredients >= 10) { continue; } const recipeName = recipes[i].name; }",
            Exercise::Continue1,
        );
        assert!(res.is_success());
    }

    #[test]
    fn continue_requires_two_statements() {
        assert_eq!(
            messages(
                "for (let i = 0; i < recipes.length; i++) { const recipeName = recipes[i].name; }",
                Exercise::Continue1
            ),
            vec![
                "Inside the for loop there should be an if statement and then a property assignment to a variable"
            ]
        );
    }

    #[test]
    fn continue_first_statement_must_be_an_if() {
        assert_eq!(
            messages(
                "for (let i = 0; i < recipes.length; i++) { const a = recipes[i]; const recipeName = a.name; }",
                Exercise::Continue1
            ),
            vec![
                "The first statement inside the loop should be an if statement checking the value of the numberOfIngredients property"
            ]
        );
    }

    #[test]
    fn continue_guard_test_shape() {
        assert_eq!(
            messages(
                "for (let i = 0; i < recipes.length; i++) { if (recipes[i].numberOfIngredients > 10) { continue; } const recipeName = recipes[i].name; }",
                Exercise::Continue1
            ),
            vec!["The test in the if statement should be recipes[i].numberOfIngredients >= 10"]
        );
    }

    #[test]
    fn continue_guard_body_must_continue() {
        assert_eq!(
            messages(
                "for (let i = 0; i < recipes.length; i++) { if (recipes[i].numberOfIngredients >= 10) { break; } const recipeName = recipes[i].name; }",
                Exercise::Continue1
            ),
            vec!["The body of the if statement should be a continue statement"]
        );
    }

    #[test]
    fn continue_three_statement_body_passes() {
        let res = check(
            "for (let i = 0; i < recipes.length; i++) { if (recipes[i].numberOfIngredients >= 10) { continue; } const recipe = recipes[i]; const recipeName = recipe.name; }",
            Exercise::Continue1,
        );
        assert!(res.is_success());
    }

    #[test]
    fn continue_body_statement_limit() {
        assert_eq!(
            messages(
                "for (let i = 0; i < recipes.length; i++) { if (recipes[i].numberOfIngredients >= 10) { continue; } const a = recipes[i]; const b = a.name; const c = b; }",
                Exercise::Continue1
            ),
            vec!["There should be a maximum of 3 statements inside the loop"]
        );
    }

    #[test]
    fn break_guard_passes() {
        let res = check(
            "for (let i = 0; i < blogs.length; i++) { if (i === 3) { break; } const blogTitle = blogs[i].title; }",
            Exercise::Break1,
        );
        assert!(res.is_success());
    }

    #[test]
    fn break_guard_sentinel_value() {
        assert_eq!(
            messages(
                "for (let i = 0; i < blogs.length; i++) { if (i === 2) { break; } const blogTitle = blogs[i].title; }",
                Exercise::Break1
            ),
            vec!["The test in the if statement should be: i === 3"]
        );
    }

    #[test]
    fn break_guard_braceless_body_is_accepted() {
        let res = check(
            "for (let i = 0; i < blogs.length; i++) { if (i === 3) break; const blogTitle = blogs[i].title; }",
            Exercise::Break1,
        );
        assert!(res.is_success());
    }

    #[test]
    fn break_guard_body_must_break() {
        assert_eq!(
            messages(
                "for (let i = 0; i < blogs.length; i++) { if (i === 3) { continue; } const blogTitle = blogs[i].title; }",
                Exercise::Break1
            ),
            vec!["The body of the if statement should be a break statement"]
        );
    }
}
