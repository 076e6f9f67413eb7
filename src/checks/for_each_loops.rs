//! ForEach-loop rule sets.
//!
//! Checks a statement-position `array.forEach(callback)` call: the callee's
//! array name, the callback argument, and — when the exercise requires it —
//! a first body statement that destructures the callback parameter. The
//! destructured property set is checked unordered: missing names, extra
//! names and aliases are reported independently and may co-occur.

use crate::ast::{CallExpr, Expr, FunctionExpr, Program};
use crate::chain::{Bindings, Chain, Verdict};
use crate::diagnostic::{ElementKind, ValidationResult};
use crate::walker;

const CALLBACK_PARAMETER: &str = "callback parameter";

/// Fallback parameter name used in feedback when the callback declares none.
const PARAMETER_PLACEHOLDER: &str = "item";

fn callback(call: &CallExpr) -> Option<&FunctionExpr> {
    call.arguments.first().and_then(Expr::as_function)
}

fn check(
    program: &Program,
    res: &mut ValidationResult,
    array: &'static str,
    properties: &'static [&'static str],
    single_statement: bool,
) {
    let Some(call) = walker::find_method_call_statement(program, "forEach") else {
        return;
    };
    res.resolve(ElementKind::ForEachLoop);

    let chain = Chain::new()
        .rule("function-argument", |call: &CallExpr, _| {
            if callback(call).is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(
                    "The forEach should take a function or arrow function as an argument".into(),
                )
            }
        })
        .rule("array-name", move |call, _| {
            let named = call
                .callee
                .as_member()
                .is_some_and(|callee| callee.object.identifier_name() == Some(array));
            if named {
                Verdict::Pass
            } else {
                Verdict::Fail(format!(
                    "forEach should be called on the array variable called: {array}"
                ))
            }
        })
        .rule("non-empty-body", |call, _| {
            match callback(call) {
                Some(function) if function.body.is_empty() => {
                    Verdict::Fail("The function has no statements".into())
                }
                _ => Verdict::Pass,
            }
        })
        .rule("single-statement", move |call, _| {
            if !single_statement {
                return Verdict::Pass;
            }
            match callback(call) {
                Some(function) if function.body.len() > 1 => {
                    Verdict::Fail("The function should have only one statement".into())
                }
                _ => Verdict::Pass,
            }
        });

    let chain = if properties.is_empty() {
        chain
    } else {
        chain
            .rule("bind-parameter", |call, bindings| {
                let name = callback(call)
                    .and_then(|function| function.params.first())
                    .and_then(|param| param.identifier_name())
                    .unwrap_or(PARAMETER_PLACEHOLDER);
                bindings.bind(CALLBACK_PARAMETER, name);
                Verdict::Pass
            })
            .rule("destructures-parameter", move |call, bindings| {
                let destructures = first_body_pattern(call).is_some();
                if destructures {
                    Verdict::Pass
                } else {
                    let parameter = bindings.name(CALLBACK_PARAMETER);
                    Verdict::Fail(format!(
                        "The first statement in the body of the function should a variable declaration that destructs properties from the function argument: const {{ {} }} = {parameter};",
                        properties.join(",")
                    ))
                }
            })
            .rule("destructures-from-parameter", |call, bindings| {
                let parameter = bindings.name(CALLBACK_PARAMETER).to_string();
                let from_parameter = callback(call)
                    .and_then(|function| function.body.first())
                    .and_then(|stmt| stmt.as_var_decl())
                    .and_then(|decl| decl.first_declarator())
                    .and_then(|declarator| declarator.init.as_ref())
                    .is_some_and(|init| init.identifier_name() == Some(parameter.as_str()));
                if from_parameter {
                    Verdict::Pass
                } else {
                    Verdict::Fail(format!(
                        "The value on the right side of the = should be the name of the parameter: {parameter}"
                    ))
                }
            })
            .rule("property-set", move |call, _| {
                let Some(pattern) = first_body_pattern(call) else {
                    return Verdict::Pass;
                };

                let mut missing: Vec<&str> = properties.to_vec();
                let mut unneeded: Vec<&str> = Vec::new();
                let mut has_alias = false;
                for prop in &pattern.properties {
                    if !prop.shorthand {
                        has_alias = true;
                    }
                    if missing.contains(&prop.key.as_str()) {
                        missing.retain(|name| *name != prop.key);
                    } else {
                        unneeded.push(prop.key.as_str());
                    }
                }

                let mut messages = Vec::new();
                if !missing.is_empty() {
                    let one = missing.len() == 1;
                    messages.push(format!(
                        "The following propert{} need{} to be destructured: {}",
                        if one { "y" } else { "ies" },
                        if one { "s" } else { "" },
                        missing.join(",")
                    ));
                }
                if !unneeded.is_empty() {
                    let one = unneeded.len() == 1;
                    messages.push(format!(
                        "The following propert{} should not be destructured: {}",
                        if one { "y" } else { "ies" },
                        unneeded.join(",")
                    ));
                }
                if has_alias {
                    messages.push("None of the properties should have aliases".into());
                }

                if messages.is_empty() {
                    Verdict::Pass
                } else {
                    Verdict::FailAll(messages)
                }
            })
    };

    chain.run(call, &mut Bindings::new(), &mut res.messages);
}

/// The object pattern of the callback's first body statement, when that
/// statement is a destructuring declaration.
fn first_body_pattern(call: &CallExpr) -> Option<&crate::ast::ObjectPat> {
    callback(call)?
        .body
        .first()?
        .as_var_decl()?
        .first_declarator()?
        .id
        .as_object()
}

pub fn for_each_1(program: &Program, res: &mut ValidationResult) {
    check(program, res, "articles", &["headline"], true);
}

pub fn for_each_2(program: &Program, res: &mut ValidationResult) {
    check(program, res, "phones", &["brand", "model", "price"], true);
}
