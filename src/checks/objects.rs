//! Object-shape rule sets.
//!
//! Every exercise here checks a single variable declaration: its name, the
//! kind of its initializer, and the initializer's internal shape — property
//! sets of object literals, access chains with their notation per level,
//! optional chaining and nullish coalescing, and destructuring patterns.

use crate::ast::{Declarator, Expr, MemberExpr, ObjectLit, Pat, PatProp, Program, Stmt, VarDecl};
use crate::chain::{Bindings, Chain, Verdict};
use crate::diagnostic::{ElementKind, ValidationResult};
use crate::responses;
use crate::walker;

/// Expected initializer kind plus its learner-facing label.
#[derive(Clone, Copy)]
struct ExpectedInit {
    kind: InitKind,
    label: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
enum InitKind {
    ObjectLiteral,
    PropertyAccess,
}

const AN_OBJECT: ExpectedInit = ExpectedInit {
    kind: InitKind::ObjectLiteral,
    label: "an object",
};

const A_PROPERTY_OF_AN_OBJECT: ExpectedInit = ExpectedInit {
    kind: InitKind::PropertyAccess,
    label: "a property of an object",
};

/// Shared base chain: locate the declaration, then check its name and the
/// presence/kind of its initializer. Returns the initializer only when the
/// base chain produced no feedback, so exercise-specific rules can assume
/// the base shape.
fn base<'p>(
    program: &'p Program,
    res: &mut ValidationResult,
    variable_name: &'static str,
    expected: Option<ExpectedInit>,
) -> Option<&'p Expr> {
    let Some(decl) = walker::find_variable_declaration(program) else {
        return None;
    };
    let Some(declarator) = decl.first_declarator() else {
        return None;
    };
    res.resolve(ElementKind::Variable);

    Chain::new()
        .rule("declared-name", move |d: &Declarator, _| {
            match d.id.identifier_name() {
                Some(name) if name != variable_name => Verdict::Fail(format!(
                    "The variable's name is incorrect. It should be: {variable_name}"
                )),
                _ => Verdict::Pass,
            }
        })
        .rule("has-value", |d, _| {
            if d.init.is_none() {
                Verdict::Fail("The variable has no value".into())
            } else {
                Verdict::Pass
            }
        })
        .rule("value-kind", move |d, _| {
            let (Some(expected), Some(init)) = (expected, d.init.as_ref()) else {
                return Verdict::Pass;
            };
            let kind_matches = match expected.kind {
                InitKind::ObjectLiteral => matches!(init, Expr::Object(_)),
                InitKind::PropertyAccess => matches!(init, Expr::Member(_)),
            };
            if !kind_matches {
                return Verdict::Fail(format!(
                    "The variable's value must be {}.",
                    expected.label
                ));
            }
            if expected.kind == InitKind::PropertyAccess {
                if let Expr::Member(member) = init {
                    if member.object.as_member().is_some() {
                        return Verdict::Fail(
                            "The variable value be a property on an object, not a nested property"
                                .into(),
                        );
                    }
                }
            }
            Verdict::Pass
        })
        .run(declarator, &mut Bindings::new(), &mut res.messages);

    if !res.missing_elements.is_empty() || !res.messages.is_empty() {
        return None;
    }
    declarator.init.as_ref()
}

/// `init.object.property` — a two-level access chain whose root is not
/// itself an access.
fn member2(init: &Expr) -> Option<(&MemberExpr, &MemberExpr)> {
    let outer = init.as_member()?;
    let middle = outer.object.as_member()?;
    if middle.object.as_member().is_some() {
        return None;
    }
    Some((outer, middle))
}

/// Three-level access chain with a non-access root.
fn member3(init: &Expr) -> Option<(&MemberExpr, &MemberExpr, &MemberExpr)> {
    let outer = init.as_member()?;
    let middle = outer.object.as_member()?;
    let inner = middle.object.as_member()?;
    if inner.object.as_member().is_some() {
        return None;
    }
    Some((outer, middle, inner))
}

/// Two-level access chain wrapped in an optional chain.
fn optional_member2(init: &Expr) -> Option<(&MemberExpr, &MemberExpr)> {
    let Expr::OptionalChain(inner) = init else {
        return None;
    };
    member2(inner)
}

/// True when the level's property is written as the expected name, either
/// as an identifier or as a literal, and the name differs.
fn level_mismatch(member: &MemberExpr, expected: &str) -> bool {
    match member.property.as_ref() {
        Expr::Identifier(name) => name != expected,
        property if property.is_literal() => property.string_value() != Some(expected),
        _ => false,
    }
}

fn first_prop(declarator: &Declarator) -> Option<&PatProp> {
    declarator.id.as_object()?.properties.first()
}

fn pattern_len(declarator: &Declarator) -> usize {
    declarator
        .id
        .as_object()
        .map(|object| object.properties.len())
        .unwrap_or(0)
}

pub fn empty_object(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "emptyObject", Some(AN_OBJECT)) else {
        return;
    };
    Chain::new()
        .rule("object-is-empty", |init: &Expr, _| match init.as_object() {
            Some(object) if !object.properties.is_empty() => {
                Verdict::Fail("The object should be empty".into())
            }
            _ => Verdict::Pass,
        })
        .run(init, &mut Bindings::new(), &mut res.messages);
}

pub fn object_with_two_string_properties(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "movie", Some(AN_OBJECT)) else {
        return;
    };
    let Some(object) = init.as_object() else {
        return;
    };

    Chain::new()
        .rule("property-count", |o: &ObjectLit, _| {
            if o.properties.len() != 2 {
                Verdict::Fail(responses::property_count(2, o.properties.len()))
            } else {
                Verdict::Pass
            }
        })
        .rule("required-properties", |o, _| {
            let mut required = vec!["title", "description"];
            for prop in &o.properties {
                required.retain(|name| *name != prop.key);
            }
            if required.is_empty() {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::missing_properties(&required))
            }
        })
        .rule("string-values", |o, _| {
            let offenders: Vec<&str> = o
                .properties
                .iter()
                .filter(|prop| !matches!(prop.value, Expr::String(_)))
                .map(|prop| prop.key.as_str())
                .collect();
            if offenders.is_empty() {
                return Verdict::Pass;
            }
            let one = offenders.len() == 1;
            Verdict::Fail(format!(
                "The property values must all be strings. Th{} propert{} do{} have a string value: {}",
                if one { "is" } else { "ese" },
                if one { "y" } else { "ies" },
                if one { "esn't" } else { "n't" },
                offenders.join(",")
            ))
        })
        .run(object, &mut Bindings::new(), &mut res.messages);
}

pub fn object_with_three_properties(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "user", Some(AN_OBJECT)) else {
        return;
    };
    let Some(object) = init.as_object() else {
        return;
    };

    Chain::new()
        .rule("property-count", |o: &ObjectLit, _| {
            if o.properties.len() != 3 {
                Verdict::Fail(responses::property_count(3, o.properties.len()))
            } else {
                Verdict::Pass
            }
        })
        .rule("required-properties", |o, _| {
            let mut required = vec!["id", "name", "isActive"];
            for prop in &o.properties {
                required.retain(|name| *name != prop.key);
            }
            if required.is_empty() {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::missing_properties(&required))
            }
        })
        .rule("value-types", |o, _| {
            let mut messages = Vec::new();
            for prop in &o.properties {
                match prop.key.as_str() {
                    "id" if !matches!(prop.value, Expr::Number(_)) => {
                        messages.push(responses::incorrect_value("id", "number"));
                    }
                    "name" if !matches!(prop.value, Expr::String(_)) => {
                        messages.push(responses::incorrect_value("name", "string"));
                    }
                    "isActive" if !matches!(prop.value, Expr::Bool(_)) => {
                        messages.push(responses::incorrect_value("isActive", "boolean"));
                    }
                    _ => {}
                }
            }
            if messages.is_empty() {
                Verdict::Pass
            } else {
                Verdict::FailAll(messages)
            }
        })
        .run(object, &mut Bindings::new(), &mut res.messages);
}

pub fn using_dot_notation(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "productName", Some(A_PROPERTY_OF_AN_OBJECT)) else {
        return;
    };
    let Some(member) = init.as_member() else {
        return;
    };

    Chain::new()
        .rule("object-name", |m: &MemberExpr, _| {
            if m.object.identifier_name() == Some("product") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::object_name("product"))
            }
        })
        .rule("dot-notation", |m, _| {
            if m.property.identifier_name().is_none() || m.computed {
                Verdict::Fail(responses::use_dot_notation(false))
            } else {
                Verdict::Pass
            }
        })
        .rule("property-name", |m, _| {
            if m.property.identifier_name() == Some("name") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_name("name"))
            }
        })
        .run(member, &mut Bindings::new(), &mut res.messages);
}

pub fn using_bracket_notation(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(
        program,
        res,
        "productDescription",
        Some(A_PROPERTY_OF_AN_OBJECT),
    ) else {
        return;
    };
    let Some(member) = init.as_member() else {
        return;
    };

    Chain::new()
        .rule("object-name", |m: &MemberExpr, _| {
            if m.object.identifier_name() == Some("product") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::object_name("product"))
            }
        })
        .rule("string-in-brackets", |m, _| {
            if !m.property.is_literal() && m.computed {
                Verdict::Fail(responses::STRING_INSIDE_SQUARE_BRACKETS.into())
            } else {
                Verdict::Pass
            }
        })
        .rule("bracket-notation", |m, _| {
            if m.property.is_literal() {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::use_bracket_notation(false))
            }
        })
        .rule("property-value", |m, _| {
            if m.property.string_value() == Some("product description") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_name("\"product description\""))
            }
        })
        .run(member, &mut Bindings::new(), &mut res.messages);
}

pub fn accessing_nested_object_property_1(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "userFirstName", None) else {
        return;
    };

    Chain::new()
        .rule("nested-shape", |init: &Expr, _| {
            if member2(init).is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::must_be_a_nested_property("object.object.property"))
            }
        })
        .rule("dot-notation", |init, _| {
            let Some((outer, middle)) = member2(init) else {
                return Verdict::Pass;
            };
            if middle.computed || outer.property.is_literal() || outer.computed {
                Verdict::Fail(responses::use_dot_notation(true))
            } else {
                Verdict::Pass
            }
        })
        .rule("root-name", |init, _| {
            let Some((_, middle)) = member2(init) else {
                return Verdict::Pass;
            };
            if middle.object.identifier_name() == Some("user") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::first_object_name("user"))
            }
        })
        .rule("middle-property", |init, _| {
            let Some((_, middle)) = member2(init) else {
                return Verdict::Pass;
            };
            if middle.property.identifier_name() == Some("name") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("user", "name"))
            }
        })
        .rule("final-property", |init, _| {
            let Some((outer, _)) = member2(init) else {
                return Verdict::Pass;
            };
            if outer.property.identifier_name() == Some("firstName") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("name", "firstName"))
            }
        })
        .run(init, &mut Bindings::new(), &mut res.messages);
}

pub fn accessing_nested_object_property_2(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "userPassword", None) else {
        return;
    };

    Chain::new()
        .rule("nested-shape", |init: &Expr, _| {
            if member2(init).is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::must_be_a_nested_property("object.object.property"))
            }
        })
        .rule("dot-notation", |init, _| {
            let Some((outer, middle)) = member2(init) else {
                return Verdict::Pass;
            };
            if outer.computed || middle.computed {
                Verdict::Fail(responses::use_dot_notation(true))
            } else {
                Verdict::Pass
            }
        })
        .rule("root-name", |init, _| {
            let Some((_, middle)) = member2(init) else {
                return Verdict::Pass;
            };
            if middle.object.identifier_name() == Some("user") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::first_object_name("user"))
            }
        })
        .rule("middle-property", |init, _| {
            let Some((_, middle)) = member2(init) else {
                return Verdict::Pass;
            };
            if middle.property.identifier_name() == Some("login") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("user", "login"))
            }
        })
        .rule("final-property", |init, _| {
            let Some((outer, _)) = member2(init) else {
                return Verdict::Pass;
            };
            if outer.property.identifier_name() == Some("password") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("login", "password"))
            }
        })
        .run(init, &mut Bindings::new(), &mut res.messages);
}

pub fn accessing_nested_object_property_3(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "userStreet", None) else {
        return;
    };

    Chain::new()
        .rule("nested-shape", |init: &Expr, _| {
            if member3(init).is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::must_be_a_nested_property(
                    "object.object.object.property",
                ))
            }
        })
        .rule("dot-notation", |init, _| {
            let Some((outer, middle, inner)) = member3(init) else {
                return Verdict::Pass;
            };
            if outer.computed || middle.computed || inner.computed {
                Verdict::Fail(responses::use_dot_notation(true))
            } else {
                Verdict::Pass
            }
        })
        .rule("root-name", |init, _| {
            let Some((_, _, inner)) = member3(init) else {
                return Verdict::Pass;
            };
            if inner.object.identifier_name() == Some("user") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::first_object_name("user"))
            }
        })
        .rule("first-property", |init, _| {
            let Some((_, _, inner)) = member3(init) else {
                return Verdict::Pass;
            };
            if inner.property.identifier_name() == Some("address") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("user", "address"))
            }
        })
        .rule("second-property", |init, _| {
            let Some((_, middle, _)) = member3(init) else {
                return Verdict::Pass;
            };
            if middle.property.identifier_name() == Some("locality") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("address", "locality"))
            }
        })
        .rule("final-property", |init, _| {
            let Some((outer, _, _)) = member3(init) else {
                return Verdict::Pass;
            };
            if outer.property.identifier_name() == Some("street") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("locality", "street"))
            }
        })
        .run(init, &mut Bindings::new(), &mut res.messages);
}

/// Four-level access chain with a non-access root, where the final property
/// may be written in either notation.
fn member4(init: &Expr) -> Option<(&MemberExpr, &MemberExpr, &MemberExpr, &MemberExpr)> {
    let outer = init.as_member()?;
    let second = outer.object.as_member()?;
    let third = second.object.as_member()?;
    let fourth = third.object.as_member()?;
    fourth.object.identifier_name()?;
    Some((outer, second, third, fourth))
}

pub fn accessing_nested_object_property_4(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "userBuildingName", None) else {
        return;
    };

    Chain::new()
        .rule("nested-shape", |init: &Expr, _| {
            let shaped = member4(init).is_some_and(|(outer, ..)| {
                outer.property.is_literal() || outer.property.identifier_name().is_some()
            });
            if shaped {
                Verdict::Pass
            } else {
                Verdict::Fail(
                    "The variable's value must be a property on a nested object: object.object.object.object[\"property\"]"
                        .into(),
                )
            }
        })
        .rule("string-in-brackets", |init, _| {
            let Some((_, second, third, fourth)) = member4(init) else {
                return Verdict::Pass;
            };
            let identifier_in_brackets = [fourth, third, second]
                .iter()
                .any(|level| level.property.identifier_name().is_some() && level.computed);
            if identifier_in_brackets {
                Verdict::Fail(responses::STRING_INSIDE_SQUARE_BRACKETS.into())
            } else {
                Verdict::Pass
            }
        })
        .rule("root-name", |init, _| {
            let Some((.., fourth)) = member4(init) else {
                return Verdict::Pass;
            };
            if fourth.object.identifier_name() == Some("user") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::first_object_name("user"))
            }
        })
        .rule("first-property", |init, _| {
            let Some((.., fourth)) = member4(init) else {
                return Verdict::Pass;
            };
            if level_mismatch(fourth, "address") {
                Verdict::Fail(responses::property_on_object_must_be("user", "address"))
            } else {
                Verdict::Pass
            }
        })
        .rule("second-property", |init, _| {
            let Some((_, _, third, _)) = member4(init) else {
                return Verdict::Pass;
            };
            if level_mismatch(third, "locality") {
                Verdict::Fail(responses::property_on_object_must_be("address", "locality"))
            } else {
                Verdict::Pass
            }
        })
        .rule("third-property", |init, _| {
            let Some((_, second, _, _)) = member4(init) else {
                return Verdict::Pass;
            };
            if level_mismatch(second, "building") {
                Verdict::Fail(responses::property_on_object_must_be("locality", "building"))
            } else {
                Verdict::Pass
            }
        })
        .rule("final-is-bracketed-string", |init, _| {
            let Some((outer, ..)) = member4(init) else {
                return Verdict::Pass;
            };
            if outer.property.string_value().is_none() {
                Verdict::Fail(
                    "The property on the building object should be a string inside brackets".into(),
                )
            } else {
                Verdict::Pass
            }
        })
        .rule("final-property", |init, _| {
            let Some((outer, ..)) = member4(init) else {
                return Verdict::Pass;
            };
            if outer.property.string_value() == Some("building name") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be(
                    "building",
                    "\"building name\"",
                ))
            }
        })
        .run(init, &mut Bindings::new(), &mut res.messages);
}

pub fn undefined_properties(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "productPrice", Some(A_PROPERTY_OF_AN_OBJECT)) else {
        return;
    };
    let Some(member) = init.as_member() else {
        return;
    };

    Chain::new()
        .rule("string-in-brackets", |m: &MemberExpr, _| {
            if m.property.identifier_name().is_some() && m.computed {
                Verdict::Fail(responses::STRING_INSIDE_SQUARE_BRACKETS.into())
            } else {
                Verdict::Pass
            }
        })
        .rule("object-name", |m, _| {
            if m.object.identifier_name() == Some("product") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::object_name("product"))
            }
        })
        .rule("property-name", |m, _| {
            if level_mismatch(m, "price") {
                Verdict::Fail(responses::property_name("price"))
            } else {
                Verdict::Pass
            }
        })
        .run(member, &mut Bindings::new(), &mut res.messages);
}

pub fn uncaught_reference_error(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "userName", Some(A_PROPERTY_OF_AN_OBJECT)) else {
        return;
    };
    let Some(member) = init.as_member() else {
        return;
    };

    Chain::new()
        .rule("string-in-brackets", |m: &MemberExpr, _| {
            if !m.property.is_literal() && m.computed {
                Verdict::Fail(responses::STRING_INSIDE_SQUARE_BRACKETS.into())
            } else {
                Verdict::Pass
            }
        })
        .rule("object-name", |m, _| {
            if m.object.identifier_name() == Some("user") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::object_name("user"))
            }
        })
        .rule("literal-property-name", |m, _| {
            if m.property.is_literal() && m.property.string_value() != Some("name") {
                Verdict::Fail(responses::property_name("name"))
            } else {
                Verdict::Pass
            }
        })
        .rule("identifier-property-name", |m, _| {
            match m.property.identifier_name() {
                Some(name) if name != "name" => Verdict::Fail(responses::property_name("name")),
                _ => Verdict::Pass,
            }
        })
        .run(member, &mut Bindings::new(), &mut res.messages);
}

pub fn uncaught_type_error(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "username", None) else {
        return;
    };

    Chain::new()
        .rule("nested-shape", |init: &Expr, _| {
            let shaped = member2(init).is_some_and(|(outer, middle)| {
                let middle_named = middle.property.identifier_name().is_some()
                    || middle.property.is_literal();
                let outer_named =
                    outer.property.identifier_name().is_some() || outer.property.is_literal();
                middle_named && outer_named
            });
            if shaped {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::must_be_a_nested_property("object.object.property"))
            }
        })
        .rule("string-in-brackets", |init, _| {
            let Some((outer, middle)) = member2(init) else {
                return Verdict::Pass;
            };
            let identifier_in_brackets = [middle, outer]
                .iter()
                .any(|level| level.property.identifier_name().is_some() && level.computed);
            if identifier_in_brackets {
                Verdict::Fail(responses::STRING_INSIDE_SQUARE_BRACKETS.into())
            } else {
                Verdict::Pass
            }
        })
        .rule("root-name", |init, _| {
            let Some((_, middle)) = member2(init) else {
                return Verdict::Pass;
            };
            if middle.object.identifier_name() == Some("user") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::first_object_name("user"))
            }
        })
        .rule("middle-property", |init, _| {
            let Some((_, middle)) = member2(init) else {
                return Verdict::Pass;
            };
            if level_mismatch(middle, "login") {
                Verdict::Fail(responses::property_on_object_must_be("user", "login"))
            } else {
                Verdict::Pass
            }
        })
        .rule("final-property", |init, _| {
            let Some((outer, _)) = member2(init) else {
                return Verdict::Pass;
            };
            if level_mismatch(outer, "username") {
                Verdict::Fail(responses::property_on_object_must_be("login", "username"))
            } else {
                Verdict::Pass
            }
        })
        .run(init, &mut Bindings::new(), &mut res.messages);
}

pub fn optional_chaining(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "loginUsername", None) else {
        return;
    };

    Chain::new()
        .rule("optional-nested-shape", |init: &Expr, _| {
            if optional_member2(init).is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(
                    "The variable's value must be a property on an optional nested object: object.object?.property"
                        .into(),
                )
            }
        })
        .rule("dot-notation", |init, _| {
            let Some((outer, middle)) = optional_member2(init) else {
                return Verdict::Pass;
            };
            let dotted = middle.property.identifier_name().is_some()
                && !middle.computed
                && outer.property.identifier_name().is_some()
                && !outer.computed;
            if dotted {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::use_dot_notation(true))
            }
        })
        .rule("root-name", |init, _| {
            let Some((_, middle)) = optional_member2(init) else {
                return Verdict::Pass;
            };
            if middle.object.identifier_name() == Some("user") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::first_object_name("user"))
            }
        })
        .rule("root-not-optional", |init, _| {
            let Some((_, middle)) = optional_member2(init) else {
                return Verdict::Pass;
            };
            if middle.optional {
                Verdict::Fail(responses::object_should_not_be_optional("user"))
            } else {
                Verdict::Pass
            }
        })
        .rule("middle-property", |init, _| {
            let Some((_, middle)) = optional_member2(init) else {
                return Verdict::Pass;
            };
            if middle.property.identifier_name() == Some("login") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("user", "login"))
            }
        })
        .rule("final-property", |init, _| {
            let Some((outer, _)) = optional_member2(init) else {
                return Verdict::Pass;
            };
            if outer.property.identifier_name() == Some("username") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("login", "username"))
            }
        })
        .run(init, &mut Bindings::new(), &mut res.messages);
}

pub fn nullish_coalescing_1(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "productPrice", None) else {
        return;
    };

    Chain::new()
        .rule("nullish-operator", |init: &Expr, _| match init {
            Expr::Logical(logical) if logical.operator == "??" => Verdict::Pass,
            _ => Verdict::Fail(responses::USE_NULLISH_COALESCING_OPERATOR.into()),
        })
        .rule("left-is-property-access", |init, _| {
            let Expr::Logical(logical) = init else {
                return Verdict::Pass;
            };
            if logical.left.as_member().is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(
                    "The value on the left side of the ?? operator should be a property of an object"
                        .into(),
                )
            }
        })
        .rule("object-name", |init, _| {
            let Some(left) = logical_left_member(init) else {
                return Verdict::Pass;
            };
            if left.object.identifier_name() == Some("product") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::object_name("product"))
            }
        })
        .rule("dot-notation", |init, _| {
            let Some(left) = logical_left_member(init) else {
                return Verdict::Pass;
            };
            if left.property.identifier_name().is_none() || left.computed {
                Verdict::Fail(responses::use_dot_notation(false))
            } else {
                Verdict::Pass
            }
        })
        .rule("property-name", |init, _| {
            let Some(left) = logical_left_member(init) else {
                return Verdict::Pass;
            };
            if left.property.identifier_name() == Some("price") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_name("price"))
            }
        })
        .rule("fallback-value", |init, _| {
            let Expr::Logical(logical) = init else {
                return Verdict::Pass;
            };
            if logical.right.string_value() == Some("Price unknown") {
                Verdict::Pass
            } else {
                Verdict::Fail(
                    "The value on the right side of the ?? operator should be the string: \"Price unknown\""
                        .into(),
                )
            }
        })
        .run(init, &mut Bindings::new(), &mut res.messages);
}

fn logical_left_member(init: &Expr) -> Option<&MemberExpr> {
    match init {
        Expr::Logical(logical) => logical.left.as_member(),
        _ => None,
    }
}

fn logical_left_optional2(init: &Expr) -> Option<(&MemberExpr, &MemberExpr)> {
    match init {
        Expr::Logical(logical) => optional_member2(&logical.left),
        _ => None,
    }
}

pub fn nullish_coalescing_2(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "propertyCity", None) else {
        return;
    };

    Chain::new()
        .rule("nullish-operator", |init: &Expr, _| match init {
            Expr::Logical(logical) if logical.operator == "??" => Verdict::Pass,
            _ => Verdict::Fail(responses::USE_NULLISH_COALESCING_OPERATOR.into()),
        })
        .rule("left-is-optional-chain", |init, _| {
            if logical_left_optional2(init).is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(
                    "The value on the left of the ?? must be a property on an optional nested object: object.object?.property"
                        .into(),
                )
            }
        })
        .rule("dot-notation", |init, _| {
            let Some((outer, middle)) = logical_left_optional2(init) else {
                return Verdict::Pass;
            };
            let dotted = middle.property.identifier_name().is_some()
                && !middle.computed
                && outer.property.identifier_name().is_some()
                && !outer.computed;
            if dotted {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::use_dot_notation(true))
            }
        })
        .rule("root-name", |init, _| {
            let Some((_, middle)) = logical_left_optional2(init) else {
                return Verdict::Pass;
            };
            if middle.object.identifier_name() == Some("property") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::first_object_name("property"))
            }
        })
        .rule("root-not-optional", |init, _| {
            let Some((_, middle)) = logical_left_optional2(init) else {
                return Verdict::Pass;
            };
            if middle.optional {
                Verdict::Fail(responses::object_should_not_be_optional("property"))
            } else {
                Verdict::Pass
            }
        })
        .rule("middle-property", |init, _| {
            let Some((_, middle)) = logical_left_optional2(init) else {
                return Verdict::Pass;
            };
            if middle.property.identifier_name() == Some("address") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("property", "address"))
            }
        })
        .rule("final-property", |init, _| {
            let Some((outer, _)) = logical_left_optional2(init) else {
                return Verdict::Pass;
            };
            if outer.property.identifier_name() == Some("city") {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::property_on_object_must_be("address", "city"))
            }
        })
        .rule("fallback-value", |init, _| {
            let Expr::Logical(logical) = init else {
                return Verdict::Pass;
            };
            if logical.right.string_value() == Some("Unknown city") {
                Verdict::Pass
            } else {
                Verdict::Fail(
                    "The value on the right side of the ?? operator should be the string: \"Unknown city\""
                        .into(),
                )
            }
        })
        .run(init, &mut Bindings::new(), &mut res.messages);
}

/// The destructuring exercises have no required element kind; instead a
/// statement that is not even a declaration is "incomplete".
fn destructuring_target<'p>(
    program: &'p Program,
    res: &mut ValidationResult,
) -> Option<&'p Declarator> {
    let declarator = program
        .body
        .first()
        .and_then(Stmt::as_var_decl)
        .and_then(VarDecl::first_declarator);
    if declarator.is_none() {
        res.clear_missing();
        res.error(responses::INCOMPLETE_CODE);
    }
    declarator
}

fn flat_destructuring(
    program: &Program,
    res: &mut ValidationResult,
    source: &'static str,
    key: &'static str,
    required_alias: Option<&'static str>,
) {
    let Some(declarator) = destructuring_target(program, res) else {
        return;
    };

    let chain = Chain::new()
        .rule("object-pattern", |d: &Declarator, _| {
            if d.id.as_object().is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::USE_OBJECT_DESTRUCTURING.into())
            }
        })
        .rule("source-object", move |d, _| {
            match d.init.as_ref().and_then(|init| init.identifier_name()) {
                Some(name) if name == source => Verdict::Pass,
                _ => Verdict::Fail(responses::right_side_value_must_be(
                    "the object called",
                    source,
                )),
            }
        })
        .rule("some-properties", |d, _| {
            if pattern_len(d) == 0 {
                Verdict::Fail(responses::NO_PROPERTIES_DESTRUCTURED.into())
            } else {
                Verdict::Pass
            }
        })
        .rule("only-one-property", move |d, _| {
            if pattern_len(d) > 1 {
                Verdict::Fail(responses::destructure_only_this_property(key))
            } else {
                Verdict::Pass
            }
        })
        .rule("property-key", move |d, _| match first_prop(d) {
            Some(prop) if prop.key != key => {
                Verdict::Fail(responses::the_property_to_retrieve_is_called(key))
            }
            _ => Verdict::Pass,
        });

    let chain = match required_alias {
        None => chain
            .rule("redundant-longhand", move |d, _| {
                let Some(prop) = first_prop(d) else {
                    return Verdict::Pass;
                };
                if !prop.shorthand && prop.value.identifier_name() == Some(prop.key.as_str()) {
                    Verdict::Fail(responses::property_shorthand_warning(key))
                } else {
                    Verdict::Pass
                }
            })
            .rule("no-alias", move |d, _| {
                let Some(prop) = first_prop(d) else {
                    return Verdict::Pass;
                };
                if !prop.shorthand && prop.value.identifier_name() != Some(prop.key.as_str()) {
                    let alias = prop.value.identifier_name().unwrap_or("undefined");
                    Verdict::Fail(responses::unrequired_alias(key, alias))
                } else {
                    Verdict::Pass
                }
            }),
        Some(alias) => chain
            .rule("uses-alias", move |d, _| match first_prop(d) {
                Some(prop) if prop.shorthand => {
                    Verdict::Fail(responses::use_aliasing(key, alias))
                }
                _ => Verdict::Pass,
            })
            .rule("alias-name", move |d, _| {
                let Some(prop) = first_prop(d) else {
                    return Verdict::Pass;
                };
                if prop.value.identifier_name() == Some(alias) {
                    Verdict::Pass
                } else {
                    Verdict::Fail(responses::incorrect_alias(key, alias))
                }
            }),
    };

    chain.run(declarator, &mut Bindings::new(), &mut res.messages);
}

fn inner_pattern(declarator: &Declarator) -> Option<&crate::ast::ObjectPat> {
    first_prop(declarator)?.value.as_pattern()?.as_object()
}

fn nested_destructuring(
    program: &Program,
    res: &mut ValidationResult,
    source: &'static str,
    outer_key: &'static str,
    inner_key: &'static str,
    required_alias: Option<&'static str>,
) {
    let Some(declarator) = destructuring_target(program, res) else {
        return;
    };

    let chain = Chain::new()
        .rule("object-pattern", |d: &Declarator, _| {
            if d.id.as_object().is_some() {
                Verdict::Pass
            } else {
                Verdict::Fail(responses::USE_OBJECT_DESTRUCTURING.into())
            }
        })
        .rule("source-object", move |d, _| {
            match d.init.as_ref().and_then(|init| init.identifier_name()) {
                Some(name) if name == source => Verdict::Pass,
                _ => Verdict::Fail(responses::right_side_value_must_be(
                    "the object called",
                    source,
                )),
            }
        })
        .rule("some-properties", |d, _| {
            if pattern_len(d) == 0 {
                Verdict::Fail(responses::NO_PROPERTIES_DESTRUCTURED.into())
            } else {
                Verdict::Pass
            }
        })
        .rule("nested-pattern", move |d, _| {
            let nested = first_prop(d).is_some_and(|prop| {
                !prop.shorthand
                    && prop
                        .value
                        .as_pattern()
                        .and_then(Pat::as_object)
                        .is_some_and(|inner| !inner.properties.is_empty())
            });
            if nested {
                Verdict::Pass
            } else {
                Verdict::Fail(format!(
                    "The {inner_key} property should be retrieved from the {outer_key} object: {{ {outer_key}: {{ {inner_key} }} }}"
                ))
            }
        })
        .rule("outer-key", move |d, _| match first_prop(d) {
            Some(prop) if prop.key != outer_key => {
                Verdict::Fail(format!("The first object should be called {outer_key}"))
            }
            _ => Verdict::Pass,
        })
        .rule("only-one-property", move |d, _| {
            let inner_len = inner_pattern(d).map(|o| o.properties.len()).unwrap_or(0);
            if pattern_len(d) > 1 || inner_len > 1 {
                Verdict::Fail(format!(
                    "Only the {inner_key} property should be retrieved from the {outer_key} object"
                ))
            } else {
                Verdict::Pass
            }
        })
        .rule("inner-key", move |d, _| {
            let inner = inner_pattern(d).and_then(|o| o.properties.first());
            match inner {
                Some(prop) if prop.key != inner_key => {
                    Verdict::Fail(format!("The destructured property should be: {inner_key}"))
                }
                _ => Verdict::Pass,
            }
        });

    let chain = match required_alias {
        None => chain.rule("no-alias", move |d, _| {
            let inner = inner_pattern(d).and_then(|o| o.properties.first());
            match inner {
                Some(prop) if !prop.shorthand => {
                    Verdict::Fail(format!("Don't alias the {inner_key} property"))
                }
                _ => Verdict::Pass,
            }
        }),
        Some(alias) => chain
            .rule("uses-alias", move |d, _| {
                let inner = inner_pattern(d).and_then(|o| o.properties.first());
                match inner {
                    Some(prop) if prop.shorthand => Verdict::Fail(format!(
                        "Alias the {inner_key} property as {alias}: {{ {inner_key}: {alias} }}"
                    )),
                    _ => Verdict::Pass,
                }
            })
            .rule("alias-name", move |d, _| {
                let inner = inner_pattern(d).and_then(|o| o.properties.first());
                let Some(prop) = inner else {
                    return Verdict::Pass;
                };
                if prop.value.identifier_name() == Some(alias) {
                    Verdict::Pass
                } else {
                    Verdict::Fail(format!("The alias is incorrect. It should be: {alias}"))
                }
            }),
    };

    chain.run(declarator, &mut Bindings::new(), &mut res.messages);
}

pub fn object_destructuring(program: &Program, res: &mut ValidationResult) {
    flat_destructuring(program, res, "blog", "summary", None);
}

pub fn object_destructuring_aliasing(program: &Program, res: &mut ValidationResult) {
    flat_destructuring(program, res, "blog", "summary", Some("synopsis"));
}

pub fn nested_object_destructuring_1(program: &Program, res: &mut ValidationResult) {
    nested_destructuring(program, res, "blog", "publishing", "startDate", None);
}

pub fn nested_object_destructuring_2(program: &Program, res: &mut ValidationResult) {
    nested_destructuring(program, res, "product", "price", "full", Some("fullPrice"));
}

pub fn object_with_various_types(program: &Program, res: &mut ValidationResult) {
    let Some(init) = base(program, res, "myObject", Some(AN_OBJECT)) else {
        return;
    };
    let Some(object) = init.as_object() else {
        return;
    };

    Chain::new()
        .rule("covers-all-value-types", |o: &ObjectLit, _| {
            const REQUIRED: [&str; 7] = [
                "string", "number", "boolean", "array", "object", "function", "null",
            ];
            let mut seen = Vec::new();
            for prop in &o.properties {
                match &prop.value {
                    Expr::String(_) => seen.push("string"),
                    Expr::Number(_) => seen.push("number"),
                    Expr::Bool(_) => seen.push("boolean"),
                    Expr::Null => seen.push("null"),
                    Expr::Array(_) => seen.push("array"),
                    Expr::Object(_) => seen.push("object"),
                    Expr::Function(_) => seen.push("function"),
                    _ => {}
                }
            }
            let missing: Vec<&str> = REQUIRED
                .iter()
                .copied()
                .filter(|required| !seen.contains(required))
                .collect();
            match missing.len() {
                0 => Verdict::Pass,
                1 => Verdict::Fail(format!(
                    "The object is missing a property with the type: {}",
                    missing[0]
                )),
                _ => Verdict::Fail(format!(
                    "The object is missing properties with the following types: {}",
                    missing.join(", ")
                )),
            }
        })
        .run(object, &mut Bindings::new(), &mut res.messages);
}

#[cfg(test)]
mod tests {
    use crate::diagnostic::{ElementKind, Severity};
    use crate::engine::check;
    use crate::exercise::Exercise;
    use crate::responses;
    use pretty_assertions::assert_eq;

    fn messages(code: &str, exercise: Exercise) -> Vec<String> {
        check(code, exercise)
            .messages
            .into_iter()
            .map(|m| m.message)
            .collect()
    }

    #[test]
    fn empty_object_passes() {
        let res = check("const emptyObject = {}", Exercise::EmptyObject);
        assert!(res.missing_elements.is_empty());
        assert!(res.messages.is_empty());
    }

    #[test]
    fn empty_object_wrong_name() {
        let res = check("const x = {}", Exercise::EmptyObject);
        assert!(res.missing_elements.is_empty());
        assert_eq!(
            res.messages[0].message,
            "The variable's name is incorrect. It should be: emptyObject"
        );
        assert_eq!(res.messages[0].severity, Severity::Error);
    }

    #[test]
    fn empty_object_must_be_empty() {
        assert_eq!(
            messages("const emptyObject = { a: 1 }", Exercise::EmptyObject),
            vec!["The object should be empty"]
        );
    }

    #[test]
    fn empty_object_wrong_value_kind() {
        assert_eq!(
            messages("const emptyObject = []", Exercise::EmptyObject),
            vec!["The variable's value must be an object."]
        );
    }

    #[test]
    fn variable_without_value() {
        assert_eq!(
            messages("let emptyObject;", Exercise::EmptyObject),
            vec!["The variable has no value"]
        );
    }

    #[test]
    fn missing_construct_leaves_element_missing() {
        let res = check("nonsense", Exercise::EmptyObject);
        assert_eq!(res.missing_elements, vec![ElementKind::Variable]);
        assert!(res.messages.is_empty());
    }

    #[test]
    fn two_string_properties_passes() {
        let res = check(
            r#"const movie = { title: "T", description: "D" }"#,
            Exercise::ObjectWithTwoStringProperties,
        );
        assert!(res.is_success());
        assert!(res.messages.is_empty());
    }

    #[test]
    fn two_string_properties_wrong_count() {
        assert_eq!(
            messages(
                r#"const movie = { title: "T" }"#,
                Exercise::ObjectWithTwoStringProperties
            ),
            vec![responses::property_count(2, 1)]
        );
    }

    #[test]
    fn two_string_properties_missing_names() {
        assert_eq!(
            messages(
                r#"const movie = { title: "T", rating: "PG" }"#,
                Exercise::ObjectWithTwoStringProperties
            ),
            vec![responses::missing_properties(&["description"])]
        );
    }

    #[test]
    fn two_string_properties_non_string_values() {
        assert_eq!(
            messages(
                r#"const movie = { title: 5, description: true }"#,
                Exercise::ObjectWithTwoStringProperties
            ),
            vec![
                "The property values must all be strings. These properties don't have a string value: title,description"
            ]
        );
    }

    #[test]
    fn three_properties_reports_every_bad_value() {
        let res = check(
            r#"const user = { id: "1", name: "N", isActive: "yes" }"#,
            Exercise::ObjectWithThreeProperties,
        );
        assert_eq!(
            res.messages.iter().map(|m| m.message.as_str()).collect::<Vec<_>>(),
            vec![
                "id should have a number value",
                "isActive should have a boolean value",
            ]
        );
        assert!(res.messages.iter().all(|m| m.is_error()));
    }

    #[test]
    fn three_properties_passes() {
        let res = check(
            r#"const user = { id: 1234, name: "Mrs Blobby", isActive: true }"#,
            Exercise::ObjectWithThreeProperties,
        );
        assert!(res.is_success());
    }

    #[test]
    fn dot_notation_rejects_brackets() {
        assert_eq!(
            messages(r#"const productName = product["name"];"#, Exercise::UsingDotNotation),
            vec![responses::use_dot_notation(false)]
        );
    }

    #[test]
    fn dot_notation_wrong_object() {
        assert_eq!(
            messages("const productName = item.name;", Exercise::UsingDotNotation),
            vec![responses::object_name("product")]
        );
    }

    #[test]
    fn bracket_notation_rejects_dot_access() {
        assert_eq!(
            messages(
                "const productDescription = product.description;",
                Exercise::UsingBracketNotation
            ),
            vec![responses::use_bracket_notation(false)]
        );
    }

    #[test]
    fn bracket_notation_rejects_identifier_in_brackets() {
        assert_eq!(
            messages(
                "const productDescription = product[description];",
                Exercise::UsingBracketNotation
            ),
            vec![responses::STRING_INSIDE_SQUARE_BRACKETS]
        );
    }

    #[test]
    fn bracket_notation_wrong_key() {
        assert_eq!(
            messages(
                r#"const productDescription = product["description"];"#,
                Exercise::UsingBracketNotation
            ),
            vec![responses::property_name("\"product description\"")]
        );
    }

    #[test]
    fn nested_property_1_depth_must_be_two() {
        assert_eq!(
            messages(
                "const userFirstName = user.profile.name.firstName;",
                Exercise::AccessingNestedObjectProperty1
            ),
            vec![responses::must_be_a_nested_property("object.object.property")]
        );
        assert_eq!(
            messages(
                "const userFirstName = user.firstName;",
                Exercise::AccessingNestedObjectProperty1
            ),
            vec![responses::must_be_a_nested_property("object.object.property")]
        );
    }

    #[test]
    fn nested_property_2_wrong_middle_property() {
        assert_eq!(
            messages(
                "const userPassword = user.account.password;",
                Exercise::AccessingNestedObjectProperty2
            ),
            vec![responses::property_on_object_must_be("user", "login")]
        );
    }

    #[test]
    fn nested_property_3_requires_dot_notation() {
        assert_eq!(
            messages(
                r#"const userStreet = user.address["locality"].street;"#,
                Exercise::AccessingNestedObjectProperty3
            ),
            vec![responses::use_dot_notation(true)]
        );
    }

    #[test]
    fn nested_property_4_identifier_in_brackets() {
        assert_eq!(
            messages(
                r#"const userBuildingName = user[address]["locality"]["building"]["building name"];"#,
                Exercise::AccessingNestedObjectProperty4
            ),
            vec![responses::STRING_INSIDE_SQUARE_BRACKETS]
        );
    }

    #[test]
    fn nested_property_4_final_must_be_bracketed_string() {
        assert_eq!(
            messages(
                "const userBuildingName = user.address.locality.building.name;",
                Exercise::AccessingNestedObjectProperty4
            ),
            vec!["The property on the building object should be a string inside brackets"]
        );
    }

    #[test]
    fn undefined_properties_accepts_both_notations() {
        assert!(check("const productPrice = product.price;", Exercise::UndefinedProperties)
            .is_success());
        assert!(check(
            r#"const productPrice = product["price"];"#,
            Exercise::UndefinedProperties
        )
        .is_success());
    }

    #[test]
    fn uncaught_type_error_wrong_middle() {
        assert_eq!(
            messages(
                "const username = user.account.username;",
                Exercise::UncaughtTypeError
            ),
            vec![responses::property_on_object_must_be("user", "login")]
        );
    }

    #[test]
    fn optional_chaining_requires_the_wrapper() {
        assert_eq!(
            messages(
                "const loginUsername = user.login.username;",
                Exercise::OptionalChaining
            ),
            vec![
                "The variable's value must be a property on an optional nested object: object.object?.property"
            ]
        );
    }

    #[test]
    fn optional_chaining_root_must_not_be_optional() {
        assert_eq!(
            messages(
                "const loginUsername = user?.login?.username;",
                Exercise::OptionalChaining
            ),
            vec![responses::object_should_not_be_optional("user")]
        );
    }

    #[test]
    fn nullish_coalescing_requires_the_operator() {
        assert_eq!(
            messages(
                r#"const productPrice = product.price || "Price unknown";"#,
                Exercise::NullishCoalescing1
            ),
            vec![responses::USE_NULLISH_COALESCING_OPERATOR]
        );
    }

    #[test]
    fn nullish_coalescing_checks_the_fallback_literal() {
        assert_eq!(
            messages(
                r#"const productPrice = product.price ?? "unknown";"#,
                Exercise::NullishCoalescing1
            ),
            vec![
                "The value on the right side of the ?? operator should be the string: \"Price unknown\""
            ]
        );
    }

    #[test]
    fn nullish_coalescing_2_left_must_be_optional_chain() {
        assert_eq!(
            messages(
                r#"const propertyCity = property.address.city ?? "Unknown city";"#,
                Exercise::NullishCoalescing2
            ),
            vec![
                "The value on the left of the ?? must be a property on an optional nested object: object.object?.property"
            ]
        );
    }

    #[test]
    fn destructuring_passes() {
        assert!(check("const { summary } = blog;", Exercise::ObjectDestructuring).is_success());
    }

    #[test]
    fn destructuring_requires_a_pattern() {
        assert_eq!(
            messages("const summary = blog;", Exercise::ObjectDestructuring),
            vec![responses::USE_OBJECT_DESTRUCTURING]
        );
    }

    #[test]
    fn destructuring_redundant_longhand() {
        assert_eq!(
            messages(
                "const { summary: summary } = blog;",
                Exercise::ObjectDestructuring
            ),
            vec![responses::property_shorthand_warning("summary")]
        );
    }

    #[test]
    fn destructuring_unrequired_alias() {
        assert_eq!(
            messages(
                "const { summary: synopsis } = blog;",
                Exercise::ObjectDestructuring
            ),
            vec![responses::unrequired_alias("summary", "synopsis")]
        );
    }

    #[test]
    fn destructuring_wrong_source_object() {
        assert_eq!(
            messages("const { summary } = post;", Exercise::ObjectDestructuring),
            vec![responses::right_side_value_must_be("the object called", "blog")]
        );
    }

    #[test]
    fn destructuring_non_declaration_is_incomplete() {
        let res = check("blog.summary;", Exercise::ObjectDestructuring);
        assert!(res.missing_elements.is_empty());
        assert_eq!(res.messages[0].message, responses::INCOMPLETE_CODE);
    }

    #[test]
    fn aliasing_requires_the_alias() {
        assert_eq!(
            messages(
                "const { summary } = blog;",
                Exercise::ObjectDestructuringAliasing
            ),
            vec![responses::use_aliasing("summary", "synopsis")]
        );
        assert!(check(
            "const { summary: synopsis } = blog;",
            Exercise::ObjectDestructuringAliasing
        )
        .is_success());
    }

    #[test]
    fn aliasing_wrong_alias_name() {
        assert_eq!(
            messages(
                "const { summary: abstract } = blog;",
                Exercise::ObjectDestructuringAliasing
            ),
            vec![responses::incorrect_alias("summary", "synopsis")]
        );
    }

    #[test]
    fn nested_destructuring_1_rejects_alias() {
        assert_eq!(
            messages(
                "const { publishing: { startDate: begin } } = blog;",
                Exercise::NestedObjectDestructuring1
            ),
            vec!["Don't alias the startDate property"]
        );
        assert!(check(
            "const { publishing: { startDate } } = blog;",
            Exercise::NestedObjectDestructuring1
        )
        .is_success());
    }

    #[test]
    fn nested_destructuring_1_requires_the_nested_pattern() {
        assert_eq!(
            messages(
                "const { startDate } = blog;",
                Exercise::NestedObjectDestructuring1
            ),
            vec![
                "The startDate property should be retrieved from the publishing object: { publishing: { startDate } }"
            ]
        );
    }

    #[test]
    fn nested_destructuring_2_requires_the_alias() {
        assert_eq!(
            messages(
                "const { price: { full } } = product;",
                Exercise::NestedObjectDestructuring2
            ),
            vec!["Alias the full property as fullPrice: { full: fullPrice }"]
        );
    }

    #[test]
    fn nested_destructuring_2_wrong_alias() {
        assert_eq!(
            messages(
                "const { price: { full: total } } = product;",
                Exercise::NestedObjectDestructuring2
            ),
            vec!["The alias is incorrect. It should be: fullPrice"]
        );
    }

    #[test]
    fn nested_destructuring_limits_the_property_sets() {
        assert_eq!(
            messages(
                "const { price: { full, discounted } } = product;",
                Exercise::NestedObjectDestructuring2
            ),
            vec!["Only the full property should be retrieved from the price object"]
        );
    }

    #[test]
    fn various_types_reports_missing_types() {
        assert_eq!(
            messages(
                r#"const myObject = { a: "s", b: 1, c: true }"#,
                Exercise::ObjectWithVariousTypes
            ),
            vec![
                "The object is missing properties with the following types: array, object, function, null"
            ]
        );
    }

    #[test]
    fn various_types_singular_message() {
        assert_eq!(
            messages(
                r#"const myObject = { a: "s", b: 1, c: true, d: [], e: {}, f: () => {} }"#,
                Exercise::ObjectWithVariousTypes
            ),
            vec!["The object is missing a property with the type: null"]
        );
    }
}
