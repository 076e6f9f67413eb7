//! End-to-end tests over the public API.

use jsdrill::{check, example_answer, ElementKind, Exercise, Severity};

#[test]
fn multi_statement_snippets_fail_uniformly() {
    let multi = "const a = 1;\nconst b = 2;";
    for exercise in Exercise::ALL {
        let result = check(multi, exercise);
        assert!(
            result.missing_elements.is_empty(),
            "{exercise:?} should clear missing elements"
        );
        assert_eq!(result.messages.len(), 1, "{exercise:?}");
        assert_eq!(result.messages[0].severity, Severity::Error);
        assert_eq!(
            result.messages[0].message,
            "There should only be one statement in your code. Do you have an extra semi-colon?"
        );
    }
}

#[test]
fn invalid_snippets_fail_uniformly() {
    for snippet in ["const = {", "for (let i = 0; i <", "const { = blog;"] {
        for exercise in Exercise::ALL {
            let result = check(snippet, exercise);
            assert!(result.missing_elements.is_empty(), "{exercise:?}: {snippet}");
            assert_eq!(result.messages.len(), 1, "{exercise:?}: {snippet}");
            assert_eq!(result.messages[0].severity, Severity::Error);
            assert!(
                result.messages[0].message.starts_with("Invalid code: "),
                "{exercise:?}: got {}",
                result.messages[0].message
            );
        }
    }
}

#[test]
fn checks_are_idempotent() {
    let cases = [
        ("const x = {}", Exercise::EmptyObject),
        ("nonsense", Exercise::EmptyObject),
        ("const = {", Exercise::ObjectDestructuring),
        (
            "for (let i = 1; i < books.length; i++) {}",
            Exercise::DotNotation1,
        ),
    ];
    for (snippet, exercise) in cases {
        assert_eq!(check(snippet, exercise), check(snippet, exercise));
    }
}

#[test]
fn missing_construct_invariant() {
    // A valid identifier statement contains none of the required constructs.
    let result = check("nonsense", Exercise::EmptyObject);
    assert_eq!(result.missing_elements, vec![ElementKind::Variable]);
    assert!(result.messages.is_empty());

    let result = check("nonsense", Exercise::DotNotation1);
    assert_eq!(result.missing_elements, vec![ElementKind::ForLoop]);
    assert!(result.messages.is_empty());

    let result = check("nonsense", Exercise::ForEach1);
    assert_eq!(result.missing_elements, vec![ElementKind::ForEachLoop]);
    assert!(result.messages.is_empty());
}

#[test]
fn wrong_variable_name_is_the_only_feedback() {
    let result = check("const x = {}", Exercise::EmptyObject);
    assert!(result.missing_elements.is_empty());
    assert_eq!(result.messages.len(), 1);
    assert_eq!(
        result.messages[0].message,
        "The variable's name is incorrect. It should be: emptyObject"
    );
}

#[test]
fn correct_answer_is_clean() {
    let result = check("const emptyObject = {}", Exercise::EmptyObject);
    assert!(result.missing_elements.is_empty());
    assert!(result.messages.is_empty());
    assert!(result.is_success());
}

#[test]
fn for_loop_must_start_at_zero() {
    let result = check(
        "for(let i = 1; i < books.length; i++) {}",
        Exercise::DotNotation1,
    );
    assert!(result.missing_elements.is_empty());
    assert_eq!(
        result.messages[0].message,
        "The variable in the initial expression must be initialised with 0: let i = 0;"
    );
}

#[test]
fn for_each_alias_is_rejected() {
    let result = check(
        "articles.forEach((article) => { const { headline: title } = article; });",
        Exercise::ForEach1,
    );
    assert_eq!(
        result.messages[0].message,
        "None of the properties should have aliases"
    );
}

#[test]
fn nested_destructuring_requires_the_alias() {
    let result = check(
        "const { price: { full } } = product;",
        Exercise::NestedObjectDestructuring2,
    );
    assert_eq!(
        result.messages[0].message,
        "Alias the full property as fullPrice: { full: fullPrice }"
    );
}

#[test]
fn results_serialize_with_the_wire_shape() {
    let result = check("const x = {}", Exercise::EmptyObject);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "missingElements": [],
            "messages": [{
                "type": "Error",
                "message": "The variable's name is incorrect. It should be: emptyObject",
            }],
        })
    );

    let result = check("nonsense", Exercise::ForEach1);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "missingElements": ["forEach loop"],
            "messages": [],
        })
    );
}

#[test]
fn every_exercise_resolves_through_the_registry() {
    for exercise in Exercise::ALL {
        let found = Exercise::find(exercise.section().as_str(), exercise.question());
        assert_eq!(found, Some(exercise));
    }
}

#[test]
fn every_example_answer_passes_its_own_exercise() {
    for exercise in Exercise::ALL {
        for variant in example_answer(exercise).split("// or") {
            let variant = variant.trim();
            let result = check(variant, exercise);
            assert!(
                result.is_success(),
                "{}/{} example rejected: {variant}\n{result:?}",
                exercise.section().as_str(),
                exercise.question()
            );
        }
    }
}

#[test]
fn warnings_do_not_block_success() {
    let result = check(
        "for (let idx = 0; idx < books.length; idx++) { const bookTitle = books[idx].title; }",
        Exercise::DotNotation1,
    );
    assert!(result.is_success());
    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.messages[0].severity, Severity::Warning);
}
