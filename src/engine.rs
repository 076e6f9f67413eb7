//! Check entry point.
//!
//! `check` is a pure function of (snippet, exercise): parse, run the
//! uniform pre-checks, then hand the program to the exercise's rule set.
//! Every path returns a well-formed result; nothing here panics on learner
//! input.

use log::debug;

use crate::checks::{for_each_loops, for_loops, objects};
use crate::diagnostic::ValidationResult;
use crate::exercise::Exercise;
use crate::parser;
use crate::responses;

/// Check a snippet against an exercise and return the structured feedback.
pub fn check(code: &str, exercise: Exercise) -> ValidationResult {
    debug!(
        "checking snippet against {}/{}",
        exercise.section().as_str(),
        exercise.question()
    );

    let mut res = ValidationResult::new(exercise.required_elements());

    // Parse failure means shape cannot be determined at all: report invalid
    // code, not a missing construct.
    let program = match parser::parse(code) {
        Ok(program) => program,
        Err(error) => {
            res.clear_missing();
            res.error(format!("{}: {error}", responses::INVALID_CODE));
            return res;
        }
    };

    // Exercises are single-statement by design; anything else makes shape
    // location ambiguous.
    match program.body.len() {
        0 => {
            res.clear_missing();
            res.error(responses::INCOMPLETE_CODE);
            return res;
        }
        1 => {}
        _ => {
            res.clear_missing();
            res.error(responses::ONLY_ONE_STATEMENT);
            return res;
        }
    }

    match exercise {
        Exercise::EmptyObject => objects::empty_object(&program, &mut res),
        Exercise::ObjectWithTwoStringProperties => {
            objects::object_with_two_string_properties(&program, &mut res)
        }
        Exercise::ObjectWithThreeProperties => {
            objects::object_with_three_properties(&program, &mut res)
        }
        Exercise::UsingDotNotation => objects::using_dot_notation(&program, &mut res),
        Exercise::UsingBracketNotation => objects::using_bracket_notation(&program, &mut res),
        Exercise::AccessingNestedObjectProperty1 => {
            objects::accessing_nested_object_property_1(&program, &mut res)
        }
        Exercise::AccessingNestedObjectProperty2 => {
            objects::accessing_nested_object_property_2(&program, &mut res)
        }
        Exercise::AccessingNestedObjectProperty3 => {
            objects::accessing_nested_object_property_3(&program, &mut res)
        }
        Exercise::AccessingNestedObjectProperty4 => {
            objects::accessing_nested_object_property_4(&program, &mut res)
        }
        Exercise::UndefinedProperties => objects::undefined_properties(&program, &mut res),
        Exercise::UncaughtReferenceError => objects::uncaught_reference_error(&program, &mut res),
        Exercise::UncaughtTypeError => objects::uncaught_type_error(&program, &mut res),
        Exercise::OptionalChaining => objects::optional_chaining(&program, &mut res),
        Exercise::NullishCoalescing1 => objects::nullish_coalescing_1(&program, &mut res),
        Exercise::NullishCoalescing2 => objects::nullish_coalescing_2(&program, &mut res),
        Exercise::ObjectDestructuring => objects::object_destructuring(&program, &mut res),
        Exercise::ObjectDestructuringAliasing => {
            objects::object_destructuring_aliasing(&program, &mut res)
        }
        Exercise::NestedObjectDestructuring1 => {
            objects::nested_object_destructuring_1(&program, &mut res)
        }
        Exercise::NestedObjectDestructuring2 => {
            objects::nested_object_destructuring_2(&program, &mut res)
        }
        Exercise::ObjectWithVariousTypes => objects::object_with_various_types(&program, &mut res),
        Exercise::DotNotation1 => for_loops::dot_notation_1(&program, &mut res),
        Exercise::Continue1 => for_loops::continue_1(&program, &mut res),
        Exercise::Break1 => for_loops::break_1(&program, &mut res),
        Exercise::ForEach1 => for_each_loops::for_each_1(&program, &mut res),
        Exercise::ForEach2 => for_each_loops::for_each_2(&program, &mut res),
    }

    debug!(
        "missing: {}, messages: {}",
        res.missing_elements.len(),
        res.messages.len()
    );
    res
}
