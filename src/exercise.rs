//! The fixed catalog of supported exercises.
//!
//! Each exercise is one question a learner can be asked; its parameters
//! (names, property sets, limits) live with its rule set in the `checks`
//! modules. The registry maps the external `(section, question)` pair to an
//! exercise — unknown pairs are the dispatcher's problem, not the checker's.

use crate::diagnostic::ElementKind;

/// Question group, matching the external section identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Objects,
    ForLoops,
    ForEachLoops,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Objects => "objects",
            Section::ForLoops => "forLoops",
            Section::ForEachLoops => "forEachLoops",
        }
    }
}

/// One supported exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    // objects
    EmptyObject,
    ObjectWithTwoStringProperties,
    ObjectWithThreeProperties,
    UsingDotNotation,
    UsingBracketNotation,
    AccessingNestedObjectProperty1,
    AccessingNestedObjectProperty2,
    AccessingNestedObjectProperty3,
    AccessingNestedObjectProperty4,
    UndefinedProperties,
    UncaughtReferenceError,
    UncaughtTypeError,
    OptionalChaining,
    NullishCoalescing1,
    NullishCoalescing2,
    ObjectDestructuring,
    ObjectDestructuringAliasing,
    NestedObjectDestructuring1,
    NestedObjectDestructuring2,
    ObjectWithVariousTypes,
    // forLoops
    DotNotation1,
    Continue1,
    Break1,
    // forEachLoops
    ForEach1,
    ForEach2,
}

impl Exercise {
    pub const ALL: [Exercise; 25] = [
        Exercise::EmptyObject,
        Exercise::ObjectWithTwoStringProperties,
        Exercise::ObjectWithThreeProperties,
        Exercise::UsingDotNotation,
        Exercise::UsingBracketNotation,
        Exercise::AccessingNestedObjectProperty1,
        Exercise::AccessingNestedObjectProperty2,
        Exercise::AccessingNestedObjectProperty3,
        Exercise::AccessingNestedObjectProperty4,
        Exercise::UndefinedProperties,
        Exercise::UncaughtReferenceError,
        Exercise::UncaughtTypeError,
        Exercise::OptionalChaining,
        Exercise::NullishCoalescing1,
        Exercise::NullishCoalescing2,
        Exercise::ObjectDestructuring,
        Exercise::ObjectDestructuringAliasing,
        Exercise::NestedObjectDestructuring1,
        Exercise::NestedObjectDestructuring2,
        Exercise::ObjectWithVariousTypes,
        Exercise::DotNotation1,
        Exercise::Continue1,
        Exercise::Break1,
        Exercise::ForEach1,
        Exercise::ForEach2,
    ];

    pub fn section(&self) -> Section {
        match self {
            Exercise::DotNotation1 | Exercise::Continue1 | Exercise::Break1 => Section::ForLoops,
            Exercise::ForEach1 | Exercise::ForEach2 => Section::ForEachLoops,
            _ => Section::Objects,
        }
    }

    /// External question identifier within the section.
    pub fn question(&self) -> &'static str {
        match self {
            Exercise::EmptyObject => "emptyObject",
            Exercise::ObjectWithTwoStringProperties => "objectWithTwoStringProperties",
            Exercise::ObjectWithThreeProperties => "objectWithThreeProperties",
            Exercise::UsingDotNotation => "usingDotNotation",
            Exercise::UsingBracketNotation => "usingBracketNotation",
            Exercise::AccessingNestedObjectProperty1 => "accessingNestedObjectProperty1",
            Exercise::AccessingNestedObjectProperty2 => "accessingNestedObjectProperty2",
            Exercise::AccessingNestedObjectProperty3 => "accessingNestedObjectProperty3",
            Exercise::AccessingNestedObjectProperty4 => "accessingNestedObjectProperty4",
            Exercise::UndefinedProperties => "undefinedProperties",
            Exercise::UncaughtReferenceError => "uncaughtReferenceError",
            Exercise::UncaughtTypeError => "uncaughtTypeError",
            Exercise::OptionalChaining => "optionalChaining",
            Exercise::NullishCoalescing1 => "nullishCoalescing1",
            Exercise::NullishCoalescing2 => "nullishCoalescing2",
            Exercise::ObjectDestructuring => "objectDestructuring",
            Exercise::ObjectDestructuringAliasing => "objectDestructuringAliasing",
            Exercise::NestedObjectDestructuring1 => "nestedObjectDestructuring1",
            Exercise::NestedObjectDestructuring2 => "nestedObjectDestructuring2",
            Exercise::ObjectWithVariousTypes => "objectWithVariousTypes",
            Exercise::DotNotation1 => "dotNotation1",
            Exercise::Continue1 => "continue1",
            Exercise::Break1 => "break1",
            Exercise::ForEach1 => "forEach1",
            Exercise::ForEach2 => "forEach2",
        }
    }

    /// Element kinds the exercise requires; the result starts with these
    /// marked missing. Destructuring exercises require none — their shape
    /// errors speak for themselves.
    pub fn required_elements(&self) -> &'static [ElementKind] {
        match self.section() {
            Section::ForLoops => &[ElementKind::ForLoop],
            Section::ForEachLoops => &[ElementKind::ForEachLoop],
            Section::Objects => match self {
                Exercise::ObjectDestructuring
                | Exercise::ObjectDestructuringAliasing
                | Exercise::NestedObjectDestructuring1
                | Exercise::NestedObjectDestructuring2 => &[],
                _ => &[ElementKind::Variable],
            },
        }
    }

    /// Look an exercise up by its external identifiers.
    pub fn find(section: &str, question: &str) -> Option<Exercise> {
        Exercise::ALL
            .iter()
            .copied()
            .find(|e| e.section().as_str() == section && e.question() == question)
    }
}
