//! jsdrill — structural feedback for beginner JavaScript exercises.
//!
//! Takes a learner's snippet and an exercise identifier, and returns
//! ordered feedback describing every way the snippet deviates from the
//! expected code shape — without executing anything.
//!
//! # Architecture
//!
//! ```text
//! CLI/API -> engine::check -> parser -> walker -> exercise rule chains
//! ```
//!
//! The parser turns the snippet into a typed syntax tree (the tree-sitter
//! JavaScript grammar does the heavy lifting), the walker locates the
//! construct the exercise requires, and the exercise's rule chain runs
//! top-to-bottom with first-error-wins semantics. The result is the
//! missing-construct set plus the ordered messages.
//!
//! # Example
//!
//! ```
//! use jsdrill::{check, Exercise};
//!
//! let result = check("const emptyObject = {};", Exercise::EmptyObject);
//! assert!(result.is_success());
//!
//! let result = check("const x = {};", Exercise::EmptyObject);
//! assert_eq!(
//!     result.messages[0].message,
//!     "The variable's name is incorrect. It should be: emptyObject"
//! );
//! ```

pub mod ast;
pub mod chain;
pub mod checks;
pub mod diagnostic;
pub mod engine;
pub mod examples_catalog;
pub mod exercise;
pub mod parser;
pub mod responses;
pub mod walker;

pub use diagnostic::{ElementKind, Message, Severity, ValidationResult};
pub use engine::check;
pub use examples_catalog::example_answer;
pub use exercise::{Exercise, Section};
pub use parser::ParseError;
