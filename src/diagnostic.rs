//! Diagnostic types for check results.

use serde::{Serialize, Serializer};
use std::fmt;

/// Severity level of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// Definite problem; blocks success.
    Error,
    /// Convention deviation; never blocks success.
    Warning,
    /// Reserved by the wire contract; no current rule emits it.
    #[serde(rename = "Abject Failure")]
    AbjectFailure,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
            Severity::AbjectFailure => write!(f, "Abject Failure"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "abject failure" => Ok(Severity::AbjectFailure),
            _ => Err(()),
        }
    }
}

/// One piece of learner-facing feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
}

impl Message {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// A conceptual construct an exercise may require. Serializes as the
/// learner-facing description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Variable,
    Function,
    ConsoleObject,
    TypeOf,
    ForLoop,
    ForEachLoop,
}

impl ElementKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ElementKind::Variable => {
                "variable. Variables are declared with the const, let or var keyword."
            }
            ElementKind::Function => "function",
            ElementKind::ConsoleObject => "console object",
            ElementKind::TypeOf => "typeof",
            ElementKind::ForLoop => "for loop",
            ElementKind::ForEachLoop => "forEach loop",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl Serialize for ElementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.describe())
    }
}

/// Result of one check: the constructs still missing plus ordered feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    #[serde(rename = "missingElements")]
    pub missing_elements: Vec<ElementKind>,
    pub messages: Vec<Message>,
}

impl ValidationResult {
    /// Start a result with the exercise's required element kinds marked
    /// missing; locating a construct later resolves its kind.
    pub fn new(required: &[ElementKind]) -> Self {
        Self {
            missing_elements: required.to_vec(),
            messages: Vec::new(),
        }
    }

    /// Remove a kind from the missing set (the construct was located).
    pub fn resolve(&mut self, kind: ElementKind) {
        self.missing_elements.retain(|k| *k != kind);
    }

    /// Forced-empty missing set, used when shape cannot be determined at
    /// all (parse failure, multi-statement, incomplete statement).
    pub fn clear_missing(&mut self) {
        self.missing_elements.clear();
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.messages.push(Message::error(message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.messages.push(Message::warning(message));
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(Message::is_error)
    }

    /// Success ⟺ nothing missing and no Error message. Warnings do not
    /// block success.
    pub fn is_success(&self) -> bool {
        self.missing_elements.is_empty() && !self.has_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn severity_display_and_from_str() {
        assert_eq!(format!("{}", Severity::Error), "Error");
        assert_eq!(format!("{}", Severity::AbjectFailure), "Abject Failure");
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert!("bogus".parse::<Severity>().is_err());
    }

    #[test]
    fn resolve_removes_only_the_located_kind() {
        let mut result = ValidationResult::new(&[ElementKind::Variable, ElementKind::ForLoop]);
        result.resolve(ElementKind::Variable);
        assert_eq!(result.missing_elements, vec![ElementKind::ForLoop]);
    }

    #[test]
    fn warnings_do_not_block_success() {
        let mut result = ValidationResult::new(&[]);
        result.warning("style nit");
        assert!(result.is_success());

        result.error("broken");
        assert!(!result.is_success());
    }

    #[test]
    fn missing_elements_block_success() {
        let result = ValidationResult::new(&[ElementKind::ForEachLoop]);
        assert!(!result.is_success());
    }

    #[test]
    fn serializes_with_wire_names() {
        let mut result = ValidationResult::new(&[ElementKind::Variable]);
        result.error("The variable has no value");
        result.warning("naming");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "missingElements": [
                    "variable. Variables are declared with the const, let or var keyword."
                ],
                "messages": [
                    { "type": "Error", "message": "The variable has no value" },
                    { "type": "Warning", "message": "naming" },
                ],
            })
        );
    }

    #[test]
    fn abject_failure_wire_name() {
        let message = Message {
            severity: Severity::AbjectFailure,
            message: "beyond repair".into(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "Abject Failure");
    }
}
