//! Ordered, short-circuiting rule chains.
//!
//! A chain is an ordered list of named rules, each a predicate over the
//! located node plus the chain's [`Bindings`]. Execution contract:
//!
//! 1. Rules run strictly in order.
//! 2. The first failing rule appends its diagnostic(s) and the rest of the
//!    chain is skipped — first-error-wins, never accumulate-all-errors.
//! 3. A rule may bind a name for later rules in the same run (e.g. the loop
//!    variable captured from the initializer and required to reappear in the
//!    test and update clauses).
//! 4. A rule may delegate to a nested chain and fold its output back in via
//!    [`Chain::eval`] — a finite dispatch on a discriminant such as a
//!    statement count, not open-ended recursion.
//! 5. Warnings are recorded but never stop the chain; only Error severity
//!    short-circuits.

use std::collections::HashMap;

use log::debug;

use crate::diagnostic::Message;

/// Scoped role → identifier map used for cross-position name consistency
/// within one chain run.
#[derive(Debug, Default)]
pub struct Bindings {
    names: HashMap<&'static str, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, role: &'static str, name: impl Into<String>) {
        self.names.insert(role, name.into());
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.names.get(role).map(String::as_str)
    }

    /// The bound name, or `""` when the role was never bound (earlier rules
    /// guarantee the bind on every passing path).
    pub fn name(&self, role: &str) -> &str {
        self.get(role).unwrap_or("")
    }
}

/// Outcome of evaluating one rule.
#[derive(Debug)]
pub enum Verdict {
    /// Predicate held; continue down the chain.
    Pass,
    /// Convention deviation; recorded, chain continues.
    Warn(String),
    /// Structural failure; recorded, rest of the chain is skipped.
    Fail(String),
    /// Several independent failures observed by one rule; all recorded,
    /// chain stops.
    FailAll(Vec<String>),
    /// Folded output of a nested chain.
    Report { messages: Vec<Message>, halt: bool },
}

type Check<'a, T> = Box<dyn Fn(&T, &mut Bindings) -> Verdict + 'a>;

struct Rule<'a, T: ?Sized> {
    name: &'static str,
    check: Check<'a, T>,
}

/// An ordered rule chain over nodes of type `T`.
pub struct Chain<'a, T: ?Sized> {
    rules: Vec<Rule<'a, T>>,
}

impl<'a, T: ?Sized> Default for Chain<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: ?Sized> Chain<'a, T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. The name only shows up in debug logs.
    pub fn rule(
        mut self,
        name: &'static str,
        check: impl Fn(&T, &mut Bindings) -> Verdict + 'a,
    ) -> Self {
        self.rules.push(Rule {
            name,
            check: Box::new(check),
        });
        self
    }

    /// Run the chain, appending feedback to `out`. Returns `false` when the
    /// chain was halted by a failure.
    pub fn run(&self, target: &T, bindings: &mut Bindings, out: &mut Vec<Message>) -> bool {
        for rule in &self.rules {
            match (rule.check)(target, bindings) {
                Verdict::Pass => {}
                Verdict::Warn(message) => {
                    debug!("rule '{}' warned: {message}", rule.name);
                    out.push(Message::warning(message));
                }
                Verdict::Fail(message) => {
                    debug!("rule '{}' failed: {message}", rule.name);
                    out.push(Message::error(message));
                    return false;
                }
                Verdict::FailAll(messages) => {
                    debug!("rule '{}' failed with {} messages", rule.name, messages.len());
                    out.extend(messages.into_iter().map(Message::error));
                    return false;
                }
                Verdict::Report { messages, halt } => {
                    out.extend(messages);
                    if halt {
                        debug!("rule '{}' halted via nested chain", rule.name);
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Run the chain and fold the outcome into a single [`Verdict`], for
    /// use inside an outer rule (nested dispatch).
    pub fn eval(&self, target: &T, bindings: &mut Bindings) -> Verdict {
        let mut messages = Vec::new();
        let completed = self.run(target, bindings, &mut messages);
        if messages.is_empty() && completed {
            Verdict::Pass
        } else {
            Verdict::Report {
                messages,
                halt: !completed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_failure_wins() {
        let chain: Chain<i32> = Chain::new()
            .rule("positive", |n, _| {
                if *n > 0 {
                    Verdict::Pass
                } else {
                    Verdict::Fail("must be positive".into())
                }
            })
            .rule("even", |n, _| {
                if *n % 2 == 0 {
                    Verdict::Pass
                } else {
                    Verdict::Fail("must be even".into())
                }
            });

        let mut out = Vec::new();
        let completed = chain.run(&-3, &mut Bindings::new(), &mut out);
        assert!(!completed);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "must be positive");
    }

    #[test]
    fn warnings_never_stop_the_chain() {
        let chain: Chain<i32> = Chain::new()
            .rule("nit", |_, _| Verdict::Warn("unconventional".into()))
            .rule("hard", |_, _| Verdict::Fail("broken".into()));

        let mut out = Vec::new();
        let completed = chain.run(&0, &mut Bindings::new(), &mut out);
        assert!(!completed);
        assert_eq!(out[0].severity, Severity::Warning);
        assert_eq!(out[1].severity, Severity::Error);
    }

    #[test]
    fn bindings_flow_between_rules() {
        let chain: Chain<&str> = Chain::new()
            .rule("capture", |name, bindings| {
                bindings.bind("loop variable", *name);
                Verdict::Pass
            })
            .rule("reuse", |_, bindings| {
                if bindings.name("loop variable") == "i" {
                    Verdict::Pass
                } else {
                    Verdict::Fail("names differ".into())
                }
            });

        let mut out = Vec::new();
        assert!(chain.run(&"i", &mut Bindings::new(), &mut out));
        assert!(!chain.run(&"index", &mut Bindings::new(), &mut out));
    }

    #[test]
    fn fail_all_records_every_message_then_halts() {
        let chain: Chain<()> = Chain::new()
            .rule("set", |_, _| {
                Verdict::FailAll(vec!["first".into(), "second".into()])
            })
            .rule("unreached", |_, _| Verdict::Fail("third".into()));

        let mut out = Vec::new();
        assert!(!chain.run(&(), &mut Bindings::new(), &mut out));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn nested_chains_fold_into_the_outer_run() {
        let inner: Chain<i32> = Chain::new().rule("inner", |n, _| {
            if *n == 1 {
                Verdict::Pass
            } else {
                Verdict::Fail("inner failed".into())
            }
        });

        let outer: Chain<i32> = Chain::new()
            .rule("dispatch", move |n, bindings| inner.eval(n, bindings))
            .rule("after", |_, _| Verdict::Warn("reached".into()));

        let mut out = Vec::new();
        assert!(outer.run(&1, &mut Bindings::new(), &mut out));
        assert_eq!(out.len(), 1); // only the warning

        let mut out = Vec::new();
        assert!(!outer.run(&2, &mut Bindings::new(), &mut out));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "inner failed");
    }
}
