//! Steps: preconditions and rules.
//!
//! A step is one unit in a rule set's ordered sequence. Preconditions gate
//! the traversal; rules carry the domain logic. Both kinds are plain named
//! closures, so a step can be constructed and tested on its own before it
//! is ever added to a set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Control signal returned by a rule's apply operation.
///
/// There is no implicit "no return means continue": apply always states
/// its outcome explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Keep evaluating the remaining steps.
    Continue,
    /// Stop the traversal; no further steps run.
    Abort,
}

impl Outcome {
    /// Check if this outcome stops the traversal.
    #[must_use]
    pub fn is_abort(self) -> bool {
        matches!(self, Outcome::Abort)
    }
}

pub(crate) type TestFn<E, R> = Box<dyn Fn(&E, &mut R) -> bool + Send + Sync>;
pub(crate) type AppliesFn<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;
pub(crate) type ApplyFn<E, R> = Box<dyn Fn(&mut E, &mut R) -> Outcome + Send + Sync>;

/// A read-only gate over the environment.
///
/// Preconditions decide whether the overall operation is even valid to
/// attempt. A failing precondition stops the whole traversal; it is
/// expected to encode what went wrong into the result before returning
/// `false`, since the engine never synthesizes an error on its behalf.
///
/// The environment is passed by shared reference, so a precondition cannot
/// mutate it directly. This is a usage contract, not an engine guarantee:
/// interior mutability in the environment type bypasses it.
pub struct Precondition<E, R> {
    name: String,
    test: TestFn<E, R>,
}

impl<E, R> Precondition<E, R> {
    /// Create a named precondition from its test predicate.
    pub fn new(
        name: impl Into<String>,
        test: impl Fn(&E, &mut R) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            test: Box::new(test),
        }
    }

    /// Descriptive name, used in diagnostic traces.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the test predicate.
    pub fn test(&self, env: &E, result: &mut R) -> bool {
        (self.test)(env, result)
    }
}

/// One conditionally-applicable unit of domain logic.
///
/// `applies` is a pure predicate over the environment alone; an
/// inapplicable rule is skipped as a no-op, which is not an abort. When
/// applicable, `apply` may mutate both the environment and the result, and
/// may truncate the remaining pipeline by returning [`Outcome::Abort`].
pub struct Rule<E, R> {
    name: String,
    applies: AppliesFn<E>,
    apply: ApplyFn<E, R>,
}

impl<E, R> Rule<E, R> {
    /// Create a named rule from its applicability predicate and apply
    /// operation.
    pub fn new(
        name: impl Into<String>,
        applies: impl Fn(&E) -> bool + Send + Sync + 'static,
        apply: impl Fn(&mut E, &mut R) -> Outcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            applies: Box::new(applies),
            apply: Box::new(apply),
        }
    }

    /// Create a rule that always applies.
    pub fn unconditional(
        name: impl Into<String>,
        apply: impl Fn(&mut E, &mut R) -> Outcome + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, |_| true, apply)
    }

    /// Descriptive name, used in diagnostic traces.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether the rule applies in the given environment.
    pub fn applies(&self, env: &E) -> bool {
        (self.applies)(env)
    }

    /// Run the apply operation.
    pub fn apply(&self, env: &mut E, result: &mut R) -> Outcome {
        (self.apply)(env, result)
    }
}

/// One entry in a rule set's ordered sequence.
///
/// A closed sum of the two step kinds, dispatched by exhaustive match in
/// the traversal loop.
pub enum Step<E, R> {
    Precondition(Precondition<E, R>),
    Rule(Rule<E, R>),
}

impl<E, R> Step<E, R> {
    /// Create a precondition step.
    pub fn precondition(
        name: impl Into<String>,
        test: impl Fn(&E, &mut R) -> bool + Send + Sync + 'static,
    ) -> Self {
        Step::Precondition(Precondition::new(name, test))
    }

    /// Create a rule step.
    pub fn rule(
        name: impl Into<String>,
        applies: impl Fn(&E) -> bool + Send + Sync + 'static,
        apply: impl Fn(&mut E, &mut R) -> Outcome + Send + Sync + 'static,
    ) -> Self {
        Step::Rule(Rule::new(name, applies, apply))
    }

    /// Create a rule step that always applies.
    pub fn unconditional(
        name: impl Into<String>,
        apply: impl Fn(&mut E, &mut R) -> Outcome + Send + Sync + 'static,
    ) -> Self {
        Step::Rule(Rule::unconditional(name, apply))
    }

    /// Descriptive name, used in diagnostic traces.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Step::Precondition(p) => p.name(),
            Step::Rule(r) => r.name(),
        }
    }

    /// Evaluate this step against the environment and result.
    ///
    /// Folds the step-kind protocol into the two control outcomes:
    /// a failing precondition aborts, an inapplicable rule continues,
    /// an applicable rule decides for itself.
    pub(crate) fn evaluate(&self, env: &mut E, result: &mut R) -> Outcome {
        match self {
            Step::Precondition(p) => {
                if p.test(env, result) {
                    Outcome::Continue
                } else {
                    Outcome::Abort
                }
            }
            Step::Rule(r) => {
                if r.applies(env) {
                    r.apply(env, result)
                } else {
                    Outcome::Continue
                }
            }
        }
    }
}

impl<E, R> fmt::Debug for Step<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Precondition(p) => f
                .debug_struct("Precondition")
                .field("name", &p.name)
                .finish_non_exhaustive(),
            Step::Rule(r) => f
                .debug_struct("Rule")
                .field("name", &r.name)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_abort() {
        assert!(Outcome::Abort.is_abort());
        assert!(!Outcome::Continue.is_abort());
    }

    #[test]
    fn test_passing_precondition_continues() {
        let step: Step<i32, ()> = Step::precondition("non-negative", |env, _| *env >= 0);
        let mut env = 5;
        assert_eq!(step.evaluate(&mut env, &mut ()), Outcome::Continue);
    }

    #[test]
    fn test_failing_precondition_aborts() {
        let step: Step<i32, Option<&str>> = Step::precondition("non-negative", |env, result| {
            if *env < 0 {
                *result = Some("negative input");
                return false;
            }
            true
        });

        let mut env = -1;
        let mut result = None;
        assert_eq!(step.evaluate(&mut env, &mut result), Outcome::Abort);
        assert_eq!(result, Some("negative input"));
    }

    #[test]
    fn test_inapplicable_rule_is_skipped() {
        let step: Step<i32, i32> = Step::rule(
            "double evens",
            |env| env % 2 == 0,
            |env, result| {
                *env *= 2;
                *result += 1;
                Outcome::Continue
            },
        );

        let mut env = 3;
        let mut result = 0;
        assert_eq!(step.evaluate(&mut env, &mut result), Outcome::Continue);
        assert_eq!(env, 3);
        assert_eq!(result, 0);
    }

    #[test]
    fn test_applicable_rule_mutates_and_can_abort() {
        let step: Step<i32, i32> = Step::rule(
            "halve until odd",
            |env| env % 2 == 0,
            |env, result| {
                *env /= 2;
                *result += 1;
                if *env % 2 == 1 {
                    Outcome::Abort
                } else {
                    Outcome::Continue
                }
            },
        );

        let mut env = 6;
        let mut result = 0;
        assert_eq!(step.evaluate(&mut env, &mut result), Outcome::Abort);
        assert_eq!(env, 3);
        assert_eq!(result, 1);
    }

    #[test]
    fn test_unconditional_rule_always_applies() {
        let step: Step<i32, ()> = Step::unconditional("bump", |env, _| {
            *env += 1;
            Outcome::Continue
        });

        let mut env = 0;
        step.evaluate(&mut env, &mut ());
        assert_eq!(env, 1);
    }

    #[test]
    fn test_step_names() {
        let pre: Step<(), ()> = Step::precondition("gate", |_, _| true);
        let rule: Step<(), ()> = Step::unconditional("work", |_, _| Outcome::Continue);
        assert_eq!(pre.name(), "gate");
        assert_eq!(rule.name(), "work");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&Outcome::Abort).unwrap();
        let deserialized: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Outcome::Abort);
    }
}
