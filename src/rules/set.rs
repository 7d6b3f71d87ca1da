//! Rule sets: the ordered step sequence and its traversal.

use std::fmt;

use tracing::{debug, trace};

use super::step::{Outcome, Step};

type InitFn<R> = Box<dyn Fn() -> R + Send + Sync>;

/// An ordered, immutable sequence of steps plus a result factory.
///
/// A rule set is built once and then shared across any number of
/// executions; [`exec`](RuleSet::exec) never mutates the set itself.
/// Concurrent calls on the same set are safe as long as they operate on
/// different environments — the environment and result are the caller's to
/// synchronize.
pub struct RuleSet<E, R> {
    steps: Vec<Step<E, R>>,
    init: InitFn<R>,
}

impl<E, R> RuleSet<E, R> {
    /// Create a rule set from a step sequence and a result factory.
    ///
    /// The factory produces the fresh result each execution starts from,
    /// with whatever initial field values the domain calls for.
    pub fn new(steps: Vec<Step<E, R>>, init: impl Fn() -> R + Send + Sync + 'static) -> Self {
        Self {
            steps,
            init: Box::new(init),
        }
    }

    /// Start building a rule set step by step.
    #[must_use]
    pub fn builder() -> RuleSetBuilder<E, R> {
        RuleSetBuilder::new()
    }

    /// Number of steps in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in sequence order.
    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(Step::name)
    }

    /// Execute the step sequence against the environment.
    ///
    /// Creates a fresh result via the factory, then evaluates every step
    /// in sequence order with short-circuit semantics:
    ///
    /// - a precondition returning `false` stops the traversal; the result
    ///   as mutated so far is final
    /// - an inapplicable rule is skipped (not an abort)
    /// - an applicable rule returning [`Outcome::Abort`] stops the
    ///   traversal after its mutations have taken effect
    ///
    /// The (possibly mutated) result is returned by value. Panics from
    /// step closures propagate to the caller unchanged.
    pub fn exec(&self, env: &mut E) -> R {
        let mut result = (self.init)();

        for (index, step) in self.steps.iter().enumerate() {
            trace!(index, step = step.name(), "evaluating step");
            if step.evaluate(env, &mut result).is_abort() {
                debug!(index, step = step.name(), "step aborted the chain");
                break;
            }
        }

        result
    }
}

impl<E, R> fmt::Debug for RuleSet<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

/// Builder for assembling a rule set in sequence order.
///
/// Step order is significant: steps run in the order they are added, and
/// the order is fixed once [`build`](RuleSetBuilder::build) is called.
pub struct RuleSetBuilder<E, R> {
    steps: Vec<Step<E, R>>,
}

impl<E, R> RuleSetBuilder<E, R> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a precondition step.
    pub fn precondition(
        mut self,
        name: impl Into<String>,
        test: impl Fn(&E, &mut R) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.steps.push(Step::precondition(name, test));
        self
    }

    /// Append a rule step.
    pub fn rule(
        mut self,
        name: impl Into<String>,
        applies: impl Fn(&E) -> bool + Send + Sync + 'static,
        apply: impl Fn(&mut E, &mut R) -> Outcome + Send + Sync + 'static,
    ) -> Self {
        self.steps.push(Step::rule(name, applies, apply));
        self
    }

    /// Append a rule step that always applies.
    pub fn unconditional(
        mut self,
        name: impl Into<String>,
        apply: impl Fn(&mut E, &mut R) -> Outcome + Send + Sync + 'static,
    ) -> Self {
        self.steps.push(Step::unconditional(name, apply));
        self
    }

    /// Append an already-constructed step.
    pub fn step(mut self, step: Step<E, R>) -> Self {
        self.steps.push(step);
        self
    }

    /// Finish the sequence with the result factory.
    pub fn build(self, init: impl Fn() -> R + Send + Sync + 'static) -> RuleSet<E, R> {
        RuleSet::new(self.steps, init)
    }
}

impl<E, R> Default for RuleSetBuilder<E, R> {
    fn default() -> Self {
        Self::new()
    }
}
