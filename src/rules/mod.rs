//! The rule-execution engine.
//!
//! A [`RuleSet`] holds an ordered sequence of [`Step`]s — preconditions
//! and rules — and walks it once per [`exec`](RuleSet::exec) call with
//! short-circuit semantics:
//!
//! - **Preconditions** gate the traversal: a `false` from `test` stops
//!   everything after it.
//! - **Rules** carry the domain logic: an inapplicable rule is skipped,
//!   an applicable one may mutate the environment and result and may
//!   abort the remaining pipeline.
//!
//! The engine interprets neither the environment nor the result; both are
//! caller-defined. The result is created fresh per execution by the set's
//! factory and returned by value, so domain outcomes (including failure)
//! live entirely in fields the consumer put there.
//!
//! ## Example Usage
//!
//! ```
//! use ruleflow::rules::{Outcome, RuleSet};
//!
//! // Environment: a running total. Result: whether we clamped it.
//! let set: RuleSet<i64, bool> = RuleSet::builder()
//!     .precondition("total is sane", |total, _| *total < 1_000)
//!     .unconditional("add ten", |total, _| {
//!         *total += 10;
//!         Outcome::Continue
//!     })
//!     .rule(
//!         "clamp negatives",
//!         |total| *total < 0,
//!         |total, clamped| {
//!             *total = 0;
//!             *clamped = true;
//!             Outcome::Abort
//!         },
//!     )
//!     .build(|| false);
//!
//! let mut total = -40;
//! let clamped = set.exec(&mut total);
//! assert!(clamped);
//! assert_eq!(total, 0);
//! ```

mod set;
mod step;

pub use set::{RuleSet, RuleSetBuilder};
pub use step::{Outcome, Precondition, Rule, Step};
