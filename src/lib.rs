//! # ruleflow
//!
//! A short-circuiting rule-and-precondition pipeline for turn-based game
//! logic.
//!
//! ## Design Principles
//!
//! 1. **Domain-Agnostic**: The engine interprets neither the environment
//!    nor the result. Both are caller-defined type parameters; domain
//!    outcomes live in fields the consumer put there.
//!
//! 2. **Steps Over Function Bodies**: Validation and scoring logic is
//!    expressed as small, named, independently testable steps instead of
//!    one imperative function.
//!
//! 3. **Build Once, Execute Many**: A rule set is an immutable step
//!    sequence plus a result factory. Every execution gets a fresh result;
//!    the set itself never changes and can be shared across threads for
//!    non-overlapping executions.
//!
//! ## Execution Contract
//!
//! `exec` walks the sequence once, in order. A failing precondition or an
//! aborting rule stops everything after it; an inapplicable rule is
//! skipped as a no-op. Panics from step closures propagate unchanged —
//! the engine defines no error type of its own.
//!
//! ## Modules
//!
//! - `rules`: the engine — steps, outcomes, rule sets, traversal
//! - `core`: deterministic RNG for match simulation
//! - `games`: example consumers (rock-paper-scissors)

pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{RoundRng, RoundRngState};
pub use crate::rules::{Outcome, Precondition, Rule, RuleSet, RuleSetBuilder, Step};
