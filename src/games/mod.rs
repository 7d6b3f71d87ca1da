//! Example games built on the rule engine.
//!
//! These are consumers of the engine, not part of it: everything they do
//! goes through the same `RuleSet` surface available to any embedding
//! application.

pub mod rock_paper_scissors;
