//! Game-agnostic support types.
//!
//! Nothing here interprets rule or domain semantics; the engine proper
//! lives in `rules`.

pub mod rng;

pub use rng::{RoundRng, RoundRngState};
