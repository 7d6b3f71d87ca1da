//! Rock-paper-scissors, expressed as a rule pipeline.
//!
//! A round is one `exec` call: a precondition checks the match is still
//! in progress, then three rules determine the winner, update the score,
//! and end the match once a player reaches the max score. The same rule
//! set is shared across every round of a match.

mod match_play;
mod round;

pub use match_play::{MatchSimulator, MatchSummary};
pub use round::{round_rules, Game, Phase, RoundEnv, RoundResult, RoundStatus, RoundWinner, Weapon};
