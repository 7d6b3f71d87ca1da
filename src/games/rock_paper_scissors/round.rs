//! Round domain types and the round rule set.

use serde::{Deserialize, Serialize};

use crate::rules::{Outcome, RuleSet};

/// A weapon thrown in one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weapon {
    Rock,
    Paper,
    Scissors,
}

impl Weapon {
    /// All weapons, for uniform random picks.
    pub const ALL: [Weapon; 3] = [Weapon::Rock, Weapon::Paper, Weapon::Scissors];

    /// Check if this weapon beats the other.
    ///
    /// Identical weapons beat nothing; ties are decided by the caller.
    #[must_use]
    pub fn beats(self, other: Weapon) -> bool {
        matches!(
            (self, other),
            (Weapon::Paper, Weapon::Rock)
                | (Weapon::Rock, Weapon::Scissors)
                | (Weapon::Scissors, Weapon::Paper)
        )
    }
}

/// Whether the match is still accepting rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Over,
}

/// Match-level state carried between rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub state: Phase,
    pub max_score: u32,
    pub player_a_score: u32,
    pub player_b_score: u32,
}

impl Game {
    /// Create a running game at 0-0 with the given winning score.
    #[must_use]
    pub fn new(max_score: u32) -> Self {
        Self {
            state: Phase::Running,
            max_score,
            player_a_score: 0,
            player_b_score: 0,
        }
    }

    /// Check if either player has reached the winning score.
    #[must_use]
    pub fn score_reached(&self) -> bool {
        self.player_a_score >= self.max_score || self.player_b_score >= self.max_score
    }
}

/// The environment one round's rules run against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEnv {
    pub game: Game,
    pub player_a_weapon: Option<Weapon>,
    pub player_b_weapon: Option<Weapon>,
}

impl RoundEnv {
    /// Create a round environment with no weapons chosen yet.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            player_a_weapon: None,
            player_b_weapon: None,
        }
    }
}

/// Who took the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundWinner {
    PlayerA,
    PlayerB,
    Even,
}

/// Whether the round was valid to play at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Success,
    Error,
}

/// The per-round result threaded through the rule set.
///
/// Starts from the factory value (`Success`, no winner); the precondition
/// rewrites it to `Error` when a round is played on a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub status: RoundStatus,
    pub winner: Option<RoundWinner>,
}

impl Default for RoundResult {
    fn default() -> Self {
        Self {
            status: RoundStatus::Success,
            winner: None,
        }
    }
}

/// Build the round pipeline.
///
/// Step order is the round's logic: gate on the match still running,
/// determine the winner, update the score, end the match at max score.
/// The returned set is immutable and meant to be reused for every round
/// of a match.
#[must_use]
pub fn round_rules() -> RuleSet<RoundEnv, RoundResult> {
    RuleSet::builder()
        .precondition("game is running", |env: &RoundEnv, result: &mut RoundResult| {
            if env.game.state != Phase::Running {
                result.status = RoundStatus::Error;
                result.winner = None;
                return false;
            }
            true
        })
        .rule(
            "determine winner",
            |env: &RoundEnv| env.player_a_weapon.is_some() && env.player_b_weapon.is_some(),
            |env, result| {
                let a = env.player_a_weapon.expect("both weapons must be chosen");
                let b = env.player_b_weapon.expect("both weapons must be chosen");

                result.winner = Some(if a == b {
                    RoundWinner::Even
                } else if a.beats(b) {
                    RoundWinner::PlayerA
                } else {
                    RoundWinner::PlayerB
                });
                Outcome::Continue
            },
        )
        .unconditional("update score", |env, result: &mut RoundResult| {
            match result.winner {
                Some(RoundWinner::PlayerA) => env.game.player_a_score += 1,
                Some(RoundWinner::PlayerB) => env.game.player_b_score += 1,
                Some(RoundWinner::Even) | None => {}
            }
            Outcome::Continue
        })
        .unconditional("end game at max score", |env, _| {
            if env.game.score_reached() {
                env.game.state = Phase::Over;
            }
            Outcome::Continue
        })
        .build(RoundResult::default)
}
