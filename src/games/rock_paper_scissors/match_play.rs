//! Self-playing match driver.
//!
//! Exercises the round rule set the way a real embedding would: one
//! shared, immutable rule set; one `exec` call per round; a fresh result
//! out of every call. Weapon picks come from a seeded RNG so a match can
//! be replayed exactly.

use crate::core::RoundRng;
use crate::rules::RuleSet;

use super::round::{round_rules, Game, Phase, RoundEnv, RoundResult, Weapon};

/// Safety cap for pathological tie streaks.
const MAX_ROUNDS: usize = 10_000;

/// Everything a finished simulated match produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    /// Final match state.
    pub game: Game,
    /// Per-round results in play order.
    pub rounds: Vec<RoundResult>,
}

/// Plays full matches with uniformly random weapon picks.
pub struct MatchSimulator {
    rules: RuleSet<RoundEnv, RoundResult>,
    rng: RoundRng,
}

impl MatchSimulator {
    /// Create a simulator with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rules: round_rules(),
            rng: RoundRng::new(seed),
        }
    }

    /// Play one round: pick both weapons, run the pipeline.
    pub fn play_round(&mut self, env: &mut RoundEnv) -> RoundResult {
        env.player_a_weapon = self.rng.choose(&Weapon::ALL).copied();
        env.player_b_weapon = self.rng.choose(&Weapon::ALL).copied();
        self.rules.exec(env)
    }

    /// Play rounds until the match ends, returning the full summary.
    pub fn play_match(&mut self, max_score: u32) -> MatchSummary {
        let mut env = RoundEnv::new(Game::new(max_score));
        let mut rounds = Vec::new();

        while env.game.state == Phase::Running && rounds.len() < MAX_ROUNDS {
            rounds.push(self.play_round(&mut env));
        }

        MatchSummary {
            game: env.game,
            rounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::rock_paper_scissors::{RoundStatus, RoundWinner};

    #[test]
    fn test_match_runs_to_completion() {
        let mut sim = MatchSimulator::new(42);
        let summary = sim.play_match(3);

        assert_eq!(summary.game.state, Phase::Over);
        assert!(summary.game.player_a_score == 3 || summary.game.player_b_score == 3);
        assert!(!summary.rounds.is_empty());
    }

    #[test]
    fn test_every_round_in_a_match_is_valid() {
        let mut sim = MatchSimulator::new(7);
        let summary = sim.play_match(5);

        for round in &summary.rounds {
            assert_eq!(round.status, RoundStatus::Success);
            assert!(round.winner.is_some());
        }
    }

    #[test]
    fn test_scores_match_round_results() {
        let mut sim = MatchSimulator::new(123);
        let summary = sim.play_match(3);

        let a_wins = summary
            .rounds
            .iter()
            .filter(|r| r.winner == Some(RoundWinner::PlayerA))
            .count() as u32;
        let b_wins = summary
            .rounds
            .iter()
            .filter(|r| r.winner == Some(RoundWinner::PlayerB))
            .count() as u32;

        assert_eq!(summary.game.player_a_score, a_wins);
        assert_eq!(summary.game.player_b_score, b_wins);
    }

    #[test]
    fn test_same_seed_replays_same_match() {
        let summary1 = MatchSimulator::new(99).play_match(3);
        let summary2 = MatchSimulator::new(99).play_match(3);

        assert_eq!(summary1, summary2);
    }

    #[test]
    fn test_different_seeds_diverge() {
        // Two seeds agreeing on every round of two full matches would be
        // a broken RNG, not luck.
        let summary1 = MatchSimulator::new(1).play_match(10);
        let summary2 = MatchSimulator::new(2).play_match(10);

        assert_ne!(summary1.rounds, summary2.rounds);
    }
}
