//! Seeded random self-play for exercising the rules at scale.
//!
//! Each game picks uniformly among the legal pits. This is a test harness,
//! not an opponent: nothing here looks ahead or evaluates positions.

use log::{debug, trace};
use serde::Serialize;

use crate::core::{GameRng, GameState, Player, PlayerMap};
use crate::error::SimulationError;
use crate::rules::{GameResult, RulesEngine};

/// Aggregate statistics over a batch of random games.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SimulationReport {
    pub games: u32,
    pub wins: PlayerMap<u32>,
    pub draws: u32,
    pub moves: u64,
    pub extra_turns: u64,
    pub captures: u64,
    /// Sum of final store counts, for averaging.
    pub store_totals: PlayerMap<u64>,
}

impl SimulationReport {
    #[must_use]
    pub fn average_store(&self, player: Player) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.store_totals[player] as f64 / f64::from(self.games)
    }

    #[must_use]
    pub fn average_moves(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.moves as f64 / f64::from(self.games)
    }

    fn record(&mut self, state: &GameState, result: GameResult) {
        self.games += 1;
        match result {
            GameResult::Winner(p) => self.wins[p] += 1,
            GameResult::Draw => self.draws += 1,
        }
        for player in Player::BOTH {
            self.store_totals[player] += u64::from(state.board().store(player));
        }
    }
}

/// Play one random game to the end.
///
/// Seed conservation is checked after every move.
pub fn play_random_game<R: RulesEngine>(
    rules: &R,
    rng: &mut GameRng,
    game: u32,
    report: &mut SimulationReport,
) -> Result<GameState, SimulationError> {
    let expected = rules.config().total_seeds();
    let mut state = rules.initial_state();

    while rules.is_terminal(&state).is_none() {
        let legal = rules.legal_moves(&state);
        let Some(&pit) = rng.choose(&legal) else {
            return Err(SimulationError::Stalled {
                game,
                player: state.current_player(),
            });
        };

        trace!("game {game}: {} plays pit {pit}", state.current_player());
        let outcome = rules
            .apply_move(&mut state, pit)
            .map_err(|source| SimulationError::Rejected { game, source })?;
        report.moves += 1;
        if outcome.extra_turn {
            report.extra_turns += 1;
        }
        if outcome.capture.is_some() {
            report.captures += 1;
        }

        let found = state.board().total();
        if found != expected {
            return Err(SimulationError::SeedDrift {
                game,
                ply: state.moves_played(),
                expected,
                found,
            });
        }
    }

    Ok(state)
}

/// Play `games` random games. Game `i` uses the `i`-th fork of `seed`, so any
/// run is reproducible.
pub fn simulate<R: RulesEngine>(
    rules: &R,
    games: u32,
    seed: u64,
) -> Result<SimulationReport, SimulationError> {
    let mut rng = GameRng::new(seed);
    let mut report = SimulationReport::default();

    for game in 0..games {
        let mut game_rng = rng.fork();
        trace!("game {game}: rng seed {}", game_rng.seed());
        let state = play_random_game(rules, &mut game_rng, game, &mut report)?;
        if let Some(result) = state.outcome() {
            debug!("game {game}: {result} after {} moves", state.moves_played());
            report.record(&state, result);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::games::kalah::Kalah;

    #[test]
    fn test_simulation_accounts_for_every_game() {
        let report = simulate(&Kalah::default(), 50, 7).unwrap();
        assert_eq!(report.games, 50);
        assert_eq!(
            report.wins[Player::One] + report.wins[Player::Two] + report.draws,
            50
        );
        assert_eq!(
            report.store_totals[Player::One] + report.store_totals[Player::Two],
            50 * 48
        );
        assert!(report.moves >= 50);
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let a = simulate(&Kalah::default(), 20, 99).unwrap();
        let b = simulate(&Kalah::default(), 20, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulation_with_other_seed_counts() {
        let rules = Kalah::new(GameConfig::new().with_seeds_per_pit(6)).unwrap();
        let report = simulate(&rules, 10, 1).unwrap();
        assert_eq!(
            report.store_totals[Player::One] + report.store_totals[Player::Two],
            10 * 72
        );
    }

    #[test]
    fn test_empty_report_averages() {
        let report = SimulationReport::default();
        assert_eq!(report.average_store(Player::One), 0.0);
        assert_eq!(report.average_moves(), 0.0);
    }
}
