//! Drives complete matches in memory through the public engine surface.
//!
//! The bot seat runs inside the engine; the human seat is driven externally
//! through the same strategy interface, so a simulated match exercises
//! exactly the calls a real presentation layer would make.

use std::time::Instant;

use engine::{AiPlayer, MatchOutcome, OfflineGame, Seat};
use serde::Serialize;

/// Hard cap on turns per match; a correct engine finishes long before this.
const MAX_TURNS: u32 = 10_000;

/// Result of one simulated match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub game_id: u32,
    pub seed: u64,
    pub outcome: MatchOutcome,
    pub round_wins: [u8; 2],
    pub plays: u32,
    pub passes: u32,
    pub duration_ms: f64,
}

/// Play one seeded match to completion.
pub fn run_match(
    game_id: u32,
    seed: u64,
    human: &dyn AiPlayer,
    bot: Box<dyn AiPlayer>,
) -> Result<MatchRecord, String> {
    let start = Instant::now();
    let mut game = OfflineGame::with_strategy(bot, seed);
    let mut plays = 0u32;
    let mut passes = 0u32;

    for _ in 0..MAX_TURNS {
        if game.is_game_over() {
            break;
        }
        match game.turn() {
            Some(Seat::Human) => {
                let view = game.turn_view(Seat::Human);
                let decision = human.choose_play(&view).map_err(|e| e.to_string())?;
                match decision {
                    Some(set) => {
                        if !game.player_play(&set) {
                            return Err(format!(
                                "human strategy proposed an illegal set: {set:?}"
                            ));
                        }
                        plays += 1;
                    }
                    None => {
                        if !game.player_pass() {
                            return Err("pass rejected out of turn".to_string());
                        }
                        passes += 1;
                    }
                }
            }
            Some(Seat::Bot) => match game.bot_play() {
                Some(_) => plays += 1,
                None => passes += 1,
            },
            None => break,
        }
    }

    let outcome = game
        .outcome()
        .ok_or_else(|| "match did not finish within the turn cap".to_string())?;

    Ok(MatchRecord {
        game_id,
        seed,
        outcome,
        round_wins: game.wins(),
        plays,
        passes,
        duration_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}
