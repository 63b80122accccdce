//! Strategies for the scripted opponent.
//!
//! This module provides:
//! - the [`AiPlayer`] trait strategies implement
//! - [`Heuristic`]: the deterministic default opponent
//! - [`RandomPlayer`]: a seedable uniformly random baseline

mod heuristic;
mod random;
mod trait_def;

pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Create a strategy by name.
///
/// Currently supports `"heuristic"` (seed ignored) and `"random"`. Returns
/// `None` for unrecognized names.
pub fn create_ai(name: &str, seed: Option<u64>) -> Option<Box<dyn AiPlayer>> {
    match name {
        "heuristic" => Some(Box::new(Heuristic::new())),
        "random" => Some(Box::new(RandomPlayer::new(seed))),
        _ => None,
    }
}
