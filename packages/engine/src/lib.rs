#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod game;

// Re-exports for public API
pub use ai::{create_ai, AiError, AiPlayer, Heuristic, RandomPlayer};
pub use domain::{
    Card, DomainError, GameState, MatchOutcome, Phase, Rank, Seat, Suit, TableView, TurnView,
};
pub use game::OfflineGame;
