//! Strategy trait for the scripted opponent.

use std::fmt;

use crate::domain::player_view::TurnView;
use crate::domain::Card;

/// Errors that can occur inside a strategy.
#[derive(Debug)]
pub enum AiError {
    /// Strategy hit an internal failure (e.g. a poisoned lock).
    Internal(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "strategy internal error: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// A scripted player. Given the acting seat's view, produce a play or pass.
///
/// Implementations must only propose sets drawn from `view.legal_plays()`.
/// `Ok(None)` is a deliberate pass (a forfeit of the current contest), not a
/// failure.
pub trait AiPlayer: Send + Sync {
    fn choose_play(&self, view: &TurnView) -> Result<Option<Vec<Card>>, AiError>;
}
