//! Heuristic: the deterministic default opponent.
//!
//! Candidates come from the engine's legal-play helper. Each candidate is
//! scored by the value of the cards it would spend and the cheapest one is
//! played:
//! - Joker: 100 points, plus a flat 100 when a candidate spends both Jokers.
//! - `2`: 50 plus its strength index.
//! - Any other rank: its strength index.
//!
//! The total is negated under revolution, and the selection comparator
//! negates once more. The two negations cancel, so the strategy minimizes
//! the raw score in both modes.

use crate::ai::trait_def::{AiError, AiPlayer};
use crate::domain::cards_logic::strength_index;
use crate::domain::player_view::TurnView;
use crate::domain::{Card, Rank};

/// Deterministic lowest-spend strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Heuristic {
    pub const NAME: &'static str = "heuristic";

    pub fn new() -> Self {
        Self
    }

    /// Point value of a candidate under the current mode.
    fn score_set(set: &[Card], revolution: bool) -> i32 {
        let mut score = 0i32;
        for card in set {
            score += match card.value() {
                None => 100,
                Some(Rank::Two) => 50 + strength_index(Some(Rank::Two), revolution) as i32,
                Some(rank) => strength_index(Some(rank), revolution) as i32,
            };
        }
        if set.iter().filter(|c| c.is_joker()).count() > 1 {
            score += 100;
        }
        if revolution {
            -score
        } else {
            score
        }
    }
}

impl AiPlayer for Heuristic {
    fn choose_play(&self, view: &TurnView) -> Result<Option<Vec<Card>>, AiError> {
        let revolution = view.revolution;
        let mut scored: Vec<(Vec<Card>, i32)> = view
            .legal_plays()
            .into_iter()
            .map(|set| {
                let score = Self::score_set(&set, revolution);
                (set, score)
            })
            .collect();

        scored.sort_by_key(|&(_, score)| if revolution { -score } else { score });

        Ok(scored.into_iter().next().map(|(set, _)| set))
    }
}
