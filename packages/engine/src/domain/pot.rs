//! Pot state: the live contested set, the cumulative record of cards played
//! since the last clear, and the revolution flag.

use super::cards_logic::{is_four_of_a_kind, is_valid_set, set_beats_pot};
use super::cards_types::{Card, Rank};

/// The table centre. Owns everything the evaluator needs: which set is live,
/// which cards have hit the table since the last clear (display record), and
/// whether revolution is in force.
#[derive(Debug, Clone, Default)]
pub struct Pot {
    revolution: bool,
    current: Vec<Card>,
    history: Vec<Card>,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revolution(&self) -> bool {
        self.revolution
    }

    /// The set the next play must beat. Empty means an open lead.
    pub fn current(&self) -> &[Card] {
        &self.current
    }

    /// Every card played since the last clear, oldest first.
    pub fn history(&self) -> &[Card] {
        &self.history
    }

    /// Attempt to install `set` as the new live set.
    ///
    /// Rejects malformed sets and sets that do not beat the live one, leaving
    /// state untouched. On success the set is recorded; an `8` clears the
    /// table immediately, and a four-of-a-kind toggles revolution. Both
    /// effects are evaluated against the played set itself, so a single play
    /// (four 8s) can fire both.
    pub fn play(&mut self, set: &[Card]) -> bool {
        if !is_valid_set(set) {
            return false;
        }
        if !set_beats_pot(set, &self.current, self.revolution) {
            return false;
        }

        self.current = set.to_vec();
        self.history.extend_from_slice(set);

        if set.iter().any(|c| c.value() == Some(Rank::Eight)) {
            self.current.clear();
            self.history.clear();
        }
        if is_four_of_a_kind(set) {
            self.revolution = !self.revolution;
        }
        true
    }

    /// Empty the table without touching revolution (pot won uncontested).
    pub fn clear(&mut self) {
        self.current.clear();
        self.history.clear();
    }

    /// Fresh-round state: empty table, normal mode.
    pub fn reset_round(&mut self) {
        self.current.clear();
        self.history.clear();
        self.revolution = false;
    }
}
