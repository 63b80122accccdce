//! Domain layer: pure game rules, state, and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod errors;
pub mod player_view;
pub mod plays;
pub mod pot;
pub mod round_lifecycle;
pub mod rules;
pub mod seed_derivation;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_pot;
#[cfg(test)]
mod tests_props_cards;
#[cfg(test)]
mod tests_round_lifecycle;

// Re-exports for ergonomics
pub use cards_logic::{
    base_rank, is_four_of_a_kind, is_valid_set, legal_plays, set_beats_pot, strength_index,
};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_hands, full_deck};
pub use errors::DomainError;
pub use player_view::{TableView, TurnView};
pub use pot::Pot;
pub use state::{GameState, MatchOutcome, Phase, Seat};
