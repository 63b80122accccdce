//! Player-visible snapshots of match state.

use serde::Serialize;

use super::cards_logic::legal_plays;
use super::cards_types::Card;
use super::rules::SEATS;
use super::state::{GameState, MatchOutcome, Seat};

/// The slice of state an acting seat may consult when choosing a play: its
/// own hand, the live set to beat, and the mode.
#[derive(Debug, Clone)]
pub struct TurnView {
    pub hand: Vec<Card>,
    pub pot: Vec<Card>,
    pub revolution: bool,
}

impl TurnView {
    pub fn for_seat(state: &GameState, seat: Seat) -> Self {
        Self {
            hand: state.hand(seat).to_vec(),
            pot: state.pot.current().to_vec(),
            revolution: state.pot.revolution(),
        }
    }

    /// Candidate plays the rules would accept right now. Strategies must
    /// choose from this list or pass.
    pub fn legal_plays(&self) -> Vec<Vec<Card>> {
        legal_plays(&self.hand, &self.pot, self.revolution)
    }
}

/// Redacted, serializable table snapshot for the presentation layer. The
/// opponent's hand is reduced to a count; cards travel as their short codes.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub round_no: u8,
    pub revolution: bool,
    pub current_pot: Vec<Card>,
    pub full_pot: Vec<Card>,
    pub player_hand: Vec<Card>,
    pub bot_hand_count: usize,
    pub turn: Option<Seat>,
    pub round_active: bool,
    pub game_over: bool,
    pub wins: [u8; SEATS],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<MatchOutcome>,
}

impl TableView {
    pub fn of(state: &GameState) -> Self {
        Self {
            round_no: state.round_no,
            revolution: state.pot.revolution(),
            current_pot: state.pot.current().to_vec(),
            full_pot: state.pot.history().to_vec(),
            player_hand: state.hand(Seat::Human).to_vec(),
            bot_hand_count: state.hand(Seat::Bot).len(),
            turn: state.turn(),
            round_active: state.is_round_active(),
            game_over: state.is_game_over(),
            wins: state.wins,
            outcome: state.outcome(),
        }
    }
}
