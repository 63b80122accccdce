//! Turn mechanics: playing a set, passing, and pot-clearing turn transfer.

use super::cards_logic::is_four_of_a_kind;
use super::cards_types::{Card, Rank, Suit};
use super::round_lifecycle::complete_round;
use super::state::{GameState, Phase, Seat};

/// What a successful play did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The acting seat emptied its hand and won the round.
    pub won_round: bool,
    /// The play cleared the pot, so the acting seat re-leads.
    pub cleared_pot: bool,
}

/// True multiset containment: every card of `set`, duplicates counted, is
/// held in `hand`.
fn holds_all(hand: &[Card], set: &[Card]) -> bool {
    let mut pool = hand.to_vec();
    set.iter()
        .all(|card| match pool.iter().position(|held| held == card) {
            Some(i) => {
                pool.swap_remove(i);
                true
            }
            None => false,
        })
}

/// Remove exactly one instance of each played card from `hand`.
fn remove_played(hand: &mut Vec<Card>, set: &[Card]) {
    for card in set {
        if let Some(i) = hand.iter().position(|held| held == card) {
            hand.remove(i);
        }
    }
}

/// Attempt a play for `seat`. `None` means the request was rejected (wrong
/// turn, cards not held, malformed set, or too weak) and state is unchanged.
pub fn try_play(state: &mut GameState, seat: Seat, set: &[Card]) -> Option<PlayOutcome> {
    if state.turn() != Some(seat) {
        return None;
    }
    if !holds_all(state.hand(seat), set) {
        return None;
    }

    // Snapshot before the evaluator replaces the live set: the override below
    // is judged against the pot as the player saw it.
    let led_joker = state.pot.current() == [Card::Joker];

    if !state.pot.play(set) {
        return None;
    }

    remove_played(&mut state.hands[seat.index()], set);
    state.last_to_play = Some(seat);

    if state.hand(seat).is_empty() {
        complete_round(state, seat);
        return Some(PlayOutcome {
            won_round: true,
            cleared_pot: false,
        });
    }

    let clears = set.iter().any(|c| c.value() == Some(Rank::Eight))
        || is_four_of_a_kind(set)
        || (led_joker && set == [Card::suited(Rank::Three, Suit::Spades)]);

    if clears {
        end_pot(state, seat);
        return Some(PlayOutcome {
            won_round: false,
            cleared_pot: true,
        });
    }

    state.phase = Phase::Turn(seat.opponent());
    Some(PlayOutcome {
        won_round: false,
        cleared_pot: false,
    })
}

/// Attempt a pass for `seat`. A pass in response to the opponent's
/// uncontested play surrenders the pot: it is cleared and the opponent
/// re-leads. Otherwise the turn simply changes sides. Passing never moves
/// cards.
pub fn try_pass(state: &mut GameState, seat: Seat) -> bool {
    if state.turn() != Some(seat) {
        return false;
    }
    if state.last_to_play == Some(seat.opponent()) {
        end_pot(state, seat.opponent());
    } else {
        state.phase = Phase::Turn(seat.opponent());
    }
    true
}

/// The pot is decided: clear the table and hand the lead to its winner.
fn end_pot(state: &mut GameState, winner: Seat) {
    state.pot.clear();
    state.last_to_play = Some(winner);
    state.phase = Phase::Turn(winner);
}
