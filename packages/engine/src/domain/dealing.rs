//! Deterministic card dealing.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::cards_types::{Card, Rank, Suit};
use super::rules::{CARDS_PER_HAND, DECK_SIZE, SEATS};

/// The full 54-card deck in canonical order: suited cards rank-major, then
/// the two Jokers.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card::suited(rank, suit));
        }
    }
    deck.extend([Card::Joker, Card::Joker]);
    deck
}

/// Shuffle the deck with the given seed and split it evenly between the two
/// seats.
pub fn deal_hands(seed: u64) -> [Vec<Card>; SEATS] {
    let mut deck = full_deck();
    let mut rng = StdRng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    let second = deck.split_off(CARDS_PER_HAND);
    [deck, second]
}
