// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn suited_card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::suited(rank, suit))
}

/// Any card, Jokers included (weighted down so most sets stay suited).
pub fn card() -> impl Strategy<Value = Card> {
    prop_oneof![
        9 => suited_card(),
        1 => Just(Card::Joker),
    ]
}

/// A small non-empty multiset of cards; not necessarily a valid play set.
pub fn card_set(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card(), 1..=max)
}
