//! Core card-related types: Card, Rank, Suit

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Suited ranks in ascending climbing order: 3 is weakest, 2 is strongest.
/// The declaration order is the normal-mode strength order, so the enum
/// discriminant doubles as a rank's strength index among suited ranks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];
}

/// A single card of the 54-card deck. The two Jokers are indistinguishable,
/// so equality is purely structural and a hand is a multiset of values.
// Note: Ord on Card is only for stable sorting and multiset comparison:
// suited cards by rank then suit (C<D<H<S), Jokers last. Do not use it for
// strength; all strength comparisons go through strength_index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Card {
    Suited { rank: Rank, suit: Suit },
    Joker,
}

impl Card {
    pub fn suited(rank: Rank, suit: Suit) -> Card {
        Card::Suited { rank, suit }
    }

    /// Rank of a suited card; `None` for a Joker.
    pub fn value(self) -> Option<Rank> {
        match self {
            Card::Suited { rank, .. } => Some(rank),
            Card::Joker => None,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Card::Joker)
    }
}
