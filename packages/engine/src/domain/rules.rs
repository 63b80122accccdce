//! Fixed parameters of the two-seat match.

pub const SEATS: usize = 2;
pub const JOKERS_IN_DECK: usize = 2;
pub const DECK_SIZE: usize = 54; // 13 ranks x 4 suits + 2 Jokers
pub const CARDS_PER_HAND: usize = DECK_SIZE / SEATS;
pub const TOTAL_ROUNDS: u8 = 3;
pub const TRADE_COUNT: usize = 2;
