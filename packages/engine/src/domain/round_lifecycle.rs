//! Round boundaries: dealing, leadership, the inter-round trade, and match
//! completion.

use super::cards_logic::strength_index;
use super::cards_types::{Card, Rank, Suit};
use super::dealing::deal_hands;
use super::rules::{SEATS, TOTAL_ROUNDS, TRADE_COUNT};
use super::seed_derivation::derive_dealing_seed;
use super::state::{GameState, Phase, Seat};

/// Deal and start the current round: fresh pot in normal mode, seeded
/// shuffle, the round 2-3 trade, then leadership per round number.
pub fn start_round(state: &mut GameState) {
    state.phase = Phase::Dealing;
    state.last_to_play = None;
    state.pot.reset_round();

    let seed = derive_dealing_seed(state.game_seed, state.round_no);
    state.hands = deal_hands(seed);

    if state.round_no > 1 {
        trading_phase(state);
    }

    let leader = if state.round_no == 1 {
        // Whoever holds the three of diamonds opens the match.
        let three_d = Card::suited(Rank::Three, Suit::Diamonds);
        if state.hand(Seat::Human).contains(&three_d) {
            Seat::Human
        } else {
            Seat::Bot
        }
    } else {
        // The previous round's loser leads the next one.
        state.last_round_loser.unwrap_or(Seat::Human)
    };
    state.phase = Phase::Turn(leader);
}

/// Fixed strength used for trade selection: normal-mode order, Joker highest,
/// regardless of how the previous round ended.
fn trade_strength(card: Card) -> usize {
    strength_index(card.value(), false)
}

/// The `n` strongest cards of `hand`, strongest first; ties keep hand order.
fn strongest(hand: &[Card], n: usize) -> Vec<Card> {
    let mut sorted = hand.to_vec();
    sorted.sort_by(|a, b| trade_strength(*b).cmp(&trade_strength(*a)));
    sorted.truncate(n);
    sorted
}

/// The `n` weakest cards of `hand`, weakest first; ties keep hand order.
fn weakest(hand: &[Card], n: usize) -> Vec<Card> {
    let mut sorted = hand.to_vec();
    sorted.sort_by_key(|c| trade_strength(*c));
    sorted.truncate(n);
    sorted
}

/// Move one instance of each card in `cards` from `from` to `to`.
fn give(hands: &mut [Vec<Card>; SEATS], from: Seat, to: Seat, cards: &[Card]) {
    for card in cards {
        if let Some(i) = hands[from.index()].iter().position(|held| held == card) {
            let card = hands[from.index()].remove(i);
            hands[to.index()].push(card);
        }
    }
}

/// The inter-round exchange before rounds 2 and 3. The loser pays up: their
/// two strongest cards cross the table. The compensation differs by side: a
/// losing human receives the bot's two weakest, while a losing bot is repaid
/// with the human's first two cards in hand order. Both contributions are
/// selected from the pre-trade hands before anything moves.
pub(crate) fn trading_phase(state: &mut GameState) {
    match state.last_round_loser {
        Some(Seat::Human) => {
            let human_gives = strongest(state.hand(Seat::Human), TRADE_COUNT);
            let bot_gives = weakest(state.hand(Seat::Bot), TRADE_COUNT);
            give(&mut state.hands, Seat::Human, Seat::Bot, &human_gives);
            give(&mut state.hands, Seat::Bot, Seat::Human, &bot_gives);
        }
        Some(Seat::Bot) => {
            let bot_gives = strongest(state.hand(Seat::Bot), TRADE_COUNT);
            let human_gives: Vec<Card> = state
                .hand(Seat::Human)
                .iter()
                .copied()
                .take(TRADE_COUNT)
                .collect();
            give(&mut state.hands, Seat::Bot, Seat::Human, &bot_gives);
            give(&mut state.hands, Seat::Human, Seat::Bot, &human_gives);
        }
        None => {}
    }
}

/// Credit the round to `winner` and either advance to the next round or end
/// the match.
pub fn complete_round(state: &mut GameState, winner: Seat) {
    state.wins[winner.index()] += 1;
    state.last_round_loser = Some(winner.opponent());
    state.phase = Phase::RoundOver;

    if state.round_no >= TOTAL_ROUNDS {
        state.phase = Phase::GameOver;
    } else {
        state.round_no += 1;
        start_round(state);
    }
}
