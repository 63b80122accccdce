//! Unit tests for dealing, leadership, the inter-round trade, and match
//! completion.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::dealing::full_deck;
use crate::domain::round_lifecycle::{complete_round, start_round, trading_phase};
use crate::domain::rules::CARDS_PER_HAND;
use crate::domain::state::{GameState, MatchOutcome, Phase, Seat};

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

#[test]
fn round_one_leader_holds_the_three_of_diamonds() {
    let three_d = Card::suited(Rank::Three, Suit::Diamonds);
    for seed in 0..20u64 {
        let mut state = GameState::new(seed);
        start_round(&mut state);
        let leader = state.turn().unwrap();
        assert!(state.hand(leader).contains(&three_d));
        assert!(!state.hand(leader.opponent()).contains(&three_d));
    }
}

#[test]
fn dealing_partitions_the_deck_each_round() {
    for round_no in 1..=3u8 {
        let mut state = GameState::new(11);
        state.round_no = round_no;
        if round_no > 1 {
            state.last_round_loser = Some(Seat::Human);
        }
        start_round(&mut state);

        assert_eq!(state.hand(Seat::Human).len(), CARDS_PER_HAND);
        assert_eq!(state.hand(Seat::Bot).len(), CARDS_PER_HAND);

        let mut union: Vec<Card> = state
            .hand(Seat::Human)
            .iter()
            .chain(state.hand(Seat::Bot).iter())
            .copied()
            .collect();
        union.sort();
        let mut deck = full_deck();
        deck.sort();
        assert_eq!(union, deck);
    }
}

#[test]
fn start_round_resets_pot_and_gives_the_lead_to_the_loser() {
    let mut state = GameState::new(3);
    assert!(state.pot.play(&cards(&["5H", "5D", "5S", "5C"])));
    assert!(state.pot.revolution());

    state.round_no = 2;
    state.last_round_loser = Some(Seat::Bot);
    start_round(&mut state);

    assert!(!state.pot.revolution());
    assert!(state.pot.current().is_empty());
    assert!(state.pot.history().is_empty());
    assert_eq!(state.turn(), Some(Seat::Bot));
}

#[test]
fn losing_human_trades_strongest_for_bots_weakest() {
    let mut state = GameState::new(0);
    state.hands = [cards(&["2H", "3C", "KD"]), cards(&["4C", "5D", "9S"])];
    state.last_round_loser = Some(Seat::Human);
    trading_phase(&mut state);
    assert_eq!(state.hand(Seat::Human), cards(&["3C", "4C", "5D"]).as_slice());
    assert_eq!(state.hand(Seat::Bot), cards(&["9S", "2H", "KD"]).as_slice());
}

#[test]
fn losing_bot_pays_strongest_for_humans_first_two_in_hand_order() {
    let mut state = GameState::new(0);
    // The human's first two cards are not its weakest; they go anyway.
    state.hands = [cards(&["KD", "3C", "4H"]), cards(&["2H", "5D", "9S"])];
    state.last_round_loser = Some(Seat::Bot);
    trading_phase(&mut state);
    assert_eq!(state.hand(Seat::Human), cards(&["4H", "2H", "9S"]).as_slice());
    assert_eq!(state.hand(Seat::Bot), cards(&["5D", "KD", "3C"]).as_slice());
}

#[test]
fn jokers_trade_as_the_strongest_cards() {
    let mut state = GameState::new(0);
    state.hands = [cards(&["Joker", "Joker", "3C"]), cards(&["4C", "5D", "9S"])];
    state.last_round_loser = Some(Seat::Human);
    trading_phase(&mut state);
    assert_eq!(state.hand(Seat::Human), cards(&["3C", "4C", "5D"]).as_slice());
    assert_eq!(
        state.hand(Seat::Bot),
        cards(&["9S", "Joker", "Joker"]).as_slice()
    );
}

#[test]
fn no_trade_without_a_recorded_loser() {
    let mut state = GameState::new(0);
    state.hands = [cards(&["2H", "3C"]), cards(&["4C", "5D"])];
    trading_phase(&mut state);
    assert_eq!(state.hand(Seat::Human), cards(&["2H", "3C"]).as_slice());
    assert_eq!(state.hand(Seat::Bot), cards(&["4C", "5D"]).as_slice());
}

#[test]
fn complete_round_advances_and_finishes() {
    let mut state = GameState::new(5);
    start_round(&mut state);

    complete_round(&mut state, Seat::Bot);
    assert_eq!(state.wins, [0, 1]);
    assert_eq!(state.last_round_loser, Some(Seat::Human));
    assert_eq!(state.round_no, 2);
    assert_eq!(state.turn(), Some(Seat::Human));

    complete_round(&mut state, Seat::Human);
    assert_eq!(state.round_no, 3);
    assert_eq!(state.turn(), Some(Seat::Bot));

    complete_round(&mut state, Seat::Human);
    assert!(state.is_game_over());
    assert_eq!(state.wins, [2, 1]);
    assert_eq!(state.outcome(), Some(MatchOutcome::HumanWin));
}

#[test]
fn outcome_is_none_mid_match_and_draw_on_equal_tallies() {
    let mut state = GameState::new(5);
    assert_eq!(state.outcome(), None);
    state.wins = [1, 1];
    state.phase = Phase::GameOver;
    assert_eq!(state.outcome(), Some(MatchOutcome::Draw));
}
