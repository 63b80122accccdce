//! Unit tests for the hand evaluator: set predicates and pot state.

use crate::domain::cards_logic::{is_four_of_a_kind, is_valid_set, set_beats_pot};
use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::cards_types::{Card, Rank};
use crate::domain::pot::Pot;

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

#[test]
fn card_values() {
    assert_eq!(cards(&["3S"])[0].value(), Some(Rank::Three));
    assert_eq!(cards(&["10H"])[0].value(), Some(Rank::Ten));
    assert_eq!(Card::Joker.value(), None);
}

#[test]
fn valid_set_accepts_matching_cards() {
    assert!(is_valid_set(&cards(&["5H", "5D", "5C"])));
    assert!(is_valid_set(&cards(&["6H", "Joker"])));
    assert!(is_valid_set(&cards(&["Joker", "Joker"])));
}

#[test]
fn valid_set_rejects_mismatches_and_empty() {
    assert!(!is_valid_set(&cards(&["4H", "5D"])));
    assert!(!is_valid_set(&[]));
}

#[test]
fn higher_single_beats_lower() {
    assert!(set_beats_pot(&cards(&["8H"]), &cards(&["7H"]), false));
    assert!(!set_beats_pot(&cards(&["8H"]), &cards(&["9H"]), false));
}

#[test]
fn empty_pot_is_always_beaten() {
    assert!(set_beats_pot(&cards(&["3C"]), &[], false));
    assert!(set_beats_pot(&cards(&["3C"]), &[], true));
}

#[test]
fn size_mismatch_never_beats() {
    assert!(!set_beats_pot(&cards(&["KH", "KD"]), &cards(&["3C"]), false));
    assert!(!set_beats_pot(&cards(&["KH"]), &cards(&["3C", "3D"]), false));
}

#[test]
fn replaying_the_same_multiset_loses() {
    assert!(!set_beats_pot(
        &cards(&["7H", "7D"]),
        &cards(&["7D", "7H"]),
        false
    ));
}

#[test]
fn three_of_spades_fells_a_lone_joker() {
    // The override, not ranking: only the three of spades does this.
    assert!(set_beats_pot(&cards(&["3S"]), &cards(&["Joker"]), false));
    assert!(!set_beats_pot(&cards(&["3H"]), &cards(&["Joker"]), false));
    // The override fires before the mode comparison, so it holds under
    // revolution too.
    assert!(set_beats_pot(&cards(&["3S"]), &cards(&["Joker"]), true));
    // The reverse direction is plain ranking: a Joker tops a 3S.
    assert!(set_beats_pot(&cards(&["Joker"]), &cards(&["3S"]), false));
}

#[test]
fn revolution_inverts_suited_ranking_only() {
    assert!(set_beats_pot(&cards(&["3C"]), &cards(&["KH"]), true));
    assert!(!set_beats_pot(&cards(&["KH"]), &cards(&["3C"]), true));
    // The Joker stays on top.
    assert!(set_beats_pot(&cards(&["Joker"]), &cards(&["3C"]), true));
    assert!(!set_beats_pot(&cards(&["3C"]), &cards(&["Joker"]), true));
}

#[test]
fn four_of_a_kind_detection() {
    assert!(is_four_of_a_kind(&cards(&["5H", "5D", "5S", "5C"])));
    assert!(is_four_of_a_kind(&cards(&["6H", "6S", "6C", "Joker"])));
    assert!(is_four_of_a_kind(&cards(&["6H", "6S", "Joker", "Joker"])));
    // No non-Joker anchor.
    assert!(!is_four_of_a_kind(&cards(&[
        "Joker", "Joker", "Joker", "Joker"
    ])));
    assert!(!is_four_of_a_kind(&cards(&["5H", "5D", "5S"])));
    assert!(!is_four_of_a_kind(&cards(&["5H", "5D", "5S", "6C"])));
}

#[test]
fn play_installs_the_set() {
    let mut pot = Pot::new();
    assert!(pot.play(&cards(&["7H"])));
    assert!(pot.play(&cards(&["10H"])));
    assert_eq!(pot.current(), cards(&["10H"]).as_slice());
    assert_eq!(pot.history(), cards(&["7H", "10H"]).as_slice());
}

#[test]
fn play_rejects_weaker_set_untouched() {
    let mut pot = Pot::new();
    assert!(pot.play(&cards(&["10H"])));
    assert!(!pot.play(&cards(&["9H"])));
    assert_eq!(pot.current(), cards(&["10H"]).as_slice());
    assert_eq!(pot.history(), cards(&["10H"]).as_slice());
}

#[test]
fn play_rejects_malformed_set() {
    let mut pot = Pot::new();
    assert!(!pot.play(&cards(&["4H", "5D"])));
    assert!(!pot.play(&[]));
    assert!(pot.current().is_empty());
}

#[test]
fn an_eight_clears_the_table() {
    let mut pot = Pot::new();
    assert!(pot.play(&cards(&["7H"])));
    assert!(pot.play(&cards(&["8D"])));
    assert!(pot.current().is_empty());
    assert!(pot.history().is_empty());
}

#[test]
fn four_of_a_kind_toggles_revolution() {
    let mut pot = Pot::new();
    assert!(pot.play(&cards(&["5H", "5D", "5S", "5C"])));
    assert!(pot.revolution());
    // A second quad flips it back; under revolution the fours beat the fives.
    assert!(pot.play(&cards(&["4H", "4D", "4S", "4C"])));
    assert!(!pot.revolution());
}

#[test]
fn four_eights_clear_and_toggle_in_one_play() {
    let mut pot = Pot::new();
    assert!(pot.play(&cards(&["8H", "8D", "8S", "8C"])));
    assert!(pot.current().is_empty());
    assert!(pot.history().is_empty());
    assert!(pot.revolution());
}

#[test]
fn clear_empties_both_records_but_keeps_mode() {
    let mut pot = Pot::new();
    assert!(pot.play(&cards(&["5H", "5D", "5S", "5C"])));
    pot.clear();
    assert!(pot.current().is_empty());
    assert!(pot.history().is_empty());
    assert!(pot.revolution());
}

#[test]
fn reset_round_restores_normal_mode() {
    let mut pot = Pot::new();
    assert!(pot.play(&cards(&["5H", "5D", "5S", "5C"])));
    pot.reset_round();
    assert!(!pot.revolution());
    assert!(pot.current().is_empty());
    assert!(pot.history().is_empty());
}
