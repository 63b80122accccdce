//! Set logic: validity, strength comparison, four-of-a-kind detection, and
//! enumeration of legal plays against a pot.

use super::cards_types::{Card, Rank, Suit};

/// Position of a set's base value in the mode-appropriate strength sequence.
///
/// Normal mode orders the suited ranks 3..2 and appends the Joker (index 13);
/// the higher index wins. Revolution prepends the Joker (index 0) and the
/// lower index wins. Only the 13 suited ranks invert between modes; the Joker
/// outranks everything in both.
pub fn strength_index(value: Option<Rank>, revolution: bool) -> usize {
    match (value, revolution) {
        (Some(rank), false) => rank as usize,
        (None, false) => Rank::Two as usize + 1,
        (Some(rank), true) => rank as usize + 1,
        (None, true) => 0,
    }
}

/// Rank shared by the non-Joker cards of a set; `None` when the set is all
/// Jokers.
pub fn base_rank(set: &[Card]) -> Option<Rank> {
    set.iter().find_map(|c| c.value())
}

/// A playable set: non-empty, every non-Joker card on one base rank, Jokers
/// standing in for anything.
pub fn is_valid_set(set: &[Card]) -> bool {
    if set.is_empty() {
        return false;
    }
    match base_rank(set) {
        Some(base) => set.iter().all(|c| c.value().map_or(true, |r| r == base)),
        None => true,
    }
}

/// Exactly four cards on one base rank, Jokers allowed, but at least one
/// non-Joker anchor.
pub fn is_four_of_a_kind(set: &[Card]) -> bool {
    if set.len() != 4 {
        return false;
    }
    let Some(base) = base_rank(set) else {
        return false;
    };
    set.iter().all(|c| c.value().map_or(true, |r| r == base))
}

fn same_multiset(a: &[Card], b: &[Card]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

/// Whether `set` takes the pot under the current mode.
///
/// An empty pot is always beaten (opening lead). Replaying the same multiset
/// is a non-improvement and loses, as does any size mismatch. A lone Joker on
/// the table falls to the three of spades regardless of ranking; everything
/// else is decided by `strength_index` in the mode's direction.
pub fn set_beats_pot(set: &[Card], pot: &[Card], revolution: bool) -> bool {
    if pot.is_empty() {
        return true;
    }
    if set.len() != pot.len() {
        return false;
    }
    if same_multiset(set, pot) {
        return false;
    }

    if pot == [Card::Joker] && set == [Card::suited(Rank::Three, Suit::Spades)] {
        return true;
    }

    let set_idx = strength_index(base_rank(set), revolution);
    let pot_idx = strength_index(base_rank(pot), revolution);
    if revolution {
        set_idx < pot_idx
    } else {
        set_idx > pot_idx
    }
}

/// Canonical structural options for opening a fresh pot, in hand order:
/// every single, the first 2/3/4 of each value group, and for each group of
/// exactly three, the triple plus one Joker.
fn lead_options(hand: &[Card]) -> Vec<Vec<Card>> {
    let mut options: Vec<Vec<Card>> = hand.iter().map(|&c| vec![c]).collect();

    // Group by value, preserving first-appearance order so enumeration (and
    // therefore downstream tie-breaking) is deterministic.
    let mut groups: Vec<(Option<Rank>, Vec<Card>)> = Vec::new();
    for &card in hand {
        let value = card.value();
        match groups.iter_mut().find(|(v, _)| *v == value) {
            Some((_, members)) => members.push(card),
            None => groups.push((value, vec![card])),
        }
    }

    for (_, members) in &groups {
        for take in 2..=4 {
            if members.len() >= take {
                options.push(members[..take].to_vec());
            }
        }
    }

    // A triple can borrow a Joker to form a set of four.
    if let Some(joker) = hand.iter().copied().find(|c| c.is_joker()) {
        for (_, members) in &groups {
            if members.len() == 3 {
                let mut set = members.clone();
                set.push(joker);
                options.push(set);
            }
        }
    }

    options
}

/// Every size-`k` combination of `cards`, in index order.
fn combinations(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
    fn recurse(
        cards: &[Card],
        k: usize,
        start: usize,
        current: &mut Vec<Card>,
        out: &mut Vec<Vec<Card>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..cards.len() {
            current.push(cards[i]);
            recurse(cards, k, i + 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    let mut current = Vec::new();
    recurse(cards, k, 0, &mut current, &mut out);
    out
}

/// Candidate plays the rules would accept right now.
///
/// Leading uses the canonical structural options; following enumerates every
/// combination matching the pot's size, with no pruning. Both paths are
/// filtered down to well-formed sets that beat the pot.
pub fn legal_plays(hand: &[Card], pot: &[Card], revolution: bool) -> Vec<Vec<Card>> {
    let raw = if pot.is_empty() {
        lead_options(hand)
    } else {
        combinations(hand, pot.len())
    };
    raw.into_iter()
        .filter(|set| is_valid_set(set) && set_beats_pot(set, pot, revolution))
        .collect()
}
