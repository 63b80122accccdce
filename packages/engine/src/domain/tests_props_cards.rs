//! Property tests for the ranking model.
//!
//! Properties tested:
//! - Revolution exactly reverses the relative order of distinct suited ranks
//! - The Joker outranks every suited rank in both modes

use proptest::prelude::*;

use crate::domain::cards_logic::strength_index;
use crate::domain::test_gens;

proptest! {
    #[test]
    fn prop_revolution_reverses_suited_comparisons(
        a in test_gens::rank(),
        b in test_gens::rank(),
    ) {
        prop_assume!(a != b);
        let normal = strength_index(Some(a), false) > strength_index(Some(b), false);
        let flipped = strength_index(Some(a), true) > strength_index(Some(b), true);
        prop_assert_eq!(normal, !flipped);
    }

    #[test]
    fn prop_joker_outranks_every_suited_rank(rank in test_gens::rank()) {
        // Normal mode resolves upward, revolution downward; the Joker sits on
        // the winning end of both sequences.
        prop_assert!(strength_index(None, false) > strength_index(Some(rank), false));
        prop_assert!(strength_index(None, true) < strength_index(Some(rank), true));
    }
}
