//! RNG seed derivation for deterministic per-round dealing.

/// Derive the shuffle seed for one round from the per-game seed.
///
/// Unique per (game, round), so every round of a seeded match reshuffles
/// differently while the whole match stays reproducible from a single seed.
pub fn derive_dealing_seed(game_seed: u64, round_no: u8) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(1)
}
