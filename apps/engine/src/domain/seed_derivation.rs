//! RNG seed derivation utilities for deterministic rounds.
//!
//! A room draws one base seed when it is created; each round derives its own
//! dealing seed from it so replays with the same base seed deal the same hands.

/// Derive a seed for dealing cards in a round.
///
/// Unique per (room seed, round) combination.
pub fn derive_dealing_seed(room_seed: u64, round_no: u32) -> u64 {
    room_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive a seed for a bot seated at `seat` in a given round.
///
/// Seedable bots (e.g. the random bot) get a distinct stream per seat.
pub fn derive_bot_seed(room_seed: u64, round_no: u32, seat: u8) -> u64 {
    room_seed
        .wrapping_add((round_no as u64).wrapping_mul(10_000))
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
