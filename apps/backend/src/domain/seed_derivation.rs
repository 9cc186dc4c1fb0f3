//! RNG seed derivation for reproducible command handling.
//!
//! The facade owns one base seed. Every accepted command gets its own RNG
//! seeded from `(base, sequence)`, so replaying the same commands against a
//! service with the same base seed reproduces every shuffle and deal.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive the seed for the `sequence`-th command handled by a service.
///
/// SplitMix64 finalizer over the combined inputs: adjacent sequence
/// numbers map to unrelated seeds.
pub fn derive_command_seed(base_seed: u64, sequence: u64) -> u64 {
    let mut z = base_seed
        .wrapping_add(sequence.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(1);
    z ^= z >> 30;
    z = z.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z ^= z >> 27;
    z = z.wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// A fresh RNG for one command.
pub fn command_rng(base_seed: u64, sequence: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_command_seed(base_seed, sequence))
}
