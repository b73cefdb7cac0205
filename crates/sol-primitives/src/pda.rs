//! Program-derived address (PDA) search.
//!
//! A PDA is `SHA-256(seed_0 || .. || seed_n || bump || program_id || "ProgramDerivedAddress")`
//! for the highest bump in `255..=0` whose digest is NOT a valid Ed25519
//! point, so no private key can ever sign for it. The same search backs both
//! program-owned records and associated token accounts; callers only choose
//! the seeds and the owning program.

use sha2::{Digest, Sha256};

use crate::address::Address;
use crate::error::SolError;

/// Maximum length of a single seed, in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds, including the bump.
pub const MAX_SEEDS: usize = 16;

/// The string appended to PDA derivation: "ProgramDerivedAddress".
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Find the canonical PDA for `seeds` under `program_id`.
///
/// Returns the address together with the winning bump. Fails with
/// [`SolError::DerivationExhausted`] when all 256 candidates land on the
/// curve, and with a seed error when the seeds are out of bounds.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<(Address, u8), SolError> {
    check_seeds(seeds, 1)?;

    for bump in (0u8..=255).rev() {
        if let Some(address) = hash_off_curve(seeds, &[bump], program_id) {
            return Ok((address, bump));
        }
    }

    Err(SolError::DerivationExhausted)
}

/// Create a PDA from seeds that already include the bump.
///
/// Returns `Ok(None)` when the digest falls on the curve, i.e. the seeds do
/// not describe a valid PDA.
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<Option<Address>, SolError> {
    check_seeds(seeds, 0)?;
    Ok(hash_off_curve(seeds, &[], program_id))
}

/// Check if 32 bytes represent a valid Ed25519 curve point.
///
/// Uses `curve25519-dalek` to attempt decompression. If it succeeds, the
/// point is on the curve.
pub fn is_on_curve(bytes: &Address) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}

fn check_seeds(seeds: &[&[u8]], reserved: usize) -> Result<(), SolError> {
    if seeds.len() + reserved > MAX_SEEDS {
        return Err(SolError::TooManySeeds(seeds.len() + reserved));
    }
    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(SolError::MaxSeedLengthExceeded {
            index,
            len: seed.len(),
        });
    }
    Ok(())
}

fn hash_off_curve(seeds: &[&[u8]], bump_seed: &[u8], program_id: &Address) -> Option<Address> {
    let mut hasher = Sha256::new();

    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update(bump_seed);
    hasher.update(program_id);
    hasher.update(PDA_MARKER);

    let hash: Address = hasher.finalize().into();

    if is_on_curve(&hash) {
        return None;
    }

    Some(hash)
}
