//! SPL Token conventions.
//!
//! Associated token account (ATA) derivation and mint account parsing,
//! without pulling in the `spl-token` crates.

use crate::address::Address;
use crate::error::SolError;
use crate::ids::{ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::pda::find_program_address;

/// Size of an SPL mint account.
pub const MINT_ACCOUNT_LEN: usize = 82;

/// Offset of the `decimals` byte inside a mint account.
///
/// Layout: mint_authority `COption<Pubkey>` (36) + supply `u64` (8) = 44.
pub const MINT_DECIMALS_OFFSET: usize = 44;

/// Derive the associated token account address for an owner + mint pair.
///
/// The ATA is a PDA with seeds `[owner, token_program_id, mint]` derived
/// from the Associated Token Account program. The owner may itself be a PDA
/// (e.g. a lock record holding escrowed tokens).
pub fn derive_associated_token_address(
    owner: &Address,
    mint: &Address,
) -> Result<Address, SolError> {
    find_program_address(
        &[owner.as_ref(), &TOKEN_PROGRAM_ID, mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .map(|(address, _bump)| address)
}

/// Read the `decimals` byte from raw mint account data.
///
/// Only the prefix up to and including the decimals byte is required, so
/// Token-2022 mints with extensions parse the same way.
pub fn mint_decimals(data: &[u8]) -> Result<u8, SolError> {
    data.get(MINT_DECIMALS_OFFSET).copied().ok_or_else(|| {
        SolError::InvalidMintData(format!(
            "expected at least {} bytes, got {}",
            MINT_DECIMALS_OFFSET + 1,
            data.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address;
    use crate::pda::is_on_curve;

    #[test]
    fn ata_is_not_on_curve() {
        let ata = derive_associated_token_address(&[0xAA; 32], &[0xBB; 32]).unwrap();
        assert!(!is_on_curve(&ata));
    }

    #[test]
    fn ata_derivation_is_deterministic() {
        let a = derive_associated_token_address(&[0x11; 32], &[0x22; 32]).unwrap();
        let b = derive_associated_token_address(&[0x11; 32], &[0x22; 32]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_owners_give_different_atas() {
        let mint = [0xFFu8; 32];
        let a = derive_associated_token_address(&[0x01; 32], &mint).unwrap();
        let b = derive_associated_token_address(&[0x02; 32], &mint).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn different_mints_give_different_atas() {
        let owner = [0xAAu8; 32];
        let a = derive_associated_token_address(&owner, &[0x01; 32]).unwrap();
        let b = derive_associated_token_address(&owner, &[0x02; 32]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn ata_matches_manual_pda_search() {
        let owner = [0x33u8; 32];
        let mint =
            address::address_to_bytes("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v").unwrap();

        let seeds: &[&[u8]] = &[&owner, &TOKEN_PROGRAM_ID, &mint];
        let (expected, _) = find_program_address(seeds, &ASSOCIATED_TOKEN_PROGRAM_ID).unwrap();
        assert_eq!(
            derive_associated_token_address(&owner, &mint).unwrap(),
            expected
        );
    }

    #[test]
    fn mint_decimals_reads_offset_44() {
        let mut data = vec![0u8; MINT_ACCOUNT_LEN];
        data[MINT_DECIMALS_OFFSET] = 6;
        assert_eq!(mint_decimals(&data).unwrap(), 6);
    }

    #[test]
    fn mint_decimals_accepts_minimal_prefix() {
        let mut data = vec![0u8; MINT_DECIMALS_OFFSET + 1];
        data[MINT_DECIMALS_OFFSET] = 9;
        assert_eq!(mint_decimals(&data).unwrap(), 9);
    }

    #[test]
    fn mint_decimals_short_data_fails() {
        let err = mint_decimals(&[0u8; 44]).unwrap_err();
        assert_eq!(
            err,
            SolError::InvalidMintData("expected at least 45 bytes, got 44".into())
        );
    }
}
