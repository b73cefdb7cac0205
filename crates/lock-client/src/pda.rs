//! Lock program address derivation.

use sol_primitives::{find_program_address, Address};

use crate::error::LockError;

/// Seed prefix of the per-user lock record.
pub const LOCK_SEED: &[u8] = b"lock";

/// Derive the lock record address (and bump) for `owner` under `program_id`.
pub fn derive_lock_address(
    owner: &Address,
    program_id: &Address,
) -> Result<(Address, u8), LockError> {
    Ok(find_program_address(&[LOCK_SEED, owner.as_ref()], program_id)?)
}

/// Associated token account of `owner` for `mint`. The owner may be a user
/// wallet or a lock record.
pub fn derive_associated_token_address(
    owner: &Address,
    mint: &Address,
) -> Result<Address, LockError> {
    Ok(sol_primitives::derive_associated_token_address(owner, mint)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sol_primitives::{create_program_address, is_on_curve};

    const PROGRAM: Address = [0x71u8; 32];

    #[test]
    fn lock_address_is_deterministic() {
        let owner = [0x42u8; 32];
        let first = derive_lock_address(&owner, &PROGRAM).unwrap();
        let second = derive_lock_address(&owner, &PROGRAM).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn lock_address_uses_lock_prefix_and_owner_seed() {
        let owner = [0x42u8; 32];
        let (address, bump) = derive_lock_address(&owner, &PROGRAM).unwrap();
        let expected = create_program_address(&[b"lock", &owner, &[bump]], &PROGRAM).unwrap();
        assert_eq!(expected, Some(address));
        assert!(!is_on_curve(&address));
    }

    #[test]
    fn each_owner_has_their_own_record() {
        let (a, _) = derive_lock_address(&[1u8; 32], &PROGRAM).unwrap();
        let (b, _) = derive_lock_address(&[2u8; 32], &PROGRAM).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn lock_record_ata_differs_from_user_ata() {
        let owner = [0x42u8; 32];
        let mint = [0x8au8; 32];
        let (lock, _) = derive_lock_address(&owner, &PROGRAM).unwrap();

        let user_ata = derive_associated_token_address(&owner, &mint).unwrap();
        let lock_ata = derive_associated_token_address(&lock, &mint).unwrap();
        assert_ne!(user_ata, lock_ata);
    }
}
