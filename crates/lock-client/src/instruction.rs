//! Lock program instructions.
//!
//! The program decodes its instruction data as a Borsh enum: one opcode byte
//! followed by the variant's fields in little-endian order.
//!
//! ```text
//! opcode  variant  payload
//!      0  Lock     amount u64 LE   (9 bytes total)
//!      1  Unlock   -               (1 byte)
//!      2  Claim    -               (1 byte)
//! ```
//!
//! Account lists below are the program's wire contract. The order and the
//! signer/writable flags must match exactly or the transaction is rejected.

use sol_primitives::{
    AccountMeta, Address, Instruction, SYSVAR_CLOCK_ID, SYSVAR_RENT_ID, TOKEN_PROGRAM_ID,
};

use crate::error::{DecodeError, LockError};

pub const LOCK_OPCODE: u8 = 0;
pub const UNLOCK_OPCODE: u8 = 1;
pub const CLAIM_OPCODE: u8 = 2;

/// Instruction payloads understood by the lock program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockInstruction {
    /// Move `amount` raw units from the user into the lock record's token
    /// account. The program picks the unlock date.
    Lock { amount: u64 },
    /// Reset the lock record once the unlock date has passed.
    Unlock,
    /// Mint the accrued reward. The program recomputes the amount from the
    /// record's own timestamps, so no amount is sent.
    Claim,
}

impl LockInstruction {
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Lock { .. } => LOCK_OPCODE,
            Self::Unlock => UNLOCK_OPCODE,
            Self::Claim => CLAIM_OPCODE,
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        match self {
            Self::Lock { amount } => {
                let mut data = Vec::with_capacity(9);
                data.push(LOCK_OPCODE);
                data.extend_from_slice(&amount.to_le_bytes());
                data
            }
            Self::Unlock | Self::Claim => vec![self.opcode()],
        }
    }

    /// Decode instruction data.
    ///
    /// The input must hold exactly one instruction, as the program's Borsh
    /// decoder requires: bytes after a complete payload fail with
    /// [`DecodeError::TrailingBytes`].
    pub fn unpack(data: &[u8]) -> Result<Self, DecodeError> {
        let Some((&opcode, rest)) = data.split_first() else {
            return Err(DecodeError::TooShort {
                expected: 1,
                actual: 0,
            });
        };

        match opcode {
            LOCK_OPCODE => {
                let amount = rest
                    .get(..8)
                    .and_then(|bytes| bytes.try_into().ok())
                    .map(u64::from_le_bytes)
                    .ok_or(DecodeError::TruncatedPayload {
                        opcode,
                        expected: 8,
                        actual: rest.len(),
                    })?;
                expect_consumed(opcode, &rest[8..])?;
                Ok(Self::Lock { amount })
            }
            UNLOCK_OPCODE => {
                expect_consumed(opcode, rest)?;
                Ok(Self::Unlock)
            }
            CLAIM_OPCODE => {
                expect_consumed(opcode, rest)?;
                Ok(Self::Claim)
            }
            other => Err(DecodeError::UnknownOpcode(other)),
        }
    }
}

fn expect_consumed(opcode: u8, tail: &[u8]) -> Result<(), DecodeError> {
    if tail.is_empty() {
        Ok(())
    } else {
        Err(DecodeError::TrailingBytes {
            opcode,
            extra: tail.len(),
        })
    }
}

/// Build a `Lock` instruction.
///
/// # Arguments
///
/// * `program_id` - The lock program.
/// * `user` - Wallet locking its tokens (signer).
/// * `lock_record` - The user's lock record PDA (writable).
/// * `user_token_account` - Source token account (writable).
/// * `lock_token_account` - The lock record's associated token account,
///   which receives the tokens (writable).
/// * `amount` - Raw token units to lock; must be > 0.
///
/// Balance checks are the caller's job. An amount above the user's balance
/// is rejected on-chain, not here.
pub fn build_lock_instruction(
    program_id: &Address,
    user: &Address,
    lock_record: &Address,
    user_token_account: &Address,
    lock_token_account: &Address,
    amount: u64,
) -> Result<Instruction, LockError> {
    if amount == 0 {
        return Err(LockError::InvalidAmount("lock amount must be > 0".into()));
    }

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::readonly_signer(*user),
            AccountMeta::writable(*lock_record),
            AccountMeta::writable(*user_token_account),
            AccountMeta::writable(*lock_token_account),
            // Transfer authority over the source account.
            AccountMeta::readonly(*user),
            AccountMeta::readonly(TOKEN_PROGRAM_ID),
            AccountMeta::readonly(SYSVAR_RENT_ID),
            AccountMeta::readonly(SYSVAR_CLOCK_ID),
        ],
        data: LockInstruction::Lock { amount }.pack(),
    })
}

/// Build a `Claim` instruction.
///
/// `owner_token_account` is the protocol owner's token account that receives
/// the 1% fee; `mint_authority` is whatever the program mints rewards with.
pub fn build_claim_instruction(
    program_id: &Address,
    user: &Address,
    lock_record: &Address,
    user_token_account: &Address,
    owner_token_account: &Address,
    mint: &Address,
    mint_authority: &Address,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::readonly_signer(*user),
            AccountMeta::writable(*lock_record),
            AccountMeta::writable(*user_token_account),
            AccountMeta::writable(*owner_token_account),
            AccountMeta::writable(*mint),
            AccountMeta::readonly(*mint_authority),
            AccountMeta::readonly(TOKEN_PROGRAM_ID),
            AccountMeta::readonly(SYSVAR_CLOCK_ID),
        ],
        data: LockInstruction::Claim.pack(),
    }
}

/// Build an `Unlock` instruction.
pub fn build_unlock_instruction(
    program_id: &Address,
    user: &Address,
    lock_record: &Address,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::readonly_signer(*user),
            AccountMeta::writable(*lock_record),
            AccountMeta::readonly(SYSVAR_CLOCK_ID),
        ],
        data: LockInstruction::Unlock.pack(),
    }
}
