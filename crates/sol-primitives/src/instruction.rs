//! Unsigned instruction values.
//!
//! An [`Instruction`] is what a program client produces and an external
//! wallet compiles into a transaction message and signs. It is immutable
//! once built; the account order and the signer/writable flags are part of
//! the target program's wire contract.

use serde::Serialize;

use crate::address::{serialize_base58, Address};

/// A single account reference in a Solana instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountMeta {
    #[serde(serialize_with = "serialize_base58")]
    pub pubkey: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    /// Signer, read-only.
    pub fn readonly_signer(pubkey: Address) -> Self {
        Self {
            pubkey,
            is_signer: true,
            is_writable: false,
        }
    }

    /// Non-signer, writable.
    pub fn writable(pubkey: Address) -> Self {
        Self {
            pubkey,
            is_signer: false,
            is_writable: true,
        }
    }

    /// Non-signer, read-only.
    pub fn readonly(pubkey: Address) -> Self {
        Self {
            pubkey,
            is_signer: false,
            is_writable: false,
        }
    }
}

/// A Solana instruction (before it is compiled into a transaction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    #[serde(serialize_with = "serialize_base58")]
    pub program_id: Address,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

impl Instruction {
    /// Leading opcode byte of the payload, if any.
    pub fn opcode(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// Addresses of all accounts that must sign.
    pub fn signers(&self) -> impl Iterator<Item = &Address> {
        self.accounts
            .iter()
            .filter(|meta| meta.is_signer)
            .map(|meta| &meta.pubkey)
    }
}
