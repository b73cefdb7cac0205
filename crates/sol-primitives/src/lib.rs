//! Solana building blocks for off-chain program clients.
//!
//! This crate handles Base58 addresses, program-derived address (PDA) search,
//! the associated token account convention, SPL mint parsing, and the plain
//! instruction value types a wallet signs. Like the rest of the workspace it
//! avoids `solana-sdk` (which drags in tokio and 200+ transitive
//! dependencies): hashing is `sha2`, the curve check is `curve25519-dalek`.

pub mod address;
pub mod error;
pub mod ids;
pub mod instruction;
pub mod pda;
pub mod spl_token;

// Re-export key public types for ergonomic imports.
pub use address::{address_to_bytes, bytes_to_address, validate_address, Address};
pub use error::SolError;
pub use ids::{ASSOCIATED_TOKEN_PROGRAM_ID, SYSVAR_CLOCK_ID, SYSVAR_RENT_ID, TOKEN_PROGRAM_ID};
pub use instruction::{AccountMeta, Instruction};
pub use pda::{
    create_program_address, find_program_address, is_on_curve, MAX_SEEDS, MAX_SEED_LEN,
};
pub use spl_token::{derive_associated_token_address, mint_decimals, MINT_DECIMALS_OFFSET};
