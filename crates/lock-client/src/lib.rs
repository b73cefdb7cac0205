//! Client for the token-lock staking program.
//!
//! Derives the program's addresses, decodes lock records, quotes accrued
//! rewards, and prepares unsigned `Lock` / `Claim` / `Unlock` instructions
//! for an external wallet to sign. Network access goes through the
//! [`rpc::AccountReader`] and [`rpc::TokenBalanceReader`] seams supplied by
//! the caller.

pub mod amount;
pub mod client;
pub mod config;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod resolver;
pub mod reward;
pub mod rpc;
pub mod state;

// Re-export key public types for ergonomic imports.
pub use amount::{check_lockable, parse_ui_amount};
pub use client::LockClient;
pub use config::{LockProgramConfig, ResolvedConfig};
pub use error::{DecodeError, LockError};
pub use instruction::{
    build_claim_instruction, build_lock_instruction, build_unlock_instruction, LockInstruction,
};
pub use pda::{derive_associated_token_address, derive_lock_address, LOCK_SEED};
pub use resolver::{get_balance, get_decimals, DEFAULT_DECIMALS};
pub use reward::{compute_reward, split_owner_fee, to_ui_amount, RewardQuote, RewardSplit};
pub use rpc::{AccountReader, RpcError, TokenBalanceReader};
pub use state::{decode_lock_record, LockPeriod, LockRecord, LOCK_RECORD_LAYOUT, LOCK_RECORD_LEN};
