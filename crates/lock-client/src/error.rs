use sol_primitives::SolError;
use thiserror::Error;

use crate::rpc::RpcError;

/// Byte-level decoding failures for lock accounts and instruction payloads.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("input too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("unknown instruction opcode: {0}")]
    UnknownOpcode(u8),

    #[error("opcode {opcode} payload truncated: expected {expected} bytes, got {actual}")]
    TruncatedPayload {
        opcode: u8,
        expected: usize,
        actual: usize,
    },

    #[error("opcode {opcode} has {extra} unexpected trailing bytes")]
    TrailingBytes { opcode: u8, extra: usize },
}

/// Lock-program client errors.
#[derive(Debug, Error)]
pub enum LockError {
    #[error("malformed data: {0}")]
    Malformed(#[from] DecodeError),

    #[error("address derivation failed: {0}")]
    Derivation(#[from] SolError),

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] RpcError),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("no token account for this mint")]
    NoTokenAccount,

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: u64, available: u64 },

    #[error("no active lock for this wallet")]
    NotLocked,

    #[error("lockup period ends at {unlock_date}")]
    LockupNotEnded { unlock_date: i64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
