//! Read-service seams.
//!
//! The lock client never talks to the network itself. Callers inject a read
//! service (usually a thin wrapper over a JSON-RPC client with its own
//! timeout) and the client only ever issues idempotent lookups through it.
//! `Ok(None)` means the account does not exist; `Err` means the service
//! could not answer.

use sol_primitives::Address;
use thiserror::Error;

/// Failure of the injected read service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("request timed out")]
    Timeout,
}

/// Raw account data lookup (`getAccountInfo`).
pub trait AccountReader {
    fn fetch_account(&self, address: &Address) -> Result<Option<Vec<u8>>, RpcError>;
}

/// Token account balance lookup (`getTokenAccountBalance`), in raw units.
pub trait TokenBalanceReader {
    fn fetch_token_balance(&self, token_account: &Address) -> Result<Option<u64>, RpcError>;
}

impl<T: AccountReader + ?Sized> AccountReader for &T {
    fn fetch_account(&self, address: &Address) -> Result<Option<Vec<u8>>, RpcError> {
        (**self).fetch_account(address)
    }
}

impl<T: TokenBalanceReader + ?Sized> TokenBalanceReader for &T {
    fn fetch_token_balance(&self, token_account: &Address) -> Result<Option<u64>, RpcError> {
        (**self).fetch_token_balance(token_account)
    }
}
