//! Token balance and mint decimals lookups.

use log::{debug, warn};
use sol_primitives::{bytes_to_address, mint_decimals, Address};

use crate::error::LockError;
use crate::pda::derive_associated_token_address;
use crate::rpc::{AccountReader, TokenBalanceReader};

/// Decimals assumed when the mint cannot be read.
pub const DEFAULT_DECIMALS: u8 = 9;

const LOG_TARGET: &str = "lock_client::resolver";

/// Read a mint's decimals, falling back to [`DEFAULT_DECIMALS`].
///
/// Never fails: a missing mint, a service error, or short mint data is
/// logged and replaced by the default.
pub fn get_decimals<R: AccountReader + ?Sized>(reader: &R, mint: &Address) -> u8 {
    match reader.fetch_account(mint) {
        Ok(Some(data)) => mint_decimals(&data).unwrap_or_else(|e| {
            warn!(
                target: LOG_TARGET,
                "mint {}: {e}; using {DEFAULT_DECIMALS} decimals",
                bytes_to_address(mint)
            );
            DEFAULT_DECIMALS
        }),
        Ok(None) => {
            warn!(
                target: LOG_TARGET,
                "mint {} not found; using {DEFAULT_DECIMALS} decimals",
                bytes_to_address(mint)
            );
            DEFAULT_DECIMALS
        }
        Err(e) => {
            warn!(
                target: LOG_TARGET,
                "mint {} lookup failed: {e}; using {DEFAULT_DECIMALS} decimals",
                bytes_to_address(mint)
            );
            DEFAULT_DECIMALS
        }
    }
}

/// Balance of `owner`'s associated token account for `mint`, with decimals.
///
/// `(None, decimals)` means the owner has no token account at all, which is
/// not the same as `(Some(0), decimals)`. Service errors on the balance
/// itself are propagated.
pub fn get_balance<R>(
    reader: &R,
    owner: &Address,
    mint: &Address,
) -> Result<(Option<u64>, u8), LockError>
where
    R: AccountReader + TokenBalanceReader + ?Sized,
{
    let token_account = derive_associated_token_address(owner, mint)?;
    let decimals = get_decimals(reader, mint);
    let amount = reader.fetch_token_balance(&token_account)?;
    if amount.is_none() {
        debug!(
            target: LOG_TARGET,
            "owner {} has no token account {}",
            bytes_to_address(owner),
            bytes_to_address(&token_account)
        );
    }
    Ok((amount, decimals))
}
