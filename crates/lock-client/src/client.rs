//! High-level lock client over an injected read service.
//!
//! Every method is a fresh, idempotent lookup followed by pure decoding or
//! encoding. Nothing is cached and nothing is signed: `prepare_*` methods
//! return unsigned instructions for the user's wallet.

use log::debug;
use sol_primitives::{bytes_to_address, Address, Instruction};

use crate::amount::check_lockable;
use crate::config::ResolvedConfig;
use crate::error::LockError;
use crate::instruction::{
    build_claim_instruction, build_lock_instruction, build_unlock_instruction,
};
use crate::pda::{derive_associated_token_address, derive_lock_address};
use crate::resolver;
use crate::reward::RewardQuote;
use crate::rpc::{AccountReader, TokenBalanceReader};
use crate::state::{decode_lock_record, LockRecord};

const LOG_TARGET: &str = "lock_client::client";

pub struct LockClient<'a, R: ?Sized> {
    reader: &'a R,
    config: ResolvedConfig,
}

impl<'a, R> LockClient<'a, R>
where
    R: AccountReader + TokenBalanceReader + ?Sized,
{
    pub fn new(reader: &'a R, config: ResolvedConfig) -> Self {
        Self { reader, config }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn lock_address(&self, owner: &Address) -> Result<Address, LockError> {
        derive_lock_address(owner, &self.config.program_id).map(|(address, _bump)| address)
    }

    /// Decimals of the configured token mint (9 if unreadable).
    pub fn get_decimals(&self) -> u8 {
        resolver::get_decimals(self.reader, &self.config.token_mint)
    }

    /// `owner`'s balance of the configured token, with decimals.
    pub fn get_balance(&self, owner: &Address) -> Result<(Option<u64>, u8), LockError> {
        resolver::get_balance(self.reader, owner, &self.config.token_mint)
    }

    /// Fetch and decode `owner`'s lock record.
    ///
    /// `Ok(None)` when the account does not exist. A record that exists but
    /// is not initialized (never locked, or already unlocked) is returned
    /// as-is.
    pub fn fetch_lock(&self, owner: &Address) -> Result<Option<LockRecord>, LockError> {
        let address = self.lock_address(owner)?;
        match self.reader.fetch_account(&address)? {
            Some(data) => Ok(Some(decode_lock_record(&data)?)),
            None => {
                debug!(target: LOG_TARGET, "no lock record at {}", bytes_to_address(&address));
                Ok(None)
            }
        }
    }

    /// Reward accrued by `owner`'s lock at `now`.
    pub fn quote_reward(&self, owner: &Address, now: i64) -> Result<RewardQuote, LockError> {
        let record = self.active_lock(owner)?;
        Ok(RewardQuote::new(&record, now, self.get_decimals()))
    }

    /// Validate the user's balance and build a `Lock` instruction.
    pub fn prepare_lock(&self, user: &Address, amount: u64) -> Result<Instruction, LockError> {
        check_lockable(self.get_balance(user)?, amount)?;

        let mint = &self.config.token_mint;
        let lock_record = self.lock_address(user)?;
        let user_token_account = derive_associated_token_address(user, mint)?;
        let lock_token_account = derive_associated_token_address(&lock_record, mint)?;

        build_lock_instruction(
            &self.config.program_id,
            user,
            &lock_record,
            &user_token_account,
            &lock_token_account,
            amount,
        )
    }

    /// Build a `Claim` instruction for an active lock.
    pub fn prepare_claim(&self, user: &Address) -> Result<Instruction, LockError> {
        let owner_wallet = self.config.owner_wallet()?;
        let mint_authority = self.config.mint_authority()?;
        self.active_lock(user)?;

        let mint = &self.config.token_mint;
        Ok(build_claim_instruction(
            &self.config.program_id,
            user,
            &self.lock_address(user)?,
            &derive_associated_token_address(user, mint)?,
            &derive_associated_token_address(&owner_wallet, mint)?,
            mint,
            &mint_authority,
        ))
    }

    /// Build an `Unlock` instruction once the lockup has ended at `now`.
    pub fn prepare_unlock(&self, user: &Address, now: i64) -> Result<Instruction, LockError> {
        let record = self.active_lock(user)?;
        if !record.is_unlockable(now) {
            return Err(LockError::LockupNotEnded {
                unlock_date: record.unlock_date,
            });
        }
        Ok(build_unlock_instruction(
            &self.config.program_id,
            user,
            &self.lock_address(user)?,
        ))
    }

    fn active_lock(&self, owner: &Address) -> Result<LockRecord, LockError> {
        self.fetch_lock(owner)?
            .filter(|record| record.initialized)
            .ok_or(LockError::NotLocked)
    }
}
