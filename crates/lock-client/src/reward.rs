//! Staking reward accrual.
//!
//! The program pays 0.1% of the locked principal per whole elapsed day since
//! the last claim, non-compounding, and stops accruing at the unlock date.
//! Both divisions truncate: first seconds to whole days, then the reward.
//! Of each payout 1% (floor) is minted to the protocol owner.

use serde::Serialize;

use crate::state::LockRecord;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Reward per day is `amount_locked / DAILY_REWARD_DIVISOR`.
pub const DAILY_REWARD_DIVISOR: u128 = 1_000;

/// Share of every reward minted to the protocol owner.
pub const OWNER_FEE_PERCENT: u64 = 1;

/// Compute the accrued reward at `now` as `(reward_raw, whole_days_elapsed)`.
///
/// Returns `(0, 0)` when less than a day has elapsed, including when the
/// last claim lies in the future. The raw reward saturates at `u64::MAX`.
pub fn compute_reward(record: &LockRecord, now: i64) -> (u64, u64) {
    let effective_end = now.min(record.unlock_date);
    let elapsed = effective_end
        .saturating_sub(record.last_reward_claim_date)
        .max(0);
    let days = (elapsed / SECONDS_PER_DAY) as u64;
    if days == 0 {
        return (0, 0);
    }

    let reward = u128::from(record.amount_locked) * u128::from(days) / DAILY_REWARD_DIVISOR;
    (u64::try_from(reward).unwrap_or(u64::MAX), days)
}

/// How a reward is divided between the user and the protocol owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardSplit {
    pub user: u64,
    pub owner_fee: u64,
}

pub fn split_owner_fee(reward_raw: u64) -> RewardSplit {
    let owner_fee = (u128::from(reward_raw) * u128::from(OWNER_FEE_PERCENT) / 100) as u64;
    RewardSplit {
        user: reward_raw - owner_fee,
        owner_fee,
    }
}

/// Convert raw units to a display amount. Presentation only.
pub fn to_ui_amount(raw: u64, decimals: u8) -> f64 {
    raw as f64 / 10f64.powi(i32::from(decimals))
}

/// A reward snapshot ready for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardQuote {
    pub reward_raw: u64,
    pub whole_days_elapsed: u64,
    pub split: RewardSplit,
    pub decimals: u8,
}

impl RewardQuote {
    pub fn new(record: &LockRecord, now: i64, decimals: u8) -> Self {
        let (reward_raw, whole_days_elapsed) = compute_reward(record, now);
        Self {
            reward_raw,
            whole_days_elapsed,
            split: split_owner_fee(reward_raw),
            decimals,
        }
    }

    /// Nothing to claim until a full day has passed.
    pub fn is_claimable(&self) -> bool {
        self.whole_days_elapsed > 0
    }

    pub fn display(&self) -> f64 {
        to_ui_amount(self.reward_raw, self.decimals)
    }
}
