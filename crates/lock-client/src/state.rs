//! Lock record account layout.
//!
//! The on-chain program writes the record with Borsh, which for this struct
//! is a fixed little-endian layout with no length prefixes:
//!
//! ```text
//! offset  size  field
//!      0     1  initialized            bool
//!      1    32  owner                  Pubkey
//!     33     8  amount_locked          u64
//!     41     8  lock_date              i64
//!     49     8  unlock_date            i64
//!     57     8  last_reward_claim_date i64
//! ```
//!
//! Accounts may be allocated larger than the record; trailing bytes are
//! ignored. Decoding is a pure byte mapping and never applies domain checks.

use std::ops::Range;

use serde::Serialize;
use sol_primitives::address::{serialize_base58, Address};

use crate::error::DecodeError;

/// Position of one field inside the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
}

impl FieldLayout {
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }

    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

pub const INITIALIZED: FieldLayout = FieldLayout {
    name: "initialized",
    offset: 0,
    size: 1,
};
pub const OWNER: FieldLayout = FieldLayout {
    name: "owner",
    offset: 1,
    size: 32,
};
pub const AMOUNT_LOCKED: FieldLayout = FieldLayout {
    name: "amount_locked",
    offset: 33,
    size: 8,
};
pub const LOCK_DATE: FieldLayout = FieldLayout {
    name: "lock_date",
    offset: 41,
    size: 8,
};
pub const UNLOCK_DATE: FieldLayout = FieldLayout {
    name: "unlock_date",
    offset: 49,
    size: 8,
};
pub const LAST_REWARD_CLAIM_DATE: FieldLayout = FieldLayout {
    name: "last_reward_claim_date",
    offset: 57,
    size: 8,
};

/// All fields in on-chain order.
pub const LOCK_RECORD_LAYOUT: [FieldLayout; 6] = [
    INITIALIZED,
    OWNER,
    AMOUNT_LOCKED,
    LOCK_DATE,
    UNLOCK_DATE,
    LAST_REWARD_CLAIM_DATE,
];

/// Size of the encoded record.
pub const LOCK_RECORD_LEN: usize = LAST_REWARD_CLAIM_DATE.end();

pub const ONE_YEAR: i64 = 31_536_000;
pub const TWO_YEARS: i64 = 63_072_000;
pub const THREE_YEARS: i64 = 94_608_000;

/// Decoded lock record, a point-in-time snapshot of program state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockRecord {
    pub initialized: bool,
    #[serde(serialize_with = "serialize_base58")]
    pub owner: Address,
    pub amount_locked: u64,
    pub lock_date: i64,
    pub unlock_date: i64,
    pub last_reward_claim_date: i64,
}

/// Lock term picked by the program at lock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LockPeriod {
    OneYear,
    TwoYears,
    ThreeYears,
    Other(i64),
}

impl LockRecord {
    /// Whether the principal can be withdrawn at `now`.
    pub fn is_unlockable(&self, now: i64) -> bool {
        now >= self.unlock_date
    }

    pub fn lock_period(&self) -> LockPeriod {
        match self.unlock_date.saturating_sub(self.lock_date) {
            ONE_YEAR => LockPeriod::OneYear,
            TWO_YEARS => LockPeriod::TwoYears,
            THREE_YEARS => LockPeriod::ThreeYears,
            other => LockPeriod::Other(other),
        }
    }
}

/// Decode a lock record from raw account data.
pub fn decode_lock_record(data: &[u8]) -> Result<LockRecord, DecodeError> {
    if data.len() < LOCK_RECORD_LEN {
        return Err(DecodeError::TooShort {
            expected: LOCK_RECORD_LEN,
            actual: data.len(),
        });
    }

    Ok(LockRecord {
        initialized: data[INITIALIZED.offset] != 0,
        owner: read_field(data, OWNER)?,
        amount_locked: u64::from_le_bytes(read_field(data, AMOUNT_LOCKED)?),
        lock_date: i64::from_le_bytes(read_field(data, LOCK_DATE)?),
        unlock_date: i64::from_le_bytes(read_field(data, UNLOCK_DATE)?),
        last_reward_claim_date: i64::from_le_bytes(read_field(data, LAST_REWARD_CLAIM_DATE)?),
    })
}

fn read_field<const N: usize>(data: &[u8], field: FieldLayout) -> Result<[u8; N], DecodeError> {
    data.get(field.range())
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(DecodeError::TooShort {
            expected: field.end(),
            actual: data.len(),
        })
}
