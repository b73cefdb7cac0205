use serde::{Deserialize, Serialize};
use sol_primitives::{address_to_bytes, Address};

use crate::error::LockError;

/// Deployed lock program on mainnet-beta.
pub const MAINNET_PROGRAM_ID: &str = "8cSiKf4CX2gxSyvvWmNZRxRifqX7GUXHzwE3b1jmzfX4";

/// The token users lock and earn rewards in.
pub const MAINNET_TOKEN_MINT: &str = "AKzCnZFRTab25UuN2iLTzgjoeDxJuBLCXZwchFTkAbWz";

/// Deployment settings as written in a config file (Base58 strings).
///
/// `owner_wallet` receives the protocol fee on every claim and
/// `mint_authority` signs reward mints on-chain. Both may be left empty for
/// deployments that only lock and inspect; claims then fail at preparation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockProgramConfig {
    pub program_id: String,
    pub token_mint: String,
    #[serde(default)]
    pub owner_wallet: String,
    #[serde(default)]
    pub mint_authority: String,
}

/// A config with every address decoded and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub program_id: Address,
    pub token_mint: Address,
    pub owner_wallet: Option<Address>,
    pub mint_authority: Option<Address>,
}

impl LockProgramConfig {
    /// Mainnet defaults. The fee wallet and mint authority are deployment
    /// secrets and are not shipped.
    pub fn mainnet() -> Self {
        Self {
            program_id: MAINNET_PROGRAM_ID.into(),
            token_mint: MAINNET_TOKEN_MINT.into(),
            owner_wallet: String::new(),
            mint_authority: String::new(),
        }
    }

    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, LockError> {
        serde_json::from_str(json).map_err(|e| LockError::InvalidConfig(e.to_string()))
    }

    /// Decode every address, failing on the first malformed entry.
    pub fn resolve(&self) -> Result<ResolvedConfig, LockError> {
        Ok(ResolvedConfig {
            program_id: required("program_id", &self.program_id)?,
            token_mint: required("token_mint", &self.token_mint)?,
            owner_wallet: optional("owner_wallet", &self.owner_wallet)?,
            mint_authority: optional("mint_authority", &self.mint_authority)?,
        })
    }
}

impl Default for LockProgramConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl ResolvedConfig {
    pub fn owner_wallet(&self) -> Result<Address, LockError> {
        self.owner_wallet
            .ok_or_else(|| LockError::InvalidConfig("owner_wallet is not set".into()))
    }

    pub fn mint_authority(&self) -> Result<Address, LockError> {
        self.mint_authority
            .ok_or_else(|| LockError::InvalidConfig("mint_authority is not set".into()))
    }
}

fn required(field: &str, value: &str) -> Result<Address, LockError> {
    address_to_bytes(value).map_err(|e| LockError::InvalidConfig(format!("{field}: {e}")))
}

fn optional(field: &str, value: &str) -> Result<Option<Address>, LockError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    required(field, value).map(Some)
}
