//! End-to-end tests over the public API: config -> client -> lookups ->
//! rewards -> unsigned instructions, against an in-memory read service.

use std::collections::HashMap;

use lock_client::*;
use sol_primitives::spl_token::{MINT_ACCOUNT_LEN, MINT_DECIMALS_OFFSET};
use sol_primitives::{Address, SYSVAR_CLOCK_ID, TOKEN_PROGRAM_ID};

const USER: Address = [0x42; 32];
const FEE_WALLET: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";
const T: i64 = 1_700_000_000;
const DAY: i64 = 86_400;

/// Lock record for `USER`: 1_000_000_000 raw units locked at `T` for two
/// years, last claimed at `T`.
const LOCK_FIXTURE: &str = "014242424242424242424242424242424242424242424242424242424242424242\
00ca9a3b0000000000f1536500000000005816690000000000f1536500000000";

#[derive(Default)]
struct FakeChain {
    accounts: HashMap<Address, Vec<u8>>,
    balances: HashMap<Address, u64>,
    accounts_down: bool,
}

impl AccountReader for FakeChain {
    fn fetch_account(&self, address: &Address) -> Result<Option<Vec<u8>>, RpcError> {
        if self.accounts_down {
            return Err(RpcError::Unavailable("503".into()));
        }
        Ok(self.accounts.get(address).cloned())
    }
}

impl TokenBalanceReader for FakeChain {
    fn fetch_token_balance(&self, token_account: &Address) -> Result<Option<u64>, RpcError> {
        Ok(self.balances.get(token_account).copied())
    }
}

fn config() -> ResolvedConfig {
    LockProgramConfig::from_json(&format!(
        r#"{{
            "program_id": "8cSiKf4CX2gxSyvvWmNZRxRifqX7GUXHzwE3b1jmzfX4",
            "token_mint": "AKzCnZFRTab25UuN2iLTzgjoeDxJuBLCXZwchFTkAbWz",
            "owner_wallet": "{FEE_WALLET}",
            "mint_authority": "SysvarRent111111111111111111111111111111111"
        }}"#
    ))
    .unwrap()
    .resolve()
    .unwrap()
}

fn chain_with_mint(decimals: u8) -> FakeChain {
    let mut chain = FakeChain::default();
    let mut mint = vec![0u8; MINT_ACCOUNT_LEN];
    mint[MINT_DECIMALS_OFFSET] = decimals;
    chain.accounts.insert(config().token_mint, mint);
    chain
}

fn fund(chain: &mut FakeChain, owner: &Address, amount: u64) {
    let ata = derive_associated_token_address(owner, &config().token_mint).unwrap();
    chain.balances.insert(ata, amount);
}

fn store_lock(chain: &mut FakeChain, data: Vec<u8>) {
    let (lock, _) = derive_lock_address(&USER, &config().program_id).unwrap();
    chain.accounts.insert(lock, data);
}

#[test]
fn fixture_matches_documented_layout() {
    let data = hex::decode(LOCK_FIXTURE).unwrap();
    assert_eq!(data.len(), LOCK_RECORD_LEN);

    let record = decode_lock_record(&data).unwrap();
    assert!(record.initialized);
    assert_eq!(record.owner, USER);
    assert_eq!(record.amount_locked, 1_000_000_000);
    assert_eq!(record.lock_date, T);
    assert_eq!(record.last_reward_claim_date, T);
    assert_eq!(record.lock_period(), LockPeriod::TwoYears);
}

#[test]
fn lock_from_user_input() {
    let mut chain = chain_with_mint(9);
    fund(&mut chain, &USER, 5_000_000_000);
    let client = LockClient::new(&chain, config());

    let (balance, decimals) = client.get_balance(&USER).unwrap();
    assert_eq!(balance, Some(5_000_000_000));
    let amount = parse_ui_amount("1,5", decimals).unwrap();

    let ix = client.prepare_lock(&USER, amount).unwrap();
    assert_eq!(ix.program_id, config().program_id);
    assert_eq!(
        LockInstruction::unpack(&ix.data).unwrap(),
        LockInstruction::Lock {
            amount: 1_500_000_000,
        }
    );

    let lock = client.lock_address(&USER).unwrap();
    let lock_ata = derive_associated_token_address(&lock, &config().token_mint).unwrap();
    let user_ata = derive_associated_token_address(&USER, &config().token_mint).unwrap();
    let keys: Vec<Address> = ix.accounts.iter().map(|m| m.pubkey).collect();
    assert_eq!(keys[..5], [USER, lock, user_ata, lock_ata, USER]);
    assert_eq!(keys[5], TOKEN_PROGRAM_ID);
    assert_eq!(ix.signers().collect::<Vec<_>>(), vec![&USER]);
}

#[test]
fn lock_without_token_account_is_reported_as_such() {
    let chain = chain_with_mint(9);
    let client = LockClient::new(&chain, config());

    assert_eq!(client.get_balance(&USER).unwrap(), (None, 9));
    assert!(matches!(
        client.prepare_lock(&USER, 1),
        Err(LockError::NoTokenAccount)
    ));
}

#[test]
fn lock_above_balance_is_insufficient_funds() {
    let mut chain = chain_with_mint(9);
    fund(&mut chain, &USER, 0);
    let client = LockClient::new(&chain, config());

    assert_eq!(client.get_balance(&USER).unwrap(), (Some(0), 9));
    assert!(matches!(
        client.prepare_lock(&USER, 10),
        Err(LockError::InsufficientFunds {
            requested: 10,
            available: 0,
        })
    ));
}

#[test]
fn no_lock_record_means_not_locked() {
    let chain = chain_with_mint(9);
    let client = LockClient::new(&chain, config());

    assert_eq!(client.fetch_lock(&USER).unwrap(), None);
    assert!(matches!(client.quote_reward(&USER, T), Err(LockError::NotLocked)));
    assert!(matches!(client.prepare_claim(&USER), Err(LockError::NotLocked)));
}

#[test]
fn unlocked_record_means_not_locked() {
    let mut chain = chain_with_mint(9);
    store_lock(&mut chain, vec![0u8; LOCK_RECORD_LEN]);
    let client = LockClient::new(&chain, config());

    assert!(!client.fetch_lock(&USER).unwrap().unwrap().initialized);
    assert!(matches!(client.quote_reward(&USER, T), Err(LockError::NotLocked)));
}

#[test]
fn truncated_record_is_malformed() {
    let mut chain = chain_with_mint(9);
    store_lock(&mut chain, vec![1u8; 40]);
    let client = LockClient::new(&chain, config());

    assert!(matches!(
        client.fetch_lock(&USER),
        Err(LockError::Malformed(DecodeError::TooShort {
            expected: 65,
            actual: 40,
        }))
    ));
}

#[test]
fn reward_quote_for_active_lock() {
    let mut chain = chain_with_mint(9);
    store_lock(&mut chain, hex::decode(LOCK_FIXTURE).unwrap());
    let client = LockClient::new(&chain, config());

    let quote = client.quote_reward(&USER, T + 3 * DAY + DAY / 2).unwrap();
    assert_eq!(quote.whole_days_elapsed, 3);
    assert_eq!(quote.reward_raw, 3_000_000);
    assert_eq!(
        quote.split,
        RewardSplit {
            user: 2_970_000,
            owner_fee: 30_000,
        }
    );
    assert_eq!(quote.display(), 0.003);

    let fresh = client.quote_reward(&USER, T).unwrap();
    assert!(!fresh.is_claimable());
}

#[test]
fn reward_quote_survives_unreadable_mint() {
    let mut chain = chain_with_mint(6);
    store_lock(&mut chain, hex::decode(LOCK_FIXTURE).unwrap());
    chain.accounts.remove(&config().token_mint);
    let client = LockClient::new(&chain, config());

    assert_eq!(client.get_decimals(), DEFAULT_DECIMALS);
    assert_eq!(client.quote_reward(&USER, T + DAY).unwrap().decimals, 9);
}

#[test]
fn lookups_fail_when_service_is_down() {
    let chain = FakeChain {
        accounts_down: true,
        ..Default::default()
    };
    let client = LockClient::new(&chain, config());

    assert_eq!(client.get_decimals(), 9);
    assert!(matches!(
        client.fetch_lock(&USER),
        Err(LockError::UpstreamUnavailable(_))
    ));
}

#[test]
fn claim_targets_fee_wallet_ata() {
    let mut chain = chain_with_mint(9);
    store_lock(&mut chain, hex::decode(LOCK_FIXTURE).unwrap());
    let client = LockClient::new(&chain, config());
    let cfg = config();

    let ix = client.prepare_claim(&USER).unwrap();
    assert_eq!(ix.data, [2]);
    assert_eq!(ix.accounts.len(), 8);

    let fee_ata =
        derive_associated_token_address(&cfg.owner_wallet().unwrap(), &cfg.token_mint).unwrap();
    assert_eq!(ix.accounts[3].pubkey, fee_ata);
    assert_eq!(ix.accounts[4].pubkey, cfg.token_mint);
    assert!(ix.accounts[4].is_writable);
    assert_eq!(ix.accounts[5].pubkey, cfg.mint_authority().unwrap());
    assert_eq!(ix.accounts[7].pubkey, SYSVAR_CLOCK_ID);
}

#[test]
fn claim_needs_fee_wallet_configured() {
    let mut chain = chain_with_mint(9);
    store_lock(&mut chain, hex::decode(LOCK_FIXTURE).unwrap());
    let client = LockClient::new(&chain, LockProgramConfig::mainnet().resolve().unwrap());

    assert!(matches!(
        client.prepare_claim(&USER),
        Err(LockError::InvalidConfig(_))
    ));
}

#[test]
fn unlock_only_after_unlock_date() {
    let mut chain = chain_with_mint(9);
    store_lock(&mut chain, hex::decode(LOCK_FIXTURE).unwrap());
    let client = LockClient::new(&chain, config());
    let unlock_date = T + 63_072_000;

    assert!(matches!(
        client.prepare_unlock(&USER, unlock_date - 1),
        Err(LockError::LockupNotEnded { unlock_date: d }) if d == unlock_date
    ));
    let ix = client.prepare_unlock(&USER, unlock_date).unwrap();
    assert_eq!(
        LockInstruction::unpack(&ix.data).unwrap(),
        LockInstruction::Unlock
    );
}

#[test]
fn instruction_json_for_wallet_handoff() {
    let mut chain = chain_with_mint(9);
    fund(&mut chain, &USER, 10);
    let client = LockClient::new(&chain, config());

    let ix = client.prepare_lock(&USER, 10).unwrap();
    let json = serde_json::to_value(&ix).unwrap();
    assert_eq!(
        json["program_id"],
        "8cSiKf4CX2gxSyvvWmNZRxRifqX7GUXHzwE3b1jmzfX4"
    );
    assert_eq!(
        json["accounts"][5]["pubkey"],
        "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
    );
    assert_eq!(json["accounts"][0]["is_signer"], true);
    assert_eq!(json["data"][1], 10);
}
