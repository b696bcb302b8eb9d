use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::errors::Error;
use shared::types::{Amount, DividendRound, VestingWallet};
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the token contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    Owner,
    PaymentToken,
    TotalSupply,
    Round,
    TeamMinted,
    VestingCount,
    // Persistent storage
    Balance(Address),
    Allowance(Address, Address),
    Treasurer(Address),
    Claimed(u32, Address),
    Vesting(u32),
}

// ==================== Lifetime ====================

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Keep an existing persistent entry alive across the claim window and
/// vesting schedule. Must only be called for keys that are present.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ==================== Configuration ====================

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInit)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

/// Token in which dividends are paid in and out
pub fn get_payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInit)
}

// ==================== Ledger ====================

pub fn get_total_supply(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: Amount) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    bump_instance(env);
}

pub fn get_balance(env: &Env, holder: &Address) -> Amount {
    let key = DataKey::Balance(holder.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, holder: &Address, amount: Amount) {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> Amount {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(from.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, amount: Amount) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        bump_persistent(env, &key);
    }
}

// ==================== Roles ====================

/// Raw treasurer flag, without the owner override
pub fn get_treasurer_flag(env: &Env, treasurer: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Treasurer(treasurer.clone()))
        .unwrap_or(false)
}

pub fn set_treasurer_flag(env: &Env, treasurer: &Address, active: bool) {
    let key = DataKey::Treasurer(treasurer.clone());
    env.storage().persistent().set(&key, &active);
    bump_persistent(env, &key);
}

// ==================== Dividend round ====================

pub fn get_round(env: &Env) -> DividendRound {
    env.storage()
        .instance()
        .get(&DataKey::Round)
        .unwrap_or(DividendRound {
            index: 0,
            current_dividend: 0,
            end_time: 0,
            total_supply_at_dividend: 0,
        })
}

pub fn set_round(env: &Env, round: &DividendRound) {
    env.storage().instance().set(&DataKey::Round, round);
    bump_instance(env);
}

pub fn has_claimed(env: &Env, round_index: u32, holder: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Claimed(round_index, holder.clone()))
}

/// Record the amount paid out to a holder in a round
pub fn set_claimed(env: &Env, round_index: u32, holder: &Address, amount: Amount) {
    let key = DataKey::Claimed(round_index, holder.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ==================== Vesting registry ====================

pub fn get_team_minted(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get(&DataKey::TeamMinted)
        .unwrap_or(0)
}

pub fn set_team_minted(env: &Env, amount: Amount) {
    env.storage().instance().set(&DataKey::TeamMinted, &amount);
}

pub fn get_vesting_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::VestingCount)
        .unwrap_or(0)
}

pub fn set_vesting_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::VestingCount, &count);
}

pub fn get_vesting_wallet(env: &Env, index: u32) -> Result<VestingWallet, Error> {
    let key = DataKey::Vesting(index);
    let wallet = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(wallet)
}

pub fn set_vesting_wallet(env: &Env, wallet: &VestingWallet) {
    let key = DataKey::Vesting(wallet.index);
    env.storage().persistent().set(&key, wallet);
    bump_persistent(env, &key);
}
