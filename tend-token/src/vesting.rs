use shared::constants::{DEVELOPMENT_TEAM_CAP, VESTING_CLIFF_SECS, VESTING_DURATION_SECS};
use shared::errors::Error;
use shared::events::{RELEASED, VESTING_CREATED};
use shared::math::vested_amount;
use shared::types::{Amount, VestingWallet};
use soroban_sdk::{log, Address, BytesN, Env};

use crate::ledger;
use crate::storage::{
    get_balance, get_team_minted, get_vesting_count, get_vesting_wallet, set_team_minted,
    set_vesting_count, set_vesting_wallet,
};

const WALLET_SALT_PREFIX: &[u8; 4] = b"vest";

/// Custody address of the wallet at `index`.
///
/// Derived from the token contract and the index; no contract is ever
/// deployed there, so only this contract can move its balance.
pub fn wallet_address(env: &Env, index: u32) -> Address {
    let mut salt = [0u8; 32];
    salt[..4].copy_from_slice(WALLET_SALT_PREFIX);
    salt[4..8].copy_from_slice(&index.to_be_bytes());

    env.deployer()
        .with_current_contract(BytesN::from_array(env, &salt))
        .deployed_address()
}

/// Open a vesting wallet for `beneficiary` and mint `amount` into its custody
pub fn create_wallet(
    env: &Env,
    minter: &Address,
    beneficiary: &Address,
    amount: Amount,
) -> Result<VestingWallet, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let minted = get_team_minted(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    if minted > DEVELOPMENT_TEAM_CAP {
        return Err(Error::CapExceeded);
    }

    let index = get_vesting_count(env);
    let next = index.checked_add(1).ok_or(Error::Overflow)?;

    let wallet = VestingWallet {
        index,
        wallet: wallet_address(env, index),
        beneficiary: beneficiary.clone(),
        start: env.ledger().timestamp(),
        cliff: VESTING_CLIFF_SECS,
        duration: VESTING_DURATION_SECS,
        released: 0,
    };

    set_vesting_wallet(env, &wallet);
    set_vesting_count(env, next);
    set_team_minted(env, minted);

    ledger::mint(env, minter, &wallet.wallet, amount)?;

    env.events().publish(
        (VESTING_CREATED, beneficiary.clone()),
        (index, wallet.wallet.clone(), amount),
    );

    Ok(wallet)
}

/// Vested amount of a wallet at the current ledger time.
///
/// The grant is whatever the wallet holds plus what it already released.
pub fn vested(env: &Env, wallet: &VestingWallet) -> Result<Amount, Error> {
    let total = get_balance(env, &wallet.wallet)
        .checked_add(wallet.released)
        .ok_or(Error::Overflow)?;

    vested_amount(
        env,
        total,
        wallet.start,
        wallet.cliff,
        wallet.duration,
        env.ledger().timestamp(),
    )
}

pub fn releasable(env: &Env, wallet: &VestingWallet) -> Result<Amount, Error> {
    let vested = vested(env, wallet)?;
    Ok(vested.saturating_sub(wallet.released).max(0))
}

/// Move the vested but unreleased part of wallet `index` to its beneficiary
pub fn release(env: &Env, index: u32) -> Result<Amount, Error> {
    let mut wallet = get_vesting_wallet(env, index)?;

    let unreleased = releasable(env, &wallet)?;
    if unreleased <= 0 {
        return Err(Error::NothingToRelease);
    }

    wallet.released = wallet
        .released
        .checked_add(unreleased)
        .ok_or(Error::Overflow)?;
    set_vesting_wallet(env, &wallet);

    ledger::move_balance(env, &wallet.wallet, &wallet.beneficiary, unreleased)?;

    log!(env, "vesting release", index, unreleased);
    env.events()
        .publish((RELEASED, wallet.beneficiary.clone()), unreleased);

    Ok(unreleased)
}
