use shared::errors::Error;
use shared::types::Amount;
use soroban_sdk::{Address, Env};
use soroban_token_sdk::TokenUtils;

use crate::storage::{
    get_allowance, get_balance, get_total_supply, set_allowance, set_balance, set_total_supply,
};

/// Credit `amount` new tokens to `to` and grow the total supply.
///
/// Emits the SEP-41 `mint` event, which stands for the transfer from the
/// zero address.
pub fn mint(env: &Env, minter: &Address, to: &Address, amount: Amount) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    set_total_supply(env, supply);
    set_balance(env, to, balance);

    TokenUtils::new(env)
        .events()
        .mint(minter.clone(), to.clone(), amount);

    Ok(())
}

/// Move tokens between two holders. Total supply is untouched.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: Amount) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }
    set_balance(env, from, from_balance - amount);

    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    set_balance(env, to, to_balance);

    TokenUtils::new(env)
        .events()
        .transfer(from.clone(), to.clone(), amount);

    Ok(())
}

/// Consume `amount` of the allowance `from` granted to `spender`
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: Amount,
) -> Result<(), Error> {
    let allowance = get_allowance(env, from, spender);
    if allowance < amount {
        return Err(Error::InsufficientAllowance);
    }
    set_allowance(env, from, spender, allowance - amount);
    Ok(())
}
