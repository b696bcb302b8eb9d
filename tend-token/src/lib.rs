#![no_std]

use shared::{
    constants::{MAX_BATCH_SIZE, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL},
    errors::Error,
    events::*,
    pausable,
    types::{Amount, DividendRound, Role, RoundStatus, Timestamp, VestingWallet},
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

mod access;
mod dividend;
mod ledger;
mod storage;
mod vesting;

#[cfg(test)]
mod test_vesting;

use access::{has_role, require_owner, require_role};
use storage::*;

/// TEND token: a paused-at-launch ledger with periodic dividend rounds
/// and custodial vesting wallets for development team grants.
#[contract]
pub struct TendToken;

#[contractimpl]
impl TendToken {
    /// Initialize the token
    ///
    /// # Arguments
    /// * `owner` - Address holding every administrative role
    /// * `payment_token` - Token in which dividends are paid in and out
    pub fn initialize(env: Env, owner: Address, payment_token: Address) -> Result<(), Error> {
        if has_owner(&env) {
            return Err(Error::AlreadyInit);
        }
        owner.require_auth();

        set_owner(&env, &owner);
        set_payment_token(&env, &payment_token);
        set_total_supply(&env, 0);

        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: TOKEN_DECIMALS,
            name: String::from_str(&env, TOKEN_NAME),
            symbol: String::from_str(&env, TOKEN_SYMBOL),
        });

        // Transfers stay locked until the owner unpauses
        let state = pausable::pause(&env);
        env.events()
            .publish((CONTRACT_PAUSED,), (owner, state.paused_at));

        log!(&env, "token initialized");
        Ok(())
    }

    // ==================== Administration ====================

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        get_payment_token(&env)
    }

    /// Hand every owner capability to `new_owner`
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), Error> {
        let owner = require_owner(&env)?;
        set_owner(&env, &new_owner);

        env.events()
            .publish((OWNERSHIP_TRANSFERRED,), (owner, new_owner));
        Ok(())
    }

    /// Enable or disable a treasurer
    ///
    /// # Arguments
    /// * `treasurer` - Address whose pay-in right changes
    /// * `active` - New state of the flag
    pub fn set_treasurer(env: Env, treasurer: Address, active: bool) -> Result<(), Error> {
        require_owner(&env)?;
        set_treasurer_flag(&env, &treasurer, active);

        env.events()
            .publish((CHANGED_TREASURER, treasurer), active);
        Ok(())
    }

    /// Whether `account` may start a dividend round. Always true for the owner.
    pub fn is_treasurer(env: Env, account: Address) -> Result<bool, Error> {
        has_role(&env, &account, Role::Treasurer)
    }

    pub fn pause(env: Env) -> Result<(), Error> {
        let owner = require_owner(&env)?;
        let state = pausable::pause(&env);

        env.events()
            .publish((CONTRACT_PAUSED,), (owner, state.paused_at));
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), Error> {
        let owner = require_owner(&env)?;
        pausable::unpause(&env);

        env.events()
            .publish((CONTRACT_UNPAUSED,), (owner, env.ledger().timestamp()));
        Ok(())
    }

    pub fn is_paused(env: Env) -> Result<bool, Error> {
        get_owner(&env)?;
        Ok(pausable::is_paused(&env))
    }

    // ==================== Ledger ====================

    pub fn name(env: Env) -> Result<String, Error> {
        get_owner(&env)?;
        Ok(TokenUtils::new(&env).metadata().get_metadata().name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        get_owner(&env)?;
        Ok(TokenUtils::new(&env).metadata().get_metadata().symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        get_owner(&env)?;
        Ok(TokenUtils::new(&env).metadata().get_metadata().decimal)
    }

    pub fn total_supply(env: Env) -> Result<Amount, Error> {
        get_owner(&env)?;
        Ok(get_total_supply(&env))
    }

    pub fn balance(env: Env, id: Address) -> Result<Amount, Error> {
        get_owner(&env)?;
        Ok(get_balance(&env, &id))
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> Result<Amount, Error> {
        get_owner(&env)?;
        Ok(get_allowance(&env, &from, &spender))
    }

    /// Mint `amount` new tokens to `to` (owner only, allowed while paused)
    pub fn mint(env: Env, to: Address, amount: Amount) -> Result<(), Error> {
        let owner = require_owner(&env)?;

        ledger::mint(&env, &owner, &to, amount)
    }

    /// Mint to several recipients at once. Either every mint applies or none.
    ///
    /// # Arguments
    /// * `recipients` - Receiving addresses
    /// * `amounts` - Amount for the recipient at the same position
    pub fn batch_mint(env: Env, recipients: Vec<Address>, amounts: Vec<Amount>) -> Result<(), Error> {
        let owner = require_owner(&env)?;

        if recipients.len() != amounts.len() {
            return Err(Error::LengthMismatch);
        }
        if recipients.is_empty() {
            return Err(Error::EmptyBatch);
        }
        if recipients.len() > MAX_BATCH_SIZE {
            return Err(Error::InvalidAmount);
        }
        if amounts.iter().any(|amount| amount <= 0) {
            return Err(Error::InvalidAmount);
        }

        for (to, amount) in recipients.iter().zip(amounts.iter()) {
            ledger::mint(&env, &owner, &to, amount)?;
        }
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: Amount) -> Result<(), Error> {
        from.require_auth();
        get_owner(&env)?;
        pausable::require_not_paused(&env)?;

        ledger::move_balance(&env, &from, &to, amount)
    }

    /// Move tokens on behalf of `from` using the allowance granted to `spender`
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), Error> {
        spender.require_auth();
        get_owner(&env)?;
        pausable::require_not_paused(&env)?;

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        ledger::spend_allowance(&env, &from, &spender, amount)?;
        ledger::move_balance(&env, &from, &to, amount)
    }

    /// Set the allowance of `spender` over the tokens of `from`
    pub fn approve(env: Env, from: Address, spender: Address, amount: Amount) -> Result<(), Error> {
        from.require_auth();
        get_owner(&env)?;
        pausable::require_not_paused(&env)?;

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        set_allowance(&env, &from, &spender, amount);

        env.events().publish((APPROVAL, from, spender), amount);
        Ok(())
    }

    // ==================== Dividends ====================

    /// Start a dividend round by paying `amount` of the payment token in
    ///
    /// # Arguments
    /// * `from` - Owner or active treasurer funding the round
    /// * `amount` - Payment token amount distributed in this round
    ///
    /// # Errors
    /// * `Unauthorized` - `from` is neither owner nor active treasurer
    /// * `RoundStillOpen` - The claim window of the previous round is still running
    pub fn pay_in(env: Env, from: Address, amount: Amount) -> Result<DividendRound, Error> {
        require_role(&env, &from, Role::Treasurer)?;
        let owner = get_owner(&env)?;

        dividend::pay_in(&env, &owner, &from, amount)
    }

    /// Claim the caller's share of the open round
    ///
    /// # Errors
    /// * `NoActiveRound` - Nothing has been paid in, or the round was reclaimed
    /// * `ClaimWindowClosed` - The claim window has elapsed
    /// * `AlreadyClaimed` - `holder` already claimed in this round
    pub fn claim_dividend(env: Env, holder: Address) -> Result<Amount, Error> {
        holder.require_auth();
        get_owner(&env)?;

        dividend::claim(&env, &holder)
    }

    pub fn get_claimable_dividend(env: Env, holder: Address) -> Result<Amount, Error> {
        get_owner(&env)?;
        dividend::claimable(&env, &holder)
    }

    /// Send the unclaimed rest of an expired round to the owner
    ///
    /// # Errors
    /// * `WindowStillOpen` - The claim window has not elapsed yet
    /// * `NoActiveRound` - There is nothing left to reclaim
    pub fn request_unclaimed(env: Env) -> Result<Amount, Error> {
        let owner = require_owner(&env)?;
        dividend::reclaim(&env, &owner)
    }

    pub fn current_dividend(env: Env) -> Result<Amount, Error> {
        Ok(Self::dividend_round(env)?.current_dividend)
    }

    pub fn dividend_end_time(env: Env) -> Result<Timestamp, Error> {
        Ok(Self::dividend_round(env)?.end_time)
    }

    pub fn total_supply_at_dividend(env: Env) -> Result<Amount, Error> {
        Ok(Self::dividend_round(env)?.total_supply_at_dividend)
    }

    pub fn dividend_round(env: Env) -> Result<DividendRound, Error> {
        get_owner(&env)?;
        Ok(get_round(&env))
    }

    pub fn dividend_status(env: Env) -> Result<RoundStatus, Error> {
        get_owner(&env)?;
        Ok(dividend::status(&env))
    }

    /// Whether `holder` has claimed in the current round
    pub fn has_claimed(env: Env, holder: Address) -> Result<bool, Error> {
        let round = Self::dividend_round(env.clone())?;
        Ok(round.index > 0 && has_claimed(&env, round.index, &holder))
    }

    // ==================== Vesting ====================

    /// Mint a development team grant into a new vesting wallet
    ///
    /// The tokens are held by the wallet; `beneficiary` receives them
    /// through `release`.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount` is zero or negative
    /// * `CapExceeded` - The development team cap would be exceeded
    pub fn mint_development_team_tokens(
        env: Env,
        beneficiary: Address,
        amount: Amount,
    ) -> Result<Address, Error> {
        let owner = require_owner(&env)?;

        let wallet = vesting::create_wallet(&env, &owner, &beneficiary, amount)?;
        Ok(wallet.wallet)
    }

    /// Release the vested part of wallet `index`. Anyone may trigger it.
    pub fn release(env: Env, index: u32) -> Result<Amount, Error> {
        get_owner(&env)?;
        pausable::require_not_paused(&env)?;
        vesting::release(&env, index)
    }

    pub fn development_team_minted(env: Env) -> Result<Amount, Error> {
        get_owner(&env)?;
        Ok(get_team_minted(&env))
    }

    pub fn vesting_wallet_length(env: Env) -> Result<u32, Error> {
        get_owner(&env)?;
        Ok(get_vesting_count(&env))
    }

    /// Custody address of the wallet at `index`
    pub fn vesting_wallets(env: Env, index: u32) -> Result<Address, Error> {
        Ok(Self::vesting_wallet(env, index)?.wallet)
    }

    pub fn vesting_wallet(env: Env, index: u32) -> Result<VestingWallet, Error> {
        get_owner(&env)?;
        get_vesting_wallet(&env, index)
    }

    pub fn vested_amount(env: Env, index: u32) -> Result<Amount, Error> {
        let wallet = Self::vesting_wallet(env.clone(), index)?;
        vesting::vested(&env, &wallet)
    }

    pub fn releasable_amount(env: Env, index: u32) -> Result<Amount, Error> {
        let wallet = Self::vesting_wallet(env.clone(), index)?;
        vesting::releasable(&env, &wallet)
    }
}
