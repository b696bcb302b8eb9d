use shared::constants::CLAIM_PERIOD_SECS;
use shared::errors::Error;
use shared::events::{PAYIN, PAYOUT, RECLAIMED};
use shared::math::proportional_share;
use shared::types::{Amount, DividendRound, RoundStatus};
use soroban_sdk::{log, token::TokenClient, Address, Env};

use crate::storage::{
    get_balance, get_payment_token, get_round, get_total_supply, has_claimed, set_claimed,
    set_round,
};

/// Phase of the round state machine at the current ledger time
pub fn status(env: &Env) -> RoundStatus {
    let round = get_round(env);
    if round.current_dividend == 0 {
        RoundStatus::NoActiveRound
    } else if env.ledger().timestamp() <= round.end_time {
        RoundStatus::RoundOpen
    } else {
        RoundStatus::RoundExpired
    }
}

/// Start a new round with `amount` of the payment token pulled from `from`.
///
/// Whatever the contract still holds from an expired, unreclaimed round is
/// forwarded to `owner` first so it never mixes into the new round.
pub fn pay_in(
    env: &Env,
    owner: &Address,
    from: &Address,
    amount: Amount,
) -> Result<DividendRound, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let previous = get_round(env);
    let now = env.ledger().timestamp();
    if previous.current_dividend != 0 && now <= previous.end_time {
        return Err(Error::RoundStillOpen);
    }

    let end_time = now.checked_add(CLAIM_PERIOD_SECS).ok_or(Error::Overflow)?;
    let index = previous.index.checked_add(1).ok_or(Error::Overflow)?;
    let round = DividendRound {
        index,
        current_dividend: amount,
        end_time,
        total_supply_at_dividend: get_total_supply(env),
    };

    let token = TokenClient::new(env, &get_payment_token(env)?);
    let contract = env.current_contract_address();
    let leftover = token.balance(&contract);

    set_round(env, &round);

    if leftover > 0 {
        send_value(&token, &contract, owner, leftover)?;
        log!(env, "forwarded leftover dividend to owner", leftover);
        env.events()
            .publish((RECLAIMED,), (leftover, previous.end_time, now));
    }

    send_value(&token, from, &contract, amount)?;

    log!(env, "dividend round started", index, amount, end_time);
    env.events()
        .publish((PAYIN, from.clone()), (amount, end_time));

    Ok(round)
}

/// Share of the current round `holder` could claim right now.
/// Zero when no round is open or the holder already claimed.
pub fn claimable(env: &Env, holder: &Address) -> Result<Amount, Error> {
    if status(env) != RoundStatus::RoundOpen {
        return Ok(0);
    }

    let round = get_round(env);
    if has_claimed(env, round.index, holder) {
        return Ok(0);
    }

    proportional_share(
        env,
        get_balance(env, holder),
        round.current_dividend,
        round.total_supply_at_dividend,
    )
}

/// Pay `holder` its share of the open round.
///
/// The share is computed from the holder's balance at claim time, not from
/// a snapshot taken at pay-in.
pub fn claim(env: &Env, holder: &Address) -> Result<Amount, Error> {
    let round = get_round(env);
    if round.current_dividend == 0 {
        return Err(Error::NoActiveRound);
    }
    if env.ledger().timestamp() > round.end_time {
        return Err(Error::ClaimWindowClosed);
    }
    if has_claimed(env, round.index, holder) {
        return Err(Error::AlreadyClaimed);
    }

    let amount = proportional_share(
        env,
        get_balance(env, holder),
        round.current_dividend,
        round.total_supply_at_dividend,
    )?;
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    // Marker is written before the value leaves the contract
    set_claimed(env, round.index, holder, amount);

    let token = TokenClient::new(env, &get_payment_token(env)?);
    send_value(&token, &env.current_contract_address(), holder, amount)?;

    env.events().publish((PAYOUT, holder.clone()), amount);

    Ok(amount)
}

/// Return everything left from an expired round to `owner` and close it
pub fn reclaim(env: &Env, owner: &Address) -> Result<Amount, Error> {
    let mut round = get_round(env);
    let now = env.ledger().timestamp();
    if now <= round.end_time {
        return Err(Error::WindowStillOpen);
    }
    if round.current_dividend == 0 {
        return Err(Error::NoActiveRound);
    }

    let token = TokenClient::new(env, &get_payment_token(env)?);
    let contract = env.current_contract_address();
    let remaining = token.balance(&contract);

    round.current_dividend = 0;
    set_round(env, &round);

    if remaining > 0 {
        send_value(&token, &contract, owner, remaining)?;
    }

    log!(env, "unclaimed dividend reclaimed", round.index, remaining);
    env.events()
        .publish((RECLAIMED,), (remaining, round.end_time, now));

    Ok(remaining)
}

fn send_value(
    token: &TokenClient,
    from: &Address,
    to: &Address,
    amount: Amount,
) -> Result<(), Error> {
    match token.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}
