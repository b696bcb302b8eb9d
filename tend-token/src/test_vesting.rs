#![cfg(test)]

use crate::tests::{setup, TestContext, START_TIME};
use shared::constants::{DAY_SECS, DEVELOPMENT_TEAM_CAP, TOKEN_UNIT, VESTING_CLIFF_SECS};
use shared::errors::Error;
use shared::events::RELEASED;
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    Address, IntoVal, TryFromVal, Val, Vec,
};

fn grant(ctx: &TestContext, amount: i128) -> (Address, Address) {
    let beneficiary = Address::generate(&ctx.env);
    let wallet = ctx
        .token
        .mint_development_team_tokens(&beneficiary, &amount);
    (beneficiary, wallet)
}

fn at_day(ctx: &TestContext, day: u64) {
    ctx.env.ledger().set_timestamp(START_TIME + day * DAY_SECS);
}

#[test]
fn test_mint_development_team_tokens() {
    let ctx = setup();
    assert_eq!(ctx.token.vesting_wallet_length(), 0);

    let (beneficiary, wallet) = grant(&ctx, 20 * TOKEN_UNIT);

    assert_eq!(ctx.token.vesting_wallet_length(), 1);
    assert_eq!(ctx.token.vesting_wallets(&0), wallet);
    assert_ne!(wallet, beneficiary);
    assert_eq!(ctx.token.balance(&wallet), 20 * TOKEN_UNIT);
    assert_eq!(ctx.token.balance(&beneficiary), 0);
    assert_eq!(ctx.token.total_supply(), 20 * TOKEN_UNIT);
    assert_eq!(ctx.token.development_team_minted(), 20 * TOKEN_UNIT);

    let record = ctx.token.vesting_wallet(&0);
    assert_eq!(record.beneficiary, beneficiary);
    assert_eq!(record.start, START_TIME);
    assert_eq!(record.cliff, VESTING_CLIFF_SECS);
    assert_eq!(record.duration, 3 * 365 * DAY_SECS);
    assert_eq!(record.released, 0);
}

#[test]
fn test_mint_development_team_tokens_zero_amount() {
    let ctx = setup();
    let beneficiary = Address::generate(&ctx.env);

    let result = ctx.token.try_mint_development_team_tokens(&beneficiary, &0);
    assert_eq!(result, Err(Ok(Error::InvalidAmount)));
    assert_eq!(ctx.token.vesting_wallet_length(), 0);
}

#[test]
fn test_mint_development_team_tokens_cap() {
    let ctx = setup();
    let beneficiary = Address::generate(&ctx.env);

    let result = ctx
        .token
        .try_mint_development_team_tokens(&beneficiary, &(DEVELOPMENT_TEAM_CAP + 1));
    assert_eq!(result, Err(Ok(Error::CapExceeded)));

    // The cap is cumulative across grants
    grant(&ctx, DEVELOPMENT_TEAM_CAP - TOKEN_UNIT);
    let result = ctx
        .token
        .try_mint_development_team_tokens(&beneficiary, &(TOKEN_UNIT + 1));
    assert_eq!(result, Err(Ok(Error::CapExceeded)));

    grant(&ctx, TOKEN_UNIT);
    assert_eq!(ctx.token.development_team_minted(), DEVELOPMENT_TEAM_CAP);
    assert_eq!(ctx.token.vesting_wallet_length(), 2);
    assert_eq!(ctx.token.total_supply(), DEVELOPMENT_TEAM_CAP);
}

#[test]
fn test_wallets_have_distinct_addresses() {
    let ctx = setup();
    let (_, wallet0) = grant(&ctx, TOKEN_UNIT);
    let (_, wallet1) = grant(&ctx, 2 * TOKEN_UNIT);

    assert_ne!(wallet0, wallet1);
    assert_eq!(ctx.token.vesting_wallet(&1).index, 1);
    assert_eq!(ctx.token.balance(&wallet0), TOKEN_UNIT);
    assert_eq!(ctx.token.balance(&wallet1), 2 * TOKEN_UNIT);
}

#[test]
fn test_release_before_cliff() {
    let ctx = setup();
    ctx.token.unpause();
    grant(&ctx, 20 * TOKEN_UNIT);

    let result = ctx.token.try_release(&0);
    assert_eq!(result, Err(Ok(Error::NothingToRelease)));

    ctx.env
        .ledger()
        .set_timestamp(START_TIME + VESTING_CLIFF_SECS - 1);
    assert_eq!(ctx.token.vested_amount(&0), 0);
    let result = ctx.token.try_release(&0);
    assert_eq!(result, Err(Ok(Error::NothingToRelease)));
}

#[test]
fn test_release_blocked_while_paused() {
    let ctx = setup();
    grant(&ctx, 20 * TOKEN_UNIT);
    at_day(&ctx, 400);

    let result = ctx.token.try_release(&0);
    assert_eq!(result, Err(Ok(Error::ContractPaused)));
}

#[test]
fn test_release_unknown_wallet() {
    let ctx = setup();
    ctx.token.unpause();

    assert_eq!(ctx.token.try_release(&3), Err(Ok(Error::NotFound)));
}

#[test]
fn test_release_schedule() {
    let ctx = setup();
    let (beneficiary, wallet) = grant(&ctx, 20 * TOKEN_UNIT);
    ctx.token.unpause();

    // Year 1: a third of the grant
    at_day(&ctx, 365);
    assert_eq!(ctx.token.releasable_amount(&0), 6_666_666_666_666_666_666);

    let released = ctx.token.release(&0);
    let (_, topics, data) = ctx.env.events().all().last().unwrap();
    let expected: Vec<Val> = (RELEASED, beneficiary.clone()).into_val(&ctx.env);
    assert_eq!(topics, expected);
    assert_eq!(i128::try_from_val(&ctx.env, &data).unwrap(), released);

    assert_eq!(released, 6_666_666_666_666_666_666);
    assert_eq!(ctx.token.balance(&beneficiary), released);
    assert_eq!(ctx.token.balance(&wallet), 20 * TOKEN_UNIT - released);
    assert_eq!(ctx.token.vesting_wallet(&0).released, released);

    // Nothing new in the same instant
    let result = ctx.token.try_release(&0);
    assert_eq!(result, Err(Ok(Error::NothingToRelease)));

    // Year 3: the rest
    at_day(&ctx, 1095);
    let rest = ctx.token.release(&0);

    assert_eq!(rest, 20 * TOKEN_UNIT - released);
    assert_eq!(ctx.token.balance(&beneficiary), 20 * TOKEN_UNIT);
    assert_eq!(ctx.token.balance(&wallet), 0);
    assert_eq!(ctx.token.vested_amount(&0), 20 * TOKEN_UNIT);

    at_day(&ctx, 2000);
    let result = ctx.token.try_release(&0);
    assert_eq!(result, Err(Ok(Error::NothingToRelease)));
    assert_eq!(ctx.token.total_supply(), 20 * TOKEN_UNIT);
}

#[test]
fn test_release_is_permissionless() {
    let ctx = setup();
    let (beneficiary, _) = grant(&ctx, 3 * TOKEN_UNIT);
    ctx.token.unpause();
    at_day(&ctx, 730);

    // No signatures at all
    ctx.env.set_auths(&[]);
    let released = ctx.token.release(&0);

    assert_eq!(released, 2 * TOKEN_UNIT);
    assert_eq!(ctx.token.balance(&beneficiary), 2 * TOKEN_UNIT);
}

#[test]
fn test_wallet_custody_cannot_be_spent() {
    let ctx = setup();
    let (_, wallet) = grant(&ctx, 3 * TOKEN_UNIT);
    ctx.token.unpause();
    let thief = Address::generate(&ctx.env);

    ctx.env.set_auths(&[]);
    let result = ctx.token.try_transfer(&wallet, &thief, &TOKEN_UNIT);

    assert!(result.is_err());
    assert_eq!(ctx.token.balance(&wallet), 3 * TOKEN_UNIT);
}
