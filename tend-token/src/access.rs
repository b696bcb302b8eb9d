use shared::errors::Error;
use shared::types::Role;
use soroban_sdk::{Address, Env};

use crate::storage::{get_owner, get_treasurer_flag};

/// Single authorization predicate for every gated operation.
///
/// The owner holds all roles; treasurers additionally need an active flag.
pub fn has_role(env: &Env, account: &Address, role: Role) -> Result<bool, Error> {
    let owner = get_owner(env)?;
    if *account == owner {
        return Ok(true);
    }

    Ok(match role {
        Role::Owner => false,
        Role::Treasurer => get_treasurer_flag(env, account),
    })
}

/// Check `account` holds `role`, then require its signature
pub fn require_role(env: &Env, account: &Address, role: Role) -> Result<(), Error> {
    if !has_role(env, account, role)? {
        return Err(Error::Unauthorized);
    }
    account.require_auth();
    Ok(())
}

/// Require the stored owner's signature and return the owner
pub fn require_owner(env: &Env) -> Result<Address, Error> {
    let owner = get_owner(env)?;
    owner.require_auth();
    Ok(owner)
}
