use soroban_sdk::{contracttype, Env};

use crate::errors::Error;
use crate::types::PauseState;

#[contracttype]
#[derive(Clone)]
pub enum PauseKey {
    State,
}

pub fn get_pause_state(env: &Env) -> PauseState {
    env.storage()
        .instance()
        .get(&PauseKey::State)
        .unwrap_or(PauseState {
            paused: false,
            paused_at: 0,
        })
}

pub fn set_pause_state(env: &Env, state: &PauseState) {
    env.storage().instance().set(&PauseKey::State, state);
}

pub fn is_paused(env: &Env) -> bool {
    get_pause_state(env).paused
}

/// Reject token movements while the contract is paused
pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if is_paused(env) {
        return Err(Error::ContractPaused);
    }
    Ok(())
}

/// Enter the paused state. Re-pausing keeps the first `paused_at`.
pub fn pause(env: &Env) -> PauseState {
    let current = get_pause_state(env);
    if current.paused {
        return current;
    }

    let state = PauseState {
        paused: true,
        paused_at: env.ledger().timestamp(),
    };
    set_pause_state(env, &state);
    state
}

pub fn unpause(env: &Env) -> PauseState {
    let state = PauseState {
        paused: false,
        paused_at: get_pause_state(env).paused_at,
    };
    set_pause_state(env, &state);
    state
}
