use soroban_sdk::{contracttype, Address};

pub type Amount = i128;
pub type Timestamp = u64;

/// Capabilities checked by the single authorization predicate
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    /// Contract owner
    Owner = 0,
    /// Owner or an active treasurer; may start a dividend round
    Treasurer = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseState {
    pub paused: bool,
    pub paused_at: Timestamp,
}

/// Singleton state of the current (or most recent) dividend round.
///
/// `index` increases by one on every pay-in and scopes the per-holder claim
/// markers, so starting a round implicitly resets them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DividendRound {
    pub index: u32,
    pub current_dividend: Amount,
    pub end_time: Timestamp,
    pub total_supply_at_dividend: Amount,
}

/// Observable phase of the dividend state machine
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RoundStatus {
    NoActiveRound = 0,
    RoundOpen = 1,
    RoundExpired = 2,
}

/// Custodial linear vesting grant.
///
/// `wallet` is the address holding the granted tokens on the token ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingWallet {
    pub index: u32,
    pub wallet: Address,
    pub beneficiary: Address,
    pub start: Timestamp,
    pub cliff: Timestamp,
    pub duration: Timestamp,
    pub released: Amount,
}
