use soroban_sdk::{symbol_short, Symbol};

// Roles and administration
pub const CHANGED_TREASURER: Symbol = symbol_short!("treasurer");
pub const OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("own_xfer");
pub const CONTRACT_PAUSED: Symbol = symbol_short!("paused");
pub const CONTRACT_UNPAUSED: Symbol = symbol_short!("unpaused");

// Ledger (mint and transfer use the SEP-41 topics from soroban-token-sdk)
pub const APPROVAL: Symbol = symbol_short!("approval");

// Dividend rounds
pub const PAYIN: Symbol = symbol_short!("payin");
pub const PAYOUT: Symbol = symbol_short!("payout");
pub const RECLAIMED: Symbol = symbol_short!("reclaimed");

// Vesting
pub const VESTING_CREATED: Symbol = symbol_short!("vest_new");
pub const RELEASED: Symbol = symbol_short!("released");
