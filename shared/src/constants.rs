/// Seconds in one day
pub const DAY_SECS: u64 = 24 * 60 * 60;

/// Length of the dividend claim window, measured from pay-in
pub const CLAIM_PERIOD_SECS: u64 = 330 * DAY_SECS;

/// Time after the grant before any vested tokens can be released
pub const VESTING_CLIFF_SECS: u64 = 365 * DAY_SECS;

/// Total vesting duration of a development team grant
pub const VESTING_DURATION_SECS: u64 = 3 * 365 * DAY_SECS;

pub const TOKEN_DECIMALS: u32 = 18;

/// One whole token in base units (10^18)
pub const TOKEN_UNIT: i128 = 1_000_000_000_000_000_000;

/// Cumulative cap on tokens minted into development team vesting wallets
pub const DEVELOPMENT_TEAM_CAP: i128 = 2_000_000 * TOKEN_UNIT;

/// Upper bound on recipients in a single batch mint
pub const MAX_BATCH_SIZE: u32 = 100;

pub const TOKEN_NAME: &str = "Tend Token";
pub const TOKEN_SYMBOL: &str = "TEND";

/// Ledgers closed per day at a five second close time
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance entries are extended to this many ledgers on every write
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Balances, claim markers and vesting records are kept alive this long
/// whenever they are touched
pub const PERSISTENT_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;
