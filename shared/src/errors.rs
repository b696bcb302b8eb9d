use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    NotFound = 5,

    // Ledger errors
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
    CapExceeded = 8,

    // Dividend round errors
    RoundStillOpen = 9,
    NoActiveRound = 10,
    ClaimWindowClosed = 11,
    AlreadyClaimed = 12,
    WindowStillOpen = 13,

    // Administrative errors
    ContractPaused = 14,
    LengthMismatch = 15,

    // Vesting errors
    NothingToRelease = 16,

    // Value transfer / arithmetic
    TransferFailed = 17,
    Overflow = 18,
    EmptyBatch = 19,
}
