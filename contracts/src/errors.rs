//! Contract error types for the mock betting ledger.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Admin address not set - call initialize first
    AdminNotSet = 2,
    /// Config values out of range
    InvalidConfig = 3,
    /// Race has no horses, duplicate horse numbers or zero odds
    InvalidRace = 4,
    /// A race with this id already exists
    RaceExists = 5,
    /// Match has zero odds
    InvalidMatch = 6,
    /// A match with this id already exists
    MatchExists = 7,
    /// Nickname empty or too long
    InvalidNickname = 8,
    /// User already signed up
    AlreadyRegistered = 9,
    /// User has not signed up
    NotRegistered = 10,
    /// Bet amount must be greater than zero
    InvalidBetAmount = 11,
    /// User has insufficient points
    InsufficientPoints = 12,
    UnknownRace = 13,
    UnknownHorse = 14,
    UnknownMatch = 15,
    /// Horse count does not fit the bet type, or a horse was picked twice
    InvalidSelection = 16,
    /// Bet, prediction or message does not exist
    NotFound = 17,
    /// Bet or prediction was already resolved
    AlreadySettled = 18,
    /// Settle ledger not reached yet
    SettlementNotDue = 19,
    /// Caller does not own the bet or prediction
    NotOwner = 20,
    /// Pending entries cannot be removed from history
    StillPending = 21,
    /// Message text is blank
    EmptyMessage = 22,
    /// Message text exceeds the configured limit
    MessageTooLong = 23,
    /// Only the author may delete a message
    NotAuthor = 24,
    /// Arithmetic overflow occurred
    Overflow = 25,
}
