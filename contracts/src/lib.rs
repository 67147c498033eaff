#![no_std]
//! # Mock Betting Ledger
//!
//! Soroban contract backing a mock horse-racing and sports betting game.
//! Users sign up for virtual points, bet on races, predict match results,
//! chat, and compete on a points leaderboard with win-rate tiers.
//!
//! ## Key Features
//! - Point debit and bet record written in one invocation
//! - Ledger-scheduled win/loss settlement, callable by anyone once due
//! - Idempotent chat posts keyed by a client-chosen id
//! - Stable points ranking with tier labels

mod contract;
mod errors;
mod types;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod tests;

pub use contract::{MockBettingContract, MockBettingContractClient, MESSAGE_LEN_CAP, NICKNAME_MAX_LEN};
pub use errors::ContractError;
pub use types::{
    Bet, BetStatus, BetType, Config, Horse, Match, MatchOutcome, MatchPick, Message, Prediction,
    PredictionTarget, Race, RacePick, Tier, UserProfile, UserRanking,
};
