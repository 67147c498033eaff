//! Type definitions for the mock betting ledger.

use soroban_sdk::{contracttype, Address, String, Vec};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    Race(u32),
    RaceIds,
    Match(u32),
    MatchIds,
    Profile(Address),
    /// Registered users in sign-up order
    Users,
    Bet(u64),
    UserBets(Address),
    NextBetId,
    Prediction(u64),
    UserPredictions(Address),
    NextPredictionId,
    Message(u64),
    MessageIds,
    NextMessageId,
    ClientMessage(ClientMessageKey),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ClientMessageKey {
    pub author: Address,
    pub client_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub initial_points: i128,
    pub settle_delay_ledgers: u32, // ~5s per ledger
    pub max_message_len: u32,      // bytes
    pub ranking_limit: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub nickname: String,
    pub points: i128,
    pub win_count: u32,
    pub loss_count: u32,
    pub total_bets: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub joined_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Horse {
    pub number: u32,
    pub name: String,
    pub odds: u32, // hundredths, 2.5 => 250
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Race {
    pub id: u32,
    pub race_number: u32,
    pub name: String,
    pub start_time: u64,
    pub horses: Vec<Horse>,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_odds: u32,
    pub draw_odds: u32,
    pub away_odds: u32,
    pub start_time: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
}

/// Race prediction kinds, each allowing a fixed number of horses
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetType {
    Single,
    Quinella,
    Exacta,
    Double,
    Trio,
    Trifecta,
    Triple,
}

impl BetType {
    pub fn max_horses(&self) -> u32 {
        match self {
            BetType::Single | BetType::Quinella => 1,
            BetType::Exacta | BetType::Double | BetType::Trio => 2,
            BetType::Trifecta | BetType::Triple => 3,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    Home,
    Draw,
    Away,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Bet {
    pub id: u64,
    pub user: Address,
    pub race_id: u32,
    pub horse_number: u32,
    pub horse_name: String,
    pub amount: i128,
    pub odds: u32,
    pub timestamp: u64,
    pub settle_ledger: u32,
    pub status: BetStatus,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RacePick {
    pub race_id: u32,
    pub race_number: u32,
    pub race_name: String,
    pub bet_type: BetType,
    pub horses: Vec<u32>,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct MatchPick {
    pub match_id: u32,
    pub home_team: String,
    pub away_team: String,
    pub outcome: MatchOutcome,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionTarget {
    Race(RacePick),
    Match(MatchPick),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub id: u64,
    pub user: Address,
    pub target: PredictionTarget,
    pub amount: i128,
    pub odds: u32,
    pub timestamp: u64,
    pub settle_ledger: u32,
    pub status: BetStatus,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    /// Id chosen by the sending client, echoed back for reconciliation
    pub client_id: u64,
    pub author: Address,
    pub author_name: String,
    pub text: String,
    pub timestamp: u64,
}

/// Rank label derived from a user's win rate
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Challenger,
    Grandmaster,
    Master,
    Diamond,
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl Tier {
    /// Maps a win rate in basis points (10000 = 100%) to its tier.
    /// Band lower bounds are inclusive.
    pub fn from_win_rate(win_rate_bps: u32) -> Tier {
        match win_rate_bps {
            r if r >= 8000 => Tier::Challenger,
            r if r >= 7000 => Tier::Grandmaster,
            r if r >= 6000 => Tier::Master,
            r if r >= 5000 => Tier::Diamond,
            r if r >= 4000 => Tier::Platinum,
            r if r >= 3000 => Tier::Gold,
            r if r >= 2000 => Tier::Silver,
            _ => Tier::Bronze,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UserRanking {
    pub user: Address,
    pub nickname: String,
    pub points: i128,
    pub win_count: u32,
    pub total_bets: u32,
    pub win_rate: u32, // basis points
    pub tier: Tier,
}
