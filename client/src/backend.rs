//! The contract surface as seen by the presentation layer.

use crate::error::ClientError;
use crate::model::{
    BetRecord, BetType, ChatMessage, MatchInfo, MatchOutcome, PredictionRecord, Profile, RaceInfo,
    RankingEntry, UserId,
};

/// One method per contract operation, in std types. Reads return full
/// ordered snapshots; views replace their state with them wholesale.
pub trait Backend {
    /// Issues a fresh account handle. Stands in for the identity provider.
    fn create_account(&self) -> Result<UserId, ClientError>;

    /// Implementations may forget a handle whose registration failed.
    fn register(&self, user: &UserId, nickname: &str) -> Result<Profile, ClientError>;

    fn profile(&self, user: &UserId) -> Result<Option<Profile>, ClientError>;

    fn races(&self) -> Result<Vec<RaceInfo>, ClientError>;

    fn matches(&self) -> Result<Vec<MatchInfo>, ClientError>;

    fn place_bet(
        &self,
        user: &UserId,
        race_id: u32,
        horse_number: u32,
        amount: i128,
    ) -> Result<BetRecord, ClientError>;

    fn place_race_prediction(
        &self,
        user: &UserId,
        race_id: u32,
        bet_type: BetType,
        horses: &[u32],
        amount: i128,
    ) -> Result<PredictionRecord, ClientError>;

    fn place_match_prediction(
        &self,
        user: &UserId,
        match_id: u32,
        outcome: MatchOutcome,
        amount: i128,
    ) -> Result<PredictionRecord, ClientError>;

    /// Newest first.
    fn bets(&self, user: &UserId) -> Result<Vec<BetRecord>, ClientError>;

    /// Newest first.
    fn predictions(&self, user: &UserId) -> Result<Vec<PredictionRecord>, ClientError>;

    /// Settles every due pending wager of the user, returning how many.
    fn settle_due(&self, user: &UserId) -> Result<u32, ClientError>;

    fn delete_bet(&self, user: &UserId, bet_id: u64) -> Result<(), ClientError>;

    fn delete_prediction(&self, user: &UserId, prediction_id: u64) -> Result<(), ClientError>;

    /// Stores a message, or returns the one already stored under
    /// `(author, client_id)`.
    fn post_message(&self, author: &UserId, client_id: u64, text: &str) -> Result<ChatMessage, ClientError>;

    /// Oldest first.
    fn messages(&self) -> Result<Vec<ChatMessage>, ClientError>;

    fn delete_message(&self, author: &UserId, message_id: u64) -> Result<(), ClientError>;

    /// Points descending, ties in sign-up order.
    fn rankings(&self) -> Result<Vec<RankingEntry>, ClientError>;
}
