//! In-memory backend for unit tests. Counts writes and can be told to fail
//! chat posts.

use std::cell::{Cell, RefCell};

use crate::backend::Backend;
use crate::error::ClientError;
use crate::model::{
    BetRecord, BetStatus, BetType, ChatMessage, MatchInfo, MatchOutcome, PredictionPick,
    PredictionRecord, Profile, RaceInfo, RankingEntry, Tier, UserId,
};

#[derive(Default)]
pub struct FakeBackend {
    pub writes: Cell<u32>,
    pub fail_posts: Cell<bool>,
    profiles: RefCell<Vec<(UserId, Profile)>>,
    bets: RefCell<Vec<(UserId, BetRecord)>>,
    messages: RefCell<Vec<ChatMessage>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self) {
        self.writes.set(self.writes.get() + 1);
    }

    fn nickname(&self, user: &UserId) -> Result<String, ClientError> {
        self.profiles
            .borrow()
            .iter()
            .find(|(id, _)| id == user)
            .map(|(_, p)| p.nickname.clone())
            .ok_or_else(|| ClientError::UnknownAccount(user.to_string()))
    }
}

impl Backend for FakeBackend {
    fn create_account(&self) -> Result<UserId, ClientError> {
        Ok(UserId(format!("fake-{}", self.profiles.borrow().len() + 1)))
    }

    fn register(&self, user: &UserId, nickname: &str) -> Result<Profile, ClientError> {
        self.write();
        let profile = Profile {
            nickname: nickname.to_owned(),
            points: 10_000,
            win_count: 0,
            loss_count: 0,
            total_bets: 0,
            current_streak: 0,
            best_streak: 0,
        };
        self.profiles.borrow_mut().push((user.clone(), profile.clone()));
        Ok(profile)
    }

    fn profile(&self, user: &UserId) -> Result<Option<Profile>, ClientError> {
        Ok(self
            .profiles
            .borrow()
            .iter()
            .find(|(id, _)| id == user)
            .map(|(_, p)| p.clone()))
    }

    fn races(&self) -> Result<Vec<RaceInfo>, ClientError> {
        Ok(Vec::new())
    }

    fn matches(&self) -> Result<Vec<MatchInfo>, ClientError> {
        Ok(Vec::new())
    }

    fn place_bet(&self, user: &UserId, race_id: u32, horse_number: u32, amount: i128) -> Result<BetRecord, ClientError> {
        self.write();
        let bet = BetRecord {
            id: self.bets.borrow().len() as u64 + 1,
            race_id,
            horse_number,
            horse_name: String::new(),
            amount,
            odds: 100,
            timestamp: 0,
            status: BetStatus::Pending,
        };
        self.bets.borrow_mut().push((user.clone(), bet.clone()));
        Ok(bet)
    }

    fn place_race_prediction(
        &self,
        _user: &UserId,
        race_id: u32,
        bet_type: BetType,
        horses: &[u32],
        amount: i128,
    ) -> Result<PredictionRecord, ClientError> {
        self.write();
        Ok(PredictionRecord {
            id: 1,
            pick: PredictionPick::Race {
                race_id,
                race_name: String::new(),
                bet_type,
                horses: horses.to_vec(),
            },
            amount,
            odds: 100,
            timestamp: 0,
            status: BetStatus::Pending,
        })
    }

    fn place_match_prediction(
        &self,
        _user: &UserId,
        match_id: u32,
        outcome: MatchOutcome,
        amount: i128,
    ) -> Result<PredictionRecord, ClientError> {
        self.write();
        Ok(PredictionRecord {
            id: 1,
            pick: PredictionPick::Match {
                match_id,
                home_team: String::new(),
                away_team: String::new(),
                outcome,
            },
            amount,
            odds: 100,
            timestamp: 0,
            status: BetStatus::Pending,
        })
    }

    fn bets(&self, user: &UserId) -> Result<Vec<BetRecord>, ClientError> {
        Ok(self
            .bets
            .borrow()
            .iter()
            .rev()
            .filter(|(id, _)| id == user)
            .map(|(_, b)| b.clone())
            .collect())
    }

    fn predictions(&self, _user: &UserId) -> Result<Vec<PredictionRecord>, ClientError> {
        Ok(Vec::new())
    }

    fn settle_due(&self, _user: &UserId) -> Result<u32, ClientError> {
        self.write();
        Ok(0)
    }

    fn delete_bet(&self, _user: &UserId, bet_id: u64) -> Result<(), ClientError> {
        self.write();
        self.bets.borrow_mut().retain(|(_, b)| b.id != bet_id);
        Ok(())
    }

    fn delete_prediction(&self, _user: &UserId, _prediction_id: u64) -> Result<(), ClientError> {
        self.write();
        Ok(())
    }

    fn post_message(&self, author: &UserId, client_id: u64, text: &str) -> Result<ChatMessage, ClientError> {
        self.write();
        if self.fail_posts.get() {
            return Err(ClientError::Backend("post rejected by fake".into()));
        }

        let message = ChatMessage {
            id: self.messages.borrow().len() as u64 + 1,
            client_id,
            author: author.clone(),
            author_name: self.nickname(author)?,
            text: text.to_owned(),
            timestamp: 100 + self.messages.borrow().len() as u64,
        };
        self.messages.borrow_mut().push(message.clone());
        Ok(message)
    }

    fn messages(&self) -> Result<Vec<ChatMessage>, ClientError> {
        Ok(self.messages.borrow().clone())
    }

    fn delete_message(&self, _author: &UserId, message_id: u64) -> Result<(), ClientError> {
        self.write();
        self.messages.borrow_mut().retain(|m| m.id != message_id);
        Ok(())
    }

    fn rankings(&self) -> Result<Vec<RankingEntry>, ClientError> {
        Ok(self
            .profiles
            .borrow()
            .iter()
            .map(|(user, p)| RankingEntry {
                user: user.clone(),
                nickname: p.nickname.clone(),
                points: p.points,
                win_count: p.win_count,
                total_bets: p.total_bets,
                win_rate: 0,
                tier: Tier::Bronze,
            })
            .collect())
    }
}
