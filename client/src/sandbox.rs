//! In-process backend: the betting contract running in a local Soroban host.
//!
//! Auth is mocked, so every account handle can act without signatures.
//! Ledgers only move when [`SandboxBackend::advance_ledgers`] is called.

use std::cell::{Cell, RefCell};
use std::fmt::Debug;

use mock_betting::{
    Bet, ContractError, Horse, Match, Message, MockBettingContract, MockBettingContractClient,
    Prediction, PredictionTarget, Race, UserProfile,
};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{Address, Env};
use tracing::{debug, info};

use crate::backend::Backend;
use crate::catalog;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::{
    BetRecord, BetType, ChatMessage, HorseInfo, MatchInfo, MatchOutcome, PredictionPick,
    PredictionRecord, Profile, RaceInfo, RankingEntry, UserId,
};

/// Seconds per ledger close on the network the sandbox imitates.
pub const LEDGER_SECONDS: u64 = 5;

pub struct SandboxBackend {
    env: Env,
    contract_id: Address,
    accounts: RefCell<Vec<(UserId, Address)>>,
    next_account: Cell<u64>,
}

impl SandboxBackend {
    /// Registers and initializes the contract and seeds the default catalog.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_catalog(config, catalog::default_races(), catalog::default_matches())
    }

    pub fn with_catalog(
        config: &ClientConfig,
        races: Vec<RaceInfo>,
        matches: Vec<MatchInfo>,
    ) -> Result<Self, ClientError> {
        let env = Env::default();
        env.host()
            .set_base_prng_seed(prng_seed(config))
            .map_err(|e| ClientError::Backend(format!("prng seed rejected: {e:?}")))?;
        env.mock_all_auths();

        let contract_id = env.register(MockBettingContract, ());
        let backend = Self {
            env,
            contract_id,
            accounts: RefCell::new(Vec::new()),
            next_account: Cell::new(1),
        };

        let admin = Address::generate(&backend.env);
        lift(backend.client().try_initialize(&admin, &config.contract_config()))?;

        for race in &races {
            lift(backend.client().try_add_race(&backend.race_to_host(race)))?;
        }
        for fixture in &matches {
            lift(backend.client().try_add_match(&backend.match_to_host(fixture)))?;
        }

        info!(races = races.len(), matches = matches.len(), "sandbox ready");
        Ok(backend)
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Closes `count` ledgers, moving the clock forward accordingly.
    pub fn advance_ledgers(&self, count: u32) {
        self.env.ledger().with_mut(|li| {
            li.sequence_number += count;
            li.timestamp += count as u64 * LEDGER_SECONDS;
        });
        debug!(sequence = self.env.ledger().sequence(), "ledgers advanced");
    }

    fn client(&self) -> MockBettingContractClient<'_> {
        MockBettingContractClient::new(&self.env, &self.contract_id)
    }

    fn address_of(&self, user: &UserId) -> Result<Address, ClientError> {
        self.accounts
            .borrow()
            .iter()
            .find(|(id, _)| id == user)
            .map(|(_, address)| address.clone())
            .ok_or_else(|| ClientError::UnknownAccount(user.to_string()))
    }

    fn user_of(&self, address: &Address) -> Result<UserId, ClientError> {
        self.accounts
            .borrow()
            .iter()
            .find(|(_, a)| a == address)
            .map(|(id, _)| id.clone())
            .ok_or_else(|| ClientError::Backend("message author has no account handle".into()))
    }

    fn text(&self, value: &str) -> soroban_sdk::String {
        soroban_sdk::String::from_str(&self.env, value)
    }

    fn race_to_host(&self, race: &RaceInfo) -> Race {
        let mut horses = soroban_sdk::Vec::new(&self.env);
        for horse in &race.horses {
            horses.push_back(Horse {
                number: horse.number,
                name: self.text(&horse.name),
                odds: horse.odds,
            });
        }
        Race {
            id: race.id,
            race_number: race.race_number,
            name: self.text(&race.name),
            start_time: race.start_time,
            horses,
        }
    }

    fn match_to_host(&self, fixture: &MatchInfo) -> Match {
        Match {
            id: fixture.id,
            home_team: self.text(&fixture.home_team),
            away_team: self.text(&fixture.away_team),
            home_odds: fixture.home_odds,
            draw_odds: fixture.draw_odds,
            away_odds: fixture.away_odds,
            start_time: fixture.start_time,
        }
    }

    fn message_from_host(&self, message: Message) -> Result<ChatMessage, ClientError> {
        Ok(ChatMessage {
            id: message.id,
            client_id: message.client_id,
            author: self.user_of(&message.author)?,
            author_name: to_std(&message.author_name),
            text: to_std(&message.text),
            timestamp: message.timestamp,
        })
    }
}

impl Backend for SandboxBackend {
    fn create_account(&self) -> Result<UserId, ClientError> {
        let n = self.next_account.get();
        self.next_account.set(n + 1);

        let id = UserId(format!("user-{n}"));
        self.accounts
            .borrow_mut()
            .push((id.clone(), Address::generate(&self.env)));
        Ok(id)
    }

    /// A handle whose first registration fails is discarded.
    fn register(&self, user: &UserId, nickname: &str) -> Result<Profile, ClientError> {
        let address = self.address_of(user)?;
        match lift(self.client().try_register(&address, &self.text(nickname))) {
            Ok(profile) => Ok(profile_from_host(&profile)),
            Err(err) => {
                if matches!(lift(self.client().try_get_profile(&address)), Ok(None)) {
                    self.accounts.borrow_mut().retain(|(id, _)| id != user);
                    debug!(user = %user, "unregistered account discarded");
                }
                Err(err)
            }
        }
    }

    fn profile(&self, user: &UserId) -> Result<Option<Profile>, ClientError> {
        let address = self.address_of(user)?;
        let profile = lift(self.client().try_get_profile(&address))?;
        Ok(profile.as_ref().map(profile_from_host))
    }

    fn races(&self) -> Result<Vec<RaceInfo>, ClientError> {
        let races = lift(self.client().try_get_races())?;
        Ok(races.iter().map(|r| race_from_host(&r)).collect())
    }

    fn matches(&self) -> Result<Vec<MatchInfo>, ClientError> {
        let matches = lift(self.client().try_get_matches())?;
        Ok(matches.iter().map(|m| match_from_host(&m)).collect())
    }

    fn place_bet(
        &self,
        user: &UserId,
        race_id: u32,
        horse_number: u32,
        amount: i128,
    ) -> Result<BetRecord, ClientError> {
        let address = self.address_of(user)?;
        let bet = lift(self.client().try_place_bet(&address, &race_id, &horse_number, &amount))?;
        Ok(bet_from_host(&bet))
    }

    fn place_race_prediction(
        &self,
        user: &UserId,
        race_id: u32,
        bet_type: BetType,
        horses: &[u32],
        amount: i128,
    ) -> Result<PredictionRecord, ClientError> {
        let address = self.address_of(user)?;
        let picked = soroban_sdk::Vec::from_slice(&self.env, horses);
        let prediction = lift(self.client().try_place_race_prediction(
            &address, &race_id, &bet_type, &picked, &amount,
        ))?;
        Ok(prediction_from_host(&prediction))
    }

    fn place_match_prediction(
        &self,
        user: &UserId,
        match_id: u32,
        outcome: MatchOutcome,
        amount: i128,
    ) -> Result<PredictionRecord, ClientError> {
        let address = self.address_of(user)?;
        let prediction = lift(self.client().try_place_match_prediction(&address, &match_id, &outcome, &amount))?;
        Ok(prediction_from_host(&prediction))
    }

    fn bets(&self, user: &UserId) -> Result<Vec<BetRecord>, ClientError> {
        let address = self.address_of(user)?;
        let bets = lift(self.client().try_get_bets(&address))?;
        Ok(bets.iter().map(|b| bet_from_host(&b)).collect())
    }

    fn predictions(&self, user: &UserId) -> Result<Vec<PredictionRecord>, ClientError> {
        let address = self.address_of(user)?;
        let predictions = lift(self.client().try_get_predictions(&address))?;
        Ok(predictions.iter().map(|p| prediction_from_host(&p)).collect())
    }

    fn settle_due(&self, user: &UserId) -> Result<u32, ClientError> {
        let address = self.address_of(user)?;
        lift(self.client().try_settle_due(&address))
    }

    fn delete_bet(&self, user: &UserId, bet_id: u64) -> Result<(), ClientError> {
        let address = self.address_of(user)?;
        lift(self.client().try_delete_bet(&address, &bet_id))
    }

    fn delete_prediction(&self, user: &UserId, prediction_id: u64) -> Result<(), ClientError> {
        let address = self.address_of(user)?;
        lift(self.client().try_delete_prediction(&address, &prediction_id))
    }

    fn post_message(&self, author: &UserId, client_id: u64, text: &str) -> Result<ChatMessage, ClientError> {
        let address = self.address_of(author)?;
        let message = lift(self.client().try_post_message(&address, &client_id, &self.text(text)))?;
        self.message_from_host(message)
    }

    fn messages(&self) -> Result<Vec<ChatMessage>, ClientError> {
        let messages = lift(self.client().try_get_messages())?;
        messages.iter().map(|m| self.message_from_host(m)).collect()
    }

    fn delete_message(&self, author: &UserId, message_id: u64) -> Result<(), ClientError> {
        let address = self.address_of(author)?;
        lift(self.client().try_delete_message(&address, &message_id))
    }

    fn rankings(&self) -> Result<Vec<RankingEntry>, ClientError> {
        let rankings = lift(self.client().try_get_rankings())?;
        rankings
            .iter()
            .map(|r| -> Result<RankingEntry, ClientError> {
                Ok(RankingEntry {
                    user: self.user_of(&r.user)?,
                    nickname: to_std(&r.nickname),
                    points: r.points,
                    win_count: r.win_count,
                    total_bets: r.total_bets,
                    win_rate: r.win_rate,
                    tier: r.tier,
                })
            })
            .collect()
    }
}

/// Error half of a `try_*` call: the contract's own codes for fallible
/// entry points, a bare host error for the infallible reads.
trait HostError {
    fn into_client(self) -> ClientError;
}

impl HostError for ContractError {
    fn into_client(self) -> ClientError {
        ClientError::Contract(self)
    }
}

impl HostError for soroban_sdk::Error {
    fn into_client(self) -> ClientError {
        ClientError::Backend(format!("host error: {self:?}"))
    }
}

/// Flattens the generated client's `try_*` result. Contract error codes
/// become `ClientError::Contract`; host and conversion failures become
/// `ClientError::Backend`.
fn lift<T, C: Debug, E: HostError, I: Debug>(
    result: Result<Result<T, C>, Result<E, I>>,
) -> Result<T, ClientError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(conversion)) => Err(ClientError::Backend(format!("conversion failed: {conversion:?}"))),
        Err(Ok(err)) => Err(err.into_client()),
        Err(Err(invoke)) => Err(ClientError::Backend(format!("invocation failed: {invoke:?}"))),
    }
}

/// Host PRNG seed: the configured one, or fresh entropy per sandbox.
fn prng_seed(config: &ClientConfig) -> [u8; 32] {
    let mut seed = [0u8; 32];
    for chunk in seed.chunks_exact_mut(8) {
        let word = config.prng_seed.unwrap_or_else(rand::random::<u64>);
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    seed
}

fn to_std(value: &soroban_sdk::String) -> String {
    let mut buf = vec![0u8; value.len() as usize];
    value.copy_into_slice(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn profile_from_host(profile: &UserProfile) -> Profile {
    Profile {
        nickname: to_std(&profile.nickname),
        points: profile.points,
        win_count: profile.win_count,
        loss_count: profile.loss_count,
        total_bets: profile.total_bets,
        current_streak: profile.current_streak,
        best_streak: profile.best_streak,
    }
}

fn race_from_host(race: &Race) -> RaceInfo {
    RaceInfo {
        id: race.id,
        race_number: race.race_number,
        name: to_std(&race.name),
        start_time: race.start_time,
        horses: race
            .horses
            .iter()
            .map(|h| HorseInfo {
                number: h.number,
                name: to_std(&h.name),
                odds: h.odds,
            })
            .collect(),
    }
}

fn match_from_host(fixture: &Match) -> MatchInfo {
    MatchInfo {
        id: fixture.id,
        home_team: to_std(&fixture.home_team),
        away_team: to_std(&fixture.away_team),
        home_odds: fixture.home_odds,
        draw_odds: fixture.draw_odds,
        away_odds: fixture.away_odds,
        start_time: fixture.start_time,
    }
}

fn bet_from_host(bet: &Bet) -> BetRecord {
    BetRecord {
        id: bet.id,
        race_id: bet.race_id,
        horse_number: bet.horse_number,
        horse_name: to_std(&bet.horse_name),
        amount: bet.amount,
        odds: bet.odds,
        timestamp: bet.timestamp,
        status: bet.status,
    }
}

fn prediction_from_host(prediction: &Prediction) -> PredictionRecord {
    let pick = match &prediction.target {
        PredictionTarget::Race(pick) => PredictionPick::Race {
            race_id: pick.race_id,
            race_name: to_std(&pick.race_name),
            bet_type: pick.bet_type,
            horses: pick.horses.iter().collect(),
        },
        PredictionTarget::Match(pick) => PredictionPick::Match {
            match_id: pick.match_id,
            home_team: to_std(&pick.home_team),
            away_team: to_std(&pick.away_team),
            outcome: pick.outcome,
        },
    };

    PredictionRecord {
        id: prediction.id,
        pick,
        amount: prediction.amount,
        odds: prediction.odds,
        timestamp: prediction.timestamp,
        status: prediction.status,
    }
}
