//! Core contract implementation for the mock betting ledger.

use soroban_sdk::{
    contract, contractimpl, log, Address, Env, IntoVal, String, TryFromVal, Val, Vec,
};

use crate::errors::ContractError;
use crate::types::{
    Bet, BetStatus, BetType, ClientMessageKey, Config, DataKey, Horse, Match, MatchOutcome,
    MatchPick, Message, Prediction, PredictionTarget, Race, RacePick, Tier, UserProfile,
    UserRanking,
};

/// Upper bound for `Config::max_message_len`, also the size of the scratch
/// buffer used to inspect message text.
pub const MESSAGE_LEN_CAP: u32 = 1000;
pub const NICKNAME_MAX_LEN: u32 = 32;
pub const MAX_SETTLE_DELAY: u32 = 100_000;

#[contract]
pub struct MockBettingContract;

#[contractimpl]
impl MockBettingContract {
    /// Initializes the contract with the admin address and config (one-time only)
    pub fn initialize(env: Env, admin: Address, config: Config) -> Result<(), ContractError> {
        admin.require_auth();

        if env.storage().persistent().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }

        if config.settle_delay_ledgers == 0
            || config.settle_delay_ledgers > MAX_SETTLE_DELAY
            || config.max_message_len == 0
            || config.max_message_len > MESSAGE_LEN_CAP
            || config.initial_points < 0
            || config.ranking_limit == 0
        {
            return Err(ContractError::InvalidConfig);
        }

        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::Config, &config);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Admin)
    }

    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        Self::_config(&env)
    }

    // ── catalog ─────────────────────────────────────────────────────────────

    /// Adds a race to the catalog (admin only)
    pub fn add_race(env: Env, race: Race) -> Result<(), ContractError> {
        Self::_admin(&env)?.require_auth();

        if race.horses.is_empty() {
            return Err(ContractError::InvalidRace);
        }
        for (i, horse) in race.horses.iter().enumerate() {
            if horse.odds == 0 {
                return Err(ContractError::InvalidRace);
            }
            for j in 0..i as u32 {
                if let Some(earlier) = race.horses.get(j) {
                    if earlier.number == horse.number {
                        return Err(ContractError::InvalidRace);
                    }
                }
            }
        }

        let key = DataKey::Race(race.id);
        if env.storage().persistent().has(&key) {
            return Err(ContractError::RaceExists);
        }

        let mut ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::RaceIds)
            .unwrap_or(Vec::new(&env));
        ids.push_back(race.id);

        env.storage().persistent().set(&key, &race);
        env.storage().persistent().set(&DataKey::RaceIds, &ids);

        log!(&env, "race added", race.id);
        Ok(())
    }

    /// Adds a sports match to the catalog (admin only)
    pub fn add_match(env: Env, fixture: Match) -> Result<(), ContractError> {
        Self::_admin(&env)?.require_auth();

        if fixture.home_odds == 0 || fixture.draw_odds == 0 || fixture.away_odds == 0 {
            return Err(ContractError::InvalidMatch);
        }

        let key = DataKey::Match(fixture.id);
        if env.storage().persistent().has(&key) {
            return Err(ContractError::MatchExists);
        }

        let mut ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::MatchIds)
            .unwrap_or(Vec::new(&env));
        ids.push_back(fixture.id);

        env.storage().persistent().set(&key, &fixture);
        env.storage().persistent().set(&DataKey::MatchIds, &ids);

        log!(&env, "match added", fixture.id);
        Ok(())
    }

    pub fn get_race(env: Env, race_id: u32) -> Option<Race> {
        env.storage().persistent().get(&DataKey::Race(race_id))
    }

    pub fn get_match(env: Env, match_id: u32) -> Option<Match> {
        env.storage().persistent().get(&DataKey::Match(match_id))
    }

    /// Returns all races in insertion order
    pub fn get_races(env: Env) -> Vec<Race> {
        let ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::RaceIds)
            .unwrap_or(Vec::new(&env));

        let mut races = Vec::new(&env);
        for id in ids.iter() {
            if let Some(race) = env.storage().persistent().get(&DataKey::Race(id)) {
                races.push_back(race);
            }
        }
        races
    }

    /// Returns all matches in insertion order
    pub fn get_matches(env: Env) -> Vec<Match> {
        let ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::MatchIds)
            .unwrap_or(Vec::new(&env));

        let mut matches = Vec::new(&env);
        for id in ids.iter() {
            if let Some(fixture) = env.storage().persistent().get(&DataKey::Match(id)) {
                matches.push_back(fixture);
            }
        }
        matches
    }

    // ── users ───────────────────────────────────────────────────────────────

    /// Signs a user up and credits the initial points (one-time only)
    pub fn register(env: Env, user: Address, nickname: String) -> Result<UserProfile, ContractError> {
        user.require_auth();

        let config = Self::_config(&env)?;

        if nickname.len() == 0 || nickname.len() > NICKNAME_MAX_LEN || Self::_is_blank(&nickname) {
            return Err(ContractError::InvalidNickname);
        }

        let key = DataKey::Profile(user.clone());
        if env.storage().persistent().has(&key) {
            return Err(ContractError::AlreadyRegistered);
        }

        let profile = UserProfile {
            nickname,
            points: config.initial_points,
            win_count: 0,
            loss_count: 0,
            total_bets: 0,
            current_streak: 0,
            best_streak: 0,
            joined_at: env.ledger().timestamp(),
        };

        let mut users: Vec<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::Users)
            .unwrap_or(Vec::new(&env));
        users.push_back(user.clone());

        env.storage().persistent().set(&key, &profile);
        env.storage().persistent().set(&DataKey::Users, &users);

        log!(&env, "user registered", user, config.initial_points);
        Ok(profile)
    }

    pub fn get_profile(env: Env, user: Address) -> Option<UserProfile> {
        env.storage().persistent().get(&DataKey::Profile(user))
    }

    /// Returns user's points, zero when not signed up
    pub fn points(env: Env, user: Address) -> i128 {
        Self::get_profile(env, user).map(|p| p.points).unwrap_or(0)
    }

    // ── wagers ──────────────────────────────────────────────────────────────

    /// Places a single-horse bet. Points are debited in the same invocation.
    pub fn place_bet(
        env: Env,
        user: Address,
        race_id: u32,
        horse_number: u32,
        amount: i128,
    ) -> Result<Bet, ContractError> {
        user.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidBetAmount);
        }

        let config = Self::_config(&env)?;
        let mut profile = Self::_profile(&env, &user)?;

        let race: Race = env
            .storage()
            .persistent()
            .get(&DataKey::Race(race_id))
            .ok_or(ContractError::UnknownRace)?;
        let horse = Self::_find_horse(&race, horse_number).ok_or(ContractError::UnknownHorse)?;

        Self::_debit(&mut profile, amount)?;

        let id = Self::_next_id(&env, DataKey::NextBetId)?;
        let bet = Bet {
            id,
            user: user.clone(),
            race_id,
            horse_number,
            horse_name: horse.name,
            amount,
            odds: horse.odds,
            timestamp: env.ledger().timestamp(),
            settle_ledger: Self::_settle_ledger(&env, &config)?,
            status: BetStatus::Pending,
        };

        let list_key = DataKey::UserBets(user.clone());
        let mut ids: Vec<u64> = env
            .storage()
            .persistent()
            .get(&list_key)
            .unwrap_or(Vec::new(&env));
        ids.push_back(id);

        env.storage().persistent().set(&DataKey::Bet(id), &bet);
        env.storage().persistent().set(&list_key, &ids);
        Self::_save_profile(&env, &user, &profile);

        log!(&env, "bet placed", user, id, amount);
        Ok(bet)
    }

    /// Places a race prediction over one to three horses depending on bet type.
    /// Odds are the product of the picked horses' odds.
    pub fn place_race_prediction(
        env: Env,
        user: Address,
        race_id: u32,
        bet_type: BetType,
        horses: Vec<u32>,
        amount: i128,
    ) -> Result<Prediction, ContractError> {
        user.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidBetAmount);
        }

        let config = Self::_config(&env)?;
        let mut profile = Self::_profile(&env, &user)?;

        let race: Race = env
            .storage()
            .persistent()
            .get(&DataKey::Race(race_id))
            .ok_or(ContractError::UnknownRace)?;

        if horses.is_empty() || horses.len() > bet_type.max_horses() {
            return Err(ContractError::InvalidSelection);
        }
        let odds = Self::_combined_odds(&race, &horses)?;

        Self::_debit(&mut profile, amount)?;

        let target = PredictionTarget::Race(RacePick {
            race_id,
            race_number: race.race_number,
            race_name: race.name,
            bet_type,
            horses,
        });
        let prediction = Self::_store_prediction(&env, &user, &config, target, amount, odds)?;
        Self::_save_profile(&env, &user, &profile);

        Ok(prediction)
    }

    /// Places a home/draw/away prediction on a match
    pub fn place_match_prediction(
        env: Env,
        user: Address,
        match_id: u32,
        outcome: MatchOutcome,
        amount: i128,
    ) -> Result<Prediction, ContractError> {
        user.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidBetAmount);
        }

        let config = Self::_config(&env)?;
        let mut profile = Self::_profile(&env, &user)?;

        let fixture: Match = env
            .storage()
            .persistent()
            .get(&DataKey::Match(match_id))
            .ok_or(ContractError::UnknownMatch)?;

        let odds = match outcome {
            MatchOutcome::Home => fixture.home_odds,
            MatchOutcome::Draw => fixture.draw_odds,
            MatchOutcome::Away => fixture.away_odds,
        };

        Self::_debit(&mut profile, amount)?;

        let target = PredictionTarget::Match(MatchPick {
            match_id,
            home_team: fixture.home_team,
            away_team: fixture.away_team,
            outcome,
        });
        let prediction = Self::_store_prediction(&env, &user, &config, target, amount, odds)?;
        Self::_save_profile(&env, &user, &profile);

        Ok(prediction)
    }

    pub fn get_bet(env: Env, bet_id: u64) -> Option<Bet> {
        env.storage().persistent().get(&DataKey::Bet(bet_id))
    }

    pub fn get_prediction(env: Env, prediction_id: u64) -> Option<Prediction> {
        env.storage().persistent().get(&DataKey::Prediction(prediction_id))
    }

    /// Returns user's bets, newest first
    pub fn get_bets(env: Env, user: Address) -> Vec<Bet> {
        let ids: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::UserBets(user))
            .unwrap_or(Vec::new(&env));

        let mut bets = Vec::new(&env);
        for id in ids.iter() {
            if let Some(bet) = env.storage().persistent().get::<_, Bet>(&DataKey::Bet(id)) {
                Self::_insert_sorted(&mut bets, bet, |a, b| a.timestamp >= b.timestamp);
            }
        }
        bets
    }

    /// Returns user's predictions, newest first
    pub fn get_predictions(env: Env, user: Address) -> Vec<Prediction> {
        let ids: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::UserPredictions(user))
            .unwrap_or(Vec::new(&env));

        let mut predictions = Vec::new(&env);
        for id in ids.iter() {
            if let Some(p) = env.storage().persistent().get::<_, Prediction>(&DataKey::Prediction(id)) {
                Self::_insert_sorted(&mut predictions, p, |a, b| a.timestamp >= b.timestamp);
            }
        }
        predictions
    }

    // ── settlement ──────────────────────────────────────────────────────────

    /// Resolves a pending bet once its settle ledger is reached. Anyone may call.
    pub fn settle_bet(env: Env, bet_id: u64) -> Result<BetStatus, ContractError> {
        let key = DataKey::Bet(bet_id);
        let mut bet: Bet = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::NotFound)?;

        bet.status = Self::_resolve(&env, &bet.user, bet.status, bet.settle_ledger, bet.amount, bet.odds)?;
        env.storage().persistent().set(&key, &bet);

        log!(&env, "bet settled", bet_id, bet.status);
        Ok(bet.status)
    }

    /// Resolves a pending prediction once its settle ledger is reached. Anyone may call.
    pub fn settle_prediction(env: Env, prediction_id: u64) -> Result<BetStatus, ContractError> {
        let key = DataKey::Prediction(prediction_id);
        let mut prediction: Prediction = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::NotFound)?;

        prediction.status = Self::_resolve(
            &env,
            &prediction.user,
            prediction.status,
            prediction.settle_ledger,
            prediction.amount,
            prediction.odds,
        )?;
        env.storage().persistent().set(&key, &prediction);

        log!(&env, "prediction settled", prediction_id, prediction.status);
        Ok(prediction.status)
    }

    /// Settles every due pending bet and prediction of a user.
    /// Returns how many were resolved.
    ///
    /// Walks the user's whole history, so the invocation budget bounds how
    /// long a history can get before this must be split per record with
    /// `settle_bet` / `settle_prediction`.
    pub fn settle_due(env: Env, user: Address) -> Result<u32, ContractError> {
        let now = env.ledger().sequence();
        let mut settled: u32 = 0;

        for bet in Self::get_bets(env.clone(), user.clone()).iter() {
            if bet.status == BetStatus::Pending && now >= bet.settle_ledger {
                Self::settle_bet(env.clone(), bet.id)?;
                settled = settled.checked_add(1).ok_or(ContractError::Overflow)?;
            }
        }
        for prediction in Self::get_predictions(env.clone(), user).iter() {
            if prediction.status == BetStatus::Pending && now >= prediction.settle_ledger {
                Self::settle_prediction(env.clone(), prediction.id)?;
                settled = settled.checked_add(1).ok_or(ContractError::Overflow)?;
            }
        }

        Ok(settled)
    }

    // ── history cleanup ─────────────────────────────────────────────────────

    /// Removes a settled bet from the owner's history
    pub fn delete_bet(env: Env, user: Address, bet_id: u64) -> Result<(), ContractError> {
        user.require_auth();

        let key = DataKey::Bet(bet_id);
        let bet: Bet = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::NotFound)?;

        if bet.user != user {
            return Err(ContractError::NotOwner);
        }
        if bet.status == BetStatus::Pending {
            return Err(ContractError::StillPending);
        }

        env.storage().persistent().remove(&key);
        Self::_remove_id(&env, DataKey::UserBets(user), bet_id);

        Ok(())
    }

    /// Removes a settled prediction from the owner's history
    pub fn delete_prediction(env: Env, user: Address, prediction_id: u64) -> Result<(), ContractError> {
        user.require_auth();

        let key = DataKey::Prediction(prediction_id);
        let prediction: Prediction = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::NotFound)?;

        if prediction.user != user {
            return Err(ContractError::NotOwner);
        }
        if prediction.status == BetStatus::Pending {
            return Err(ContractError::StillPending);
        }

        env.storage().persistent().remove(&key);
        Self::_remove_id(&env, DataKey::UserPredictions(user), prediction_id);

        Ok(())
    }

    // ── chat ────────────────────────────────────────────────────────────────

    /// Posts a chat message. Repeating a `client_id` returns the stored
    /// message instead of writing a duplicate.
    pub fn post_message(
        env: Env,
        author: Address,
        client_id: u64,
        text: String,
    ) -> Result<Message, ContractError> {
        author.require_auth();

        let config = Self::_config(&env)?;
        let profile = Self::_profile(&env, &author)?;

        let client_key = DataKey::ClientMessage(ClientMessageKey {
            author: author.clone(),
            client_id,
        });
        if let Some(existing_id) = env.storage().persistent().get::<_, u64>(&client_key) {
            if let Some(existing) = env.storage().persistent().get(&DataKey::Message(existing_id)) {
                return Ok(existing);
            }
        }

        if text.len() == 0 {
            return Err(ContractError::EmptyMessage);
        }
        if text.len() > config.max_message_len {
            return Err(ContractError::MessageTooLong);
        }
        if Self::_is_blank(&text) {
            return Err(ContractError::EmptyMessage);
        }

        let id = Self::_next_id(&env, DataKey::NextMessageId)?;
        let message = Message {
            id,
            client_id,
            author: author.clone(),
            author_name: profile.nickname,
            text,
            timestamp: env.ledger().timestamp(),
        };

        let mut ids: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::MessageIds)
            .unwrap_or(Vec::new(&env));
        ids.push_back(id);

        env.storage().persistent().set(&DataKey::Message(id), &message);
        env.storage().persistent().set(&DataKey::MessageIds, &ids);
        env.storage().persistent().set(&client_key, &id);

        log!(&env, "message posted", author, id, client_id);
        Ok(message)
    }

    /// Returns all messages, oldest first
    pub fn get_messages(env: Env) -> Vec<Message> {
        let ids: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::MessageIds)
            .unwrap_or(Vec::new(&env));

        let mut messages = Vec::new(&env);
        for id in ids.iter() {
            if let Some(m) = env.storage().persistent().get::<_, Message>(&DataKey::Message(id)) {
                Self::_insert_sorted(&mut messages, m, |a, b| a.timestamp < b.timestamp);
            }
        }
        messages
    }

    /// Deletes a message (author only)
    pub fn delete_message(env: Env, author: Address, message_id: u64) -> Result<(), ContractError> {
        author.require_auth();

        let key = DataKey::Message(message_id);
        let message: Message = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::NotFound)?;

        if message.author != author {
            return Err(ContractError::NotAuthor);
        }

        env.storage().persistent().remove(&key);
        env.storage().persistent().remove(&DataKey::ClientMessage(ClientMessageKey {
            author,
            client_id: message.client_id,
        }));
        Self::_remove_id(&env, DataKey::MessageIds, message_id);

        Ok(())
    }

    // ── rankings ────────────────────────────────────────────────────────────

    /// Returns the top users by points. Equal points keep sign-up order.
    ///
    /// Reads every profile and insertion-sorts them, so the cost grows
    /// quadratically with the user count. Fine for a mock game's user base;
    /// a larger one needs an index kept up to date on each points change.
    pub fn get_rankings(env: Env) -> Result<Vec<UserRanking>, ContractError> {
        let config = Self::_config(&env)?;
        let users: Vec<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::Users)
            .unwrap_or(Vec::new(&env));

        let mut rankings = Vec::new(&env);
        for user in users.iter() {
            if let Some(profile) = env
                .storage()
                .persistent()
                .get::<_, UserProfile>(&DataKey::Profile(user.clone()))
            {
                let win_rate = Self::_win_rate(&profile);
                let entry = UserRanking {
                    user,
                    nickname: profile.nickname,
                    points: profile.points,
                    win_count: profile.win_count,
                    total_bets: profile.total_bets,
                    win_rate,
                    tier: Tier::from_win_rate(win_rate),
                };
                Self::_insert_sorted(&mut rankings, entry, |a, b| a.points > b.points);
            }
        }

        let shown = rankings.len().min(config.ranking_limit);
        Ok(rankings.slice(0..shown))
    }

    // ── helpers ─────────────────────────────────────────────────────────────

    fn _admin(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(ContractError::AdminNotSet)
    }

    fn _config(env: &Env) -> Result<Config, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Config)
            .ok_or(ContractError::AdminNotSet)
    }

    fn _profile(env: &Env, user: &Address) -> Result<UserProfile, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Profile(user.clone()))
            .ok_or(ContractError::NotRegistered)
    }

    fn _save_profile(env: &Env, user: &Address, profile: &UserProfile) {
        env.storage()
            .persistent()
            .set(&DataKey::Profile(user.clone()), profile);
    }

    fn _next_id(env: &Env, counter: DataKey) -> Result<u64, ContractError> {
        let current: u64 = env.storage().persistent().get(&counter).unwrap_or(0);
        let next = current.checked_add(1).ok_or(ContractError::Overflow)?;
        env.storage().persistent().set(&counter, &next);
        Ok(next)
    }

    fn _settle_ledger(env: &Env, config: &Config) -> Result<u32, ContractError> {
        env.ledger()
            .sequence()
            .checked_add(config.settle_delay_ledgers)
            .ok_or(ContractError::Overflow)
    }

    fn _find_horse(race: &Race, number: u32) -> Option<Horse> {
        race.horses.iter().find(|h| h.number == number)
    }

    /// Product of the picked horses' odds, kept in hundredths
    fn _combined_odds(race: &Race, horses: &Vec<u32>) -> Result<u32, ContractError> {
        let mut combined: u64 = 100;

        for (i, number) in horses.iter().enumerate() {
            for j in 0..i as u32 {
                if horses.get(j) == Some(number) {
                    return Err(ContractError::InvalidSelection);
                }
            }
            let horse = Self::_find_horse(race, number).ok_or(ContractError::UnknownHorse)?;
            combined = combined
                .checked_mul(horse.odds as u64)
                .ok_or(ContractError::Overflow)?
                / 100;
        }

        u32::try_from(combined).map_err(|_| ContractError::Overflow)
    }

    fn _debit(profile: &mut UserProfile, amount: i128) -> Result<(), ContractError> {
        if profile.points < amount {
            return Err(ContractError::InsufficientPoints);
        }
        profile.points = profile
            .points
            .checked_sub(amount)
            .ok_or(ContractError::Overflow)?;
        profile.total_bets = profile
            .total_bets
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        Ok(())
    }

    fn _store_prediction(
        env: &Env,
        user: &Address,
        config: &Config,
        target: PredictionTarget,
        amount: i128,
        odds: u32,
    ) -> Result<Prediction, ContractError> {
        let id = Self::_next_id(env, DataKey::NextPredictionId)?;
        let prediction = Prediction {
            id,
            user: user.clone(),
            target,
            amount,
            odds,
            timestamp: env.ledger().timestamp(),
            settle_ledger: Self::_settle_ledger(env, config)?,
            status: BetStatus::Pending,
        };

        let list_key = DataKey::UserPredictions(user.clone());
        let mut ids: Vec<u64> = env
            .storage()
            .persistent()
            .get(&list_key)
            .unwrap_or(Vec::new(env));
        ids.push_back(id);

        env.storage().persistent().set(&DataKey::Prediction(id), &prediction);
        env.storage().persistent().set(&list_key, &ids);

        log!(env, "prediction placed", user.clone(), id, amount);
        Ok(prediction)
    }

    /// Draws the outcome of a due wager and books it on the owner's profile.
    /// Win and loss are equally likely; a win pays `amount * odds / 100`.
    fn _resolve(
        env: &Env,
        user: &Address,
        status: BetStatus,
        settle_ledger: u32,
        amount: i128,
        odds: u32,
    ) -> Result<BetStatus, ContractError> {
        if status != BetStatus::Pending {
            return Err(ContractError::AlreadySettled);
        }
        if env.ledger().sequence() < settle_ledger {
            return Err(ContractError::SettlementNotDue);
        }

        let mut profile = Self::_profile(env, user)?;
        let roll: u64 = env.prng().gen_range(0..2);

        let outcome = if roll == 0 {
            let payout = amount
                .checked_mul(odds as i128)
                .ok_or(ContractError::Overflow)?
                / 100;
            profile.points = profile
                .points
                .checked_add(payout)
                .ok_or(ContractError::Overflow)?;
            Self::_record_win(&mut profile)?;
            BetStatus::Won
        } else {
            Self::_record_loss(&mut profile)?;
            BetStatus::Lost
        };

        Self::_save_profile(env, user, &profile);
        Ok(outcome)
    }

    pub(crate) fn _record_win(profile: &mut UserProfile) -> Result<(), ContractError> {
        profile.win_count = profile
            .win_count
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        profile.current_streak = profile
            .current_streak
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;

        if profile.current_streak > profile.best_streak {
            profile.best_streak = profile.current_streak;
        }
        Ok(())
    }

    pub(crate) fn _record_loss(profile: &mut UserProfile) -> Result<(), ContractError> {
        profile.loss_count = profile
            .loss_count
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        profile.current_streak = 0;
        Ok(())
    }

    /// Settled-wager win rate in basis points
    pub(crate) fn _win_rate(profile: &UserProfile) -> u32 {
        let settled = profile.win_count as u64 + profile.loss_count as u64;
        if settled == 0 {
            return 0;
        }
        (profile.win_count as u64 * 10_000 / settled) as u32
    }

    /// True when the text is empty after trimming Unicode whitespace, so
    /// U+3000 and U+00A0 count as blank. Text that is not valid UTF-8 is
    /// treated as blank. Callers bound `text.len()` by `MESSAGE_LEN_CAP` first.
    fn _is_blank(text: &String) -> bool {
        let mut buf = [0u8; MESSAGE_LEN_CAP as usize];
        let bytes = &mut buf[..text.len() as usize];
        text.copy_into_slice(bytes);
        match core::str::from_utf8(bytes) {
            Ok(s) => s.trim().is_empty(),
            Err(_) => true,
        }
    }

    fn _remove_id(env: &Env, list_key: DataKey, id: u64) {
        let mut ids: Vec<u64> = env
            .storage()
            .persistent()
            .get(&list_key)
            .unwrap_or(Vec::new(env));

        if let Some(index) = ids.first_index_of(id) {
            ids.remove(index);
            env.storage().persistent().set(&list_key, &ids);
        }
    }

    /// Stable insert: `item` only moves ahead of entries it strictly precedes.
    fn _insert_sorted<T, F>(sorted: &mut Vec<T>, item: T, precedes: F)
    where
        T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
        F: Fn(&T, &T) -> bool,
    {
        let mut pos = sorted.len();
        while pos > 0 {
            match sorted.get(pos - 1) {
                Some(prev) if precedes(&item, &prev) => pos -= 1,
                _ => break,
            }
        }
        sorted.insert(pos, item);
    }
}
