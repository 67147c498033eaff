//! A signed-in user's view of the game: account, wagers, history, chat and
//! the leaderboard, all driven through one [`Backend`].

use tracing::{error, info, warn};

use crate::backend::Backend;
use crate::chat::ChatView;
use crate::error::ClientError;
use crate::input::{parse_amount, HorseSelection};
use crate::model::{
    BetRecord, MatchInfo, MatchOutcome, PredictionRecord, Profile, RaceInfo, RankingEntry, UserId,
};
use crate::views::{sort_by_points, SnapshotView};
use mock_betting::ContractError;

pub struct Session<B: Backend> {
    backend: B,
    user: Option<UserId>,
    profile: Option<Profile>,
    races: SnapshotView<RaceInfo>,
    matches: SnapshotView<MatchInfo>,
    bets: SnapshotView<BetRecord>,
    predictions: SnapshotView<PredictionRecord>,
    rankings: SnapshotView<RankingEntry>,
    chat: ChatView,
}

impl<B: Backend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self::with_chat(backend, ChatView::new())
    }

    pub fn with_chat(backend: B, chat: ChatView) -> Self {
        Self {
            backend,
            user: None,
            profile: None,
            races: SnapshotView::new(),
            matches: SnapshotView::new(),
            bets: SnapshotView::new(),
            predictions: SnapshotView::new(),
            rankings: SnapshotView::new(),
            chat,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ── account ─────────────────────────────────────────────────────────────

    /// Creates an account, registers the nickname and signs in with it.
    pub fn sign_up(&mut self, nickname: &str) -> Result<Profile, ClientError> {
        let user = self.backend.create_account()?;
        let profile = self
            .backend
            .register(&user, nickname)
            .inspect_err(|e| report("sign up", e))?;

        info!(user = %user, points = %profile.points, "signed up");
        self.user = Some(user);
        self.profile = Some(profile.clone());
        Ok(profile)
    }

    /// Signs in with an existing, registered account.
    pub fn sign_in(&mut self, user: UserId) -> Result<Profile, ClientError> {
        let profile = self
            .backend
            .profile(&user)?
            .ok_or(ClientError::Contract(ContractError::NotRegistered))?;

        info!(user = %user, "signed in");
        self.user = Some(user);
        self.profile = Some(profile.clone());
        Ok(profile)
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user, "signed out");
        }
        self.profile = None;
        self.bets = SnapshotView::new();
        self.predictions = SnapshotView::new();
        self.chat.clear_local();
    }

    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn points(&self) -> Option<i128> {
        self.profile.as_ref().map(|p| p.points)
    }

    fn require_user(&self) -> Result<UserId, ClientError> {
        self.user.clone().ok_or(ClientError::NotSignedIn)
    }

    // ── wagers ──────────────────────────────────────────────────────────────

    pub fn place_bet(&mut self, race_id: u32, horse_number: u32, amount: &str) -> Result<BetRecord, ClientError> {
        let user = self.require_user()?;
        let amount = parse_amount(amount)?;

        let bet = self
            .backend
            .place_bet(&user, race_id, horse_number, amount)
            .inspect_err(|e| report("place bet", e))?;

        info!(user = %user, bet_id = bet.id, race_id, horse_number, amount = %amount, "bet placed");
        self.refresh_account(&user);
        Ok(bet)
    }

    pub fn place_race_prediction(
        &mut self,
        race_id: u32,
        selection: &HorseSelection,
        amount: &str,
    ) -> Result<PredictionRecord, ClientError> {
        let user = self.require_user()?;
        let amount = parse_amount(amount)?;
        let horses = selection.ready()?;

        let prediction = self
            .backend
            .place_race_prediction(&user, race_id, selection.bet_type(), horses, amount)
            .inspect_err(|e| report("place race prediction", e))?;

        info!(user = %user, prediction_id = prediction.id, race_id, amount = %amount, "race prediction placed");
        self.refresh_account(&user);
        Ok(prediction)
    }

    pub fn place_match_prediction(
        &mut self,
        match_id: u32,
        outcome: MatchOutcome,
        amount: &str,
    ) -> Result<PredictionRecord, ClientError> {
        let user = self.require_user()?;
        let amount = parse_amount(amount)?;

        let prediction = self
            .backend
            .place_match_prediction(&user, match_id, outcome, amount)
            .inspect_err(|e| report("place match prediction", e))?;

        info!(user = %user, prediction_id = prediction.id, match_id, amount = %amount, "match prediction placed");
        self.refresh_account(&user);
        Ok(prediction)
    }

    // ── history ─────────────────────────────────────────────────────────────

    /// Resolves every due wager of the signed-in user.
    pub fn settle_due(&mut self) -> Result<u32, ClientError> {
        let user = self.require_user()?;
        let settled = self
            .backend
            .settle_due(&user)
            .inspect_err(|e| report("settle", e))?;

        if settled > 0 {
            info!(user = %user, settled, "wagers settled");
            self.refresh_account(&user);
            self.refresh_rankings();
        }
        Ok(settled)
    }

    pub fn delete_bet(&mut self, bet_id: u64) -> Result<(), ClientError> {
        let user = self.require_user()?;
        self.backend
            .delete_bet(&user, bet_id)
            .inspect_err(|e| report("delete bet", e))?;
        self.refresh_history(&user);
        Ok(())
    }

    pub fn delete_prediction(&mut self, prediction_id: u64) -> Result<(), ClientError> {
        let user = self.require_user()?;
        self.backend
            .delete_prediction(&user, prediction_id)
            .inspect_err(|e| report("delete prediction", e))?;
        self.refresh_history(&user);
        Ok(())
    }

    // ── chat ────────────────────────────────────────────────────────────────

    pub fn send_message(&mut self, text: &str) -> Result<(), ClientError> {
        let user = self.require_user()?;
        let nickname = self
            .profile
            .as_ref()
            .map(|p| p.nickname.clone())
            .unwrap_or_default();

        self.chat.set_draft(text);
        self.chat.send(&self.backend, &user, &nickname)?;
        Ok(())
    }

    pub fn delete_message(&mut self, message_id: u64) -> Result<(), ClientError> {
        let user = self.require_user()?;
        self.chat.delete(&self.backend, &user, message_id)
    }

    // ── snapshots ───────────────────────────────────────────────────────────

    /// Reloads every view. Failures land in the affected view.
    pub fn refresh(&mut self) {
        match self.backend.races() {
            Ok(races) => self.races.replace(races),
            Err(e) => {
                report("load races", &e);
                self.races.fail(&e);
            }
        }
        match self.backend.matches() {
            Ok(matches) => self.matches.replace(matches),
            Err(e) => {
                report("load matches", &e);
                self.matches.fail(&e);
            }
        }
        match self.backend.messages() {
            Ok(messages) => self.chat.apply_snapshot(messages),
            Err(e) => self.chat.fail_load(&e),
        }
        self.refresh_rankings();

        if let Some(user) = self.user.clone() {
            self.refresh_account(&user);
        }
    }

    fn refresh_account(&mut self, user: &UserId) {
        match self.backend.profile(user) {
            Ok(profile) => self.profile = profile,
            Err(e) => report("load profile", &e),
        }
        self.refresh_history(user);
    }

    fn refresh_history(&mut self, user: &UserId) {
        match self.backend.bets(user) {
            Ok(bets) => self.bets.replace(bets),
            Err(e) => {
                report("load bets", &e);
                self.bets.fail(&e);
            }
        }
        match self.backend.predictions(user) {
            Ok(predictions) => self.predictions.replace(predictions),
            Err(e) => {
                report("load predictions", &e);
                self.predictions.fail(&e);
            }
        }
    }

    fn refresh_rankings(&mut self) {
        match self.backend.rankings() {
            Ok(mut rankings) => {
                sort_by_points(&mut rankings);
                self.rankings.replace(rankings);
            }
            Err(e) => {
                report("load rankings", &e);
                self.rankings.fail(&e);
            }
        }
    }

    pub fn races(&self) -> &SnapshotView<RaceInfo> {
        &self.races
    }

    pub fn matches(&self) -> &SnapshotView<MatchInfo> {
        &self.matches
    }

    pub fn bets(&self) -> &SnapshotView<BetRecord> {
        &self.bets
    }

    pub fn predictions(&self) -> &SnapshotView<PredictionRecord> {
        &self.predictions
    }

    pub fn rankings(&self) -> &SnapshotView<RankingEntry> {
        &self.rankings
    }

    pub fn chat(&self) -> &ChatView {
        &self.chat
    }
}

fn report(action: &str, err: &ClientError) {
    if err.is_expected() {
        warn!(action, error = %err, "request rejected");
    } else {
        error!(action, error = ?err, "request failed");
    }
}
