//! Plain view records handed out by a [`Backend`](crate::backend::Backend).
//!
//! These carry std types only. Status and kind enums are shared with the
//! contract crate since they hold no host values.

use std::fmt;

pub use mock_betting::{BetStatus, BetType, MatchOutcome, Tier};

/// Account handle issued by the backend at sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub nickname: String,
    pub points: i128,
    pub win_count: u32,
    pub loss_count: u32,
    pub total_bets: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorseInfo {
    pub number: u32,
    pub name: String,
    /// Hundredths, 2.5 => 250
    pub odds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceInfo {
    pub id: u32,
    pub race_number: u32,
    pub name: String,
    pub start_time: u64,
    pub horses: Vec<HorseInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInfo {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_odds: u32,
    pub draw_odds: u32,
    pub away_odds: u32,
    pub start_time: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetRecord {
    pub id: u64,
    pub race_id: u32,
    pub horse_number: u32,
    pub horse_name: String,
    pub amount: i128,
    pub odds: u32,
    pub timestamp: u64,
    pub status: BetStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionPick {
    Race {
        race_id: u32,
        race_name: String,
        bet_type: BetType,
        horses: Vec<u32>,
    },
    Match {
        match_id: u32,
        home_team: String,
        away_team: String,
        outcome: MatchOutcome,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRecord {
    pub id: u64,
    pub pick: PredictionPick,
    pub amount: i128,
    pub odds: u32,
    pub timestamp: u64,
    pub status: BetStatus,
}

/// A chat message as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub client_id: u64,
    pub author: UserId,
    pub author_name: String,
    pub text: String,
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub user: UserId,
    pub nickname: String,
    pub points: i128,
    pub win_count: u32,
    pub total_bets: u32,
    /// Basis points, 10000 = 100%
    pub win_rate: u32,
    pub tier: Tier,
}

/// Korean display labels.
pub trait Label {
    fn label(&self) -> &'static str;
}

impl Label for Tier {
    fn label(&self) -> &'static str {
        match self {
            Tier::Challenger => "챌린저",
            Tier::Grandmaster => "그랜드마스터",
            Tier::Master => "마스터",
            Tier::Diamond => "다이아몬드",
            Tier::Platinum => "플래티넘",
            Tier::Gold => "골드",
            Tier::Silver => "실버",
            Tier::Bronze => "브론즈",
        }
    }
}

impl Label for BetType {
    fn label(&self) -> &'static str {
        match self {
            BetType::Single => "단승",
            BetType::Quinella => "연승",
            BetType::Exacta => "복승",
            BetType::Double => "쌍승",
            BetType::Trio => "복연승",
            BetType::Trifecta => "삼복승",
            BetType::Triple => "삼쌍승",
        }
    }
}

impl Label for MatchOutcome {
    fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Home => "홈 승",
            MatchOutcome::Draw => "무승부",
            MatchOutcome::Away => "원정 승",
        }
    }
}

impl Label for BetRecord {
    fn label(&self) -> &'static str {
        match self.status {
            BetStatus::Pending => "진행중",
            BetStatus::Won => "승리",
            BetStatus::Lost => "패배",
        }
    }
}

impl Label for PredictionRecord {
    fn label(&self) -> &'static str {
        match self.status {
            BetStatus::Pending => "진행중",
            BetStatus::Won => "적중",
            BetStatus::Lost => "실패",
        }
    }
}

/// Formats hundredths odds for display, 250 => "2.50".
pub fn format_odds(odds: u32) -> String {
    format!("{}.{:02}", odds / 100, odds % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_labels_match_bands() {
        assert_eq!(Tier::from_win_rate(8_000).label(), "챌린저");
        assert_eq!(Tier::from_win_rate(7_550).label(), "그랜드마스터");
        assert_eq!(Tier::from_win_rate(1_000).label(), "브론즈");
    }

    #[test]
    fn status_labels_differ_between_bets_and_predictions() {
        let bet = BetRecord {
            id: 1,
            race_id: 1,
            horse_number: 3,
            horse_name: "쾌속".into(),
            amount: 10_000,
            odds: 250,
            timestamp: 0,
            status: BetStatus::Won,
        };
        let prediction = PredictionRecord {
            id: 1,
            pick: PredictionPick::Match {
                match_id: 1,
                home_team: "토트넘".into(),
                away_team: "아스날".into(),
                outcome: MatchOutcome::Draw,
            },
            amount: 6_000,
            odds: 330,
            timestamp: 0,
            status: BetStatus::Won,
        };

        assert_eq!(bet.label(), "승리");
        assert_eq!(prediction.label(), "적중");
    }

    #[test]
    fn odds_format() {
        assert_eq!(format_odds(250), "2.50");
        assert_eq!(format_odds(875), "8.75");
        assert_eq!(format_odds(1_000), "10.00");
    }
}
