//! Validation of raw form input, done before anything reaches the backend.

use crate::error::InputError;
use crate::model::BetType;

/// Parses a bet amount typed by the user. Thousands separators are
/// accepted ("10,000"); anything else that is not a positive integer is
/// rejected.
pub fn parse_amount(raw: &str) -> Result<i128, InputError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(InputError::EmptyAmount);
    }

    let amount: i128 = cleaned
        .parse()
        .map_err(|_| InputError::NotANumber(raw.trim().to_owned()))?;

    if amount <= 0 {
        return Err(InputError::NonPositive);
    }
    Ok(amount)
}

/// Horse picker for race predictions. The bet type caps how many horses
/// may be picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorseSelection {
    bet_type: BetType,
    horses: Vec<u32>,
}

impl HorseSelection {
    pub fn new(bet_type: BetType) -> Self {
        Self { bet_type, horses: Vec::new() }
    }

    pub fn bet_type(&self) -> BetType {
        self.bet_type
    }

    /// Picked horses in the order they were picked.
    pub fn horses(&self) -> &[u32] {
        &self.horses
    }

    /// Switching the bet type starts the pick over.
    pub fn set_bet_type(&mut self, bet_type: BetType) {
        self.bet_type = bet_type;
        self.horses.clear();
    }

    /// Picks a horse, or unpicks it if it was already picked.
    pub fn toggle(&mut self, number: u32) -> Result<(), InputError> {
        if let Some(pos) = self.horses.iter().position(|h| *h == number) {
            self.horses.remove(pos);
            return Ok(());
        }

        let max = self.bet_type.max_horses();
        if self.horses.len() as u32 >= max {
            return Err(InputError::TooManyHorses { max });
        }
        self.horses.push(number);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.horses.clear();
    }

    /// The pick, if at least one horse was chosen.
    pub fn ready(&self) -> Result<&[u32], InputError> {
        if self.horses.is_empty() {
            return Err(InputError::NoSelection);
        }
        Ok(&self.horses)
    }
}
