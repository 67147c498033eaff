//! Tests for boundary conditions and unusual scenarios.

use super::{seoul_race, setup, sign_up};
use crate::errors::ContractError;
use crate::types::{BetStatus, BetType, Horse};
use soroban_sdk::{testutils::Ledger as _, vec, Env, String};

#[test]
fn test_combined_odds_overflow() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let user = sign_up(&env, &client, "경마왕");

    let mut longshots = seoul_race(&env, 2);
    longshots.horses = vec![
        &env,
        Horse { number: 1, name: String::from_str(&env, "별"), odds: u32::MAX },
        Horse { number: 2, name: String::from_str(&env, "달"), odds: u32::MAX },
    ];
    client.add_race(&longshots);

    // A single long shot is fine, two of them overflow the odds type
    client.place_race_prediction(&user, &2, &BetType::Single, &vec![&env, 1], &1);
    let result = client.try_place_race_prediction(&user, &2, &BetType::Double, &vec![&env, 1, 2], &1);
    assert_eq!(result, Err(Ok(ContractError::Overflow)));
}

#[test]
fn test_message_exactly_at_limit() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let user = sign_up(&env, &client, "경마왕");

    let text = "a".repeat(500);
    let message = client.post_message(&user, &1, &String::from_str(&env, &text));
    assert_eq!(message.text.len(), 500);
}

#[test]
fn test_message_with_padding_is_kept_verbatim() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let user = sign_up(&env, &client, "경마왕");

    let message = client.post_message(&user, &1, &String::from_str(&env, "  모두 즐거운 경기 되세요!  "));
    assert_eq!(message.text, String::from_str(&env, "  모두 즐거운 경기 되세요!  "));
}

#[test]
fn test_settlement_survives_missed_ledgers() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let user = sign_up(&env, &client, "경마왕");

    let bet = client.place_bet(&user, &1, &1, &100);

    // Nobody settles for a long time; the bet stays pending, not lost
    env.ledger().with_mut(|li| {
        li.sequence_number = 1_000;
    });
    assert_eq!(client.get_bet(&bet.id).unwrap().status, BetStatus::Pending);

    client.settle_bet(&bet.id);
    assert_ne!(client.get_bet(&bet.id).unwrap().status, BetStatus::Pending);
}

#[test]
fn test_history_empty_for_new_user() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let user = sign_up(&env, &client, "경마왕");

    assert_eq!(client.get_bets(&user).len(), 0);
    assert_eq!(client.get_predictions(&user).len(), 0);
    assert_eq!(client.settle_due(&user), 0);
}
