//! Tests for contract initialization and user sign-up.

use super::{default_config, setup, sign_up};
use crate::contract::{MockBettingContract, MockBettingContractClient};
use crate::errors::ContractError;
use crate::types::Config;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

#[test]
fn test_initialize() {
    let env = Env::default();
    let contract_id = env.register(MockBettingContract, ());
    let client = MockBettingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);

    env.mock_all_auths();

    client.initialize(&admin, &default_config());

    assert_eq!(client.get_admin(), Some(admin));
    assert_eq!(client.get_config(), default_config());
}

#[test]
fn test_initialize_twice_fails() {
    let env = Env::default();
    let contract_id = env.register(MockBettingContract, ());
    let client = MockBettingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);

    env.mock_all_auths();

    client.initialize(&admin, &default_config());

    // Try to initialize again - should return error
    let result = client.try_initialize(&admin, &default_config());
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
}

#[test]
fn test_initialize_rejects_bad_config() {
    let env = Env::default();
    let contract_id = env.register(MockBettingContract, ());
    let client = MockBettingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);

    env.mock_all_auths();

    let bad_configs = [
        Config { settle_delay_ledgers: 0, ..default_config() },
        Config { settle_delay_ledgers: 100_001, ..default_config() },
        Config { max_message_len: 0, ..default_config() },
        Config { max_message_len: 1001, ..default_config() },
        Config { initial_points: -1, ..default_config() },
        Config { ranking_limit: 0, ..default_config() },
    ];

    for config in bad_configs {
        let result = client.try_initialize(&admin, &config);
        assert_eq!(result, Err(Ok(ContractError::InvalidConfig)));
    }

    // Nothing was stored by the failed attempts
    assert_eq!(client.get_admin(), None);
}

#[test]
fn test_register_credits_initial_points() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let user = Address::generate(&env);
    let profile = client.register(&user, &String::from_str(&env, "경마왕"));

    assert_eq!(profile.nickname, String::from_str(&env, "경마왕"));
    assert_eq!(profile.points, 10_000);
    assert_eq!(profile.total_bets, 0);
    assert_eq!(client.points(&user), 10_000);
    assert_eq!(client.get_profile(&user), Some(profile));
}

#[test]
fn test_register_twice_fails() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let user = sign_up(&env, &client, "경마왕");

    let result = client.try_register(&user, &String::from_str(&env, "다른이름"));
    assert_eq!(result, Err(Ok(ContractError::AlreadyRegistered)));
}

#[test]
fn test_register_rejects_bad_nickname() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let user = Address::generate(&env);

    for nickname in ["", "   ", "\u{3000}\u{3000}", "\u{00A0}", "abcdefghijklmnopqrstuvwxyz0123456"] {
        let result = client.try_register(&user, &String::from_str(&env, nickname));
        assert_eq!(result, Err(Ok(ContractError::InvalidNickname)));
    }
    assert_eq!(client.get_profile(&user), None);
}

#[test]
fn test_register_before_initialize_fails() {
    let env = Env::default();
    let contract_id = env.register(MockBettingContract, ());
    let client = MockBettingContractClient::new(&env, &contract_id);

    env.mock_all_auths();

    let user = Address::generate(&env);
    let result = client.try_register(&user, &String::from_str(&env, "경마왕"));
    assert_eq!(result, Err(Ok(ContractError::AdminNotSet)));
}

#[test]
fn test_points_for_unknown_user() {
    let env = Env::default();
    let (client, _) = setup(&env);

    // Query points for a user who never signed up
    let user = Address::generate(&env);
    assert_eq!(client.points(&user), 0);
}
