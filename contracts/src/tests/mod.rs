//! Test modules for the mock betting ledger contract.

mod initialization;
mod edge_cases;

use crate::contract::{MockBettingContract, MockBettingContractClient};
use crate::types::{Config, Horse, Match, Race};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

pub(crate) fn default_config() -> Config {
    Config {
        initial_points: 10_000,
        settle_delay_ledgers: 1,
        max_message_len: 500,
        ranking_limit: 10,
    }
}

/// 서울경마장 1R with three horses: 1 번개 3.5, 2 질주 2.8, 3 쾌속 2.5
pub(crate) fn seoul_race(env: &Env, id: u32) -> Race {
    Race {
        id,
        race_number: id,
        name: String::from_str(env, "서울경마장 1R"),
        start_time: 1_710_648_000,
        horses: vec![
            env,
            Horse { number: 1, name: String::from_str(env, "번개"), odds: 350 },
            Horse { number: 2, name: String::from_str(env, "질주"), odds: 280 },
            Horse { number: 3, name: String::from_str(env, "쾌속"), odds: 250 },
        ],
    }
}

pub(crate) fn derby(env: &Env, id: u32) -> Match {
    Match {
        id,
        home_team: String::from_str(env, "맨체스터 유나이티드"),
        away_team: String::from_str(env, "리버풀"),
        home_odds: 250,
        draw_odds: 320,
        away_odds: 280,
        start_time: 1_710_676_800,
    }
}

/// Registers the contract, initializes it and seeds race 1 and match 1.
pub(crate) fn setup<'a>(env: &Env) -> (MockBettingContractClient<'a>, Address) {
    let contract_id = env.register(MockBettingContract, ());
    let client = MockBettingContractClient::new(env, &contract_id);
    let admin = Address::generate(env);

    env.mock_all_auths();

    client.initialize(&admin, &default_config());
    client.add_race(&seoul_race(env, 1));
    client.add_match(&derby(env, 1));

    (client, admin)
}

/// Generates an address and signs it up with the given nickname
pub(crate) fn sign_up(env: &Env, client: &MockBettingContractClient, nickname: &str) -> Address {
    let user = Address::generate(env);
    client.register(&user, &String::from_str(env, nickname));
    user
}
