//! Race card and fixtures seeded into a fresh sandbox.

use crate::model::{HorseInfo, MatchInfo, RaceInfo};

const FIELD: [(u32, &str, u32); 8] = [
    (1, "번개", 350),
    (2, "질주", 280),
    (3, "쾌속", 250),
    (4, "천둥", 320),
    (5, "바람", 290),
    (6, "구름", 300),
    (7, "번개", 300),
    (8, "별", 380),
];

/// Three races at the Seoul track, 2024-03-17 13:00/13:30/14:00 KST.
pub fn default_races() -> Vec<RaceInfo> {
    [(1, 1_710_648_000), (2, 1_710_649_800), (3, 1_710_651_600)]
        .into_iter()
        .map(|(number, start_time)| RaceInfo {
            id: number,
            race_number: number,
            name: format!("서울경마장 {number}R"),
            start_time,
            horses: FIELD
                .iter()
                .map(|&(number, name, odds)| HorseInfo { number, name: name.to_owned(), odds })
                .collect(),
        })
        .collect()
}

pub fn default_matches() -> Vec<MatchInfo> {
    let fixture = |id, home: &str, away: &str, odds: (u32, u32, u32), start_time| MatchInfo {
        id,
        home_team: home.to_owned(),
        away_team: away.to_owned(),
        home_odds: odds.0,
        draw_odds: odds.1,
        away_odds: odds.2,
        start_time,
    };

    vec![
        fixture(1, "맨체스터 유나이티드", "리버풀", (250, 320, 280), 1_710_676_800),
        fixture(2, "바르셀로나", "레알 마드리드", (210, 350, 320), 1_710_694_800),
        fixture(3, "토트넘", "아스날", (280, 330, 250), 1_710_846_000),
    ]
}
