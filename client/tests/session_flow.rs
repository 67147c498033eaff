//! End-to-end flows through `Session<SandboxBackend>`.

use mock_betting::ContractError;
use mock_betting_client::model::{BetStatus, BetType, MatchOutcome, PredictionPick};
use mock_betting_client::{
    ChatView, ClientConfig, ClientError, HorseSelection, InputError, SandboxBackend, Session,
};

fn session() -> Session<SandboxBackend> {
    let backend = SandboxBackend::new(&ClientConfig::default()).unwrap();
    let mut session = Session::with_chat(backend, ChatView::with_client_id_seed(1_000));
    session.refresh();
    session
}

#[test]
fn catalog_is_seeded() {
    let session = session();

    let races = session.races().items();
    assert_eq!(races.len(), 3);
    assert_eq!(races[0].name, "서울경마장 1R");
    assert_eq!(races[0].horses.len(), 8);
    assert_eq!(session.matches().items().len(), 3);
    assert_eq!(session.matches().items()[1].home_team, "바르셀로나");
}

#[test]
fn sign_up_grants_initial_points() {
    let mut session = session();
    let profile = session.sign_up("경마왕").unwrap();

    assert_eq!(profile.points, 10_000);
    assert_eq!(session.points(), Some(10_000));
}

#[test]
fn bet_debits_and_settles_once() {
    let mut session = session();
    session.sign_up("경마왕").unwrap();

    let bet = session.place_bet(1, 1, "1,000").unwrap();
    assert_eq!(bet.odds, 350);
    assert_eq!(bet.status, BetStatus::Pending);
    assert_eq!(session.points(), Some(9_000));
    assert_eq!(session.bets().items().len(), 1);

    // Not due on the ledger it was placed in
    assert_eq!(session.settle_due().unwrap(), 0);

    session.backend().advance_ledgers(1);
    assert_eq!(session.settle_due().unwrap(), 1);
    assert_eq!(session.settle_due().unwrap(), 0);

    let settled = &session.bets().items()[0];
    let profile = session.profile().unwrap();
    match settled.status {
        BetStatus::Won => {
            assert_eq!(profile.points, 12_500);
            assert_eq!(profile.win_count, 1);
        }
        BetStatus::Lost => {
            assert_eq!(profile.points, 9_000);
            assert_eq!(profile.loss_count, 1);
        }
        BetStatus::Pending => panic!("bet still pending after settlement"),
    }
}

#[test]
fn invalid_amount_leaves_points_untouched() {
    let mut session = session();
    session.sign_up("경마왕").unwrap();

    let err = session.place_bet(1, 1, "abc").unwrap_err();
    assert!(matches!(err, ClientError::Input(InputError::NotANumber(_))));

    let err = session.place_bet(1, 1, "20,000").unwrap_err();
    assert!(matches!(err, ClientError::Contract(ContractError::InsufficientPoints)));
    assert_eq!(err.user_message(), "보유 포인트가 부족합니다.");

    session.refresh();
    assert_eq!(session.points(), Some(10_000));
    assert!(session.bets().is_empty());
}

#[test]
fn predictions_carry_their_pick() {
    let mut session = session();
    session.sign_up("경마왕").unwrap();

    let mut selection = HorseSelection::new(BetType::Exacta);
    selection.toggle(1).unwrap();
    selection.toggle(2).unwrap();

    let prediction = session.place_race_prediction(2, &selection, "1000").unwrap();
    assert_eq!(prediction.odds, 980);
    assert!(matches!(
        &prediction.pick,
        PredictionPick::Race { race_name, horses, .. } if race_name == "서울경마장 2R" && horses == &[1, 2]
    ));

    let prediction = session
        .place_match_prediction(3, MatchOutcome::Draw, "500")
        .unwrap();
    assert_eq!(prediction.odds, 330);

    // Newest first
    let history = session.predictions().items();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, prediction.id);
    assert_eq!(session.points(), Some(8_500));
}

#[test]
fn pending_bet_cannot_be_deleted() {
    let mut session = session();
    session.sign_up("경마왕").unwrap();
    let bet = session.place_bet(1, 2, "1000").unwrap();

    let err = session.delete_bet(bet.id).unwrap_err();
    assert!(matches!(err, ClientError::Contract(ContractError::StillPending)));

    session.backend().advance_ledgers(1);
    session.settle_due().unwrap();
    session.delete_bet(bet.id).unwrap();
    assert!(session.bets().is_empty());
}

#[test]
fn chat_round_trip() {
    let mut session = session();
    session.sign_up("경마왕").unwrap();

    session.send_message("  오늘 1R 누가 이길까요?  ").unwrap();
    session.refresh();

    let entries = session.chat().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "오늘 1R 누가 이길까요?");
    assert_eq!(entries[0].author_name, "경마왕");
    assert!(!entries[0].is_pending());

    let id = entries[0].id.unwrap();
    session.delete_message(id).unwrap();
    session.refresh();
    assert!(session.chat().entries().is_empty());
}

#[test]
fn only_the_author_deletes_a_message() {
    let mut session = session();
    session.sign_up("첫번째").unwrap();
    session.send_message("hello").unwrap();
    let id = session.chat().entries()[0].id.unwrap();

    session.sign_out();
    session.sign_up("두번째").unwrap();

    let err = session.delete_message(id).unwrap_err();
    assert!(matches!(err, ClientError::Contract(ContractError::NotAuthor)));
    assert_eq!(session.chat().entries().len(), 1);
}

#[test]
fn rankings_follow_points() {
    let mut session = session();
    session.sign_up("첫번째").unwrap();
    let first = session.user().cloned().unwrap();
    session.place_bet(1, 1, "3000").unwrap();

    session.sign_out();
    session.sign_up("두번째").unwrap();
    session.refresh();

    let nicknames: Vec<_> = session
        .rankings()
        .items()
        .iter()
        .map(|r| r.nickname.as_str())
        .collect();
    assert_eq!(nicknames, ["두번째", "첫번째"]);

    session.sign_out();
    let profile = session.sign_in(first).unwrap();
    assert_eq!(profile.nickname, "첫번째");
    assert_eq!(profile.points, 7_000);
}

#[test]
fn signed_out_session_is_redirected() {
    let mut session = session();
    let err = session.place_match_prediction(1, MatchOutcome::Home, "1000").unwrap_err();
    assert!(matches!(err, ClientError::NotSignedIn));
}
