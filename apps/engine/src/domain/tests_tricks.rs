//! Trick state machine scenarios.

use crate::domain::fixtures::room_with_hands;
use crate::domain::rules::{Team, DECK_SIZE};
use crate::domain::state::{GameStatus, Room, RoomSettings, RoundOutcome};
use crate::domain::tricks::{apply_turn, round_result, start_round, PlayerAction};
use crate::errors::ErrorCode;

fn play(room: &mut Room, seat: usize, tokens: &[&str]) {
    let cards = crate::domain::fixtures::CardFixtures::parse_hardcoded(tokens);
    apply_turn(room, seat, &PlayerAction::from_cards(&cards))
        .unwrap_or_else(|e| panic!("seat {seat} play {tokens:?} rejected: {e}"));
}

fn pass(room: &mut Room, seat: usize) {
    apply_turn(room, seat, &PlayerAction::Pass)
        .unwrap_or_else(|e| panic!("seat {seat} pass rejected: {e}"));
}

#[test]
fn head_team_reaching_three_wins() {
    let mut room = room_with_hands(
        [
            &["KH"],
            &["2D"],
            &["BJ"],
            &["4D", "7D"],
            &["6H"],
            &["4C", "5C"],
        ],
        0,
    );
    play(&mut room, 0, &["KH"]);
    play(&mut room, 1, &["2D"]);
    play(&mut room, 2, &["BJ"]);
    pass(&mut room, 3);
    pass(&mut room, 4);
    pass(&mut room, 5);
    // Trick owner finished, so every live seat had to pass; turn moves on.
    assert!(room.last_hand.is_none());
    assert_eq!(room.turn_index, 3);

    play(&mut room, 3, &["4D"]);
    play(&mut room, 4, &["6H"]);

    assert_eq!(room.status, GameStatus::RoundOver);
    assert_eq!(room.winners, vec![0, 1, 2, 4]);
    assert_eq!(room.finished_on_team(Team::B), 1);
    assert_eq!(room.outcome, Some(RoundOutcome::TeamWin(Team::A)));
}

#[test]
fn other_team_finishing_first_against_head_is_a_draw() {
    let mut room = room_with_hands(
        [
            &["KH"],
            &["AH"],
            &["4D", "5D"],
            &["2D"],
            &["4C", "5C"],
            &["BJ"],
        ],
        0,
    );
    play(&mut room, 0, &["KH"]);
    play(&mut room, 1, &["AH"]);
    pass(&mut room, 2);
    play(&mut room, 3, &["2D"]);
    pass(&mut room, 4);
    play(&mut room, 5, &["BJ"]);

    assert_eq!(room.status, GameStatus::RoundOver);
    assert_eq!(room.finished_on_team(Team::B), 3);
    assert_eq!(room.head_team(), Some(Team::A));
    assert_eq!(room.outcome, Some(RoundOutcome::Draw));
}

#[test]
fn both_teams_complete_is_a_draw() {
    let mut room = room_with_hands([&[], &[], &[], &[], &[], &[]], 0);
    for p in room.players.iter_mut() {
        p.finished = true;
    }
    room.winners = vec![1, 0, 2, 3, 4, 5];
    assert_eq!(round_result(&room), Some(RoundOutcome::Draw));
}

#[test]
fn full_pass_out_returns_lead_to_owner() {
    let mut room = room_with_hands(
        [
            &["KH", "4H"],
            &["5D", "6D"],
            &["5H", "6H"],
            &["7D", "8D"],
            &["7H", "8H"],
            &["9D", "10D"],
        ],
        0,
    );
    play(&mut room, 0, &["KH"]);
    for seat in 1..=4 {
        pass(&mut room, seat);
        assert!(room.last_hand.is_some(), "reset too early at seat {seat}");
    }
    assert_eq!(room.turn_history[3].passes, 1);

    pass(&mut room, 5);
    assert!(room.last_hand.is_none());
    assert_eq!(room.pass_count, 0);
    assert_eq!(room.turn_index, 0);
    assert!(room.turn_history.iter().all(|t| t.passes == 0));
    assert_eq!(room.turn_history[0].plays, 1);
}

#[test]
fn finished_seats_are_skipped() {
    let mut room = room_with_hands(
        [
            &["KH", "4H"],
            &["5D"],
            &["5H", "6H"],
            &["7D", "8D"],
            &["7H", "8H"],
            &["9D", "10D"],
        ],
        0,
    );
    room.players[1].finished = true;
    room.players[1].hand.clear();
    play(&mut room, 0, &["4H"]);
    assert_eq!(room.turn_index, 2);
}

#[test]
fn rejections_leave_room_untouched() {
    let mut room = room_with_hands(
        [
            &["KH", "4H"],
            &["5D", "6D"],
            &["5H", "6H"],
            &["7D", "8D"],
            &["7H", "8H"],
            &["9D", "10D"],
        ],
        0,
    );
    let before = room.clone();

    for _ in 0..2 {
        let err = apply_turn(&mut room, 0, &PlayerAction::Pass).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MustLead);
        assert_eq!(room, before);
    }

    let err = apply_turn(&mut room, 3, &PlayerAction::play(["c20"])).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotYourTurn);

    for seat in [6, 9] {
        let err = apply_turn(&mut room, seat, &PlayerAction::Pass).unwrap_err();
        assert_eq!(err.code(), ErrorCode::SeatOutOfRange);
        assert!(matches!(err, crate::errors::domain::DomainError::Seat { .. }));
    }

    let err = apply_turn(&mut room, 0, &PlayerAction::play(["c99"])).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoCardsSelected);

    let mixed = PlayerAction::from_cards(&crate::domain::fixtures::CardFixtures::parse_hardcoded(
        &["KH", "4H"],
    ));
    let err = apply_turn(&mut room, 0, &mixed).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidCombo);
    assert_eq!(room, before);
}

#[test]
fn weaker_combo_cannot_beat() {
    let mut room = room_with_hands(
        [
            &["KH", "4H"],
            &["5D", "6D"],
            &["5H", "6H"],
            &["7D", "8D"],
            &["7H", "8H"],
            &["9D", "10D"],
        ],
        0,
    );
    play(&mut room, 0, &["KH"]);
    let before = room.clone();
    let cards = crate::domain::fixtures::CardFixtures::parse_hardcoded(&["6D"]);
    let err = apply_turn(&mut room, 1, &PlayerAction::from_cards(&cards)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CannotBeat);
    assert_eq!(room, before);
}

#[test]
fn actions_outside_play_are_rejected() {
    let mut room = Room::new("1", "2", "host", 3, RoomSettings::default());
    let err = apply_turn(&mut room, 0, &PlayerAction::Pass).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotPlaying);
}

#[test]
fn start_round_deals_and_resets() {
    let mut room = Room::new("1", "2", "host", 99, RoomSettings::default());
    start_round(&mut room);
    assert_eq!(room.status, GameStatus::Playing);
    assert_eq!(room.round_no, 1);
    assert_eq!(room.cards_in_hands(), DECK_SIZE);
    let leader = room.turn_index as usize;
    assert!(room.players[leader]
        .hand
        .iter()
        .any(|c| c.id.as_str() == "c0"));

    room.status = GameStatus::RoundOver;
    room.outcome = Some(RoundOutcome::Draw);
    room.winners.push(3);
    room.players[3].finished = true;
    start_round(&mut room);
    assert_eq!(room.round_no, 2);
    assert!(room.winners.is_empty());
    assert!(room.outcome.is_none());
    assert!(room.players.iter().all(|p| !p.finished));
}

#[test]
fn same_seed_deals_same_round() {
    let mut a = Room::new("1", "2", "host", 2024, RoomSettings::default());
    let mut b = Room::new("3", "4", "other", 2024, RoomSettings::default());
    start_round(&mut a);
    start_round(&mut b);
    for (pa, pb) in a.players.iter().zip(b.players.iter()) {
        assert_eq!(pa.hand, pb.hand);
    }
    assert_eq!(a.turn_index, b.turn_index);
}

#[test]
fn action_names_parse() {
    assert_eq!(
        PlayerAction::from_parts("pass", &[]).unwrap(),
        PlayerAction::Pass
    );
    let err = PlayerAction::from_parts("fold", &[]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownAction);
}
