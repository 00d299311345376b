use crate::domain::rules::Team;
use crate::domain::seating::{add_emote, join, leave, set_ready, swap, JoinOutcome};
use crate::domain::state::{GameStatus, Room, RoomSettings, RoundOutcome};
use crate::domain::tricks::start_round;
use crate::errors::ErrorCode;

fn room() -> Room {
    Room::new("4321", "8765", "host", 11, RoomSettings::default())
}

#[test]
fn join_takes_first_bot_seat() {
    let mut room = room();
    let joined = join(&mut room, "bob").unwrap();
    assert_eq!(
        joined,
        JoinOutcome {
            seat: 1,
            spectator: false
        }
    );
    assert!(!room.players[1].is_bot);
    assert!(!room.players[1].ready);
    assert_eq!(join(&mut room, "carol").unwrap().seat, 2);
}

#[test]
fn join_when_full_is_rejected() {
    let mut room = room();
    for name in ["b", "c", "d", "e", "f"] {
        join(&mut room, name).unwrap();
    }
    let err = join(&mut room, "g").unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoFreeSeat);
}

#[test]
fn join_during_play_is_spectator_only() {
    let mut room = room();
    start_round(&mut room);
    let joined = join(&mut room, "late").unwrap();
    assert!(joined.spectator);
    assert_eq!(joined.seat, 0);
}

#[test]
fn departed_names_may_only_spectate() {
    let mut room = room();
    join(&mut room, "bob").unwrap();
    leave(&mut room, 1).unwrap();
    assert!(room.players[1].is_bot);
    assert!(room.players[1].ready);
    assert!(join(&mut room, "bob").unwrap().spectator);
}

#[test]
fn host_leaving_while_waiting_hands_over_host() {
    let mut room = room();
    join(&mut room, "bob").unwrap();
    join(&mut room, "carol").unwrap();
    leave(&mut room, 0).unwrap();
    assert_eq!(room.host_seat, 1);
    assert!(room.players[0].is_bot);
}

#[test]
fn host_leaving_mid_round_abandons_it() {
    let mut room = room();
    start_round(&mut room);
    let outcome = leave(&mut room, 0).unwrap();
    assert!(outcome.round_abandoned);
    assert_eq!(room.status, GameStatus::RoundOver);
    assert_eq!(room.outcome, Some(RoundOutcome::Abandoned));
    assert!(!room.players[0].is_bot);
}

#[test]
fn leaving_on_turn_asks_for_a_bot_move() {
    let mut room = room();
    join(&mut room, "bob").unwrap();
    start_round(&mut room);
    room.turn_index = 1;
    let outcome = leave(&mut room, 1).unwrap();
    assert!(outcome.bot_must_act);
    assert!(room.players[1].is_bot);
}

#[test]
fn leaving_a_bot_seat_is_a_no_op() {
    let mut room = room();
    let before = room.clone();
    leave(&mut room, 3).unwrap();
    assert_eq!(room, before);
    assert_eq!(
        leave(&mut room, 9).unwrap_err().code(),
        ErrorCode::SeatOutOfRange
    );
}

#[test]
fn swap_moves_human_into_bot_seat() {
    let mut room = room();
    swap(&mut room, 0, 3).unwrap();
    assert!(room.players[0].is_bot);
    assert_eq!(room.players[3].name, "host");
    assert_eq!(room.host_seat, 3);
    assert_eq!(Team::for_seat(3), Team::B);
}

#[test]
fn swap_rules() {
    let mut room = room();
    join(&mut room, "bob").unwrap();
    assert_eq!(swap(&mut room, 0, 1).unwrap_err().code(), ErrorCode::SeatOccupied);
    assert_eq!(swap(&mut room, 2, 4).unwrap_err().code(), ErrorCode::BotSeat);
    assert_eq!(swap(&mut room, 0, 6).unwrap_err().code(), ErrorCode::SeatOutOfRange);
    start_round(&mut room);
    assert_eq!(swap(&mut room, 0, 2).unwrap_err().code(), ErrorCode::NotWaiting);
}

#[test]
fn readiness_toggles() {
    let mut room = room();
    set_ready(&mut room, 0, true).unwrap();
    assert!(room.all_humans_ready());
    set_ready(&mut room, 0, false).unwrap();
    assert!(!room.all_humans_ready());
    assert!(set_ready(&mut room, 7, true).is_err());
}

#[test]
fn emotes_are_bounded_and_validated() {
    let mut room = room();
    room.settings.emote_limit = 2;
    add_emote(&mut room, 0, None, "hi").unwrap();
    add_emote(&mut room, 0, Some(3), "you").unwrap();
    add_emote(&mut room, 0, None, "bye").unwrap();
    let contents: Vec<&str> = room.emotes.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["you", "bye"]);

    assert_eq!(
        add_emote(&mut room, 1, None, "beep").unwrap_err().code(),
        ErrorCode::BotSeat
    );
    assert_eq!(
        add_emote(&mut room, 0, Some(6), "x").unwrap_err().code(),
        ErrorCode::SeatOutOfRange
    );
}
