//! Room builders and drivers shared by the integration tests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sixhand_engine::ai::AiPlayer;
use sixhand_engine::domain::{CurrentTrickInfo, PlayerAction, Room, Seat};
use sixhand_engine::{EngineConfig, RoomFlowService};

pub fn service() -> RoomFlowService {
    RoomFlowService::new(EngineConfig::default())
}

pub fn service_with(ai: impl AiPlayer + 'static) -> RoomFlowService {
    RoomFlowService::with_ai(EngineConfig::default(), Box::new(ai))
}

/// Waiting room created from a fixed seed, host "alice" ready at seat 0.
pub fn ready_room(flow: &RoomFlowService, seed: u64) -> Room {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut room = flow.create_room(&mut rng, "alice");
    flow.set_ready(&mut room, 0, true).expect("host ready");
    room
}

/// Waiting room whose only human left, so every seat is a bot.
pub fn all_bot_room(flow: &RoomFlowService, seed: u64) -> Room {
    let mut room = ready_room(flow, seed);
    flow.leave_room(&mut room, 0).expect("host leaves");
    assert!(room.players.iter().all(|p| p.is_bot));
    room
}

/// First legal move for `seat`, or a pass when it has none.
pub fn first_legal_action(room: &Room, seat: Seat) -> PlayerAction {
    let view = CurrentTrickInfo::for_seat(room, seat);
    match view.legal_moves().first() {
        Some(cards) => PlayerAction::from_cards(cards),
        None => PlayerAction::Pass,
    }
}

/// Play human seats with their first legal move until the round ends or
/// `stop` returns true. Returns the number of human actions applied.
pub fn play_humans_until(
    flow: &RoomFlowService,
    room: &mut Room,
    mut stop: impl FnMut(&Room) -> bool,
) -> usize {
    let mut actions = 0;
    while room.is_playing() && !stop(room) {
        let seat = room.turn_index;
        assert!(
            !room.current_player().is_bot,
            "bot seat {seat} left holding the turn"
        );
        let action = first_legal_action(room, seat);
        flow.apply_action(room, seat as usize, &action)
            .unwrap_or_else(|e| panic!("legal action for seat {seat} rejected: {e}"));
        actions += 1;
        assert!(actions <= 200, "round did not end");
    }
    actions
}
