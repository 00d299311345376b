use tracing::{debug, info, warn};

use super::RoomFlowService;
use crate::domain::legal_moves::fallback_move;
use crate::domain::player_view::CurrentTrickInfo;
use crate::domain::rules::{Seat, DECK_SIZE, SEATS};
use crate::domain::tricks::apply_turn;
use crate::domain::{PlayerAction, Room, RoundOutcome};

/// Upper bound on bot moves applied by one call to `drive_bots`.
///
/// A round holds at most `DECK_SIZE` plays and at most one table of passes
/// between two plays.
pub const MAX_BOT_STEPS: usize = DECK_SIZE * (SEATS + 1);

/// Summary of one bot chain.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct BotRun {
    /// Bot actions accepted by the room.
    pub moves: usize,
    /// Moves where the bot's own choice was replaced by the fallback move.
    pub fallbacks: usize,
    /// The chain stopped at `MAX_BOT_STEPS` with a bot still to act.
    pub guard_tripped: bool,
    /// Set when a bot move ended the round.
    pub outcome: Option<RoundOutcome>,
}

impl RoomFlowService {
    /// Let bots act until a human holds the turn or the round ends.
    pub fn drive_bots(&self, room: &mut Room) -> BotRun {
        let mut run = BotRun::default();

        for _ in 0..MAX_BOT_STEPS {
            let Some(seat) = bot_to_act(room) else {
                return run;
            };
            let view = CurrentTrickInfo::for_seat(room, seat);
            let action = self.bot_action(&room.room_id, &view, &mut run);

            let report = match apply_turn(room, seat as usize, &action) {
                Ok(report) => report,
                Err(err) => {
                    warn!(
                        room_id = %room.room_id,
                        seat,
                        error = %err,
                        "bot move rejected, using fallback"
                    );
                    run.fallbacks += 1;
                    match apply_turn(room, seat as usize, &fallback_action(&view)) {
                        Ok(report) => report,
                        Err(err) => {
                            warn!(
                                room_id = %room.room_id,
                                seat,
                                error = %err,
                                "fallback move rejected, stopping bot chain"
                            );
                            return run;
                        }
                    }
                }
            };
            run.moves += 1;
            if let Some(outcome) = report.outcome {
                log_round_end(room, outcome);
                run.outcome = Some(outcome);
                return run;
            }
        }

        if bot_to_act(room).is_some() {
            run.guard_tripped = true;
            warn!(
                room_id = %room.room_id,
                steps = MAX_BOT_STEPS,
                "bot chain hit its step limit"
            );
        }
        run
    }

    /// Ask the bot for a move, substituting the fallback on error or when it
    /// declines to lead.
    fn bot_action(
        &self,
        room_id: &str,
        view: &CurrentTrickInfo,
        run: &mut BotRun,
    ) -> PlayerAction {
        match self.ai.choose_move(view) {
            Ok(Some(cards)) => {
                let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
                debug!(room_id, seat = view.seat, cards = ?ids, "bot plays");
                PlayerAction::from_cards(&cards)
            }
            Ok(None) if !view.is_leading() => {
                debug!(room_id, seat = view.seat, "bot passes");
                PlayerAction::Pass
            }
            Ok(None) => {
                warn!(room_id, seat = view.seat, "bot declined to lead, using fallback");
                run.fallbacks += 1;
                fallback_action(view)
            }
            Err(err) => {
                warn!(room_id, seat = view.seat, error = %err, "bot failed, using fallback");
                run.fallbacks += 1;
                fallback_action(view)
            }
        }
    }
}

/// Seat of an unfinished bot holding the turn in a live round.
fn bot_to_act(room: &Room) -> Option<Seat> {
    let player = room.current_player();
    (room.is_playing() && player.is_bot && !player.finished).then_some(room.turn_index)
}

fn fallback_action(view: &CurrentTrickInfo) -> PlayerAction {
    match fallback_move(&view.hand, view.last_hand.as_ref()) {
        Some(cards) => PlayerAction::from_cards(&cards),
        None => PlayerAction::Pass,
    }
}

pub(super) fn log_round_end(room: &Room, outcome: RoundOutcome) {
    info!(
        room_id = %room.room_id,
        round = room.round_no,
        outcome = ?outcome,
        winners = ?room.winners,
        "round over"
    );
}
