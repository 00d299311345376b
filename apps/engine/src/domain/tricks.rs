//! Round setup and the single-action trick state machine.
//!
//! `apply_turn` applies exactly one action for the seat holding the turn.
//! Driving bot seats afterwards is the caller's job.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::domain::cards_logic::{analyze, can_beat, PlayedHand};
use crate::domain::cards_types::{Card, CardId};
use crate::domain::dealing::{deal_hands, opening_leader};
use crate::domain::rules::{next_seat, Seat, Team, FINISHERS_TO_WIN, SEATS};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{checked_seat, GameStatus, Room, RoundOutcome, SeatTally};
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// What a seat does on its turn.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PlayerAction {
    Pass,
    Play { card_ids: Vec<CardId> },
}

impl PlayerAction {
    pub fn play<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Play {
            card_ids: ids.into_iter().map(|s| CardId::new(s)).collect(),
        }
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        Self::Play {
            card_ids: cards.iter().map(|c| c.id.clone()).collect(),
        }
    }

    /// Build from the boundary's `(action, card_ids)` pair.
    pub fn from_parts(action: &str, card_ids: &[String]) -> Result<Self, DomainError> {
        match action.parse::<ActionKind>()? {
            ActionKind::Pass => Ok(Self::Pass),
            ActionKind::Play => Ok(Self::play(card_ids.iter().cloned())),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Pass => ActionKind::Pass,
            Self::Play { .. } => ActionKind::Play,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ActionKind {
    Pass,
    Play,
}

impl FromStr for ActionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(Self::Pass),
            "play" => Ok(Self::Play),
            other => Err(DomainError::action(
                ErrorCode::UnknownAction,
                format!("unknown action {other:?}"),
            )),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("pass"),
            Self::Play => f.write_str("play"),
        }
    }
}

/// Side effects of one accepted action.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TurnReport {
    /// Seat whose hand emptied with this play.
    pub finished_seat: Option<Seat>,
    /// The active trick was cleared after a full round of passes.
    pub trick_reset: bool,
    /// Set when this action ended the round.
    pub outcome: Option<RoundOutcome>,
}

/// Deal a fresh round and reset all per-round state.
///
/// Players keep their seats, names and readiness; everything tied to the
/// previous round is discarded.
pub fn start_round(room: &mut Room) {
    room.round_no = room.round_no.wrapping_add(1);
    let hands = deal_hands(derive_dealing_seed(room.seed, room.round_no));
    let leader = opening_leader(&hands);
    for (player, hand) in room.players.iter_mut().zip(hands) {
        player.hand = hand;
        player.finished = false;
    }
    room.status = GameStatus::Playing;
    room.turn_index = leader;
    room.last_hand = None;
    room.pass_count = 0;
    room.winners.clear();
    room.hand_history.clear();
    room.emotes.clear();
    room.turn_history = [SeatTally::default(); SEATS];
    room.outcome = None;
    let leader_name = room.player(leader).name.clone();
    room.push_log(format!(
        "Round {} started, {leader_name} holds the heart 4 and leads",
        room.round_no
    ));
    room.touch();
}

/// Validate and apply one action for `seat`.
///
/// Nothing is mutated unless the action is accepted.
pub fn apply_turn(
    room: &mut Room,
    seat: usize,
    action: &PlayerAction,
) -> Result<TurnReport, DomainError> {
    let seat = checked_seat(seat)?;
    if room.status != GameStatus::Playing {
        return Err(DomainError::state(
            ErrorCode::NotPlaying,
            "the round is not being played",
        ));
    }
    if seat != room.turn_index {
        return Err(DomainError::turn(format!(
            "seat {seat} acted during seat {}'s turn",
            room.turn_index
        )));
    }

    let mut report = TurnReport::default();
    match action {
        PlayerAction::Pass => {
            if room.last_hand.is_none() {
                return Err(DomainError::action(
                    ErrorCode::MustLead,
                    "the leading seat must play",
                ));
            }
            room.pass_count += 1;
            room.turn_history[seat as usize].passes += 1;
            let name = room.player(seat).name.clone();
            room.push_log(format!("{name} passed"));
            debug!(room_id = %room.room_id, seat, action = "pass", "accepted");
        }
        PlayerAction::Play { card_ids } => {
            let wanted: HashSet<&CardId> = card_ids.iter().collect();
            let selected: Vec<Card> = room
                .player(seat)
                .hand
                .iter()
                .filter(|c| wanted.contains(&c.id))
                .cloned()
                .collect();
            if selected.is_empty() {
                return Err(DomainError::action(
                    ErrorCode::NoCardsSelected,
                    "no cards from the hand were selected",
                ));
            }
            let Some(combo) = analyze(&selected) else {
                return Err(DomainError::combo(
                    ErrorCode::InvalidCombo,
                    "selected cards do not form a combo",
                ));
            };
            if !can_beat(&selected, room.last_hand.as_ref()) {
                return Err(DomainError::combo(
                    ErrorCode::CannotBeat,
                    format!(
                        "{} of rank {} does not beat the table",
                        combo.kind, combo.rank
                    ),
                ));
            }

            let player = room.player_mut(seat);
            player.hand.retain(|c| !wanted.contains(&c.id));
            let emptied = player.hand.is_empty();
            let name = player.name.clone();

            let played = PlayedHand::new(seat, selected, combo);
            room.last_hand = Some(played.clone());
            room.push_history(played);
            room.turn_history[seat as usize].plays += 1;
            room.pass_count = 0;
            room.push_log(format!("{name} played {} card(s)", combo.kind.size()));
            debug!(
                room_id = %room.room_id,
                seat,
                action = "play",
                cards = ?card_ids,
                kind = %combo.kind,
                rank = combo.rank,
                "accepted"
            );

            if emptied && !room.winners.contains(&seat) {
                room.player_mut(seat).finished = true;
                room.winners.push(seat);
                report.finished_seat = Some(seat);
                room.push_log(format!("{name} has no cards left"));
            }
        }
    }

    if let Some(outcome) = round_result(room) {
        room.status = GameStatus::RoundOver;
        room.outcome = Some(outcome);
        room.push_log(match outcome {
            RoundOutcome::TeamWin(team) => {
                format!("Round over, every seat of team {} finished", team.as_str())
            }
            _ => "Round over, draw (the head team cannot lose)".to_string(),
        });
        room.touch();
        report.outcome = Some(outcome);
        return Ok(report);
    }

    advance_turn(room);
    report.trick_reset = reset_trick_if_passed_out(room);
    room.touch();
    Ok(report)
}

/// Outcome once either team has three finishers.
///
/// The team holding the first finisher never loses: if the other team gets
/// there first the round is a draw, as it is when both get there together.
pub fn round_result(room: &Room) -> Option<RoundOutcome> {
    let a_done = room.finished_on_team(Team::A) >= FINISHERS_TO_WIN;
    let b_done = room.finished_on_team(Team::B) >= FINISHERS_TO_WIN;
    let winner = match (a_done, b_done) {
        (false, false) => return None,
        (true, true) => return Some(RoundOutcome::Draw),
        (true, false) => Team::A,
        (false, true) => Team::B,
    };
    match room.head_team() {
        Some(head) if head != winner => Some(RoundOutcome::Draw),
        _ => Some(RoundOutcome::TeamWin(winner)),
    }
}

/// Move the turn to the next unfinished seat, probing each seat at most once.
fn advance_turn(room: &mut Room) {
    for _ in 0..SEATS {
        room.turn_index = next_seat(room.turn_index);
        if !room.current_player().finished {
            break;
        }
    }
}

/// Clear the trick once every other live seat has passed.
///
/// If the trick owner has since finished, every live seat must pass.
fn reset_trick_if_passed_out(room: &mut Room) -> bool {
    let alive = room.unfinished_count() as u32;
    let threshold = match &room.last_hand {
        Some(last) if room.player(last.seat).finished => alive,
        _ => alive.saturating_sub(1),
    };
    if room.pass_count < threshold {
        return false;
    }

    let owner = room.last_hand.take().map(|last| last.seat);
    room.pass_count = 0;
    if let Some(owner) = owner {
        if !room.player(owner).finished {
            room.turn_index = owner;
        }
    }
    for tally in room.turn_history.iter_mut() {
        tally.passes = 0;
    }
    room.push_log("Everyone passed, the lead is reset");
    debug!(room_id = %room.room_id, turn = room.turn_index, "trick reset");
    true
}
