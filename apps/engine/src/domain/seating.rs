//! Seat occupancy: joining, leaving, swapping, readiness and emotes.

use time::OffsetDateTime;

use crate::domain::rules::Seat;
use crate::domain::state::{checked_seat, Emote, GameStatus, Room, RoundOutcome};
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Result of a join request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct JoinOutcome {
    pub seat: Seat,
    /// Read-only spectators report seat 0.
    pub spectator: bool,
}

/// Result of a leave request.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct LeaveOutcome {
    /// The vacated seat now belongs to a bot that holds the turn.
    pub bot_must_act: bool,
    /// The host left mid-round and the round was ended.
    pub round_abandoned: bool,
}

/// Take over the first bot seat.
///
/// Outside the waiting phase, or for a name that previously left, the caller
/// joins as a spectator.
pub fn join(room: &mut Room, name: &str) -> Result<JoinOutcome, DomainError> {
    if room.status != GameStatus::Waiting {
        room.push_log(format!("{name} joined as a spectator"));
        return Ok(JoinOutcome {
            seat: 0,
            spectator: true,
        });
    }
    if room.spectator_names.iter().any(|n| n == name) {
        room.push_log(format!("{name} may only spectate"));
        return Ok(JoinOutcome {
            seat: 0,
            spectator: true,
        });
    }

    let Some(seat) = room.players.iter().position(|p| p.is_bot) else {
        return Err(DomainError::seat(
            ErrorCode::NoFreeSeat,
            "every seat is held by a human",
        ));
    };
    let player = &mut room.players[seat];
    player.name = name.to_string();
    player.is_bot = false;
    player.ready = false;
    room.push_log(format!("{name} joined the room"));
    room.touch();
    Ok(JoinOutcome {
        seat: seat as Seat,
        spectator: false,
    })
}

/// Hand a human seat back to a bot.
///
/// The host leaving mid-round ends the round instead. Leaving a bot seat is
/// a no-op.
pub fn leave(room: &mut Room, seat: usize) -> Result<LeaveOutcome, DomainError> {
    let seat = checked_seat(seat)?;
    if room.player(seat).is_bot {
        return Ok(LeaveOutcome::default());
    }

    let name = room.player(seat).name.clone();
    if !room.spectator_names.contains(&name) {
        room.spectator_names.push(name.clone());
    }

    if room.host_seat == seat && room.status == GameStatus::Playing {
        room.status = GameStatus::RoundOver;
        room.outcome = Some(RoundOutcome::Abandoned);
        room.push_log(format!("Host {name} left, the round is over"));
        room.touch();
        return Ok(LeaveOutcome {
            bot_must_act: false,
            round_abandoned: true,
        });
    }

    let player = room.player_mut(seat);
    player.is_bot = true;
    player.ready = true;
    room.push_log(format!("{name} left, a bot takes over"));

    if room.host_seat == seat {
        if let Some(next) = room.players.iter().position(|p| !p.is_bot) {
            room.host_seat = next as Seat;
            let host_name = room.players[next].name.clone();
            room.push_log(format!("{host_name} is the new host"));
        }
    }

    let bot_must_act =
        room.is_playing() && room.turn_index == seat && !room.player(seat).finished;
    room.touch();
    Ok(LeaveOutcome {
        bot_must_act,
        round_abandoned: false,
    })
}

/// Move a human seat into a bot seat. Only while waiting.
pub fn swap(room: &mut Room, seat: usize, target: usize) -> Result<(), DomainError> {
    if room.status != GameStatus::Waiting {
        return Err(DomainError::state(
            ErrorCode::NotWaiting,
            "seats can only be swapped while waiting",
        ));
    }
    let seat = checked_seat(seat)?;
    let target = checked_seat(target)?;
    if room.player(seat).is_bot {
        return Err(DomainError::seat(
            ErrorCode::BotSeat,
            format!("seat {seat} is held by a bot"),
        ));
    }
    if !room.player(target).is_bot {
        return Err(DomainError::seat(
            ErrorCode::SeatOccupied,
            format!("seat {target} is already taken"),
        ));
    }

    room.players.swap(seat as usize, target as usize);
    if room.host_seat == seat {
        room.host_seat = target;
    }
    let name = room.player(target).name.clone();
    room.push_log(format!(
        "{name} moved from seat {} to seat {}",
        seat + 1,
        target + 1
    ));
    room.touch();
    Ok(())
}

pub fn set_ready(room: &mut Room, seat: usize, ready: bool) -> Result<(), DomainError> {
    let seat = checked_seat(seat)?;
    room.player_mut(seat).ready = ready;
    room.touch();
    Ok(())
}

/// Append an emote from a human seat. `target` of `None` broadcasts.
pub fn add_emote(
    room: &mut Room,
    sender: usize,
    target: Option<usize>,
    content: &str,
) -> Result<(), DomainError> {
    let sender = checked_seat(sender)?;
    if room.player(sender).is_bot {
        return Err(DomainError::seat(
            ErrorCode::BotSeat,
            "bots cannot send emotes",
        ));
    }
    let target = target.map(checked_seat).transpose()?;
    let now = OffsetDateTime::now_utc();
    room.push_emote(Emote {
        sender,
        target,
        content: content.to_string(),
        timestamp_ms: (now.unix_timestamp_nanos() / 1_000_000) as i64,
    });
    room.touch();
    Ok(())
}
