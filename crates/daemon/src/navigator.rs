//! Orientation inference and routing to the destination region's entry
//! corner.

use core::config::LengthCaps;
use core::grid::{Direction, DestinationRegion, Position, Turn};
use protocol::codec::parse_position_report;
use protocol::error::SessionError;
use protocol::framing::FramingReader;
use protocol::transport::Transport;
use protocol::wire::Command;

/// Drives the robot from an unknown starting pose to
/// [`DestinationRegion::ENTRY`], returning the orientation it ends up
/// facing (which the sweeper turns from to face East).
///
/// Orientation cannot be known from a single position, so the first step
/// is a preparatory `TURN LEFT` purely to obtain a baseline position
/// (spec.md's "probe move" ordering — the turn does not move the robot,
/// it only yields a position report to diff against). From there, one
/// `MOVE` reveals the cardinal direction of travel.
pub fn find_destination<T: Transport>(
    reader: &mut FramingReader<T>,
    caps: &LengthCaps,
) -> Result<Direction, SessionError> {
    let start = send_turn(reader, caps, Command::TurnLeft)?;
    let mut current = move_forward(reader, caps, start)?;
    let mut facing = direction_to(start, current);

    while current != DestinationRegion::ENTRY {
        let target_direction = direction_to(current, DestinationRegion::ENTRY);
        if facing != target_direction {
            apply_turn(reader, caps, facing.turn_toward(target_direction))?;
            facing = target_direction;
        }
        current = move_forward(reader, caps, current)?;
    }

    Ok(facing)
}

/// The cardinal direction to travel from `from` to make progress toward
/// `to`, preferring the x-axis (east/west) over the y-axis, matching the
/// reference's tie-break. Falls through to south when both axes already
/// agree but `from != to` (the only remaining case is `to.y < from.y`).
pub(crate) fn direction_to(from: Position, to: Position) -> Direction {
    if to.x > from.x {
        Direction::East
    } else if to.x < from.x {
        Direction::West
    } else if to.y > from.y {
        Direction::North
    } else {
        Direction::South
    }
}

/// Issues `102 MOVE` and retries it, unmodified, until a position report
/// with different coordinates arrives. A robot that never moves loops
/// here until the read times out — spec.md's design note flags this as
/// deliberate: no obstacle-avoidance policy is specified. Shared by the
/// routing loop and [`crate::sweeper::search`]'s intra-row and
/// row-transition moves, matching `original_source/server.py`'s single
/// `move_forward` helper being the only way either one moves the robot.
pub(crate) fn move_forward<T: Transport>(
    reader: &mut FramingReader<T>,
    caps: &LengthCaps,
    current: Position,
) -> Result<Position, SessionError> {
    loop {
        reader.send_command(Command::Move)?;
        let next = parse_position_report(&reader.next_message(caps.position)?)?;
        if next != current {
            return Ok(next);
        }
    }
}

/// Sends a single turn command and reads back the (unenforced) position
/// report that follows it.
pub(crate) fn send_turn<T: Transport>(
    reader: &mut FramingReader<T>,
    caps: &LengthCaps,
    command: Command,
) -> Result<Position, SessionError> {
    reader.send_command(command)?;
    parse_position_report(&reader.next_message(caps.position)?)
}

/// Applies the minimum-turn sequence for `turn`: nothing, one `TURN LEFT`,
/// one `TURN RIGHT`, or two `TURN LEFT`s for a full reversal.
pub(crate) fn apply_turn<T: Transport>(
    reader: &mut FramingReader<T>,
    caps: &LengthCaps,
    turn: Turn,
) -> Result<(), SessionError> {
    match turn {
        Turn::None => {}
        Turn::Left => {
            send_turn(reader, caps, Command::TurnLeft)?;
        }
        Turn::Right => {
            send_turn(reader, caps, Command::TurnRight)?;
        }
        Turn::Reverse => {
            send_turn(reader, caps, Command::TurnLeft)?;
            send_turn(reader, caps, Command::TurnLeft)?;
        }
    }
    Ok(())
}
