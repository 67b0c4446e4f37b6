//! The fixed serpentine sweep of the destination region.

use core::config::LengthCaps;
use core::grid::{Direction, DestinationRegion};
use protocol::error::SessionError;
use protocol::framing::FramingReader;
use protocol::transport::Transport;
use protocol::wire::Command;

use crate::navigator::{apply_turn, move_forward};

/// Side length of the destination region the sweeper scans.
const SIDE: i32 = DestinationRegion::SIDE;

/// Outcome of a completed sweep: either the recovered message, or nothing
/// if all 25 cells were polled without a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// The non-empty reply `GET MESSAGE` returned from some cell.
    Found(String),
    /// All 25 cells returned an empty reply.
    Empty,
}

/// Scans the 5x5 destination region in a boustrophedon pattern, starting
/// at [`DestinationRegion::ENTRY`] and facing `facing` (whatever direction
/// [`crate::navigator::find_destination`] left the robot in).
///
/// At each cell, `105 GET MESSAGE` is polled before any motion on that
/// cell. The first non-empty reply ends the sweep with a `106 LOGOUT` sent
/// immediately, without visiting the remaining cells. Per spec.md's design
/// note, a row transition (turn, one step south, turn) runs even after the
/// fifth and final row if nothing was found there; the session simply ends
/// one cell south of the grid with [`SweepOutcome::Empty`].
///
/// Every move within the sweep, intra-row or the row-transition's south
/// step, goes through [`move_forward`] and retries until the coordinates
/// actually change, exactly as `original_source/server.py`'s
/// `search_square` drives its moves through `move_forward` rather than a
/// fire-and-forget send: a robot transiently blocked inside the
/// destination region must not be counted as having advanced to the next
/// cell.
pub fn search<T: Transport>(
    reader: &mut FramingReader<T>,
    caps: &LengthCaps,
    mut facing: Direction,
) -> Result<SweepOutcome, SessionError> {
    apply_turn(reader, caps, facing.turn_toward(Direction::East))?;
    facing = Direction::East;
    let mut current = DestinationRegion::ENTRY;

    for row in 0..SIDE {
        for column in 0..SIDE {
            if let Some(message) = poll_cell(reader, caps)? {
                reader.send_command(Command::Logout)?;
                return Ok(SweepOutcome::Found(message));
            }
            if column + 1 < SIDE {
                current = move_forward(reader, caps, current)?;
            }
        }

        let next_facing = if facing == Direction::East {
            Direction::West
        } else {
            Direction::East
        };
        apply_turn(reader, caps, facing.turn_toward(Direction::South))?;
        current = move_forward(reader, caps, current)?;
        apply_turn(reader, caps, Direction::South.turn_toward(next_facing))?;
        facing = next_facing;
    }

    Ok(SweepOutcome::Empty)
}

/// Sends `105 GET MESSAGE` and reads the reply, returning `None` for an
/// empty cell.
fn poll_cell<T: Transport>(
    reader: &mut FramingReader<T>,
    caps: &LengthCaps,
) -> Result<Option<String>, SessionError> {
    reader.send_command(Command::GetMessage)?;
    let reply = reader.next_message(caps.message)?;
    Ok(if reply.is_empty() { None } else { Some(reply) })
}
