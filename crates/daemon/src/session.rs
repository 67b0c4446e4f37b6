//! Sequences a single connection through handshake, navigation, and sweep,
//! reporting exactly one terminal outcome.

use core::config::RuntimeConfig;
use core::error::SessionOutcome;
use protocol::framing::FramingReader;
use protocol::transport::Transport;
use protocol::wire::Command;
use protocol::{handshake, SessionError};

use crate::navigator;
use crate::sweeper::{self, SweepOutcome};

/// Runs handshake -> navigate -> sweep -> logout to completion on `transport`.
///
/// A fault raised by any stage is caught exactly once here, mapped to its
/// terminal wire response, and reported. A [`SessionError::Disconnected`]
/// (peer EOF or a read timeout) is reported to no one — the caller closes
/// the connection without writing anything, per spec.md §7.
pub fn run<T: Transport>(transport: T, config: &RuntimeConfig) -> SessionOutcome {
    let mut reader = FramingReader::new(transport, config.timeouts, config.length_caps);
    match drive(&mut reader, config) {
        Ok(()) => SessionOutcome::Completed,
        Err(SessionError::Disconnected) => SessionOutcome::Disconnected,
        Err(SessionError::Fault(fault)) => {
            let terminal = terminal_command(&fault);
            // Best-effort: if the write itself fails the peer is already
            // gone, and the outcome we report is unaffected either way.
            let _ = reader.send_command(terminal);
            SessionOutcome::Faulted(fault)
        }
    }
}

fn drive<T: Transport>(
    reader: &mut FramingReader<T>,
    config: &RuntimeConfig,
) -> Result<(), SessionError> {
    handshake::run(reader, &config.length_caps)?;
    let facing = navigator::find_destination(reader, &config.length_caps)?;
    match sweeper::search(reader, &config.length_caps, facing)? {
        SweepOutcome::Found(_) | SweepOutcome::Empty => {}
    }
    Ok(())
}

fn terminal_command(fault: &core::error::SessionFault) -> Command {
    use core::error::SessionFault;
    match fault {
        SessionFault::Login(_) => Command::LoginFailed,
        SessionFault::Syntax(_) => Command::SyntaxError,
        SessionFault::Logic(_) => Command::LogicError,
    }
}
