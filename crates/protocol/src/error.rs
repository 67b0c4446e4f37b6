//! The error type every fallible operation in this crate returns.

use core::error::{LoginFault, LogicFault, SessionFault, SessionOutcome, SyntaxFault};
use thiserror::Error;

/// Either a fault to report over the wire, or a silent end of session.
///
/// A read timeout or peer disconnect surfaces identically from every layer
/// (framing, handshake, navigation, sweep) as [`Self::Disconnected`]; the
/// session driver is the only place that distinguishes it from a fault by
/// sending nothing back.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A protocol violation that must be reported before closing.
    #[error(transparent)]
    Fault(#[from] SessionFault),
    /// The peer disconnected, or a read exceeded its timeout.
    #[error("peer disconnected or a read timed out")]
    Disconnected,
}

impl From<SessionError> for SessionOutcome {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::Fault(fault) => Self::Faulted(fault),
            SessionError::Disconnected => Self::Disconnected,
        }
    }
}

/// Lets every fault-producing site use `?` directly instead of routing
/// through [`SessionFault`] by hand.
impl From<SyntaxFault> for SessionError {
    fn from(fault: SyntaxFault) -> Self {
        Self::Fault(fault.into())
    }
}

impl From<LogicFault> for SessionError {
    fn from(fault: LogicFault) -> Self {
        Self::Fault(fault.into())
    }
}

impl From<LoginFault> for SessionError {
    fn from(fault: LoginFault) -> Self {
        Self::Fault(fault.into())
    }
}

/// Maps an I/O error to [`SessionError::Disconnected`]. Every I/O failure
/// this crate can observe — a closed socket, a read timeout, a broken pipe
/// on write — terminates the session silently, so none of them need a
/// distinct variant.
impl From<std::io::Error> for SessionError {
    fn from(_: std::io::Error) -> Self {
        Self::Disconnected
    }
}
