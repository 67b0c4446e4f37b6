//! Fault taxonomy for a single rover session.
//!
//! A session either completes, is faulted by a protocol violation, or is
//! silently disconnected (peer EOF or a read timeout). Only the middle case
//! is reported back to the client, and only ever once, per the wire
//! protocol's three terminal responses.

use thiserror::Error;

/// The three fault categories a session can terminate with, each mapped to
/// exactly one terminal wire response by the session driver.
#[derive(Debug, Error)]
pub enum SessionFault {
    /// The handshake's confirmation code did not match. Maps to
    /// `300 LOGIN FAILED`.
    #[error(transparent)]
    Login(#[from] LoginFault),
    /// A message violated the wire grammar or a length cap. Maps to
    /// `301 SYNTAX ERROR`.
    #[error(transparent)]
    Syntax(#[from] SyntaxFault),
    /// A message violated the recharge protocol. Maps to
    /// `302 LOGIC ERROR`.
    #[error(transparent)]
    Logic(#[from] LogicFault),
}

/// Authentication failures raised by the handshake.
#[derive(Debug, Error)]
pub enum LoginFault {
    /// The client's confirmation number did not equal `(H + CLIENT_KEY) mod
    /// 65536` for the hash `H` the server computed from the username.
    #[error("confirmation code {actual} did not match expected {expected}")]
    ConfirmationMismatch {
        /// The code the server expected.
        expected: u16,
        /// The code the client actually sent.
        actual: u16,
    },
}

/// Wire grammar and length-cap violations.
#[derive(Debug, Error)]
pub enum SyntaxFault {
    /// No valid message of length at most `limit` (terminator included) can
    /// still arrive given what the framing reader has already buffered.
    #[error("message exceeded the {limit}-byte cap before a terminator could complete")]
    MessageTooLong {
        /// The cap that was violated, terminator included.
        limit: usize,
    },
    /// A confirmation or coordinate field contained embedded whitespace.
    #[error("number field contained embedded whitespace")]
    WhitespaceInNumber,
    /// A confirmation field was not composed entirely of decimal digits.
    #[error("expected a non-negative decimal integer, got {0:?}")]
    NotANumber(String),
    /// A position report was not of the form `OK <int> <int>`.
    #[error("expected `OK <x> <y>`, got {0:?}")]
    MalformedPositionReport(String),
}

/// Recharge-protocol violations.
#[derive(Debug, Error)]
pub enum LogicFault {
    /// The message following `RECHARGING` was not exactly `FULL POWER`.
    #[error("expected FULL POWER after RECHARGING, got {0:?}")]
    MissingFullPower(String),
    /// A second `RECHARGING` arrived before `FULL POWER` closed the first.
    #[error("received RECHARGING while already recharging")]
    AlreadyRecharging,
}

/// How a session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    /// The handshake, navigation, and sweep all completed; the connection
    /// was closed whether or not a message was recovered.
    Completed,
    /// A fault was detected, reported once over the wire, and the
    /// connection was closed.
    Faulted(SessionFault),
    /// The peer disconnected or a read timed out. Per the wire protocol,
    /// nothing is sent back in this case.
    Disconnected,
}
