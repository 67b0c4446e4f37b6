//! Runtime configuration shared by every session.

use std::net::SocketAddr;
use std::time::Duration;

/// Maximum byte length, terminator included, the framing reader accepts
/// for each class of inbound message before raising
/// [`crate::error::SyntaxFault::MessageTooLong`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthCaps {
    /// Cap on the username line of the handshake.
    pub username: usize,
    /// Cap on the client's confirmation number.
    pub confirmation: usize,
    /// Cap on an `OK <x> <y>` position report.
    pub position: usize,
    /// Cap on a `RECHARGING` / `FULL POWER` status line.
    pub status: usize,
    /// Cap on the recovered secret message.
    pub message: usize,
}

impl Default for LengthCaps {
    fn default() -> Self {
        Self {
            username: 20,
            confirmation: 7,
            position: 12,
            status: 12,
            message: 100,
        }
    }
}

/// Read-timeout durations applied to a session's socket, normally and while
/// a robot has signalled `RECHARGING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Applied to every read except while a recharge is in progress.
    pub normal: Duration,
    /// Applied only to the read that must observe `FULL POWER` once a
    /// robot has sent `RECHARGING`.
    pub recharging: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            normal: Duration::from_millis(1000),
            recharging: Duration::from_millis(5000),
        }
    }
}

/// Everything a session needs that isn't carried on the wire: where to
/// listen, how long to wait for a read, and how much of each message class
/// to buffer before giving up. Built once at startup and shared (behind an
/// `Arc`) with every spawned session.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Address the accept loop binds its listener to.
    pub bind: SocketAddr,
    /// Read-timeout pair applied to each session's socket.
    pub timeouts: Timeouts,
    /// Per-message-class length caps applied by the framing reader.
    pub length_caps: LengthCaps,
    /// Number of `-v` flags passed on the command line; bridged to a
    /// `tracing` filter level by the `logging` crate.
    pub verbosity: u8,
}

impl RuntimeConfig {
    /// Builds a config from an explicit bind address, leaving timeouts,
    /// length caps, and verbosity at their defaults.
    #[must_use]
    pub fn new(bind: SocketAddr) -> Self {
        Self {
            bind,
            timeouts: Timeouts::default(),
            length_caps: LengthCaps::default(),
            verbosity: 0,
        }
    }
}
