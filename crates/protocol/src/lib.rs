#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `protocol` turns a bidirectional byte stream into the three message
//! families a rover session speaks in: the handshake's challenge/response
//! exchange, position/status reports from the robot, and the fixed set of
//! outbound commands the server issues. It owns the wire's one genuinely
//! tricky piece of state: a message boundary can be interrupted, at any
//! point, by an out-of-band `RECHARGING` / `FULL POWER` pair that must
//! never be visible to a caller above it.
//!
//! # Design
//!
//! [`transport::Transport`] abstracts the byte stream (a real `TcpStream`
//! in production, an in-memory duplex buffer in tests). [`framing`] builds
//! [`framing::FramingReader`] on top of it: accumulate-until-terminator
//! framing, per-message length caps enforced as early as they become
//! provable, and the recharge pause flattened into an iterative retry
//! instead of the recursive call the original protocol sketch used.
//! [`wire`] holds the terminator byte pair, the outbound command literals,
//! and the handshake's two additive keys. [`codec`] parses the two inbound
//! value shapes (`OK <x> <y>`, a bare confirmation number).
//! [`handshake`] runs the username/hash exchange.
//!
//! # Errors
//!
//! Every fallible operation returns [`error::SessionError`], which is
//! either a [`core::error::SessionFault`] (something to report over the
//! wire before closing) or [`error::SessionError::Disconnected`] (the peer
//! went away or a read timed out; nothing is reported).

/// Message codec: parses inbound position reports and confirmation numbers.
pub mod codec;
/// Framing reader: message boundary detection, length caps, recharge pause.
pub mod framing;
/// Handshake: username hashing and confirmation-code verification.
pub mod handshake;
/// Transport abstraction over a bidirectional, timeout-controllable stream.
pub mod transport;
/// Fallible-operation error type shared by every layer in this crate.
pub mod error;
/// Wire constants: terminator bytes, outbound command literals, hash keys.
pub mod wire;

pub use error::SessionError;
pub use framing::FramingReader;
pub use transport::Transport;
