#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `daemon` is the ambient engineering around spec.md's core: the accept
//! loop that binds a listener and spawns one thread per connection, and
//! the per-session [`navigator`] and [`sweeper`] that build on `protocol`'s
//! framing, handshake, and codec to actually drive a robot from an unknown
//! starting pose to the destination region and recover its message.
//!
//! # Design
//!
//! [`cli`] defines the `clap`-derived argument surface `bin/roverd` parses.
//! [`listener`] owns the `TcpListener`/`socket2` setup and thread-per-
//! connection spawn. [`session`] sequences handshake -> navigate -> sweep
//! -> logout for one connection and maps the first fault raised by any
//! stage to its terminal wire response. [`navigator`] and [`sweeper`]
//! implement spec.md §4.3 and §4.4 against the `protocol` crate's
//! [`protocol::framing::FramingReader`].
//!
//! # Invariants
//!
//! - Sessions are isolated: no shared mutable state crosses the boundary
//!   between two [`session::run`] invocations other than the read-only,
//!   `Arc`-shared [`core::config::RuntimeConfig`].
//! - A session thread panicking never stops [`listener::serve`] from
//!   accepting further connections.

/// Command-line surface for the `roverd` binary.
pub mod cli;
/// Accept loop: binds the listener, spawns one thread per connection.
pub mod listener;
/// Orientation inference and routing to the destination region.
pub mod navigator;
/// Sequences a connection through handshake, navigation, and sweep.
pub mod session;
/// The fixed serpentine sweep of the destination region.
pub mod sweeper;
/// Test-only scripted robot used to drive the navigator and sweeper.
pub(crate) mod support;

pub use listener::serve;
