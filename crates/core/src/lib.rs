#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `core` holds the parts of the rover fleet daemon that have no opinion
//! about bytes on a wire or threads on an accept loop: the coordinate and
//! orientation model the navigation planner reasons about, the runtime
//! configuration every session is built from, and the fault taxonomy that
//! the session driver reports back to disconnecting clients.
//!
//! # Design
//!
//! [`grid`] defines [`grid::Position`] and [`grid::Direction`] plus the
//! fixed [`grid::DestinationRegion`] the navigator steers toward.
//! [`config`] defines [`config::RuntimeConfig`], the struct every
//! connection is handed at spawn time instead of reaching for process
//! globals. [`error`] defines [`error::SessionFault`] and
//! [`error::SessionOutcome`], which the `protocol` and `daemon` crates
//! build on.
//!
//! # Invariants
//!
//! - Nothing in this crate performs I/O; it is safe to unit test without a
//!   socket, a thread, or a clock.
//! - [`config::RuntimeConfig`]'s defaults match the values spec'd for the
//!   wire protocol (length caps, timeouts) exactly; callers only override
//!   them for deployment tuning (bind address, verbosity).

/// Runtime configuration shared by every session (bind address, timeouts,
/// length caps, verbosity).
pub mod config;
/// The fault taxonomy a session driver reports to a client before closing.
pub mod error;
/// Coordinates, cardinal orientation, and the fixed destination region.
pub mod grid;
