//! Falling-block puzzle engine with a terminal front end.
//!
//! The engine ([`core`]) is pure game logic: a settled-cell board, an
//! active falling piece, and a session orchestrator driven by discrete
//! [`types::Command`]s. The terminal driver ([`term`], [`input`] and the
//! `blockfall` binary) owns the gravity timer and the keyboard and only
//! talks to the engine through [`core::GameSession::apply`], reading
//! state back as snapshots.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
