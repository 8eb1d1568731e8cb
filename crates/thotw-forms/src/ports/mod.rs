//! Ports module (Hexagonal Architecture)
//!
//! Interfaces the form controller needs from the outside world.

pub mod outbound;

pub use outbound::*;
