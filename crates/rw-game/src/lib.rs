//! Game engine for Roomwander.
//!
//! Drives a text-adventure session over a [`rw_core::World`]: a rigid
//! two-word command grammar, a player with a location and an inventory, and
//! a turn-based state machine with two terminal phases (dead and quit).

/// Error types for the game engine.
pub mod error;
/// Two-word command parsing.
pub mod parser;
/// Player state: location and inventory.
pub mod player;
/// Session state machine and per-verb dispatch.
pub mod session;

pub use error::{GameError, GameResult};
pub use parser::{Command, parse_command};
pub use player::PlayerState;
pub use session::{Phase, Session};
