//! Core types for Roomwander: rooms, items, and the world model.
//!
//! This crate defines the data model that world definition files compile
//! into. It is independent of the game loop: you can construct a [`World`]
//! from a JSON definition or assemble a [`WorldDef`] programmatically.

/// World definition structs and the definition-to-world compiler.
pub mod def;
/// Error types used throughout the crate.
pub mod error;
/// Items and their data-defined use effects.
pub mod item;
/// Room nodes, exits, and room identifiers.
pub mod room;
/// The world model: a room arena plus the use-effect table.
pub mod world;

/// Re-export definition types.
pub use def::{ExitDef, ExitTargetDef, RoomDef, WorldDef};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export item types.
pub use item::{Item, UseEffect};
/// Re-export room types.
pub use room::{Exit, ExitTarget, Room, RoomId};
/// Re-export the world model.
pub use world::World;
