//! Error types used throughout the crate.

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised while parsing or building a world from its definition.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The definition contains no rooms.
    #[error("world has no rooms")]
    Empty,

    /// Two rooms share a name (room names are case-insensitively unique).
    #[error("duplicate room: \"{0}\"")]
    DuplicateRoom(String),

    /// The configured start room does not exist.
    #[error("start room not found: \"{0}\"")]
    StartNotFound(String),

    /// An exit points at a room that does not exist.
    #[error("room \"{room}\" has exit \"{direction}\" to unknown room \"{to}\"")]
    UnknownExitTarget {
        /// The room the exit belongs to.
        room: String,
        /// The exit's direction word.
        direction: String,
        /// The unresolved destination name.
        to: String,
    },

    /// An unlock effect names a room that does not exist.
    #[error("item \"{item}\" unlocks unknown room \"{room}\"")]
    UnknownUnlockRoom {
        /// The item carrying the effect.
        item: String,
        /// The unresolved room name.
        room: String,
    },

    /// The definition text is not valid JSON.
    #[error("invalid world definition: {0}")]
    Parse(#[from] serde_json::Error),
}
