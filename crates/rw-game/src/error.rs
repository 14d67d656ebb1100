//! Error types for the game engine.

use thiserror::Error;

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Recoverable outcomes of a turn.
///
/// Each variant's display string is the exact status shown to the player.
/// None of these end the session: the loop reports the status and carries
/// on. Death and quitting are phase transitions, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Input did not fit the two-word grammar, or used an unknown verb.
    #[error("Sorry, I do not understand. Try [verb] [noun]. Valid verbs include 'go', 'look', 'take', 'use'.")]
    InputRejected,

    /// No exit in that direction from the current room.
    #[error("I don't see that exit.")]
    ExitNotFound,

    /// No such item visible in the current room.
    #[error("I don't see that item.")]
    ItemNotFound,

    /// The item is not here, or is here but cannot be picked up.
    #[error("I can't grab that.")]
    NotGrabbable,

    /// The item is not in the inventory.
    #[error("You don't have that item.")]
    ItemNotHeld,

    /// The item is held but has no use at all.
    #[error("You can't use that.")]
    ItemNotUsable,

    /// The item is held and usable, just not in this room.
    #[error("You can't use that here.")]
    ItemNotUsableHere,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_fixed_strings() {
        assert_eq!(GameError::ExitNotFound.to_string(), "I don't see that exit.");
        assert_eq!(GameError::ItemNotFound.to_string(), "I don't see that item.");
        assert_eq!(GameError::NotGrabbable.to_string(), "I can't grab that.");
        assert_eq!(
            GameError::ItemNotHeld.to_string(),
            "You don't have that item."
        );
        assert_eq!(
            GameError::ItemNotUsableHere.to_string(),
            "You can't use that here."
        );
    }
}
