//! Items and their data-defined use effects.

use serde::{Deserialize, Serialize};

/// What using a held item does.
///
/// Effects are part of the world definition, not of the dispatcher: adding a
/// new kind of effect extends this enum and the data files, never the
/// per-verb control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum UseEffect {
    /// Consume the item and report the message.
    Eat {
        /// Status shown when the item is eaten.
        message: String,
    },
    /// Consume the item to unlock something, but only while standing in the
    /// named room. Anywhere else the item stays held and the fixed
    /// "can't use that here" status is reported.
    Unlock {
        /// Name of the room where the item works.
        room: String,
        /// Status shown on success.
        message: String,
    },
}

/// An item sitting in a room: a name, a description, and optional behavior.
///
/// Items are not standalone entities; they live in a room's visible list
/// until taken, and the grabbable set is derived from the `grabbable` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The name the player refers to the item by.
    pub name: String,
    /// Description shown by `look`.
    pub description: String,
    /// Whether the item can be moved into inventory.
    #[serde(default)]
    pub grabbable: bool,
    /// Death message, for items that kill the player when taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadly: Option<String>,
    /// What using the item does, if anything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_use: Option<UseEffect>,
}

impl Item {
    /// Create a plain, non-grabbable item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            grabbable: false,
            deadly: None,
            on_use: None,
        }
    }

    /// Mark the item as grabbable.
    pub fn with_grabbable(mut self) -> Self {
        self.grabbable = true;
        self
    }

    /// Mark taking the item as fatal, with the given death message.
    pub fn with_deadly(mut self, message: impl Into<String>) -> Self {
        self.deadly = Some(message.into());
        self
    }

    /// Attach a use effect to the item.
    pub fn with_use(mut self, effect: UseEffect) -> Self {
        self.on_use = Some(effect);
        self
    }
}
