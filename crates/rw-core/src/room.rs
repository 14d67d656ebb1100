//! Room nodes, exits, and room identifiers.

use std::fmt;

use crate::item::Item;

/// Stable index of a room inside a [`World`](crate::World) arena.
///
/// Ids are minted by the world builder and are only meaningful for the world
/// that produced them. Storing ids instead of references keeps the cyclic
/// exit graph free of circular ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    /// The arena position of this room.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an exit leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitTarget {
    /// A real destination room.
    Room(RoomId),
    /// The lethal void. Stepping through ends the game; there is no room on
    /// the other side.
    Lethal {
        /// What the death screen reports.
        message: String,
    },
}

/// A named exit from a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// The direction word the player types (`east`, `stairs`, `window`, ...).
    pub direction: String,
    /// Where the exit leads.
    pub target: ExitTarget,
}

/// A node in the world graph.
///
/// Exits and items keep their definition order; every lookup takes the first
/// match, left to right, so duplicate directions or item names are allowed
/// and resolve deterministically.
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique room name.
    pub name: String,
    /// Exits in definition order.
    pub exits: Vec<Exit>,
    /// Items currently visible in the room, in definition order.
    pub items: Vec<Item>,
}

impl Room {
    /// Resolve a direction to its exit target. First match wins; there is no
    /// partial or prefix matching.
    pub fn exit(&self, direction: &str) -> Option<&ExitTarget> {
        self.exits
            .iter()
            .find(|e| e.direction.eq_ignore_ascii_case(direction))
            .map(|e| &e.target)
    }

    /// Find a visible item by name. First match wins.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name.eq_ignore_ascii_case(name))
    }

    /// Whether the named item is visible and currently grabbable.
    pub fn is_grabbable(&self, name: &str) -> bool {
        self.item(name).is_some_and(|i| i.grabbable)
    }

    /// Remove the first visible item with this name and return it.
    ///
    /// Removal is atomic with respect to grabbability: the grabbable set is
    /// derived from the visible items, so a removed item is gone from both.
    pub fn take(&mut self, name: &str) -> Option<Item> {
        let pos = self
            .items
            .iter()
            .position(|i| i.name.eq_ignore_ascii_case(name))?;
        Some(self.items.remove(pos))
    }

    /// Directions of all exits, in definition order.
    pub fn exit_directions(&self) -> impl Iterator<Item = &str> {
        self.exits.iter().map(|e| e.direction.as_str())
    }

    /// Names of all visible items, in definition order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.name.as_str())
    }
}
