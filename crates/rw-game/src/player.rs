//! Player state: location and inventory.

use rw_core::RoomId;

/// The player's current state in a session.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// The room the player is standing in.
    pub location: RoomId,
    /// Held item names, in the order they were taken. No duplicates.
    inventory: Vec<String>,
}

impl PlayerState {
    /// Create a new player at the given location with an empty inventory.
    pub fn new(location: RoomId) -> Self {
        Self {
            location,
            inventory: Vec::new(),
        }
    }

    /// Check whether the player holds an item.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i.eq_ignore_ascii_case(name))
    }

    /// Add an item to inventory. Adding an item twice is a no-op.
    pub fn add_item(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_item(&name) {
            self.inventory.push(name);
        }
    }

    /// Remove an item from inventory. Returns whether it was held.
    pub fn remove_item(&mut self, name: &str) -> bool {
        if let Some(pos) = self
            .inventory
            .iter()
            .position(|i| i.eq_ignore_ascii_case(name))
        {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Held item names, in take order.
    pub fn inventory(&self) -> impl Iterator<Item = &str> {
        self.inventory.iter().map(String::as_str)
    }

    /// Number of held items.
    pub fn item_count(&self) -> usize {
        self.inventory.len()
    }
}
