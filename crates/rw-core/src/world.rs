//! The world model: a room arena plus the use-effect table.

use std::collections::HashMap;

use crate::def::WorldDef;
use crate::error::WorldResult;
use crate::item::{Item, UseEffect};
use crate::room::{ExitTarget, Room, RoomId};

/// The central world model. Owns every room, the configured start room, and
/// the fixed capability table consulted by `use`.
///
/// The shape of the world never changes after build; rooms and exits are
/// wired once. Room contents do change: taking an item removes it from its
/// room.
#[derive(Debug, Clone)]
pub struct World {
    name: String,
    tagline: Option<String>,
    rooms: Vec<Room>,
    start: RoomId,

    // Indexes
    by_name: HashMap<String, RoomId>,
    effects: HashMap<String, UseEffect>,
}

impl World {
    pub(crate) fn assemble(
        name: String,
        tagline: Option<String>,
        rooms: Vec<Room>,
        start: RoomId,
        by_name: HashMap<String, RoomId>,
        effects: HashMap<String, UseEffect>,
    ) -> Self {
        Self {
            name,
            tagline,
            rooms,
            start,
            by_name,
            effects,
        }
    }

    /// Parse and build a world from JSON definition text.
    pub fn from_json(text: &str) -> WorldResult<Self> {
        WorldDef::from_json(text)?.build()
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The world's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional one-line flavor text.
    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref()
    }

    /// The room the player starts in.
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// Get a room by id.
    ///
    /// Ids are minted by the builder, so an id is always valid for the world
    /// it came from.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// All rooms, in definition order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Find a room id by name (case-insensitive).
    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Resolve a direction against a room's exits. `None` means no such
    /// exit; a lethal target is a valid resolution, never a destination.
    pub fn resolve_exit(&self, room: RoomId, direction: &str) -> Option<&ExitTarget> {
        self.room(room).exit(direction)
    }

    /// Find a visible item in a room by name.
    pub fn find_item(&self, room: RoomId, name: &str) -> Option<&Item> {
        self.room(room).item(name)
    }

    /// Description of a visible item in a room, if present.
    pub fn item_description(&self, room: RoomId, name: &str) -> Option<&str> {
        self.find_item(room, name).map(|i| i.description.as_str())
    }

    /// Whether the named item is visible and grabbable in the room.
    pub fn is_grabbable(&self, room: RoomId, name: &str) -> bool {
        self.room(room).is_grabbable(name)
    }

    /// The use effect registered for an item name, if any.
    pub fn use_effect(&self, name: &str) -> Option<&UseEffect> {
        self.effects.get(&name.to_lowercase())
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Remove a visible item from a room and return it. Removal drops the
    /// item from the visible list and the derived grabbable set at once.
    pub fn take_item(&mut self, room: RoomId, name: &str) -> Option<Item> {
        self.rooms[room.index()].take(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def::{ExitDef, ExitTargetDef, RoomDef};

    fn test_world() -> World {
        WorldDef {
            name: "Two Rooms".to_string(),
            tagline: None,
            start: "Hall".to_string(),
            rooms: vec![
                RoomDef {
                    name: "Hall".to_string(),
                    exits: vec![
                        ExitDef {
                            direction: "east".to_string(),
                            target: ExitTargetDef::To("Study".to_string()),
                        },
                        ExitDef {
                            direction: "window".to_string(),
                            target: ExitTargetDef::Lethal("A long fall.".to_string()),
                        },
                    ],
                    items: vec![
                        Item::new("mirror", "A tarnished mirror."),
                        Item::new("candle", "A stub of wax.").with_grabbable(),
                    ],
                },
                RoomDef {
                    name: "Study".to_string(),
                    exits: vec![ExitDef {
                        direction: "west".to_string(),
                        target: ExitTargetDef::To("Hall".to_string()),
                    }],
                    items: vec![
                        Item::new("biscuit", "A stale biscuit.")
                            .with_grabbable()
                            .with_use(UseEffect::Eat {
                                message: "Crunchy.".to_string(),
                            }),
                    ],
                },
            ],
        }
        .build()
        .unwrap()
    }

    #[test]
    fn start_room_resolved() {
        let world = test_world();
        assert_eq!(world.room(world.start()).name, "Hall");
    }

    #[test]
    fn exits_wired_both_ways() {
        let world = test_world();
        let hall = world.start();
        let study = match world.resolve_exit(hall, "east") {
            Some(ExitTarget::Room(id)) => *id,
            other => panic!("expected room target, got {other:?}"),
        };
        assert_eq!(world.room(study).name, "Study");
        assert_eq!(world.resolve_exit(study, "west"), Some(&ExitTarget::Room(hall)));
    }

    #[test]
    fn lethal_exit_resolves_to_marker() {
        let world = test_world();
        assert!(matches!(
            world.resolve_exit(world.start(), "window"),
            Some(ExitTarget::Lethal { .. })
        ));
    }

    #[test]
    fn unknown_direction_is_none() {
        let world = test_world();
        assert_eq!(world.resolve_exit(world.start(), "north"), None);
    }

    #[test]
    fn find_room_case_insensitive() {
        let world = test_world();
        assert!(world.find_room("hall").is_some());
        assert!(world.find_room("HALL").is_some());
        assert!(world.find_room("cellar").is_none());
    }

    #[test]
    fn item_queries() {
        let world = test_world();
        let hall = world.start();
        assert_eq!(
            world.item_description(hall, "mirror"),
            Some("A tarnished mirror.")
        );
        assert!(world.item_description(hall, "biscuit").is_none());
        assert!(world.is_grabbable(hall, "candle"));
        assert!(!world.is_grabbable(hall, "mirror"));
    }

    #[test]
    fn take_item_removes_it() {
        let mut world = test_world();
        let hall = world.start();
        let item = world.take_item(hall, "candle").unwrap();
        assert_eq!(item.name, "candle");
        assert!(world.find_item(hall, "candle").is_none());
        assert!(!world.is_grabbable(hall, "candle"));
    }

    #[test]
    fn effect_table_built_from_items() {
        let world = test_world();
        assert!(matches!(
            world.use_effect("biscuit"),
            Some(UseEffect::Eat { .. })
        ));
        assert!(world.use_effect("candle").is_none());
    }
}
