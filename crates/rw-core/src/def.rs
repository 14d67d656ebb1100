//! World definition structs and the definition-to-world compiler.
//!
//! A definition mirrors the world JSON document one to one. Building
//! resolves room names to arena ids, wires the exit graph, and populates the
//! use-effect table, rejecting dangling references up front so the game loop
//! never has to.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::item::{Item, UseEffect};
use crate::room::{Exit, ExitTarget, Room, RoomId};
use crate::world::World;

/// Target of an exit as written in a definition file: either
/// `"to": "<room>"` or `"lethal": "<death message>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitTargetDef {
    /// Name of the destination room.
    To(String),
    /// A lethal exit; the value is the death message.
    Lethal(String),
}

/// An exit as written in a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitDef {
    /// Direction word the player types.
    pub direction: String,
    /// Destination room name, or a lethal marker.
    #[serde(flatten)]
    pub target: ExitTargetDef,
}

/// A room as written in a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDef {
    /// Unique room name.
    pub name: String,
    /// Exits, in order. Order matters: lookups take the first match.
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    /// Visible items, in order.
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A complete world definition, the root of a world JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDef {
    /// World name, shown on the title screen.
    pub name: String,
    /// Optional one-line flavor text under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Name of the room the player starts in.
    pub start: String,
    /// All rooms.
    pub rooms: Vec<RoomDef>,
}

impl WorldDef {
    /// Parse a definition from JSON text.
    pub fn from_json(text: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Compile the definition into a runtime [`World`].
    ///
    /// Validates that there is at least one room, that room names are
    /// case-insensitively unique, that the start room exists, that every
    /// non-lethal exit names an existing room, and that every unlock effect
    /// names an existing room.
    pub fn build(self) -> WorldResult<World> {
        if self.rooms.is_empty() {
            return Err(WorldError::Empty);
        }

        // Name the whole arena before wiring any exits: edges are
        // bidirectional by data, so forward references are the norm.
        let mut by_name: HashMap<String, RoomId> = HashMap::new();
        for (index, room) in self.rooms.iter().enumerate() {
            if by_name
                .insert(room.name.to_lowercase(), RoomId(index))
                .is_some()
            {
                return Err(WorldError::DuplicateRoom(room.name.clone()));
            }
        }

        let start = by_name
            .get(&self.start.to_lowercase())
            .copied()
            .ok_or_else(|| WorldError::StartNotFound(self.start.clone()))?;

        let mut effects: HashMap<String, UseEffect> = HashMap::new();
        let mut rooms = Vec::with_capacity(self.rooms.len());
        for def in self.rooms {
            let mut exits = Vec::with_capacity(def.exits.len());
            for exit in def.exits {
                let target = match exit.target {
                    ExitTargetDef::To(to) => {
                        let id = by_name.get(&to.to_lowercase()).copied().ok_or_else(|| {
                            WorldError::UnknownExitTarget {
                                room: def.name.clone(),
                                direction: exit.direction.clone(),
                                to: to.clone(),
                            }
                        })?;
                        ExitTarget::Room(id)
                    }
                    ExitTargetDef::Lethal(message) => ExitTarget::Lethal { message },
                };
                exits.push(Exit {
                    direction: exit.direction,
                    target,
                });
            }

            for item in &def.items {
                let Some(effect) = &item.on_use else { continue };
                if let UseEffect::Unlock { room, .. } = effect {
                    if !by_name.contains_key(&room.to_lowercase()) {
                        return Err(WorldError::UnknownUnlockRoom {
                            item: item.name.clone(),
                            room: room.clone(),
                        });
                    }
                }
                // First definition wins when two items share a name.
                effects
                    .entry(item.name.to_lowercase())
                    .or_insert_with(|| effect.clone());
            }

            rooms.push(Room {
                name: def.name,
                exits,
                items: def.items,
            });
        }

        Ok(World::assemble(
            self.name,
            self.tagline,
            rooms,
            start,
            by_name,
            effects,
        ))
    }
}
