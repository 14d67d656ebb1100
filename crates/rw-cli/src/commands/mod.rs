pub mod check;
pub mod play;
pub mod rooms;

use std::fs;
use std::path::Path;

use rw_core::World;

/// The built-in world, compiled into the binary.
const OLD_HOUSE: &str = include_str!("../../assets/old_house.json");

/// Load a world from a definition file, or the built-in world when no path
/// is given.
pub fn load_world(path: Option<&Path>) -> Result<World, String> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            World::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => World::from_json(OLD_HOUSE).map_err(|e| format!("built-in world: {e}")),
    }
}
