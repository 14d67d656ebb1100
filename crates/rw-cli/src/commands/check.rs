//! The `check` command: validate a world file and report its shape.

use std::path::Path;

use rw_core::ExitTarget;

pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(Some(path))?;

    let items: usize = world.rooms().map(|r| r.items.len()).sum();
    let exits: usize = world.rooms().map(|r| r.exits.len()).sum();
    let lethal = world
        .rooms()
        .flat_map(|r| r.exits.iter())
        .filter(|e| matches!(e.target, ExitTarget::Lethal { .. }))
        .count();

    println!("  All checks passed for '{}'.", world.name());
    println!(
        "  {} rooms, {} items, {} exits ({} lethal)",
        world.room_count(),
        items,
        exits,
        lethal
    );

    Ok(())
}
