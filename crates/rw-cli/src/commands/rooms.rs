//! The `rooms` command: tabular listing of a world's rooms.

use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Exits", "Items", "Grabbable"]);

    for room in world.rooms() {
        let exits = join_or_dash(room.exit_directions());
        let items = join_or_dash(room.item_names());
        let grabbable = join_or_dash(
            room.items
                .iter()
                .filter(|i| i.grabbable)
                .map(|i| i.name.as_str()),
        );
        table.add_row(vec![room.name.clone(), exits, items, grabbable]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} rooms, starting in {}",
        world.room_count(),
        world.room(world.start()).name
    );

    Ok(())
}

fn join_or_dash<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let joined = parts.collect::<Vec<_>>().join(", ");
    if joined.is_empty() { "—".to_string() } else { joined }
}
