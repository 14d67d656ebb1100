//! Terminal rendering: banner, room view, and the death screen.

use colored::Colorize;

use rw_core::World;
use rw_game::Session;

const WIDTH: usize = 44;

/// Print the title banner and the start prompt.
pub fn title(world: &World) {
    let bar = "=".repeat(WIDTH);
    let name = format!("{:^width$}", world.name().to_uppercase(), width = WIDTH - 6);
    println!("{bar}");
    println!("==={}===", name.bold());
    println!("{bar}");
    if let Some(tagline) = world.tagline() {
        println!("{}", tagline.dimmed());
    }
    println!("Type 'start' to begin your journey...");
}

/// Print the between-turns separator rule.
pub fn separator() {
    println!("\n{}", "=".repeat(WIDTH));
}

/// Render the current room, its items and exits, and the inventory.
pub fn room_view(session: &Session) {
    let room = session.current_room();

    println!("\nYou are in {}.", room.name.bold());

    let items: Vec<&str> = room.item_names().collect();
    println!("You see: {}", join_or(&items, "(nothing)"));

    let exits: Vec<&str> = room.exit_directions().collect();
    println!("Exits: {}", join_or(&exits, "(none)"));

    let held: Vec<&str> = session.player().inventory().collect();
    println!("Inventory: {}", join_or(&held, "(empty)"));
}

/// Print the death screen.
pub fn death(cause: &str) {
    println!("\n{}", "*** YOU DIED ***".red().bold());
    println!("Cause of death: {cause}");
    println!("Better luck next time...");
    println!("Press ENTER to exit.");
}

fn join_or(parts: &[&str], empty: &str) -> String {
    if parts.is_empty() {
        empty.to_string()
    } else {
        parts.join(", ")
    }
}
