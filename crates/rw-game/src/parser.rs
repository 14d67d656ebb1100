//! Two-word command parsing.
//!
//! The grammar is deliberately rigid: `quit` on its own, or exactly two
//! words `verb noun` with the verb one of `go`, `look`, `take`, `use`.
//! Anything else is rejected with one fixed diagnostic. No synonyms, no
//! abbreviations, no fuzzy matching.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move through an exit of the current room.
    Go {
        /// The direction word.
        direction: String,
    },
    /// Examine an item in the current room.
    Look {
        /// The item name.
        item: String,
    },
    /// Move a grabbable item from the room into inventory.
    Take {
        /// The item name.
        item: String,
    },
    /// Use an item from inventory.
    Use {
        /// The item name.
        item: String,
    },
    /// End the session.
    Quit,
    /// Input that does not fit the grammar.
    Unknown,
}

/// Parse one line of player input.
///
/// Input is trimmed and case-folded before tokenizing, so `"  TAKE Apple "`
/// parses the same as `"take apple"`.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    let words: Vec<&str> = input.split_whitespace().collect();

    match words.as_slice() {
        ["quit"] => Command::Quit,
        [verb, noun] => {
            let noun = (*noun).to_string();
            match *verb {
                "go" => Command::Go { direction: noun },
                "look" => Command::Look { item: noun },
                "take" => Command::Take { item: noun },
                "use" => Command::Use { item: noun },
                _ => Command::Unknown,
            }
        }
        _ => Command::Unknown,
    }
}
