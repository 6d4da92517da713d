//! Text rendering of a game snapshot.
//!
//! Everything here reads through the engine's public queries, so
//! rendering can never touch game state. The board prints as a vertical
//! strip with GO at the top, one bracketed row per space, followed by
//! each player's balance.

use crate::game::{Game, Space};
use std::fmt::Write;

/// Render the board and balances as aligned text columns: space name,
/// monetary value (`$payout` for GO, `$rent/$price` for properties),
/// owner, and the players standing there. Returns an empty string when
/// the board has not been created yet.
pub fn snapshot(game: &Game) -> String {
    if game.board().is_empty() {
        return String::new();
    }

    let mut names = vec!["Space".to_owned()];
    let mut values = vec!["Value".to_owned()];
    let mut owners = vec!["Owner".to_owned()];
    let mut occupants = vec!["Players".to_owned()];

    for (index, space) in game.board().iter().enumerate() {
        names.push(space.name().to_owned());
        values.push(match space {
            Space::Go { payout } => format!("${}", payout),
            Space::Property(prop) => format!("${}/${}", prop.rent(), prop.price()),
        });
        owners.push(match space {
            Space::Go { .. } => "NA".to_owned(),
            Space::Property(_) => game.get_space_owner(index).unwrap_or("None").to_owned(),
        });
        occupants.push(occupants_of(game, index));
    }

    let name_w = column_width(&names);
    let value_w = column_width(&values);
    let owner_w = column_width(&owners);
    let occupant_w = column_width(&occupants);

    let mut out = String::new();
    for row in 0..names.len() {
        // writeln! into a String cannot fail.
        let _ = writeln!(
            out,
            "[{:<nw$}]  [{:<vw$}]  [{:<ow$}]  [{:<pw$}]",
            names[row],
            values[row],
            owners[row],
            occupants[row],
            nw = name_w,
            vw = value_w,
            ow = owner_w,
            pw = occupant_w,
        );
    }

    out.push('\n');
    for player in game.players() {
        let _ = writeln!(out, "{}: ${}", player.name(), player.balance());
    }

    out
}

/// Return the names of the players standing on `index`, comma-separated,
/// or `None` when the space is empty.
fn occupants_of(game: &Game, index: usize) -> String {
    let here: Vec<&str> = game
        .players()
        .filter(|p| p.position() == index)
        .map(|p| p.name())
        .collect();

    if here.is_empty() {
        "None".to_owned()
    } else {
        here.join(", ")
    }
}

/// Return the width of the widest cell in a column.
fn column_width(column: &[String]) -> usize {
    column.iter().map(String::len).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_renders_nothing() {
        let game = Game::new();
        assert_eq!(snapshot(&game), "");
    }

    #[test]
    fn columns_align_to_the_widest_cell() {
        let mut game = Game::new();
        game.create_spaces(20, &[50]);
        game.create_player("P1", 1000);

        let rendered = snapshot(&game);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "[Space  ]  [Value   ]  [Owner]  [Players]");
        assert_eq!(lines[1], "[GO     ]  [$20     ]  [NA   ]  [P1     ]");
        assert_eq!(lines[2], "[Prop_01]  [$50/$250]  [None ]  [None   ]");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "P1: $1000");
    }

    #[test]
    fn owners_and_co_occupants_are_listed() {
        let mut game = Game::new();
        game.create_spaces(20, &[50, 75]);
        game.create_player("Alice", 1000);
        game.create_player("Bob", 1000);

        game.move_player("Alice", 1);
        game.buy_space("Alice").unwrap();
        game.move_player("Bob", 1);

        let rendered = snapshot(&game);
        let prop_row = rendered
            .lines()
            .find(|line| line.starts_with("[Prop_01"))
            .unwrap();

        assert!(prop_row.contains("[Alice]"));
        assert!(prop_row.contains("Alice, Bob"));
    }
}
