//! Terminal walkthrough of a short game on the reference board.
//!
//! Movement amounts are scripted rather than rolled; the engine never
//! generates its own randomness.

use realestate::game::{Game, STANDARD_PAYOUT, STANDARD_RENTS};
use realestate::render;

fn main() {
    init_logger();

    let mut game = Game::new();
    game.create_spaces(STANDARD_PAYOUT, &STANDARD_RENTS);

    game.create_player("Player 1", 1100);
    game.create_player("Player 1", 1200); // duplicate, ignored
    game.create_player("Player 2", 1200);
    game.create_player("Player 3", 40);

    println!("{}", render::snapshot(&game));

    // Player 1 walks up the board and reaches for Prop_21.
    for steps in [6, 6, 6, 3] {
        game.move_player("Player 1", steps);
    }
    if let Err(refusal) = game.buy_space("Player 1") {
        log::info!("Player 1 cannot buy: {}", refusal);
    }

    // Wrapping past GO pays out, and Prop_02 is within reach.
    game.move_player("Player 1", 6);
    if game.buy_space("Player 1").is_ok() {
        log::info!("Player 1 now owns Prop_02");
    }

    // Player 2 lands on Player 1's property and pays rent.
    game.move_player("Player 2", 2);

    // Player 3 cannot cover the same rent and goes broke.
    game.move_player("Player 3", 2);

    println!("{}", render::snapshot(&game));

    match game.check_game_over() {
        Some(winner) => println!("Game over: {} wins", winner),
        None => println!("No winner yet"),
    }
}

/// Initialize terminal logging.
fn init_logger() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();

    simplelog::TermLogger::init(
        log::LevelFilter::Debug,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
