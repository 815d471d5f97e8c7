// Terminal Sokoban player on top of the sokobanrs engine.
// Controls: W/A/S/D or arrow keys to move, U to undo, Q to quit.
// Pass a level file path as the first argument, or run bare for the
// built-in level.

use sokobanrs::console_interface::ConsoleInput::*;
use sokobanrs::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use sokobanrs::core::{DEFAULT_UNDO_LIMIT, Sokoban};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Alternate screen owns stdout; keep diagnostics on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let level = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => String::new(),
    };
    let mut game = Sokoban::new(&level, DEFAULT_UNDO_LIMIT)?;

    let mut terminal = setup_terminal()?;
    render_game(&mut terminal, &game)?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(Step(direction)) => {
                game.step(direction);
                render_game(&mut terminal, &game)?;

                if game.is_solved() {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input() {
                            Ok(Timeout) => {}
                            Ok(_) => break,
                            Err(_) => break,
                        }
                    }
                    break;
                }
            }
            Ok(Undo) => {
                game.undo();
                render_game(&mut terminal, &game)?;
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => break,
        }
    }

    cleanup_terminal()?;

    Ok(())
}
