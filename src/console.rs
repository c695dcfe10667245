use crate::game::Game;
use crate::location::Location;
use anyhow::Result;
use std::io::{self, BufRead, Write};

// Input-handling collaborator: reads coordinate moves from stdin, forwards
// them to the rules engine, and prints the engine's board snapshot. All I/O
// lives here; the engine itself never touches the terminal.
pub struct ConsoleHandler {
    game: Game,
}

impl ConsoleHandler {
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut reader = stdin.lock();
        let mut line = String::new();

        print!("{}", self.game.board());
        println!("{} to move (e.g. e2e4, or quit):", self.game.current_player());

        while reader.read_line(&mut line)? > 0 {
            let command = line.trim();

            match command {
                "quit" => break,
                "" => {}
                cmd => match parse_move(cmd) {
                    Some((from, to)) => match self.game.play_move(from, to) {
                        Ok(()) => {
                            log::info!("{} played {}", self.game.current_player().opposite(), cmd);
                            print!("{}", self.game.board());
                            if self.game.is_finished() {
                                let winner = self.game.current_player().opposite();
                                log::info!("game over, {} wins", winner);
                                println!("Checkmate! {} wins.", winner);
                                break;
                            }
                            println!("{} to move:", self.game.current_player());
                        }
                        Err(err) => println!("Invalid move: {}", err),
                    },
                    None => println!("Could not read that; moves look like e2e4."),
                },
            }

            stdout.flush()?;
            line.clear();
        }
        Ok(())
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

// "e2e4" -> a (from, to) pair. File a-h maps to x 0-7; rank 1 is the White
// back rank at the bottom of the printed grid, so rank r maps to y = 8 - r.
pub fn parse_move(s: &str) -> Option<(Location, Location)> {
    let b = s.as_bytes();
    if b.len() != 4 {
        return None;
    }
    Some((parse_square(b[0], b[1])?, parse_square(b[2], b[3])?))
}

fn parse_square(file: u8, rank: u8) -> Option<Location> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    let x = (file - b'a') as i8;
    let y = 7 - (rank - b'1') as i8;
    Some(Location::new(x, y))
}
