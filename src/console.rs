#![cfg(feature = "std")]

//! Terminal front end: coordinate parsing, board rendering, and the
//! interactive loop.

use std::io::{BufRead, Write};
use std::string::String;

use rand::Rng;

use crate::{
    board::Board,
    config::{ship_image, GRID_SIZE},
    game::{GameSession, GameSnapshot, GameStatus, ShipSummary, ShotOutcome},
    presenter::Presenter,
};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(usize, usize),
    NewGame,
    Quit,
}

/// Formats a cell the way the player types it, e.g. `(6, 1)` -> `B7`.
/// Columns past `Z` fall back to `(row, col)`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    match u8::try_from(c) {
        Ok(c) if c < 26 => std::format!("{}{}", (b'A' + c) as char, r.saturating_add(1)),
        _ => std::format!("({}, {})", r, c),
    }
}

/// Parses `B7` style input into (row, col). Range is not checked here; the
/// session ignores shots off the grid.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "n" | "new" | "reset" | "again" => Some(Command::NewGame),
        _ => parse_coord(line).map(|(r, c)| Command::Fire(r, c)),
    }
}

/// Draws the grid. `X` hit, `#` part of a sunk ship, `o` miss, `S` unhit ship
/// when `reveal` is set.
pub fn print_board<W: Write>(out: &mut W, board: &Board, reveal: bool) -> std::io::Result<()> {
    write!(out, "   ")?;
    for c in 0..GRID_SIZE {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    for r in 0..GRID_SIZE {
        write!(out, "{:2} ", r + 1)?;
        for c in 0..GRID_SIZE {
            let ship = board.ship_at(r, c);
            let ch = if board.hits().get(r, c).unwrap_or(false) {
                if ship.is_some_and(|s| s.is_sunk()) {
                    '#'
                } else {
                    'X'
                }
            } else if board.misses().get(r, c).unwrap_or(false) {
                'o'
            } else if reveal && ship.is_some() {
                'S'
            } else {
                '.'
            };
            write!(out, " {}", ch)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One line per ship, sunk ships marked.
pub fn print_fleet<W: Write>(out: &mut W, ships: &[ShipSummary]) -> std::io::Result<()> {
    for ship in ships {
        let mark = if ship.sunk { " [sunk]" } else { "" };
        writeln!(out, "  {} ({}){}", ship.name, ship.size, mark)?;
    }
    Ok(())
}

/// Prints the messages the player sees after each shot.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

// Console output is best effort; a closed stdout must not abort the game.
impl<W: Write> Presenter for ConsolePresenter<W> {
    fn new_game(&mut self, snapshot: &GameSnapshot) {
        let _ = writeln!(self.out, "Enemy fleet:");
        let _ = print_fleet(&mut self.out, &snapshot.ships);
        let _ = writeln!(self.out, "Make your first move!");
    }

    fn miss(&mut self, _target: (usize, usize)) {
        let _ = writeln!(self.out, "Miss!");
    }

    fn hit(&mut self, _target: (usize, usize), ship: &'static str) {
        let _ = writeln!(self.out, "Direct hit on {}!", ship);
    }

    fn sunk(&mut self, _target: (usize, usize), ship: &'static str) {
        let _ = writeln!(self.out, "{} has been sunk!", ship);
        let _ = writeln!(self.out, "[{} Sunk! {}]", ship, ship_image(ship));
    }

    fn ignored(&mut self, target: (usize, usize)) {
        let _ = writeln!(
            self.out,
            "{} is not a valid target.",
            coord_to_string(target.0, target.1)
        );
    }

    fn game_over(&mut self, status: GameStatus) {
        let line = match status {
            GameStatus::Won => "All enemy ships sunk! VICTORY!",
            GameStatus::Lost => "Out of torpedoes! Game Over.",
            GameStatus::InProgress => return,
        };
        let _ = writeln!(self.out, "{}", line);
    }
}

/// Runs the interactive game until `quit` or end of input.
pub fn play<R, I, W>(
    session: &mut GameSession<R>,
    mut input: I,
    presenter: &mut ConsolePresenter<W>,
    reveal: bool,
) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    presenter.new_game(&session.snapshot());
    loop {
        let out = presenter.writer();
        writeln!(out)?;
        print_board(out, session.board(), reveal || session.is_over())?;
        writeln!(out, "Torpedoes Remaining: {}", session.remaining_shots())?;
        if session.is_over() {
            write!(out, "Type 'new' to play again or 'quit' to exit: ")?;
        } else {
            write!(out, "Fire at (e.g. B7), 'new' or 'quit': ")?;
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::NewGame) => {
                let snapshot = session.new_game()?;
                presenter.new_game(&snapshot);
            }
            Some(Command::Fire(r, c)) => {
                let result = session.fire_at(r, c);
                presenter.present(&result);
                if let ShotOutcome::Hit { sunk: true, .. } = result.outcome {
                    print_fleet(presenter.writer(), &session.snapshot().ships)?;
                }
            }
            None => writeln!(presenter.writer(), "Invalid input")?,
        }
    }
    Ok(())
}
