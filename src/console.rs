//! Terminal front end: main menu, keyboard input and board output.
//!
//! Generic over `BufRead`/`Write` so the same code runs against stdin/stdout
//! in the binary and against in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use crate::core::{Board, GameState, Pit, Player};
use crate::error::MoveError;
use crate::render::TextBoard;
use crate::rules::GameResult;
use crate::session::{MoveSource, Renderer};

/// Main menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Two people sharing one keyboard.
    TwoPlayers,
    /// Reserved; there is no computer opponent.
    VersusComputer,
    Quit,
}

impl MenuChoice {
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::TwoPlayers),
            2 => Some(MenuChoice::VersusComputer),
            0 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Read one trimmed line. `Ok(None)` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Show the menu until a valid entry is chosen. `Ok(None)` at end of input.
pub fn read_menu_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<MenuChoice>> {
    loop {
        writeln!(output, "Welcome to Mancala")?;
        writeln!(output, "1: Player vs Player")?;
        writeln!(output, "2: Player vs Computer")?;
        writeln!(output, "0: Quit")?;
        write!(output, "Choose an option: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(n) => match MenuChoice::from_number(n) {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(output, "Invalid option. Try again.")?,
            },
            Err(_) => writeln!(output, "You must enter a number.")?,
        }
    }
}

/// A person choosing pits at the keyboard.
///
/// Re-prompts on anything that is not a number from 1 to 6; the engine only
/// ever sees valid selectors.
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsolePlayer<R, W> {
    fn next_move(&mut self, _state: &GameState) -> io::Result<Option<Pit>> {
        loop {
            write!(self.output, "Choose a pit (1-6): ")?;
            self.output.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                return Ok(None);
            };
            let Ok(number) = line.parse::<i64>() else {
                writeln!(self.output, "You must enter a number.")?;
                continue;
            };
            match u8::try_from(number).map(Pit::new) {
                Ok(Ok(pit)) => return Ok(Some(pit)),
                _ => writeln!(self.output, "The number must be between 1 and 6.")?,
            }
        }
    }
}

/// Writes the game to a terminal.
pub struct ConsoleRenderer<W> {
    output: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{}", TextBoard(board))
    }

    fn turn(&mut self, player: Player) -> io::Result<()> {
        writeln!(self.output, "{player}'s turn")
    }

    fn rejected(&mut self, error: &MoveError) -> io::Result<()> {
        match error {
            MoveError::EmptyPit { .. } => writeln!(self.output, "That pit is empty. Choose another."),
            other => writeln!(self.output, "{other}"),
        }
    }

    fn extra_turn(&mut self, _player: Player) -> io::Result<()> {
        writeln!(self.output, "You get an extra turn")
    }

    fn finished(&mut self, board: &Board, result: GameResult) -> io::Result<()> {
        write!(self.output, "{}", TextBoard(board))?;
        match result {
            GameResult::Winner(player) => writeln!(self.output, "{player} wins!"),
            GameResult::Draw => writeln!(self.output, "The game ends in a draw!"),
        }
    }
}
