use std::io::{self, Write};

use itertools::Itertools;
use libgame::board::{BOARD_SIZE, Board};

pub mod sleeper;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Draws a board as text, one line per row with cells separated by a space.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    dead_symbol: char,
    alive_symbol: char,
}

impl TextRenderer {
    pub fn new(dead_symbol: char, alive_symbol: char) -> Self {
        Self {
            dead_symbol,
            alive_symbol,
        }
    }

    pub fn render<W>(&self, board: &Board, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        for y in 0..BOARD_SIZE as isize {
            let line = (0..BOARD_SIZE as isize)
                .map(|x| self.symbol(board.is_alive([x, y])))
                .join(" ");

            writeln!(out, "{line}")?;
        }

        Ok(())
    }

    fn symbol(&self, alive: bool) -> char {
        if alive {
            self.alive_symbol
        } else {
            self.dead_symbol
        }
    }
}

pub fn clear_screen<W>(out: &mut W) -> io::Result<()>
where
    W: Write,
{
    write!(out, "{CLEAR_SCREEN}")
}
