use itertools::Itertools;
use rand::Rng;
use thiserror::Error;

use super::pos::Position;

/// Width and height of every board.
pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a board needs exactly 8 rows, got {len}")]
    InvalidLength { len: usize },
}

/// An 8x8 toroidal grid, one byte per row.
///
/// Within a row the most significant bit is column 0, so `0b1000_0000` is a
/// single live cell in the leftmost column. Every coordinate taken by the
/// accessors wraps around both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    rows: [u8; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: &[u8]) -> Result<Self, BoardError> {
        let rows = <[u8; BOARD_SIZE]>::try_from(rows)
            .map_err(|_| BoardError::InvalidLength { len: rows.len() })?;

        Ok(Self { rows })
    }

    /// Every cell independently alive with probability one half.
    pub fn new_random() -> Self {
        Self::new_random_with(&mut rand::rng())
    }

    pub fn new_random_with<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        let mut rows = [0; BOARD_SIZE];
        rng.fill(&mut rows[..]);
        Self { rows }
    }

    pub fn rows(&self) -> [u8; BOARD_SIZE] {
        self.rows
    }

    pub fn is_alive<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();
        self.row(y) & column_mask(x) != 0
    }

    pub fn set_cell<P>(&mut self, pos: P, alive: bool)
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();
        let mask = column_mask(x);
        let row = self.row_mut(y);

        if alive {
            *row |= mask;
        } else {
            *row &= !mask;
        }
    }

    /// Number of live cells in the Moore neighborhood of `pos`, never
    /// counting `pos` itself.
    pub fn neighbor_count<P>(&self, pos: P) -> u32
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();
        let (x, y) = (wrap(x), wrap(y));

        // Diagonal and vertical neighbors come from the rows above and below,
        // only the horizontal ones from the cell's own row.
        let horizontal_mask = column_mask(x - 1) | column_mask(x + 1);
        let center_mask = column_mask(x);

        let above = self.row(y - 1) & (horizontal_mask | center_mask);
        let below = self.row(y + 1) & (horizontal_mask | center_mask);
        let beside = self.row(y) & horizontal_mask;

        above.count_ones() + below.count_ones() + beside.count_ones()
    }

    pub fn population(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// All in-range positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as isize)
            .cartesian_product(0..BOARD_SIZE as isize)
            .map(|(y, x)| Position { x, y })
    }

    fn row(&self, y: isize) -> u8 {
        self.rows[row_index(y)]
    }

    fn row_mut(&mut self, y: isize) -> &mut u8 {
        &mut self.rows[row_index(y)]
    }
}

impl From<[u8; BOARD_SIZE]> for Board {
    fn from(rows: [u8; BOARD_SIZE]) -> Self {
        Self { rows }
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = BoardError;

    fn try_from(rows: &[u8]) -> Result<Self, Self::Error> {
        Self::with_rows(rows)
    }
}

fn wrap(coord: isize) -> isize {
    coord.rem_euclid(BOARD_SIZE as isize)
}

fn row_index(y: isize) -> usize {
    wrap(y) as usize
}

fn column_mask(x: isize) -> u8 {
    1 << (BOARD_SIZE as isize - 1 - wrap(x))
}
