/// A cell coordinate. Values outside `0..8` are legal and wrap around the
/// torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

impl Position {
    /// Wraps on overflow, which lands on the same board cell.
    pub fn offset(self, dx: isize, dy: isize) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl From<[isize; 2]> for Position {
    fn from(value: [isize; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<(isize, isize)> for Position {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [isize; 2] {
    fn from(value: Position) -> Self {
        [value.x, value.y]
    }
}
