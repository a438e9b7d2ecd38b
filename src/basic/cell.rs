use std::fmt::{Debug, Error, Formatter};

use derive_more::{Add, Sub};

/// A point on the board in grid units. Signed so that a step past the
/// edge is representable.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Add, Sub)]
pub struct Cell {
    pub x: isize,
    pub y: isize,
}

/// Board size in whole cells (columns, rows)
pub type BoardDim = Cell;

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}
