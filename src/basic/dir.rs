use std::ops::Neg;

use crate::basic::Cell;
use Dir::*;

/// The four directions the snake can face
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    D,
    L,
    R,
}

impl Neg for Dir {
    type Output = Self;

    /// The opposite direction
    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

impl Dir {
    /// Unit velocity in grid units, y grows downwards
    pub fn vector(self) -> Cell {
        match self {
            U => Cell { x: 0, y: -1 },
            D => Cell { x: 0, y: 1 },
            L => Cell { x: -1, y: 0 },
            R => Cell { x: 1, y: 0 },
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [U, D, L, R].iter().copied()
    }
}

#[test]
fn test_opposites() {
    for dir in Dir::iter() {
        assert_ne!(dir, -dir);
        assert_eq!(dir, -(-dir));
        assert_eq!(dir.vector() + (-dir).vector(), Cell { x: 0, y: 0 });
    }
}
