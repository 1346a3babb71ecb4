use std::ops::{Add, Sub};

/// A signed (row, column) pair, used for neighbor deltas and view panning.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.row - rhs.row, self.col - rhs.col)
    }
}

#[test]
fn test_pos_ops() {
    assert_eq!(pos!(1, 2) + pos!(3, -1), pos!(4, 1));
    assert_eq!(pos!(1, 2) - pos!(3, -1), pos!(-2, 3));
}
