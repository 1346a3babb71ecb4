use crate::{matrix::Cell, BoolMatrix};

/// A named starting glyph, cells listed as (row, col) offsets from its own
/// top left corner.
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        rows: 3,
        cols: 3,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        rows: 1,
        cols: 3,
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "block",
        rows: 2,
        cols: 2,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "toad",
        rows: 2,
        cols: 4,
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        rows: 4,
        cols: 4,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
];

/// Looks a built-in pattern up by name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Renders the glyph as a matrix of its own size.
    pub fn matrix(&self) -> BoolMatrix {
        let mut result = BoolMatrix::new(self.rows, self.cols);
        for &(row, col) in self.cells {
            result.set(row, col, Cell::active());
        }
        result
    }
}
