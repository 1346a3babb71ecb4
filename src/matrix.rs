use std::fmt;

use itertools::Itertools;

use crate::GridError;

/// A single live or dead cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    active: bool,
}

impl Cell {
    pub fn active() -> Self {
        Self { active: true }
    }

    pub fn inactive() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// A dense row-major 2d boolean matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoolMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl BoolMatrix {
    /// Creates an all-dead matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = vec![Cell::inactive(); rows * cols];
        Self { rows, cols, cells }
    }

    /// Builds a matrix from nested rows of booleans. Every row must be as
    /// long as the first.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let mut result = Self::new(height, width);
        for (row, content) in rows.iter().enumerate() {
            if content.len() != width {
                return Err(GridError::DimensionMismatch {
                    row,
                    expected: width,
                    found: content.len(),
                });
            }
            for (col, &alive) in content.iter().enumerate() {
                if alive {
                    result.set(row, col, Cell::active());
                }
            }
        }
        Ok(result)
    }

    /// Parses the plaintext glyph format, one line per row. `#` and `1`
    /// mark live cells, any other character is dead.
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let rows = text
            .lines()
            .map(|line| line.chars().map(|c| matches!(c, '#' | '1')).collect())
            .collect();
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let index = self.index(row, col);
        self.cells[index] = cell;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_active()).count()
    }

    /// Cell-wise logical AND with an equally sized matrix.
    pub fn and(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a.is_active() && b.is_active())
    }

    /// Cell-wise logical OR with an equally sized matrix.
    pub fn or(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a.is_active() || b.is_active())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(Cell, Cell) -> bool) -> Self {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "matrix size mismatch"
        );
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(&a, &b)| {
                if f(a, b) {
                    Cell::active()
                } else {
                    Cell::inactive()
                }
            })
            .collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Grows or shrinks the matrix on its bottom and right edges, fresh
    /// cells taking the fill value.
    pub fn resized(&self, rows: usize, cols: usize, fill: Cell) -> Self {
        let mut result = Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        };
        for row in 0..rows.min(self.rows) {
            for col in 0..cols.min(self.cols) {
                result.set(row, col, self.get(row, col));
            }
        }
        result
    }

    /// Moves content `count` columns rightward. Vacated columns take the
    /// fill value, content pushed past the last column is discarded.
    pub fn shifted_right(&self, count: usize, fill: Cell) -> Self {
        let mut result = Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![fill; self.rows * self.cols],
        };
        for row in 0..self.rows {
            for col in 0..self.cols.saturating_sub(count) {
                result.set(row, col + count, self.get(row, col));
            }
        }
        result
    }

    /// Same as [`Self::shifted_right`], over rows.
    pub fn shifted_down(&self, count: usize, fill: Cell) -> Self {
        let mut result = Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![fill; self.rows * self.cols],
        };
        for row in 0..self.rows.saturating_sub(count) {
            for col in 0..self.cols {
                result.set(row + count, col, self.get(row, col));
            }
        }
        result
    }

    /// Embeds the matrix in a one-cell dead border on every side.
    pub fn expanded(&self) -> Self {
        let mut result = Self::new(self.rows + 2, self.cols + 2);
        for row in 0..self.rows {
            for col in 0..self.cols {
                result.set(row + 1, col + 1, self.get(row, col));
            }
        }
        result
    }

    /// Strips the outermost row and column on every side.
    pub fn contracted(&self) -> Self {
        assert!(
            self.rows >= 2 && self.cols >= 2,
            "matrix too small to contract"
        );
        let mut result = Self::new(self.rows - 2, self.cols - 2);
        for row in 0..result.rows {
            for col in 0..result.cols {
                result.set(row, col, self.get(row + 1, col + 1));
            }
        }
        result
    }
}

impl fmt::Display for BoolMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cells.is_empty() {
            return Ok(());
        }
        let rendered = self
            .cells
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_active() { '#' } else { '.' })
                    .collect::<String>()
            })
            .join("\n");
        write!(f, "{rendered}")
    }
}
