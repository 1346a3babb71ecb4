use crate::{matrix::Cell, BoolMatrix, GridError};

mod census;
mod rule;

/// A square game of life board of logical side `size`, stored as an
/// (size + 2) x (size + 2) matrix whose outermost frame is permanently dead.
/// The dead frame keeps every neighbor lookup in bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameGrid {
    size: usize,
    grid: BoolMatrix,
    generation: u64,
}

impl GameGrid {
    /// Creates an all-dead grid of logical side `size`.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize);
        }
        Ok(Self {
            size,
            grid: BoolMatrix::new(size + 2, size + 2),
            generation: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Generations stepped since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current logical state, border stripped.
    pub fn grid(&self) -> BoolMatrix {
        self.grid.contracted()
    }

    /// Unions `pattern` into the grid, its top left corner landing on
    /// logical cell (`offset_row`, `offset_col`). Content shifted past the
    /// grid edge is discarded, never wrapped. Repeated calls are additive.
    pub fn initialize(
        &mut self,
        pattern: &BoolMatrix,
        offset_row: usize,
        offset_col: usize,
    ) -> Result<&mut Self, GridError> {
        if pattern.rows() > self.size || pattern.cols() > self.size {
            return Err(GridError::PatternTooLarge {
                rows: pattern.rows(),
                cols: pattern.cols(),
                size: self.size,
            });
        }

        let full = self.grid.rows();
        // the + 1 skips the border row and column; a large offset can push
        // content onto the border itself, so strip and re-pad the overlay to
        // keep the frame dead
        let overlay = pattern
            .resized(full, full, Cell::inactive())
            .shifted_down(offset_row + 1, Cell::inactive())
            .shifted_right(offset_col + 1, Cell::inactive())
            .contracted()
            .expanded();
        self.grid = self.grid.or(&overlay);
        Ok(self)
    }

    /// Advances the population one generation: a live cell with exactly two
    /// live neighbors survives, any cell with exactly three is live next.
    pub fn step(&mut self) -> &mut Self {
        let census = census::census(&self.grid);
        let next = rule::next_generation(&self.grid, &census);
        debug_assert_eq!((next.rows(), next.cols()), (self.grid.rows(), self.grid.cols()));
        self.grid = next;
        self.generation += 1;
        self
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::patterns;

    fn matrix(text: &str) -> BoolMatrix {
        BoolMatrix::from_text(text).unwrap()
    }

    fn assert_border_dead(grid: &GameGrid) {
        let full = &grid.grid;
        let last = full.rows() - 1;
        for i in 0..full.rows() {
            assert!(!full.get(0, i).is_active());
            assert!(!full.get(last, i).is_active());
            assert!(!full.get(i, 0).is_active());
            assert!(!full.get(i, last).is_active());
        }
    }

    #[test]
    fn construction_yields_an_all_dead_grid() {
        for size in [1, 3, 7, 16] {
            let state = GameGrid::new(size).unwrap().grid();
            assert_eq!(state.rows(), size);
            assert_eq!(state.cols(), size);
            assert_eq!(state.population(), 0);
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(GameGrid::new(0).unwrap_err(), GridError::InvalidSize);
    }

    #[test]
    fn initializing_with_a_full_size_pattern_reproduces_it() {
        let seed = matrix(
            "0000000\n\
             0000000\n\
             0000000\n\
             0011100\n\
             0000000\n\
             0000000\n\
             0000000",
        );
        let mut grid = GameGrid::new(7).unwrap();
        grid.initialize(&seed, 0, 0).unwrap();
        assert_eq!(grid.grid(), seed);
    }

    #[test]
    fn repeated_initialization_unions_patterns() {
        let horizontal = matrix(
            "0000000\n\
             0000000\n\
             0000000\n\
             0011100\n\
             0000000\n\
             0000000\n\
             0000000",
        );
        let vertical = matrix(
            "0000000\n\
             0000000\n\
             0001000\n\
             0001000\n\
             0001000\n\
             0000000\n\
             0000000",
        );
        let expected = matrix(
            "0000000\n\
             0000000\n\
             0001000\n\
             0011100\n\
             0001000\n\
             0000000\n\
             0000000",
        );
        let mut grid = GameGrid::new(7).unwrap();
        grid.initialize(&horizontal, 0, 0)
            .unwrap()
            .initialize(&vertical, 0, 0)
            .unwrap();
        assert_eq!(grid.grid(), expected);
    }

    #[test]
    fn offsets_place_the_pattern_origin() {
        let mut grid = GameGrid::new(7).unwrap();
        grid.initialize(&matrix("###"), 3, 2).unwrap();
        let expected = matrix(
            "0000000\n\
             0000000\n\
             0000000\n\
             0011100\n\
             0000000\n\
             0000000\n\
             0000000",
        );
        assert_eq!(grid.grid(), expected);
    }

    #[test]
    fn content_shifted_past_the_edge_is_discarded() {
        let mut grid = GameGrid::new(7).unwrap();
        grid.initialize(&matrix("###"), 0, 5).unwrap();
        let expected = matrix(
            "0000011\n\
             0000000\n\
             0000000\n\
             0000000\n\
             0000000\n\
             0000000\n\
             0000000",
        );
        assert_eq!(grid.grid(), expected);
        assert_border_dead(&grid);
    }

    #[test]
    fn oversized_patterns_are_rejected() {
        let mut grid = GameGrid::new(3).unwrap();
        let err = grid.initialize(&matrix("####"), 0, 0).unwrap_err();
        assert_eq!(
            err,
            GridError::PatternTooLarge {
                rows: 1,
                cols: 4,
                size: 3,
            }
        );
    }

    #[test]
    fn a_glider_moves() {
        let mut grid = GameGrid::new(7).unwrap();
        grid.initialize(&matrix("010\n001\n111"), 2, 2).unwrap();
        assert_eq!(
            grid.grid(),
            matrix(
                "0000000\n\
                 0000000\n\
                 0001000\n\
                 0000100\n\
                 0011100\n\
                 0000000\n\
                 0000000",
            )
        );
        grid.step();
        assert_eq!(
            grid.grid(),
            matrix(
                "0000000\n\
                 0000000\n\
                 0000000\n\
                 0010100\n\
                 0001100\n\
                 0001000\n\
                 0000000",
            )
        );
        grid.step();
        assert_eq!(
            grid.grid(),
            matrix(
                "0000000\n\
                 0000000\n\
                 0000000\n\
                 0000100\n\
                 0010100\n\
                 0001100\n\
                 0000000",
            )
        );
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn a_block_is_a_fixed_point() {
        let mut grid = GameGrid::new(4).unwrap();
        grid.initialize(&matrix("11\n11"), 1, 1).unwrap();
        let seeded = grid.grid();
        for _ in 0..5 {
            grid.step();
            assert_eq!(grid.grid(), seeded);
        }
    }

    #[test]
    fn edge_placement_never_bleeds_to_the_opposite_side() {
        let mut grid = GameGrid::new(5).unwrap();
        grid.initialize(&matrix("###"), 4, 3).unwrap();
        assert_border_dead(&grid);
        // only two of the three cells fit
        assert_eq!(grid.grid().population(), 2);
        // nothing wrapped onto row 0 or column 0
        for col in 0..5 {
            assert!(!grid.grid().get(0, col).is_active());
        }
        for row in 0..5 {
            assert!(!grid.grid().get(row, 0).is_active());
        }
        grid.step();
        assert_border_dead(&grid);
    }

    #[test]
    fn stepping_is_deterministic() {
        let mut left = GameGrid::new(9).unwrap();
        left.initialize(&patterns::find("glider").unwrap().matrix(), 3, 3)
            .unwrap();
        let mut right = left.clone();
        for _ in 0..8 {
            left.step();
            right.step();
            assert_eq!(left.grid(), right.grid());
        }
    }

    proptest! {
        #[test]
        fn the_border_survives_arbitrary_seeds(
            cells in proptest::collection::vec(proptest::collection::vec(any::<bool>(), 6), 6),
            steps in 0usize..6,
        ) {
            let pattern = BoolMatrix::from_rows(cells).unwrap();
            let mut grid = GameGrid::new(6).unwrap();
            grid.initialize(&pattern, 0, 0).unwrap();
            for _ in 0..steps {
                grid.step();
            }
            let full = &grid.grid;
            let last = full.rows() - 1;
            for i in 0..full.rows() {
                prop_assert!(!full.get(0, i).is_active());
                prop_assert!(!full.get(last, i).is_active());
                prop_assert!(!full.get(i, 0).is_active());
                prop_assert!(!full.get(i, last).is_active());
            }
            prop_assert_eq!(grid.grid().rows(), 6);
            prop_assert_eq!(grid.grid().cols(), 6);
        }
    }
}
