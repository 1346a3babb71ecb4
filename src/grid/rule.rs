use crate::{matrix::Cell, BoolMatrix};

/// Marks every cell whose census entry equals `target`, expanded back to
/// bordered size so it composes with the grid directly.
fn filter(census: &[Vec<u8>], target: u8) -> BoolMatrix {
    let size = census.len();
    let mut mask = BoolMatrix::new(size, size);
    for (row, counts) in census.iter().enumerate() {
        for (col, &count) in counts.iter().enumerate() {
            if count == target {
                mask.set(row, col, Cell::active());
            }
        }
    }
    mask.expanded()
}

/// The transition rule, algebraically: `next = (grid & n2) | n3`. A live
/// cell with two live neighbors survives through the AND term; any cell
/// with three live neighbors is live through the OR term, which covers
/// both survival and birth. The masks carry dead borders, so the grid's
/// frame stays dead without separate enforcement.
pub(crate) fn next_generation(grid: &BoolMatrix, census: &[Vec<u8>]) -> BoolMatrix {
    let survivors = filter(census, 2);
    let births = filter(census, 3);
    grid.and(&survivors).or(&births)
}

#[cfg(test)]
mod tests {
    use super::super::census;
    use super::*;

    #[test]
    fn filter_masks_carry_a_dead_border() {
        let counts = vec![vec![2, 3], vec![0, 2]];
        let mask = filter(&counts, 2);
        assert_eq!(mask.rows(), 4);
        assert_eq!(mask.cols(), 4);
        assert!(mask.get(1, 1).is_active());
        assert!(!mask.get(1, 2).is_active());
        assert!(mask.get(2, 2).is_active());
        for i in 0..4 {
            assert!(!mask.get(0, i).is_active());
            assert!(!mask.get(3, i).is_active());
            assert!(!mask.get(i, 0).is_active());
            assert!(!mask.get(i, 3).is_active());
        }
    }

    #[test]
    fn a_blinker_flips_between_orientations() {
        let grid = BoolMatrix::from_text("000\n111\n000").unwrap().expanded();
        let next = next_generation(&grid, &census::census(&grid));
        assert_eq!(
            next.contracted(),
            BoolMatrix::from_text("010\n010\n010").unwrap()
        );
    }
}
