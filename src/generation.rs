use crate::cell::Cell;
use rustc_hash::FxHashSet;
use std::{cmp::Reverse, iter::FromIterator};

/// The set of living cells at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    cells: FxHashSet<Cell>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns `true` if the cell was not already alive.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Iterates over the living cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// The living cells from the top row down, left to right within a row.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.iter().collect();
        cells.sort_unstable_by_key(|cell| (Reverse(cell.y), cell.x));
        cells
    }
}

impl FromIterator<Cell> for Generation {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Generation {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation(cells: &[(i64, i64)]) -> Generation {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_dedup() {
        let gen = generation(&[(1, 1), (2, 1), (1, 1), (2, 1), (0, 0)]);
        assert_eq!(gen.len(), 3);
        assert!(gen.contains(Cell::new(0, 0)));
        assert!(!gen.contains(Cell::new(0, 1)));
    }

    #[test]
    fn test_sorted() {
        let gen = generation(&[(2, 3), (3, 2), (1, 1), (2, 1), (3, 1)]);
        let sorted: Vec<(i64, i64)> = gen.sorted().into_iter().map(Into::into).collect();
        assert_eq!(sorted, vec![(2, 3), (3, 2), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_set_equality() {
        let a = generation(&[(0, 0), (1, 0), (0, 1)]);
        let b = generation(&[(0, 1), (0, 0), (1, 0), (0, 0)]);
        assert_eq!(a, b);
        assert_ne!(a, Generation::new());
    }
}
