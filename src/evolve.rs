use crate::{cell::Cell, generation::Generation, world::World};
use rustc_hash::FxHashSet;
use std::mem;
use tracing::trace;

impl World {
    /// Computes the next generation, pushing the current one onto the history.
    pub fn step(&mut self) -> &Generation {
        let next = self.evolve();
        self.history.push(mem::replace(&mut self.current, next));
        trace!(
            generation = self.get_generation(),
            population = self.current.len(),
            "step"
        );
        &self.current
    }

    /// The cell itself followed by its neighbours, skipping any that would
    /// fall outside the grid.
    ///
    /// A corner cell yields 4 cells, an edge cell 6, and an interior cell 9.
    pub fn neighborhood(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        let min_x = (cell.x - 1).max(0);
        let max_x = (cell.x + 1).min(self.width - 1);
        let min_y = (cell.y - 1).max(0);
        let max_y = (cell.y + 1).min(self.height - 1);
        std::iter::once(cell).chain((min_x..=max_x).flat_map(move |x| {
            (min_y..=max_y)
                .map(move |y| Cell::new(x, y))
                .filter(move |&other| other != cell)
        }))
    }

    fn live_neighbors(&self, cell: Cell) -> usize {
        self.neighborhood(cell)
            .skip(1)
            .filter(|&neighbor| self.current.contains(neighbor))
            .count()
    }

    /// Only cells within reach of a living cell can be alive next time, so
    /// those are the only ones evaluated, each at most once.
    fn evolve(&self) -> Generation {
        let mut next = Generation::new();
        let mut checked = FxHashSet::default();
        for cell in self.current.iter() {
            for candidate in self.neighborhood(cell) {
                let alive = candidate == cell;
                // Other living cells are handled from their own neighbourhood.
                if !alive && self.current.contains(candidate) {
                    continue;
                }
                if !checked.insert(candidate) {
                    continue;
                }
                if self.rule.next_state(alive, self.live_neighbors(candidate)) {
                    next.insert(candidate);
                }
            }
        }
        next
    }
}
