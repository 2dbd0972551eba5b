use crate::{generation::Generation, world::World};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Index,
};

/// A snapshot of a generation as a matrix of cells.
///
/// Row 0 is the top of the world, i.e., the highest `y` coordinate, so rows
/// can be printed in order. Indexed by `(row, column)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl Board {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn population(&self) -> usize {
        self.rows.iter().flatten().filter(|&&alive| alive).count()
    }
}

impl Index<(usize, usize)> for Board {
    type Output = bool;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for row in &self.rows {
            let line: String = row
                .iter()
                .map(|&alive| if alive { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl World {
    /// Draws `generation` on a board the size of this world.
    ///
    /// Cells outside the world are not drawn.
    ///
    /// # Panics
    ///
    /// The board holds all `width × height` cells, unlike the world itself,
    /// which only stores the living ones. Rendering a world too large to fit
    /// in memory, e.g. one `i64::MAX` cells wide, panics or aborts on
    /// allocation. Read such worlds through [`World::current`] instead.
    pub fn render_board(&self, generation: &Generation) -> Board {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut rows = vec![vec![false; width]; height];
        for cell in generation.iter() {
            if (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y) {
                rows[cell.y as usize][cell.x as usize] = true;
            }
        }
        rows.reverse();
        Board { rows, width }
    }

    pub fn render_current(&self) -> Board {
        self.render_board(&self.current)
    }

    /// One board for each generation in the history, oldest first.
    ///
    /// The boards are drawn lazily; call again to start over.
    pub fn render_history(&self) -> impl Iterator<Item = Board> + '_ {
        self.history
            .iter()
            .map(move |generation| self.render_board(generation))
    }
}
