use crate::{
    cell::Cell,
    error::{Error, Result},
    generation::Generation,
    rule::Rule,
};
use tracing::debug;

/// Why a run came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The requested number of generations has been computed.
    LimitReached,
    /// No living cells remain.
    Extinct,
    /// The last step did not change anything.
    Stable,
}

/// A bounded world, together with every generation it has gone through.
#[derive(Clone, Debug)]
pub struct World {
    pub(crate) rule: Rule,
    pub(crate) width: i64,
    pub(crate) height: i64,
    pub(crate) current: Generation,
    pub(crate) history: Vec<Generation>,
}

impl World {
    /// Creates a `width` × `height` world whose first generation consists of `cells`.
    ///
    /// Duplicated cells are merged. Fails if either dimension is not positive,
    /// if `cells` is empty, or if some cell lies outside the grid.
    pub fn new<I, C>(width: i64, height: i64, cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let current: Generation = cells.into_iter().map(Into::<Cell>::into).collect();
        if current.is_empty() {
            return Err(Error::EmptyInitialState);
        }
        if let Some(cell) = current
            .sorted()
            .into_iter()
            .find(|cell| !(0..width).contains(&cell.x) || !(0..height).contains(&cell.y))
        {
            return Err(Error::CellOutOfBounds {
                x: cell.x,
                y: cell.y,
            });
        }
        debug!(width, height, population = current.len(), "created world");
        Ok(World {
            rule: Rule::life(),
            width,
            height,
            current,
            history: Vec::new(),
        })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// The latest generation.
    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// Every generation before the current one, oldest first.
    pub fn history(&self) -> &[Generation] {
        &self.history
    }

    /// Number of steps taken so far.
    pub fn get_generation(&self) -> usize {
        self.history.len()
    }

    pub fn population(&self) -> usize {
        self.current.len()
    }

    pub fn get_cell(&self, x: i64, y: i64) -> bool {
        self.current.contains(Cell::new(x, y))
    }

    /// Checks whether a run should stop at the current state.
    ///
    /// With a `limit`, the run stops once that many steps have been taken.
    /// Extinction only ends a run that has no limit. A generation equal to
    /// its predecessor always ends it.
    pub fn stop_reason(&self, limit: Option<usize>) -> Option<StopReason> {
        match limit {
            Some(limit) if self.get_generation() >= limit => Some(StopReason::LimitReached),
            None if self.current.is_empty() => Some(StopReason::Extinct),
            _ if self.history.last() == Some(&self.current) => Some(StopReason::Stable),
            _ => None,
        }
    }

    /// Steps until [`stop_reason`](Self::stop_reason) gives a reason, and returns it.
    ///
    /// The current state is checked before each step, so a world which
    /// already satisfies a stop condition is left untouched.
    pub fn run(&mut self, limit: Option<usize>) -> StopReason {
        loop {
            if let Some(reason) = self.stop_reason(limit) {
                debug!(?reason, generation = self.get_generation(), "run stopped");
                return reason;
            }
            self.step();
        }
    }
}
