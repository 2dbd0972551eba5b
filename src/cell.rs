/// Coordinates of a single cell. `x` is the column, `y` grows upwards.
#[derive(Hash, Copy, Clone, Eq, PartialEq, Debug)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Cell { x, y }
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Cell { x, y }
    }
}

impl From<Cell> for (i64, i64) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}
