use crate::{
    cell::Cell,
    error::{Error, Result},
    rule::Rule,
    world::World,
};
use ca_formats::{rle::Rle, Input};
use std::convert::TryFrom;

impl World {
    /// Loads a pattern, taking the size of the world from the RLE header.
    ///
    /// Without `x` and `y` in the header, the world is just large enough to
    /// hold the pattern.
    pub fn from_rle<I: Input>(rle: Rle<I>) -> Result<Self> {
        let size = rle
            .header_data()
            .map(|header| (i64::try_from(header.x), i64::try_from(header.y)));
        check_rule(&rle)?;
        let cells = read_cells(rle)?;
        if cells.is_empty() {
            return Err(Error::EmptyInitialState);
        }
        let (width, height) = match size {
            Some((Ok(width), Ok(height))) if width > 0 && height > 0 => (width, height),
            _ => cells.iter().fold((0, 0), |(width, height), &(x, y)| {
                (width.max(x + 1), height.max(y + 1))
            }),
        };
        World::from_rle_cells(width, height, cells)
    }

    /// Loads a pattern into a `width` × `height` world.
    ///
    /// The first row of the pattern becomes the top row of the world.
    pub fn from_rle_with_size<I: Input>(width: i64, height: i64, rle: Rle<I>) -> Result<Self> {
        check_rule(&rle)?;
        let cells = read_cells(rle)?;
        World::from_rle_cells(width, height, cells)
    }

    fn from_rle_cells(width: i64, height: i64, cells: Vec<(i64, i64)>) -> Result<Self> {
        World::new(
            width,
            height,
            cells.into_iter().map(|(x, y)| Cell::new(x, height - 1 - y)),
        )
    }
}

fn check_rule<I: Input>(rle: &Rle<I>) -> Result<()> {
    if let Some(rulestring) = rle
        .header_data()
        .and_then(|header| header.rule.as_deref())
    {
        let rule: Rule = rulestring.parse()?;
        if rule != Rule::life() {
            return Err(Error::UnsupportedRule(rulestring.to_string()));
        }
    }
    Ok(())
}

fn read_cells<I: Input>(rle: Rle<I>) -> Result<Vec<(i64, i64)>> {
    let mut cells = Vec::new();
    for cell in rle {
        let cell = cell?;
        if cell.state != 0 {
            cells.push(cell.position);
        }
    }
    Ok(cells)
}
