//! Conway's Game of Life on a bounded grid, tracking only the living cells.
//!
//! Neighbourhoods are clamped at the edges of the grid: there is no wraparound,
//! and nothing outside `[0, width) × [0, height)` is ever looked at.

#![allow(clippy::bool_assert_comparison)]

mod board;
mod cell;
mod error;
mod evolve;
mod generation;
mod read;
mod rule;
mod world;

pub use board::Board;
pub use ca_formats;
pub use cell::Cell;
pub use error::{Error, Result};
pub use generation::Generation;
pub use world::{StopReason, World};
