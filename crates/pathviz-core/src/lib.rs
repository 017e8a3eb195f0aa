//! **pathviz-core**: the grid data model shared by the pathviz search and
//! maze engines.
//!
//! A [`Grid`] owns a row-major board of [`Node`]s with exactly one start and
//! one end. Walls, start and end are jointly exclusive per cell. Searches
//! write their scratch state (visited flag, distance, predecessor) into the
//! nodes; [`Grid::clear_path`] resets it between runs.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::{Error, MAX_GRID_SIZE, Result};
pub use geom::{Pos, Range, RangeIter};
pub use grid::Grid;
pub use node::{Node, UNREACHABLE};
