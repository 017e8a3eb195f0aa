use thiserror::Error;

use crate::geom::Pos;

/// Largest accepted row or column count. Keeps `rows * cols` within `i32`.
pub const MAX_GRID_SIZE: i32 = 1 << 14;

/// Convenient result alias for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by grid mutation and maze generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The grid is too small for the requested operation.
    #[error("invalid grid dimensions {rows}x{cols}: need at least {min_rows}x{min_cols}")]
    InvalidGridDimensions {
        rows: i32,
        cols: i32,
        min_rows: i32,
        min_cols: i32,
    },

    /// A side exceeds [`MAX_GRID_SIZE`].
    #[error("grid {rows}x{cols} is too large: at most {max} rows and columns")]
    GridTooLarge { rows: i32, cols: i32, max: i32 },

    /// The position lies outside the grid.
    #[error("position {0} is outside the grid")]
    OutOfBounds(Pos),

    /// The position already holds the other endpoint.
    #[error("position {0} is already the other endpoint")]
    Occupied(Pos),

    /// The position is a wall.
    #[error("position {0} is a wall")]
    Blocked(Pos),
}

impl Error {
    /// Check `rows`×`cols` against a minimum size and [`MAX_GRID_SIZE`].
    pub fn check_dimensions(rows: i32, cols: i32, min_rows: i32, min_cols: i32) -> Result<()> {
        if rows > MAX_GRID_SIZE || cols > MAX_GRID_SIZE {
            return Err(Self::GridTooLarge {
                rows,
                cols,
                max: MAX_GRID_SIZE,
            });
        }
        if rows < min_rows || cols < min_cols {
            return Err(Self::InvalidGridDimensions {
                rows,
                cols,
                min_rows,
                min_cols,
            });
        }
        Ok(())
    }
}
