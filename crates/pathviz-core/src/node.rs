//! The per-cell record stored by a [`Grid`](crate::Grid).

use crate::geom::Pos;

/// Sentinel distance meaning "not reached by the current search".
pub const UNREACHABLE: i32 = i32::MAX;

/// One grid cell.
///
/// `is_wall`, `is_start` and `is_end` describe the board and survive
/// [`Grid::clear_path`](crate::Grid::clear_path). Everything else is scratch
/// state owned by whichever search ran last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Pos,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_end: bool,
    pub is_visited: bool,
    pub is_path: bool,
    /// Steps from the start, or [`UNREACHABLE`].
    pub distance: i32,
    /// Manhattan estimate to the end (A* only).
    pub heuristic: i32,
    /// `distance + heuristic` (A* only), or [`UNREACHABLE`].
    pub total_cost: i32,
    /// Predecessor on the search tree. Never owning: a position into the same grid.
    pub previous: Option<Pos>,
}

impl Node {
    /// A fresh open cell at `pos`.
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            is_wall: false,
            is_start: false,
            is_end: false,
            is_visited: false,
            is_path: false,
            distance: UNREACHABLE,
            heuristic: 0,
            total_cost: UNREACHABLE,
            previous: None,
        }
    }

    /// Reset the search scratch fields.
    #[inline]
    pub fn reset_search(&mut self) {
        self.is_visited = false;
        self.is_path = false;
        self.distance = UNREACHABLE;
        self.heuristic = 0;
        self.total_cost = UNREACHABLE;
        self.previous = None;
    }

    /// Whether this cell is the start or the end.
    #[inline]
    pub const fn is_endpoint(&self) -> bool {
        self.is_start || self.is_end
    }
}
