//! The [`Grid`] type: a fixed-size board of [`Node`]s with one start and
//! one end.
//!
//! Positions are the only handles into the grid: predecessors, search
//! traces and reconstructed paths all refer to cells by [`Pos`], so nothing
//! outside the grid ever owns a cell.

use std::fmt;
use std::ops;

use crate::error::{Error, Result};
use crate::geom::{Pos, Range, RangeIter};
use crate::node::Node;

/// Rectangular board of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    bounds: Range,
    nodes: Vec<Node>,
    start: Pos,
    end: Pos,
}

impl Grid {
    /// Create an open grid with the default endpoints: start at
    /// `(rows/2, cols/4)`, end at `(rows/2, 3*cols/4)`.
    ///
    /// Needs at least one row and two columns so the endpoints differ.
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        Error::check_dimensions(rows, cols, 1, 2)?;
        let start = Pos::new(rows / 2, cols / 4);
        let end = Pos::new(rows / 2, (i64::from(cols) * 3 / 4) as i32);
        Self::with_endpoints(rows, cols, start, end)
    }

    /// Create an open grid with explicit endpoints.
    ///
    /// Any shape with room for two distinct cells is accepted.
    pub fn with_endpoints(rows: i32, cols: i32, start: Pos, end: Pos) -> Result<Self> {
        Error::check_dimensions(rows, cols, 1, 1)?;
        if rows == 1 && cols == 1 {
            return Err(Error::InvalidGridDimensions {
                rows,
                cols,
                min_rows: 1,
                min_cols: 2,
            });
        }
        let bounds = Range::of_size(rows, cols);
        for p in [start, end] {
            if !bounds.contains(p) {
                return Err(Error::OutOfBounds(p));
            }
        }
        if start == end {
            return Err(Error::Occupied(end));
        }

        let mut nodes: Vec<Node> = bounds.iter().map(Node::new).collect();
        let width = cols as usize;
        nodes[start.row as usize * width + start.col as usize].is_start = true;
        nodes[end.row as usize * width + end.col as usize].is_end = true;

        log::debug!("grid {rows}x{cols} created, start {start}, end {end}");
        Ok(Self {
            bounds,
            nodes,
            start,
            end,
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// The range `[0, rows) × [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `p` is on the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` when off the grid.
    #[inline]
    pub fn idx(&self, p: Pos) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols() as usize + p.col as usize)
    }

    /// The start position.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// The end position.
    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    /// The cell at `p`, or `None` when off the grid.
    #[inline]
    pub fn node(&self, p: Pos) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// Mutable access to the cell at `p`.
    ///
    /// Intended for search scratch fields; use [`set_wall`](Self::set_wall),
    /// [`set_start`](Self::set_start) and [`set_end`](Self::set_end) for the
    /// board flags so their exclusivity holds.
    #[inline]
    pub fn node_mut(&mut self, p: Pos) -> Option<&mut Node> {
        self.idx(p).map(move |i| &mut self.nodes[i])
    }

    /// All cells in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Whether `p` is a wall. Off-grid positions are not walls.
    #[inline]
    pub fn is_wall(&self, p: Pos) -> bool {
        self.node(p).is_some_and(|n| n.is_wall)
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_wall).count()
    }

    /// Row-major enumeration of every position on the grid.
    #[inline]
    pub fn all_cells(&self) -> RangeIter {
        self.bounds.iter()
    }

    /// Append the in-bounds, non-wall neighbours of `p` to `buf`, in up,
    /// down, left, right order. The caller clears `buf` before calling.
    pub fn neighbors_into(&self, p: Pos, buf: &mut Vec<Pos>) {
        for n in p.neighbors_4() {
            if let Some(node) = self.node(n) {
                if !node.is_wall {
                    buf.push(n);
                }
            }
        }
    }

    /// The in-bounds, non-wall neighbours of `p` in up, down, left, right order.
    pub fn neighbors(&self, p: Pos) -> Vec<Pos> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    // -----------------------------------------------------------------------
    // Board mutation
    // -----------------------------------------------------------------------

    /// Set or clear the wall flag at `p`.
    ///
    /// Does nothing on the start or end cell, or off the grid.
    pub fn set_wall(&mut self, p: Pos, wall: bool) {
        if let Some(n) = self.node_mut(p) {
            if !n.is_endpoint() {
                n.is_wall = wall;
            }
        }
    }

    /// Flip the wall flag at `p`. Same restrictions as [`set_wall`](Self::set_wall).
    pub fn toggle_wall(&mut self, p: Pos) {
        if let Some(n) = self.node_mut(p) {
            if !n.is_endpoint() {
                n.is_wall = !n.is_wall;
            }
        }
    }

    /// Move the start to `p`, clearing the previous start flag first.
    pub fn set_start(&mut self, p: Pos) -> Result<()> {
        self.check_endpoint_target(p, self.end)?;
        let old = self.start;
        self.flag(old, |n| n.is_start = false);
        self.flag(p, |n| n.is_start = true);
        self.start = p;
        log::trace!("start moved {old} -> {p}");
        Ok(())
    }

    /// Move the end to `p`, clearing the previous end flag first.
    pub fn set_end(&mut self, p: Pos) -> Result<()> {
        self.check_endpoint_target(p, self.start)?;
        let old = self.end;
        self.flag(old, |n| n.is_end = false);
        self.flag(p, |n| n.is_end = true);
        self.end = p;
        log::trace!("end moved {old} -> {p}");
        Ok(())
    }

    fn check_endpoint_target(&self, p: Pos, other: Pos) -> Result<()> {
        let Some(node) = self.node(p) else {
            return Err(Error::OutOfBounds(p));
        };
        if p == other {
            return Err(Error::Occupied(p));
        }
        if node.is_wall {
            return Err(Error::Blocked(p));
        }
        Ok(())
    }

    fn flag(&mut self, p: Pos, f: impl FnOnce(&mut Node)) {
        if let Some(n) = self.node_mut(p) {
            f(n);
        }
    }

    /// Flag each position in `path` as part of the found path.
    pub fn mark_path(&mut self, path: &[Pos]) {
        for &p in path {
            self.flag(p, |n| n.is_path = true);
        }
    }

    /// Reset every cell's search state. Walls and endpoints stay.
    pub fn clear_path(&mut self) {
        for n in self.nodes.iter_mut() {
            n.reset_search();
        }
    }

    /// Reset search state and remove every wall.
    pub fn clear_grid(&mut self) {
        for n in self.nodes.iter_mut() {
            n.reset_search();
            n.is_wall = false;
        }
        log::debug!("grid cleared");
    }
}

impl ops::Index<Pos> for Grid {
    type Output = Node;

    /// Panics if `p` is off the grid.
    fn index(&self, p: Pos) -> &Node {
        self.node(p)
            .unwrap_or_else(|| panic!("position {p} outside grid {}", self.bounds))
    }
}

impl ops::IndexMut<Pos> for Grid {
    fn index_mut(&mut self, p: Pos) -> &mut Node {
        let bounds = self.bounds;
        self.node_mut(p)
            .unwrap_or_else(|| panic!("position {p} outside grid {bounds}"))
    }
}

impl fmt::Display for Grid {
    /// One character per cell: `#` wall, `S` start, `E` end, `*` path,
    /// `.` visited, space otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.nodes.iter().enumerate() {
            if i > 0 && i % self.cols() as usize == 0 {
                writeln!(f)?;
            }
            let ch = if n.is_start {
                'S'
            } else if n.is_end {
                'E'
            } else if n.is_wall {
                '#'
            } else if n.is_path {
                '*'
            } else if n.is_visited {
                '.'
            } else {
                ' '
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MAX_GRID_SIZE;
    use crate::node::UNREACHABLE;

    #[test]
    fn default_endpoints() {
        let g = Grid::new(10, 20).unwrap();
        assert_eq!(g.start(), Pos::new(5, 5));
        assert_eq!(g.end(), Pos::new(5, 15));
        assert!(g.node(g.start()).unwrap().is_start);
        assert!(g.node(g.end()).unwrap().is_end);
    }

    #[test]
    fn too_small_is_rejected() {
        assert!(matches!(
            Grid::new(1, 1),
            Err(Error::InvalidGridDimensions { rows: 1, cols: 1, .. })
        ));
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(1, 2).is_ok());
    }

    #[test]
    fn single_column_with_explicit_endpoints() {
        let g = Grid::with_endpoints(2, 1, Pos::new(0, 0), Pos::new(1, 0)).unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 1));
        assert_eq!(g.neighbors(g.start()), vec![g.end()]);
        assert!(matches!(
            Grid::with_endpoints(1, 1, Pos::new(0, 0), Pos::new(0, 0)),
            Err(Error::InvalidGridDimensions { rows: 1, cols: 1, .. })
        ));
        assert!(Grid::new(2, 1).is_err());
    }

    #[test]
    fn oversized_grid_is_rejected() {
        assert!(matches!(
            Grid::new(10, i32::MAX),
            Err(Error::GridTooLarge { cols: i32::MAX, .. })
        ));
        assert!(matches!(
            Grid::with_endpoints(MAX_GRID_SIZE + 1, 2, Pos::new(0, 0), Pos::new(0, 1)),
            Err(Error::GridTooLarge { .. })
        ));
    }

    #[test]
    fn with_endpoints_validates() {
        assert_eq!(
            Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(3, 0)),
            Err(Error::OutOfBounds(Pos::new(3, 0)))
        );
        assert_eq!(
            Grid::with_endpoints(3, 3, Pos::new(1, 1), Pos::new(1, 1)),
            Err(Error::Occupied(Pos::new(1, 1)))
        );
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let g = Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        assert_eq!(
            g.neighbors(Pos::new(1, 1)),
            vec![Pos::new(0, 1), Pos::new(2, 1), Pos::new(1, 0), Pos::new(1, 2)]
        );
        assert_eq!(g.neighbors(Pos::new(0, 0)), vec![Pos::new(1, 0), Pos::new(0, 1)]);
    }

    #[test]
    fn neighbors_skip_walls() {
        let mut g = Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        g.set_wall(Pos::new(0, 1), true);
        assert_eq!(g.neighbors(Pos::new(0, 0)), vec![Pos::new(1, 0)]);
    }

    #[test]
    fn walls_never_cover_endpoints() {
        let mut g = Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        g.set_wall(Pos::new(0, 0), true);
        g.toggle_wall(Pos::new(2, 2));
        g.set_wall(Pos::new(9, 9), true);
        assert_eq!(g.wall_count(), 0);
        g.toggle_wall(Pos::new(1, 1));
        assert!(g.is_wall(Pos::new(1, 1)));
        g.toggle_wall(Pos::new(1, 1));
        assert!(!g.is_wall(Pos::new(1, 1)));
    }

    #[test]
    fn moving_start_clears_old_flag() {
        let mut g = Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        g.set_start(Pos::new(1, 1)).unwrap();
        assert!(!g.node(Pos::new(0, 0)).unwrap().is_start);
        assert!(g.node(Pos::new(1, 1)).unwrap().is_start);
        assert_eq!(g.nodes().iter().filter(|n| n.is_start).count(), 1);
    }

    #[test]
    fn endpoint_moves_are_guarded() {
        let mut g = Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        g.set_wall(Pos::new(1, 1), true);
        assert_eq!(g.set_start(Pos::new(2, 2)), Err(Error::Occupied(Pos::new(2, 2))));
        assert_eq!(g.set_end(Pos::new(1, 1)), Err(Error::Blocked(Pos::new(1, 1))));
        assert_eq!(g.set_end(Pos::new(-1, 0)), Err(Error::OutOfBounds(Pos::new(-1, 0))));
        assert_eq!(g.start(), Pos::new(0, 0));
        assert_eq!(g.end(), Pos::new(2, 2));
    }

    #[test]
    fn clear_path_keeps_walls_clear_grid_does_not() {
        let mut g = Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        g.set_wall(Pos::new(1, 1), true);
        {
            let n = g.node_mut(Pos::new(0, 1)).unwrap();
            n.is_visited = true;
            n.distance = 1;
            n.previous = Some(Pos::new(0, 0));
        }
        g.mark_path(&[Pos::new(0, 1)]);

        g.clear_path();
        let n = g.node(Pos::new(0, 1)).unwrap();
        assert!(!n.is_visited && !n.is_path);
        assert_eq!(n.distance, UNREACHABLE);
        assert_eq!(n.previous, None);
        assert!(g.is_wall(Pos::new(1, 1)));

        g.clear_grid();
        assert_eq!(g.wall_count(), 0);
        assert!(g.node(g.start()).unwrap().is_start);
    }

    #[test]
    fn all_cells_row_major() {
        let g = Grid::new(2, 3).unwrap();
        let cells: Vec<_> = g.all_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[4], Pos::new(1, 1));
        for (p, n) in cells.iter().zip(g.nodes()) {
            assert_eq!(*p, n.pos);
        }
    }

    #[test]
    fn index_by_pos() {
        let mut g = Grid::new(3, 4).unwrap();
        g[Pos::new(0, 0)].distance = 7;
        assert_eq!(g[Pos::new(0, 0)].distance, 7);
        assert_eq!(g[Pos::new(2, 3)].pos, Pos::new(2, 3));
    }

    #[test]
    #[should_panic]
    fn index_off_grid_panics() {
        let g = Grid::new(3, 4).unwrap();
        let _ = g[Pos::new(3, 0)];
    }

    #[test]
    fn display() {
        let mut g = Grid::with_endpoints(2, 3, Pos::new(0, 0), Pos::new(1, 2)).unwrap();
        g.set_wall(Pos::new(0, 1), true);
        g.mark_path(&[Pos::new(1, 0)]);
        assert_eq!(g.to_string(), "S# \n* E");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(4, 6).unwrap();
        g.set_wall(Pos::new(0, 0), true);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
