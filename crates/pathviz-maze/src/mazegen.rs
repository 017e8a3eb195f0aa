//! The [`MazeGen`] driver and helpers shared by the three generators.

use std::fmt;
use std::ops;
use std::str::FromStr;

use pathviz_core::{Error, Grid, Pos, Range, Result};
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::step::MazeStep;

/// Smallest grid (rows and columns) with an interior odd cell to carve from.
pub const MIN_MAZE_SIZE: i32 = 3;

/// Room the generators start carving from.
pub(crate) const ORIGIN: Pos = Pos::new(1, 1);

/// The available maze generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeKind {
    RecursiveBacktracker,
    Prims,
    Kruskals,
}

impl MazeKind {
    /// Every generator, in menu order.
    pub const ALL: [MazeKind; 3] = [Self::RecursiveBacktracker, Self::Prims, Self::Kruskals];

    /// Short identifier, also accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::RecursiveBacktracker => "recursive",
            Self::Prims => "prims",
            Self::Kruskals => "kruskals",
        }
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RecursiveBacktracker => "Recursive backtracker",
            Self::Prims => "Prim's",
            Self::Kruskals => "Kruskal's",
        })
    }
}

/// Returned when parsing an unknown maze generator name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown maze generator {0:?} (expected recursive, prims or kruskals)")]
pub struct UnknownMazeKind(pub String);

impl FromStr for MazeKind {
    type Err = UnknownMazeKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMazeKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Mask
// ---------------------------------------------------------------------------

/// A boolean flag per grid position.
#[derive(Debug, Clone)]
pub(crate) struct Mask {
    bounds: Range,
    bits: Vec<bool>,
}

impl Mask {
    pub(crate) fn new(bounds: Range) -> Self {
        Self {
            bounds,
            bits: vec![false; bounds.len()],
        }
    }

    fn offset(&self, p: Pos) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(((p.row - self.bounds.min.row) * self.bounds.cols() + (p.col - self.bounds.min.col)) as usize)
    }

    pub(crate) fn set(&mut self, p: Pos, value: bool) {
        if let Some(i) = self.offset(p) {
            self.bits[i] = value;
        }
    }
}

impl ops::Index<Pos> for Mask {
    type Output = bool;

    /// Off-range positions read as `false`.
    fn index(&self, p: Pos) -> &bool {
        match self.offset(p) {
            Some(i) => &self.bits[i],
            None => &false,
        }
    }
}

// ---------------------------------------------------------------------------
// MazeGen
// ---------------------------------------------------------------------------

/// Maze generator driven by a caller-supplied random source.
///
/// Generators read only the grid's size and endpoints; they return the
/// edits as [`MazeStep`]s and leave the grid untouched. Apply the result
/// with [`apply_steps`](crate::apply_steps).
///
/// All three follow the thick-wall convention: cells with two odd
/// coordinates are rooms, the cells between them are removable walls.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl MazeGen<ThreadRng> {
    /// A generator seeded from the thread-local random source.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for MazeGen<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the given random source. Pass a seeded RNG
    /// for reproducible mazes.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Run the `kind` generator and append the accessibility steps, giving
    /// the complete replay for `grid`.
    pub fn generate(&mut self, kind: MazeKind, grid: &Grid) -> Result<Vec<MazeStep>> {
        let mut steps = match kind {
            MazeKind::RecursiveBacktracker => self.recursive_backtracker(grid)?,
            MazeKind::Prims => self.prims(grid)?,
            MazeKind::Kruskals => self.kruskals(grid)?,
        };
        steps.extend(accessibility_steps(grid));
        log::debug!(
            "{kind} maze on {}x{}: {} steps",
            grid.rows(),
            grid.cols(),
            steps.len()
        );
        Ok(steps)
    }

    /// Pick a uniformly random element of a non-empty slice.
    pub(crate) fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }
}

/// Validate the grid size and emit a wall step for every cell except the
/// start and end, in row-major order.
pub(crate) fn wall_steps(grid: &Grid) -> Result<Vec<MazeStep>> {
    Error::check_dimensions(grid.rows(), grid.cols(), MIN_MAZE_SIZE, MIN_MAZE_SIZE)?;
    Ok(grid
        .nodes()
        .iter()
        .filter(|n| !n.is_endpoint())
        .map(|n| MazeStep::wall(n.pos))
        .collect())
}

/// Carve steps opening the 3×3 block around the start and around the end
/// (clamped to the grid, skipping the endpoints themselves).
pub fn accessibility_steps(grid: &Grid) -> Vec<MazeStep> {
    let bounds = grid.bounds();
    [grid.start(), grid.end()]
        .into_iter()
        .flat_map(|center| bounds.around(center).iter())
        .filter(|&p| !grid[p].is_endpoint())
        .map(MazeStep::carve)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{StepKind, apply_steps};

    #[test]
    fn parse_kinds() {
        for k in MazeKind::ALL {
            assert_eq!(k.name().parse::<MazeKind>(), Ok(k));
        }
        assert!("eller".parse::<MazeKind>().is_err());
    }

    #[test]
    fn wall_steps_skip_endpoints() {
        let g = Grid::with_endpoints(3, 4, Pos::new(0, 0), Pos::new(2, 3)).unwrap();
        let steps = wall_steps(&g).unwrap();
        assert_eq!(steps.len(), 10);
        assert!(steps.iter().all(|s| s.kind == StepKind::Wall));
        assert!(!steps.contains(&MazeStep::wall(g.start())));
        assert!(!steps.contains(&MazeStep::wall(g.end())));
    }

    #[test]
    fn too_small_for_a_maze() {
        let g = Grid::new(2, 10).unwrap();
        assert!(matches!(
            wall_steps(&g),
            Err(Error::InvalidGridDimensions { rows: 2, cols: 10, .. })
        ));
    }

    #[test]
    fn accessibility_clamps_at_edges() {
        let g = Grid::with_endpoints(5, 5, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        let steps = accessibility_steps(&g);
        // Corner block of 4 minus the start, full block of 9 minus the end.
        assert_eq!(steps.len(), 3 + 8);
        assert!(steps.iter().all(|s| s.kind == StepKind::Carve));
    }

    #[test]
    fn accessibility_opens_all_eight_neighbors() {
        let mut g = Grid::with_endpoints(6, 6, Pos::new(0, 2), Pos::new(4, 4)).unwrap();
        let walls = wall_steps(&g).unwrap();
        apply_steps(&mut g, &walls);
        let opened = accessibility_steps(&g);
        apply_steps(&mut g, &opened);
        for center in [g.start(), g.end()] {
            for p in g.bounds().around(center) {
                assert!(!g.is_wall(p), "{p} still walled");
            }
        }
    }

    #[test]
    fn mask_reads_false_off_range() {
        let mut m = Mask::new(Range::of_size(3, 3));
        m.set(Pos::new(1, 1), true);
        m.set(Pos::new(7, 7), true);
        assert!(m[Pos::new(1, 1)]);
        assert!(!m[Pos::new(0, 1)]);
        assert!(!m[Pos::new(7, 7)]);
    }
}
