//! Maze generation for pathviz grids.
//!
//! [`MazeGen`] offers three generators over the thick-wall room lattice
//! (rooms at odd row and column, removable walls between them):
//!
//! - **Recursive backtracker** ([`MazeGen::recursive_backtracker`])
//! - **Prim's** ([`MazeGen::prims`])
//! - **Kruskal's** ([`MazeGen::kruskals`])
//!
//! Each returns a replayable list of [`MazeStep`]s: a wall step for every
//! cell except the start and end, then the carve steps in the order the
//! algorithm opened them. [`accessibility_steps`] clears the blocks around
//! the endpoints afterwards; [`MazeGen::generate`] runs both.

mod backtracker;
mod kruskal;
mod mazegen;
mod prim;
mod step;

pub use mazegen::{MIN_MAZE_SIZE, MazeGen, MazeKind, UnknownMazeKind, accessibility_steps};
pub use step::{MazeStep, StepKind, apply_steps};

#[cfg(test)]
pub(crate) mod testutil {
    use std::collections::{HashSet, VecDeque};

    use pathviz_core::{Grid, Pos};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::{MazeGen, MazeStep, StepKind};

    pub(crate) fn seeded(seed: u64) -> MazeGen<StdRng> {
        MazeGen::with_rng(StdRng::seed_from_u64(seed))
    }

    /// The carved cells must be every interior room plus exactly one wall
    /// fewer than rooms, all connected: a spanning tree of the rooms.
    pub(crate) fn assert_spanning_tree(grid: &Grid, steps: &[MazeStep]) {
        let bounds = grid.bounds();
        let rooms: HashSet<Pos> = bounds
            .iter()
            .filter(|&p| p.is_odd() && bounds.contains_interior(p))
            .collect();
        let carved: HashSet<Pos> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Carve)
            .map(|s| s.pos())
            .collect();

        assert!(rooms.is_subset(&carved), "uncarved rooms");
        assert_eq!(carved.len(), 2 * rooms.len() - 1, "not a tree");

        let mut seen = HashSet::from([Pos::new(1, 1)]);
        let mut queue = VecDeque::from([Pos::new(1, 1)]);
        while let Some(p) = queue.pop_front() {
            for n in p.neighbors_4() {
                if carved.contains(&n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        assert_eq!(seen.len(), carved.len(), "disconnected");

        for s in steps.iter().filter(|s| s.kind == StepKind::Wall) {
            assert!(s.pos() != grid.start() && s.pos() != grid.end());
        }
    }
}
