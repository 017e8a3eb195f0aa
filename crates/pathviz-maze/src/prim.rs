use pathviz_core::{Grid, Pos, Range, Result};
use rand::Rng;

use crate::mazegen::{MazeGen, Mask, ORIGIN, wall_steps};
use crate::step::MazeStep;

impl<R: Rng> MazeGen<R> {
    /// Randomized Prim's algorithm.
    ///
    /// Room (1, 1) seeds the maze and its rooms two cells away seed the
    /// frontier. Each round removes a random frontier room; if it is not yet
    /// in the maze it is joined to a random in-maze neighbour room through
    /// the wall between them, and its own outside neighbours join the
    /// frontier (each position at most once).
    pub fn prims(&mut self, grid: &Grid) -> Result<Vec<MazeStep>> {
        let mut steps = wall_steps(grid)?;
        let bounds = grid.bounds();
        let mut in_maze = Mask::new(bounds);
        let mut queued = Mask::new(bounds);
        let mut frontier: Vec<Pos> = Vec::new();
        let mut joined = Vec::with_capacity(4);

        in_maze.set(ORIGIN, true);
        steps.push(MazeStep::carve(ORIGIN));
        grow_frontier(bounds, ORIGIN, &in_maze, &mut queued, &mut frontier);

        while !frontier.is_empty() {
            let room = frontier.remove(self.rng.random_range(0..frontier.len()));
            queued.set(room, false);
            if in_maze[room] {
                continue;
            }

            joined.clear();
            for (n, _) in room.jumps_4() {
                if bounds.contains_interior(n) && in_maze[n] {
                    joined.push(n);
                }
            }
            if joined.is_empty() {
                continue;
            }

            let anchor = self.pick(&joined);
            steps.push(MazeStep::carve(room.midpoint(anchor)));
            steps.push(MazeStep::carve(room));
            in_maze.set(room, true);
            grow_frontier(bounds, room, &in_maze, &mut queued, &mut frontier);
        }

        Ok(steps)
    }
}

fn grow_frontier(bounds: Range, room: Pos, in_maze: &Mask, queued: &mut Mask, frontier: &mut Vec<Pos>) {
    for (n, _) in room.jumps_4() {
        if bounds.contains_interior(n) && !in_maze[n] && !queued[n] {
            queued.set(n, true);
            frontier.push(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_spanning_tree, seeded};

    #[test]
    fn spans_the_room_lattice() {
        for (rows, cols) in [(21, 41), (20, 30), (3, 3), (7, 4)] {
            let g = Grid::new(rows, cols).unwrap();
            let steps = seeded(5).prims(&g).unwrap();
            assert_spanning_tree(&g, &steps);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let g = Grid::new(21, 41).unwrap();
        let a = seeded(1).prims(&g).unwrap();
        let b = seeded(2).prims(&g).unwrap();
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }
}
