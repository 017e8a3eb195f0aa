use pathviz_core::{Grid, Result};
use rand::Rng;

use crate::mazegen::{MazeGen, Mask, ORIGIN, wall_steps};
use crate::step::MazeStep;

impl<R: Rng> MazeGen<R> {
    /// Randomized depth-first carving (recursive backtracker).
    ///
    /// Starting at room (1, 1), repeatedly jump to a random unvisited room
    /// two cells away, carving the wall in between; when the current room
    /// has none left, backtrack. Ends when the stack is empty, at which point
    /// every interior room has been carved.
    pub fn recursive_backtracker(&mut self, grid: &Grid) -> Result<Vec<MazeStep>> {
        let mut steps = wall_steps(grid)?;
        let bounds = grid.bounds();
        let mut visited = Mask::new(bounds);
        let mut stack = vec![ORIGIN];
        let mut candidates = Vec::with_capacity(4);

        visited.set(ORIGIN, true);
        steps.push(MazeStep::carve(ORIGIN));

        while let Some(&cur) = stack.last() {
            candidates.clear();
            for (room, wall) in cur.jumps_4() {
                if bounds.contains_interior(room) && !visited[room] {
                    candidates.push((room, wall));
                }
            }

            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let (next, wall) = self.pick(&candidates);
            steps.push(MazeStep::carve(wall));
            steps.push(MazeStep::carve(next));
            visited.set(next, true);
            stack.push(next);
        }

        Ok(steps)
    }
}
