use pathviz_core::{Grid, Pos, Result};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::mazegen::{MazeGen, wall_steps};
use crate::step::MazeStep;

/// Disjoint sets over dense ids, with path halving and union by size.
#[derive(Debug, Clone)]
pub(crate) struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    pub(crate) fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets holding `a` and `b`. Returns `false` if they were
    /// already one set.
    pub(crate) fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        true
    }
}

/// A wall between two rooms.
#[derive(Debug, Clone, Copy)]
struct Edge {
    a: usize,
    b: usize,
    wall: Pos,
}

impl<R: Rng> MazeGen<R> {
    /// Randomized Kruskal's algorithm.
    ///
    /// Every interior room is carved up front as its own set. The walls
    /// between horizontally and vertically adjacent rooms are shuffled and
    /// visited once each; a wall is carved when it joins two different sets.
    /// The result is a uniform spanning tree over the rooms.
    pub fn kruskals(&mut self, grid: &Grid) -> Result<Vec<MazeStep>> {
        let mut steps = wall_steps(grid)?;
        let (rows, cols) = (grid.rows(), grid.cols());
        let room_id = |p: Pos| (p.row * cols + p.col) as usize;

        let mut edges: Vec<Edge> = Vec::new();
        for row in (1..rows - 1).step_by(2) {
            for col in (1..cols - 1).step_by(2) {
                let room = Pos::new(row, col);
                steps.push(MazeStep::carve(room));
                if row + 2 < rows - 1 {
                    edges.push(Edge {
                        a: room_id(room),
                        b: room_id(room.shift(2, 0)),
                        wall: room.shift(1, 0),
                    });
                }
                if col + 2 < cols - 1 {
                    edges.push(Edge {
                        a: room_id(room),
                        b: room_id(room.shift(0, 2)),
                        wall: room.shift(0, 1),
                    });
                }
            }
        }

        edges.shuffle(&mut self.rng);

        let mut sets = DisjointSets::new(grid.nodes().len());
        let mut joined = 0usize;
        for edge in &edges {
            if sets.union(edge.a, edge.b) {
                steps.push(MazeStep::carve(edge.wall));
                joined += 1;
            }
        }
        log::trace!("kruskal kept {joined} of {} walls", edges.len());

        Ok(steps)
    }
}
