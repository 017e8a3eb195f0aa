use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pathviz_core::{Grid, Pos};

use crate::SearchOutcome;

/// Heap entry ordered by `(dist, tick, idx)`, smallest first.
///
/// `tick` is the pop count when the entry's distance was assigned and `idx`
/// the row-major cell index. With unit weights a distance is assigned at
/// most once, so this key pops cells in exactly the order of repeatedly
/// stable-sorting the unvisited set by distance and taking the head.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    dist: i32,
    tick: u32,
    idx: usize,
    pos: Pos,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        (other.dist, other.tick, other.idx).cmp(&(self.dist, self.tick, self.idx))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm with unit edge weights.
///
/// Start has distance 0, everything else unreachable. The closest
/// unvisited cell is settled each round (ties by earliest relaxation, then
/// row-major position); the search fails once only unreachable cells remain.
pub fn dijkstra(grid: &mut Grid) -> SearchOutcome {
    let start = grid.start();
    let end = grid.end();

    let mut open: BinaryHeap<Entry> = BinaryHeap::new();
    let mut visited_in_order = Vec::new();
    let mut nbuf = Vec::with_capacity(4);
    let mut tick: u32 = 0;

    grid[start].distance = 0;
    if let Some(idx) = grid.idx(start) {
        open.push(Entry {
            dist: 0,
            tick,
            idx,
            pos: start,
        });
    }

    while let Some(Entry { pos: cur, dist, .. }) = open.pop() {
        let n = &mut grid[cur];
        if n.is_visited || n.is_wall || dist != n.distance {
            continue;
        }
        n.is_visited = true;
        visited_in_order.push(cur);
        tick += 1;

        if cur == end {
            return SearchOutcome::found(visited_in_order);
        }

        let candidate = dist + 1;
        nbuf.clear();
        grid.neighbors_into(cur, &mut nbuf);

        for &np in nbuf.iter() {
            let n = &mut grid[np];
            if candidate < n.distance {
                n.distance = candidate;
                n.previous = Some(cur);
                if let Some(idx) = grid.idx(np) {
                    open.push(Entry {
                        dist: candidate,
                        tick,
                        idx,
                        pos: np,
                    });
                }
            }
        }
    }

    SearchOutcome::exhausted(visited_in_order)
}
