use std::collections::HashSet;

use pathviz_core::{Grid, Pos};

use crate::SearchOutcome;
use crate::distance::manhattan;

/// A* search guided by the Manhattan distance to the end.
///
/// The open set is a list re-sorted by `total_cost` before every pop. The
/// sort is stable, so equal costs keep their list order. A neighbour whose
/// cost improves while it is already open keeps its slot and is reordered
/// by the next sort; membership is tracked by position.
pub fn astar(grid: &mut Grid) -> SearchOutcome {
    let start = grid.start();
    let end = grid.end();

    let mut open: Vec<Pos> = vec![start];
    let mut in_open: HashSet<Pos> = HashSet::from([start]);
    let mut visited_in_order = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    let h = manhattan(start, end);
    let n = &mut grid[start];
    n.distance = 0;
    n.heuristic = h;
    n.total_cost = h;

    while !open.is_empty() {
        open.sort_by_key(|&p| grid[p].total_cost);
        let cur = open.remove(0);
        in_open.remove(&cur);

        let n = &mut grid[cur];
        if n.is_visited {
            continue;
        }
        n.is_visited = true;
        visited_in_order.push(cur);

        if cur == end {
            return SearchOutcome::found(visited_in_order);
        }

        let tentative = n.distance + 1;
        nbuf.clear();
        grid.neighbors_into(cur, &mut nbuf);

        for &np in nbuf.iter() {
            let n = &mut grid[np];
            if n.is_visited || tentative >= n.distance {
                continue;
            }
            n.previous = Some(cur);
            n.distance = tentative;
            n.heuristic = manhattan(np, end);
            n.total_cost = tentative + n.heuristic;

            if in_open.insert(np) {
                open.push(np);
            }
        }
        log::trace!("astar settled {cur}, {} open", open.len());
    }

    SearchOutcome::exhausted(visited_in_order)
}
