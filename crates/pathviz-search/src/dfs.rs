use pathviz_core::{Grid, Pos};

use crate::SearchOutcome;

/// Depth-first search from the grid's start to its end.
///
/// Visiting is deferred until a cell is popped, so the stack may hold the
/// same cell several times; later copies are skipped. The predecessor is the
/// cell that pushed the copy that was popped first. The resulting path is
/// generally not a shortest one.
pub fn dfs(grid: &mut Grid) -> SearchOutcome {
    let start = grid.start();
    let end = grid.end();

    let mut stack: Vec<(Pos, Option<Pos>)> = vec![(start, None)];
    let mut visited_in_order = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    while let Some((cur, parent)) = stack.pop() {
        if grid[cur].is_visited {
            continue;
        }

        let depth = parent.map_or(0, |p| grid[p].distance + 1);
        let n = &mut grid[cur];
        n.is_visited = true;
        n.previous = parent;
        n.distance = depth;
        visited_in_order.push(cur);

        if cur == end {
            return SearchOutcome::found(visited_in_order);
        }

        nbuf.clear();
        grid.neighbors_into(cur, &mut nbuf);
        for &np in nbuf.iter() {
            if !grid[np].is_visited {
                stack.push((np, Some(cur)));
            }
        }
        log::trace!("dfs at {cur}, stack depth {}", stack.len());
    }

    SearchOutcome::exhausted(visited_in_order)
}
