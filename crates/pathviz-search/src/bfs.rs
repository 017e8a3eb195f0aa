use std::collections::VecDeque;

use pathviz_core::{Grid, Pos};

use crate::SearchOutcome;

/// Breadth-first search from the grid's start to its end.
///
/// Cells are marked visited when enqueued, so each enters the queue once.
/// With unit steps the queue holds cells in nondecreasing distance order and
/// the predecessor chain of the end is a shortest path.
pub fn bfs(grid: &mut Grid) -> SearchOutcome {
    let start = grid.start();
    let end = grid.end();

    let mut queue: VecDeque<Pos> = VecDeque::new();
    let mut visited_in_order = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    grid[start].is_visited = true;
    grid[start].distance = 0;
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        visited_in_order.push(cur);

        if cur == end {
            return SearchOutcome::found(visited_in_order);
        }

        let next_dist = grid[cur].distance + 1;
        nbuf.clear();
        grid.neighbors_into(cur, &mut nbuf);

        for &np in nbuf.iter() {
            let n = &mut grid[np];
            if n.is_visited {
                continue;
            }
            n.is_visited = true;
            n.distance = next_dist;
            n.previous = Some(cur);
            queue.push_back(np);
        }
    }

    SearchOutcome::exhausted(visited_in_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::get_path;

    #[test]
    fn open_five_by_five() {
        let mut g = Grid::with_endpoints(5, 5, Pos::new(2, 0), Pos::new(2, 4)).unwrap();
        let out = bfs(&mut g);
        assert!(out.path_found);
        // Every cell nearer than the end (14 of them) plus the four distance-4
        // cells queued ahead of it.
        assert_eq!(out.visited_in_order.len(), 19);
        assert_eq!(out.visited_in_order[0], Pos::new(2, 0));
        assert_eq!(out.visited_in_order.last(), Some(&Pos::new(2, 4)));
        let path = get_path(&g, g.end());
        assert_eq!(
            path,
            vec![
                Pos::new(2, 0),
                Pos::new(2, 1),
                Pos::new(2, 2),
                Pos::new(2, 3),
                Pos::new(2, 4),
            ]
        );
    }

    #[test]
    fn expansion_follows_neighbor_order() {
        let mut g = Grid::with_endpoints(5, 5, Pos::new(2, 2), Pos::new(0, 0)).unwrap();
        let out = bfs(&mut g);
        assert_eq!(
            &out.visited_in_order[..5],
            &[
                Pos::new(2, 2),
                Pos::new(1, 2),
                Pos::new(3, 2),
                Pos::new(2, 1),
                Pos::new(2, 3),
            ]
        );
    }

    #[test]
    fn distances_are_recorded() {
        let mut g = Grid::with_endpoints(4, 4, Pos::new(0, 0), Pos::new(3, 3)).unwrap();
        bfs(&mut g);
        assert_eq!(g[Pos::new(0, 0)].distance, 0);
        assert_eq!(g[Pos::new(3, 3)].distance, 6);
    }

    #[test]
    fn walled_off_start() {
        let mut g = Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        for p in [Pos::new(1, 1), Pos::new(0, 1), Pos::new(1, 0)] {
            g.set_wall(p, true);
        }
        let out = bfs(&mut g);
        assert!(!out.path_found);
        assert_eq!(out.visited_in_order, vec![Pos::new(0, 0)]);
    }
}
