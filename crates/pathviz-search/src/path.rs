use pathviz_core::{Grid, Pos};

/// Walk predecessor links back from `end` and return the path start-first.
///
/// A cell without a predecessor yields just itself, so calling this on a
/// disconnected end returns `[end]`. Off-grid positions yield an empty path.
pub fn get_path(grid: &Grid, end: Pos) -> Vec<Pos> {
    if !grid.contains(end) {
        return Vec::new();
    }
    // Predecessor links form a tree, so the walk is bounded by the cell count.
    let mut path: Vec<Pos> = std::iter::successors(Some(end), |&p| grid[p].previous)
        .take(grid.nodes().len())
        .collect();
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_cell() {
        let g = Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        assert_eq!(get_path(&g, g.end()), vec![Pos::new(2, 2)]);
        assert!(get_path(&g, Pos::new(5, 5)).is_empty());
    }

    #[test]
    fn follows_links_start_first() {
        let mut g = Grid::with_endpoints(1, 3, Pos::new(0, 0), Pos::new(0, 2)).unwrap();
        g[Pos::new(0, 1)].previous = Some(Pos::new(0, 0));
        g[Pos::new(0, 2)].previous = Some(Pos::new(0, 1));
        assert_eq!(
            get_path(&g, g.end()),
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]
        );
    }
}
