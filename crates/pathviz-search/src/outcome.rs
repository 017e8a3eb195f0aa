use std::fmt;
use std::str::FromStr;

use pathviz_core::{Grid, Pos};
use thiserror::Error;

use crate::path::get_path;

/// Result of one search pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Cells in the order the search settled them, start first.
    pub visited_in_order: Vec<Pos>,
    /// Whether the end cell was reached.
    pub path_found: bool,
}

impl SearchOutcome {
    pub(crate) fn found(visited_in_order: Vec<Pos>) -> Self {
        log::debug!("end reached after {} cells", visited_in_order.len());
        Self {
            visited_in_order,
            path_found: true,
        }
    }

    pub(crate) fn exhausted(visited_in_order: Vec<Pos>) -> Self {
        log::debug!("frontier exhausted after {} cells, no path", visited_in_order.len());
        Self {
            visited_in_order,
            path_found: false,
        }
    }
}

/// A search outcome together with the reconstructed path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub outcome: SearchOutcome,
    /// Start-to-end path, empty when no path was found.
    pub path: Vec<Pos>,
}

/// The available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Short identifier, also accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }

    /// Whether the algorithm always returns a shortest path.
    pub const fn is_shortest(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Run the algorithm on `grid`.
    ///
    /// The grid's search state must be fresh (see [`Grid::clear_path`]).
    pub fn run(self, grid: &mut Grid) -> SearchOutcome {
        log::debug!(
            "{} from {} to {} on {}x{}",
            self.name(),
            grid.start(),
            grid.end(),
            grid.rows(),
            grid.cols()
        );
        match self {
            Self::Bfs => crate::bfs(grid),
            Self::Dfs => crate::dfs(grid),
            Self::Dijkstra => crate::dijkstra(grid),
            Self::AStar => crate::astar(grid),
        }
    }

    /// Clear previous search state, run, and mark the found path on the grid.
    pub fn solve(self, grid: &mut Grid) -> Solution {
        grid.clear_path();
        let outcome = self.run(grid);
        let path = if outcome.path_found {
            get_path(grid, grid.end())
        } else {
            Vec::new()
        };
        grid.mark_path(&path);
        Solution { outcome, path }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "Breadth-first search",
            Self::Dfs => "Depth-first search",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        })
    }
}

/// Returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search algorithm {0:?} (expected bfs, dfs, dijkstra or astar)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let o = SearchOutcome {
            visited_in_order: vec![Pos::new(0, 0), Pos::new(0, 1)],
            path_found: true,
        };
        let json = serde_json::to_string(&o).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(o, back);
    }
}
