//! Search algorithms over a [`pathviz_core::Grid`].
//!
//! Four searches share one contract: start from the grid's start cell, stop
//! on reaching its end or exhausting the frontier, and return the order in
//! which cells were settled ([`SearchOutcome`]). Each writes only the
//! search scratch fields of the nodes (visited flag, distance, heuristic,
//! total cost, predecessor) and expects them fresh, so callers run
//! [`Grid::clear_path`](pathviz_core::Grid::clear_path) between passes or
//! use [`Algorithm::solve`].
//!
//! | Function | Frontier | Shortest path |
//! |---|---|---|
//! | [`bfs`] | FIFO queue | yes |
//! | [`dfs`] | LIFO stack | no |
//! | [`dijkstra`] | closest distance first | yes |
//! | [`astar`] | lowest `distance + manhattan` first | yes |
//!
//! [`get_path`] turns the predecessor links into a start-to-end route.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod outcome;
mod path;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use outcome::{Algorithm, SearchOutcome, Solution, UnknownAlgorithm};
pub use path::get_path;
