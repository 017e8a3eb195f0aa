//! Replayable maze edits.

use pathviz_core::{Grid, Pos};

/// What a step does to its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepKind {
    Wall,
    Carve,
}

/// One edit of a maze build, meant to be applied in sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeStep {
    pub row: i32,
    pub col: i32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: StepKind,
}

impl MazeStep {
    pub const fn wall(p: Pos) -> Self {
        Self {
            row: p.row,
            col: p.col,
            kind: StepKind::Wall,
        }
    }

    pub const fn carve(p: Pos) -> Self {
        Self {
            row: p.row,
            col: p.col,
            kind: StepKind::Carve,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }
}

/// Apply `steps` to `grid` in order.
///
/// Steps on the start or end cell, or off the grid, are skipped by
/// [`Grid::set_wall`].
pub fn apply_steps(grid: &mut Grid, steps: &[MazeStep]) {
    for step in steps {
        grid.set_wall(step.pos(), step.kind == StepKind::Wall);
    }
    log::debug!("applied {} maze steps, {} walls", steps.len(), grid.wall_count());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_steps_win() {
        let mut g = Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        let p = Pos::new(1, 1);
        apply_steps(&mut g, &[MazeStep::wall(p), MazeStep::carve(p), MazeStep::wall(p)]);
        assert!(g.is_wall(p));
        apply_steps(&mut g, &[MazeStep::carve(p)]);
        assert!(!g.is_wall(p));
    }

    #[test]
    fn endpoints_are_never_walled() {
        let mut g = Grid::with_endpoints(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        apply_steps(&mut g, &[MazeStep::wall(Pos::new(0, 0)), MazeStep::wall(Pos::new(2, 2))]);
        assert_eq!(g.wall_count(), 0);
    }
}
