//! Frame-by-frame terminal replay of maze steps and search results.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use pathviz_core::{Grid, Pos};
use pathviz_maze::{MazeStep, StepKind};
use pathviz_search::Solution;

const CLEAR: &str = "\x1b[2J\x1b[H";

/// Playback pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    /// Delay after each maze step or visited cell.
    pub const fn step_delay(self) -> Duration {
        Duration::from_millis(match self {
            Self::Slow => 50,
            Self::Medium => 20,
            Self::Fast => 5,
        })
    }

    /// Path cells are drawn at half pace.
    pub fn path_delay(self) -> Duration {
        self.step_delay() * 2
    }
}

/// Character buffer mirroring a grid, updated cell by cell during replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cols: i32,
    cells: Vec<char>,
}

impl Canvas {
    /// Draw the board of `grid`: walls and endpoints only, no search marks.
    pub fn from_board(grid: &Grid) -> Self {
        let cells = grid
            .nodes()
            .iter()
            .map(|n| {
                if n.is_start {
                    'S'
                } else if n.is_end {
                    'E'
                } else if n.is_wall {
                    '#'
                } else {
                    ' '
                }
            })
            .collect();
        Self {
            cols: grid.cols(),
            cells,
        }
    }

    /// Overwrite the cell at `p`. Endpoints keep their letter.
    pub fn set(&mut self, p: Pos, ch: char) {
        if p.row < 0 || p.col < 0 || p.col >= self.cols {
            return;
        }
        let i = p.row as usize * self.cols as usize + p.col as usize;
        if let Some(c) = self.cells.get_mut(i) {
            if *c != 'S' && *c != 'E' {
                *c = ch;
            }
        }
    }

    pub fn render(&self) -> String {
        let width = self.cols.max(1) as usize;
        let mut s = String::with_capacity(self.cells.len() + self.cells.len() / width);
        for row in self.cells.chunks(width) {
            s.extend(row);
            s.push('\n');
        }
        s
    }
}

/// Writes frames to `out`, sleeping between them when animating.
pub struct Player<W: Write> {
    out: W,
    speed: Speed,
    animate: bool,
}

impl<W: Write> Player<W> {
    pub fn new(out: W, speed: Speed, animate: bool) -> Self {
        Self { out, speed, animate }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn frame(&mut self, canvas: &Canvas, delay: Duration) -> io::Result<()> {
        if !self.animate {
            return Ok(());
        }
        write!(self.out, "{CLEAR}{}", canvas.render())?;
        self.out.flush()?;
        thread::sleep(delay);
        Ok(())
    }

    /// Replay maze steps over `before`, the board they were generated for.
    pub fn maze(&mut self, before: &Grid, steps: &[MazeStep]) -> io::Result<Canvas> {
        let mut canvas = Canvas::from_board(before);
        let delay = self.speed.step_delay();
        for step in steps {
            let ch = match step.kind {
                StepKind::Wall => '#',
                StepKind::Carve => ' ',
            };
            canvas.set(step.pos(), ch);
            self.frame(&canvas, delay)?;
        }
        Ok(canvas)
    }

    /// Replay the visit order, then the path, over the board of `grid`.
    pub fn search(&mut self, grid: &Grid, solution: &Solution) -> io::Result<Canvas> {
        let mut canvas = Canvas::from_board(grid);
        let delay = self.speed.step_delay();
        for &p in &solution.outcome.visited_in_order {
            canvas.set(p, '.');
            self.frame(&canvas, delay)?;
        }
        let delay = self.speed.path_delay();
        for &p in &solution.path {
            canvas.set(p, '*');
            self.frame(&canvas, delay)?;
        }
        Ok(canvas)
    }

    /// Write `canvas` once, without clearing the screen.
    pub fn show(&mut self, canvas: &Canvas) -> io::Result<()> {
        self.out.write_all(canvas.render().as_bytes())?;
        self.out.flush()
    }
}
