//! Geometry primitives: [`Pos`] and [`Range`].
//!
//! Grid coordinates are `(row, col)`: rows grow downward, columns grow to
//! the right. Signed components keep neighbour arithmetic at the grid edge
//! free of underflow; bounds checks happen against a [`Range`].

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell position on the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four orthogonal neighbours in up, down, left, right order.
    ///
    /// Searches that expand neighbours in sequence inherit their tie-breaking
    /// from this order.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// The positions two steps away in up, down, left, right order, each
    /// paired with the position in between.
    #[inline]
    pub const fn jumps_4(self) -> [(Pos, Pos); 4] {
        [
            (self.shift(-2, 0), self.shift(-1, 0)),
            (self.shift(2, 0), self.shift(1, 0)),
            (self.shift(0, -2), self.shift(0, -1)),
            (self.shift(0, 2), self.shift(0, 1)),
        ]
    }

    /// Whether both coordinates are odd (a room on the maze sub-lattice).
    #[inline]
    pub const fn is_odd(self) -> bool {
        self.row % 2 != 0 && self.col % 2 != 0
    }

    /// The midpoint between two positions, rounding toward zero.
    #[inline]
    pub const fn midpoint(self, other: Pos) -> Pos {
        Pos::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    /// Row-major order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Pos,
    pub max: Pos,
}

impl Range {
    /// Create a range from two corners, canonicalized so that `min` ≤ `max`
    /// on each axis.
    #[inline]
    pub fn new(r0: i32, c0: i32, r1: i32, c1: i32) -> Self {
        Self {
            min: Pos::new(r0.min(r1), c0.min(c1)),
            max: Pos::new(r0.max(r1), c0.max(c1)),
        }
    }

    /// The range `[0, rows) × [0, cols)`.
    #[inline]
    pub fn of_size(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows, cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Number of positions in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            let rows = i64::from(self.max.row) - i64::from(self.min.row);
            let cols = i64::from(self.max.col) - i64::from(self.min.col);
            (rows as u64 * cols as u64) as usize
        }
    }

    /// Whether the range contains no positions.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.max.row <= self.min.row || self.max.col <= self.min.col
    }

    /// Whether `p` lies inside the range.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Whether `p` lies strictly inside the range, off the outer ring.
    #[inline]
    pub fn contains_interior(self, p: Pos) -> bool {
        p.row > self.min.row
            && p.row < self.max.row - 1
            && p.col > self.min.col
            && p.col < self.max.col - 1
    }

    /// Intersection of two ranges. Empty if they do not overlap.
    #[inline]
    pub fn intersect(self, other: Range) -> Self {
        let r = Self {
            min: Pos::new(self.min.row.max(other.min.row), self.min.col.max(other.min.col)),
            max: Pos::new(self.max.row.min(other.max.row), self.max.col.min(other.max.col)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// The 3×3 block centred on `p`, clamped to this range.
    #[inline]
    pub fn around(self, p: Pos) -> Self {
        self.intersect(Range::new(p.row - 1, p.col - 1, p.row + 2, p.col + 2))
    }

    /// Row-major iterator over every position in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Pos;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Pos,
}

impl Iterator for RangeIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}
