//! Corners, horizontal edges, and rectangles found in a figure.
//!
//! All coordinates are grid cells: `x` is the column, `y` the row.

use std::fmt;

use crate::render::render_rect;

/// A `+` cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Corner {
    pub x: usize,
    pub y: usize,
}

impl Corner {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A horizontal run of border characters between two corners on one row.
///
/// `left.x < right.x` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub left: Corner,
    pub right: Corner,
}

impl Edge {
    /// Create an edge from two corners on the same row, in either order.
    /// Returns `None` if they are on different rows or are the same cell.
    pub fn new(a: Corner, b: Corner) -> Option<Self> {
        if a.y != b.y || a.x == b.x {
            return None;
        }
        let (left, right) = if a.x < b.x { (a, b) } else { (b, a) };
        Some(Self { left, right })
    }

    pub fn row(&self) -> usize {
        self.left.y
    }

    /// True if `other` spans exactly the same columns
    pub fn spans_same_columns(&self, other: &Edge) -> bool {
        self.left.x == other.left.x && self.right.x == other.right.x
    }
}

/// An axis-aligned rectangle identified by its border coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rect {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl Rect {
    /// Pair two edges into a rectangle, normalizing which one is on top.
    /// Returns `None` unless they span the same columns on different rows.
    pub fn from_edges(a: &Edge, b: &Edge) -> Option<Self> {
        if a.row() == b.row() || !a.spans_same_columns(b) {
            return None;
        }
        let (top, bottom) = if a.row() < b.row() { (a, b) } else { (b, a) };
        Some(Self {
            top: top.row(),
            left: top.left.x,
            bottom: bottom.row(),
            right: top.right.x,
        })
    }

    /// Outer width in characters, borders included
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    /// Outer height in rows, borders included
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Corner; 4] {
        [
            Corner::new(self.left, self.top),
            Corner::new(self.right, self.top),
            Corner::new(self.left, self.bottom),
            Corner::new(self.right, self.bottom),
        ]
    }

    /// Rows strictly between the top and bottom borders
    pub fn interior_rows(&self) -> std::ops::Range<usize> {
        self.top + 1..self.bottom
    }

    /// Columns strictly between the left and right borders
    pub fn interior_columns(&self) -> std::ops::Range<usize> {
        self.left + 1..self.right
    }

    /// Textual rendering of this rectangle, detached from its position
    pub fn render(&self) -> String {
        render_rect(self.width(), self.height())
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Collection of rectangles found in one figure
#[derive(Debug, Default, Clone)]
pub struct RectSet {
    rects: Vec<Rect>,
}

impl RectSet {
    pub fn new() -> Self {
        Self { rects: Vec::new() }
    }

    pub fn insert(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.rects.iter()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Sorted `(width, height)` pairs, for order-independent comparison
    pub fn sizes(&self) -> Vec<(usize, usize)> {
        let mut sizes: Vec<_> = self.rects.iter().map(|r| (r.width(), r.height())).collect();
        sizes.sort_unstable();
        sizes
    }
}

impl IntoIterator for RectSet {
    type Item = Rect;
    type IntoIter = std::vec::IntoIter<Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.into_iter()
    }
}
