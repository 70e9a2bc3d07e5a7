//! Corner, edge, and rectangle finding.
//!
//! Decomposition runs three passes over an immutable [`Grid`], each feeding
//! the next: corners, then horizontal edges between corners, then rectangles
//! formed by pairs of edges.

use std::fmt;

use log::{debug, trace};

use crate::chars::*;
use crate::geometry::*;
use crate::grid::Grid;

/// Find every minimal rectangle drawn in the grid
pub fn find_all(grid: &Grid) -> RectSet {
    let corners = find_corners(grid);
    let edges = find_edges(grid, &corners);
    let rects = find_rectangles(grid, &edges);

    debug!(
        "{}x{} figure: {} corners, {} edges, {} rectangles",
        grid.width,
        grid.height,
        corners.len(),
        edges.len(),
        rects.len()
    );

    rects
}

// ============================================================================
// Corners
// ============================================================================

/// Every `+` in the grid, in row-major order
pub fn find_corners(grid: &Grid) -> Vec<Corner> {
    let mut corners = Vec::new();
    for y in 0..grid.height {
        for x in 0..grid.row_len(y) {
            if grid.matches(x, y, is_corner) {
                corners.push(Corner::new(x, y));
            }
        }
    }
    corners
}

// ============================================================================
// Horizontal edges
// ============================================================================

/// True if every cell from `edge.left` to `edge.right` inclusive is `-` or `+`
fn is_h_edge(grid: &Grid, edge: &Edge) -> bool {
    let y = edge.row();
    (edge.left.x..=edge.right.x).all(|x| grid.matches(x, y, is_h_border))
}

/// Every pair of corners on one row joined by an unbroken horizontal border
pub fn find_edges(grid: &Grid, corners: &[Corner]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (i, &a) in corners.iter().enumerate() {
        for &b in &corners[i + 1..] {
            if let Some(edge) = Edge::new(a, b) {
                if is_h_edge(grid, &edge) {
                    edges.push(edge);
                }
            }
        }
    }
    edges
}

// ============================================================================
// Rectangles
// ============================================================================

/// Why a candidate rectangle was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    /// Corners on both borders at this column with no gap between them
    SolidDivider { column: usize },
    /// Left or right side broken on this row
    BrokenSide { row: usize },
    /// Non-blank cell inside the rectangle
    FilledInterior { column: usize, row: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SolidDivider { column } => write!(f, "solid divider at column {column}"),
            Self::BrokenSide { row } => write!(f, "broken side on row {row}"),
            Self::FilledInterior { column, row } => {
                write!(f, "interior not blank at column {column}, row {row}")
            }
        }
    }
}

fn rejection(grid: &Grid, rect: &Rect) -> Option<Rejection> {
    for x in rect.interior_columns() {
        let divides =
            grid.matches(x, rect.top, is_corner) && grid.matches(x, rect.bottom, is_corner);
        if divides && !rect.interior_rows().any(|y| grid.matches(x, y, is_blank)) {
            return Some(Rejection::SolidDivider { column: x });
        }
    }

    for y in rect.interior_rows() {
        if !grid.matches(rect.left, y, is_v_border)
            || !grid.matches(rect.right, y, is_v_border)
        {
            return Some(Rejection::BrokenSide { row: y });
        }
        if let Some(x) = rect.interior_columns().find(|&x| !grid.matches(x, y, is_blank)) {
            return Some(Rejection::FilledInterior { column: x, row: y });
        }
    }

    None
}

/// True if `rect` has unbroken sides and an empty, undivided interior
pub fn is_minimal_rect(grid: &Grid, rect: &Rect) -> bool {
    rejection(grid, rect).is_none()
}

/// Every pair of edges that bounds a minimal rectangle
pub fn find_rectangles(grid: &Grid, edges: &[Edge]) -> RectSet {
    let mut rects = RectSet::new();
    for (i, a) in edges.iter().enumerate() {
        for b in &edges[i + 1..] {
            let Some(rect) = Rect::from_edges(a, b) else {
                continue;
            };
            match rejection(grid, &rect) {
                None => rects.insert(rect),
                Some(reason) => trace!("rejected {:?}: {}", rect, reason),
            }
        }
    }
    rects
}
