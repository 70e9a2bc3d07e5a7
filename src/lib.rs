//! Decompose ASCII art figures into their minimal rectangles.
//!
//! A figure is drawn with `+` corners, `-` and `|` borders, and blank
//! interiors. Every rectangle that is not itself split by an inner border
//! is reported, rendered on its own.
//!
//! # Example
//!
//! ```rust
//! let figure = "+---+--+\n|   |  |\n+---+--+\n";
//!
//! let mut found: Vec<String> = aarect::rectangles(figure).collect();
//! found.sort();
//!
//! assert_eq!(found, ["+--+\n|  |\n+--+\n", "+---+\n|   |\n+---+\n"]);
//! ```
//!
//! Output order is unspecified.

mod chars;
mod error;
mod finder;
mod geometry;
mod grid;
mod render;

pub use error::FigureError;
pub use finder::{find_corners, find_edges, find_rectangles, is_minimal_rect};
pub use geometry::{Corner, Edge, Rect, RectSet};
pub use grid::Grid;
pub use render::{render_rect, Rectangles};

/// Find the minimal rectangles of a figure and render each one.
///
/// Malformed parts of the figure are skipped; this never fails.
pub fn rectangles(figure: &str) -> Rectangles {
    Rectangles::new(decompose(figure))
}

/// Find the minimal rectangles of a figure, keeping their positions.
pub fn decompose(figure: &str) -> RectSet {
    finder::find_all(&Grid::new(figure))
}

/// Like [`rectangles`], but refuses figures containing anything other
/// than `+`, `-`, `|` and space.
pub fn try_rectangles(figure: &str) -> Result<Rectangles, FigureError> {
    let grid = Grid::parse_strict(figure)?;
    Ok(Rectangles::new(finder::find_all(&grid)))
}
