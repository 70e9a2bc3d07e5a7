//! Immutable character grid built from a figure.

use crate::chars::is_figure_char;
use crate::error::FigureError;

/// A figure split into rows of characters.
///
/// Rows keep their own length; nothing is padded. Reads outside a row
/// return `None`, which never matches a border or blank predicate.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    /// Length of the longest row
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Grid {
    /// Parse a figure leniently. Any character is accepted.
    pub fn new(figure: &str) -> Self {
        if figure.is_empty() {
            return Self::default();
        }

        let rows: Vec<Vec<char>> = figure
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();

        Self {
            rows,
            width,
            height,
        }
    }

    /// Parse a figure, refusing characters other than `+`, `-`, `|` and space.
    pub fn parse_strict(figure: &str) -> Result<Self, FigureError> {
        let grid = Self::new(figure);
        for (row, line) in grid.rows.iter().enumerate() {
            if let Some(column) = line.iter().position(|&c| !is_figure_char(c)) {
                return Err(FigureError::UnexpectedChar {
                    ch: line[column],
                    row,
                    column,
                });
            }
        }
        Ok(grid)
    }

    /// Character at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// True if the cell exists and satisfies `pred`
    pub fn matches(&self, x: usize, y: usize, pred: impl Fn(char) -> bool) -> bool {
        self.get(x, y).is_some_and(pred)
    }

    /// Length of row `y`, or zero past the last row
    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        let grid = Grid::new("+--+\n|  |\n+--+");
        assert_eq!(grid.width, 4);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.get(0, 0), Some('+'));
        assert_eq!(grid.get(1, 1), Some(' '));
    }

    #[test]
    fn test_ragged_rows() {
        let grid = Grid::new("+---+\n|\n+---+");
        assert_eq!(grid.width, 5);
        assert_eq!(grid.row_len(1), 1);
        assert_eq!(grid.get(4, 1), None);
        assert!(!grid.matches(4, 1, |c| c == ' '));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new("+-+");
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.row_len(7), 0);
    }

    #[test]
    fn test_empty_figure() {
        let grid = Grid::new("");
        assert!(grid.is_empty());
        assert_eq!(grid.width, 0);
    }

    #[test]
    fn test_crlf_rows() {
        let grid = Grid::new("+-+\r\n+-+\r\n");
        assert_eq!(grid.row_len(0), 3);
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn test_parse_strict() {
        assert!(Grid::parse_strict("+-+\n| |\n+-+\n").is_ok());

        let err = Grid::parse_strict("+-+\n|x|\n+-+").unwrap_err();
        assert_eq!(
            err,
            FigureError::UnexpectedChar {
                ch: 'x',
                row: 1,
                column: 1,
            }
        );
    }
}
