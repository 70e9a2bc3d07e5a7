//! Character classification for rectangle borders.

/// Corner of a rectangle
pub const CORNER: char = '+';

/// Horizontal border
pub const H_BORDER: char = '-';

/// Vertical border
pub const V_BORDER: char = '|';

/// Empty cell inside a rectangle
pub const BLANK: char = ' ';

pub fn is_corner(c: char) -> bool {
    c == CORNER
}

/// Characters allowed along a top or bottom border
pub fn is_h_border(c: char) -> bool {
    c == H_BORDER || c == CORNER
}

/// Characters allowed along a left or right border
pub fn is_v_border(c: char) -> bool {
    c == V_BORDER || c == CORNER
}

pub fn is_blank(c: char) -> bool {
    c == BLANK
}

/// Characters a figure may legally contain
pub fn is_figure_char(c: char) -> bool {
    matches!(c, CORNER | H_BORDER | V_BORDER | BLANK)
}
