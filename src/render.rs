//! Text rendering of found rectangles.

use std::fmt::Write;
use std::iter::FusedIterator;

use crate::chars::{BLANK, CORNER, H_BORDER, V_BORDER};
use crate::geometry::{Rect, RectSet};

/// Render an empty rectangle of the given outer size.
///
/// Every line, including the last, ends with `\n`. Sizes below 2 have no
/// meaningful drawing; they are clamped so that rendering never panics.
pub fn render_rect(width: usize, height: usize) -> String {
    let inner_width = width.saturating_sub(2);
    let inner_height = height.saturating_sub(2);

    let mut border = String::with_capacity(width + 1);
    border.push(CORNER);
    border.extend(std::iter::repeat(H_BORDER).take(inner_width));
    border.push(CORNER);
    border.push('\n');

    let mut out = String::with_capacity((width + 1) * height);
    out.push_str(&border);
    for _ in 0..inner_height {
        let _ = writeln!(
            out,
            "{}{}{}",
            V_BORDER,
            BLANK.to_string().repeat(inner_width),
            V_BORDER
        );
    }
    out.push_str(&border);
    out
}

/// Renderings of the rectangles found in one figure, produced on demand.
///
/// The iterator is one-shot: once exhausted it stays exhausted, and a fresh
/// one has to be obtained from the figure again.
#[derive(Debug)]
pub struct Rectangles {
    rects: std::vec::IntoIter<Rect>,
}

impl Rectangles {
    pub(crate) fn new(rects: RectSet) -> Self {
        Self {
            rects: rects.into_iter(),
        }
    }
}

impl Iterator for Rectangles {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.rects.next().map(|rect| rect.render())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rects.size_hint()
    }
}

impl ExactSizeIterator for Rectangles {}

impl FusedIterator for Rectangles {}
