//! Vertical pass: row heights and baseline alignment
//!
//! Runs after the horizontal pass over the same subline list. Row boundaries are
//! taken as given; only the vertical fields are written.

use tiny_sdk::{LogicalPixels, MetricsProvider};

use super::glyph::WrapChar;
use super::line::{subline_range, SubLine};

/// Totals produced by the vertical pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalLayout {
    /// Sum of row heights
    pub height: f32,
    /// Max ascent of the first row
    pub first_max_ascent: f32,
    /// Max descent magnitude of the first row
    pub first_max_descent: f32,
}

/// Stack rows from `start_y` down and set every character's y
///
/// All characters of a row share the baseline set by the row's tallest
/// ascender. Row height is `(max_ascent + max_descent) * line_space`.
pub fn layout_vertical(
    sublines: &mut [SubLine],
    chars: &mut [WrapChar],
    metrics: &dyn MetricsProvider,
    start_y: f32,
    line_space: f32,
) -> VerticalLayout {
    let mut result = VerticalLayout::default();
    let mut cursor_y = start_y;

    for idx in 0..sublines.len() {
        let range = subline_range(sublines, idx, chars.len());
        let row_chars = &mut chars[range];

        let mut max_ascent = 0.0f32;
        let mut max_descent = 0.0f32;
        for ch in row_chars.iter() {
            let m = metrics.metrics(ch.glyph);
            max_ascent = max_ascent.max(m.ascent);
            max_descent = max_descent.max(-m.descent);
        }

        for ch in row_chars.iter_mut() {
            let m = metrics.metrics(ch.glyph);
            ch.position.y = LogicalPixels(cursor_y + max_ascent - m.ascent + m.offset_y);
        }

        let row = &mut sublines[idx];
        row.rel_y_pos = cursor_y;
        row.max_ascent = max_ascent;
        row.max_descent = max_descent;
        row.height = (max_ascent + max_descent) * line_space;
        cursor_y += row.height;

        if idx == 0 {
            result.first_max_ascent = max_ascent;
            result.first_max_descent = max_descent;
        }
    }

    result.height = cursor_y - start_y;
    result
}
