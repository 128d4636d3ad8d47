//! Mapping between text positions and layout coordinates
//!
//! Caret positions are insertion indices into the source text: caret `n` sits
//! before the character with text index `n`. Everything here reads the results
//! of the last `WrapAlgorithm::recalculate`; nothing is recomputed.

use tiny_sdk::{LayoutPos, LayoutRect, MetricsProvider};

use crate::wrap::{WrapAlgorithm, WrapColumn, WrapLine};

/// Caret width in logical pixels
const CARET_WIDTH: f32 = 1.0;

/// Logical line containing the caret, counted from the `'\n'`s before it
pub fn line_of_text_index(text: &str, caret: usize) -> usize {
    text.chars().take(caret).filter(|&c| c == '\n').count()
}

/// Top of the row holding character `char_idx` of `line`
fn row_top(line: &WrapLine, char_idx: usize) -> f32 {
    line.subline_of(char_idx)
        .map_or(line.relative_y_pos, |row| line.sublines[row].rel_y_pos)
}

/// Top-left corner of the caret at `caret` within logical line `line`
///
/// The caret sits on the left edge of the first character at or after it. Past
/// the last character it sits on that character's right edge.
pub fn locate_caret(
    column: &WrapColumn,
    metrics: &dyn MetricsProvider,
    line: usize,
    caret: usize,
) -> LayoutPos {
    let Some(wrap_line) = column.get(line) else {
        return LayoutPos::default();
    };

    if let Some(idx) = wrap_line.chars.iter().position(|c| c.text_index >= caret) {
        let ch = &wrap_line.chars[idx];
        return LayoutPos::new(ch.position.x.0, row_top(wrap_line, idx));
    }

    match wrap_line.chars.last() {
        Some(last) => {
            let advance = metrics.metrics(last.glyph).advance;
            let idx = wrap_line.chars.len() - 1;
            LayoutPos::new(last.position.x.0 + advance, row_top(wrap_line, idx))
        }
        None => LayoutPos::new(0.0, wrap_line.relative_y_pos),
    }
}

/// Caret rectangle, sized from the first row's ascent and descent and
/// centered in the extra line spacing
pub fn caret_rect(
    column: &WrapColumn,
    metrics: &dyn MetricsProvider,
    wrap: &WrapAlgorithm,
    line: usize,
    caret: usize,
) -> LayoutRect {
    let pos = locate_caret(column, metrics, line, caret);
    let glyph_height = wrap.first_max_ascent() + wrap.first_max_descent();
    let padding = glyph_height * (wrap.line_space() - 1.0) / 2.0;
    LayoutRect::new(pos.x.0, pos.y.0 + padding, CARET_WIDTH, glyph_height)
}

/// Caret position closest to a point in layout space
///
/// Picks the logical line and then the row under `pos.y` (clamping above and
/// below), then the first character in that row whose midpoint lies right of
/// `pos.x`. `None` for an empty column.
pub fn hit_test(
    column: &WrapColumn,
    metrics: &dyn MetricsProvider,
    pos: LayoutPos,
) -> Option<usize> {
    let mut target = None;
    for line in column.lines() {
        if target.is_some() && line.relative_y_pos > pos.y.0 {
            break;
        }
        target = Some(line);
    }
    let line = target?;

    if line.sublines.is_empty() {
        return Some(line.text_start);
    }

    let row = line
        .sublines
        .partition_point(|s| s.rel_y_pos <= pos.y.0)
        .saturating_sub(1);
    let range = line.subline_range(row);
    let row_chars = &line.chars[range];

    for ch in row_chars {
        let m = metrics.metrics(ch.glyph);
        if m.is_linebreak {
            return Some(ch.text_index);
        }
        if ch.position.x.0 + m.advance / 2.0 > pos.x.0 {
            return Some(ch.text_index);
        }
    }

    // Right of the row: after its last character, or the row start if it has none
    Some(
        row_chars
            .last()
            .map_or(line.text_start, |last| last.text_index + 1),
    )
}
