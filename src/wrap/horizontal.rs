//! Horizontal pass: decides where rows break and places every character on x
//!
//! Single left-to-right scan. The scan remembers where the pending word started
//! (the character after the last breakable one) so that, on overflow, the whole
//! word can move to the next row instead of being split.

use tiny_sdk::{GlyphMetrics, LogicalPixels, MetricsProvider};

use super::glyph::WrapChar;
use super::line::SubLine;

/// Narrowest column the pass accepts
pub const MIN_WIDTH: f32 = 1.0;

/// Rows found by the horizontal pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalLayout {
    /// Row boundaries; only `start` and `width` are filled in
    pub sublines: Vec<SubLine>,
    /// Width of the last row
    pub width: f32,
}

/// Raise widths below [`MIN_WIDTH`] (or NaN) to the floor
pub fn clamp_width(width: f32) -> f32 {
    if width >= MIN_WIDTH {
        width
    } else {
        MIN_WIDTH
    }
}

#[inline]
fn place(ch: &mut WrapChar, metrics: &GlyphMetrics, cursor_x: &mut f32) {
    ch.position.x = LogicalPixels(*cursor_x + metrics.offset_x);
    *cursor_x += metrics.advance;
}

/// Break `chars` into rows no wider than `width` and set each character's x
///
/// Rows start at `x_offset`. A character too wide for an empty row is placed
/// alone and allowed to overflow. Hard line breaks always open a new row at
/// the following index.
pub fn layout_horizontal(
    chars: &mut [WrapChar],
    metrics: &dyn MetricsProvider,
    width: f32,
    x_offset: f32,
) -> HorizontalLayout {
    let width = clamp_width(width);
    if chars.is_empty() {
        return HorizontalLayout::default();
    }

    let mut sublines = vec![SubLine::new(0)];
    let mut cursor_x = x_offset;

    // Pending word: first index and the x where it begins. Reset to the row
    // start with zero x, which makes a word that began with the row too long
    // to move.
    let mut word_idx = 0usize;
    let mut word_x = 0.0f32;

    for idx in 0..chars.len() {
        let m = metrics.metrics(chars[idx].glyph);

        if m.is_breakable {
            word_idx = idx + 1;
            word_x = cursor_x + m.advance;
        }

        if m.is_linebreak {
            chars[idx].position.x = LogicalPixels(cursor_x);
            if let Some(row) = sublines.last_mut() {
                row.width = cursor_x;
            }
            sublines.push(SubLine::new(idx + 1));
            cursor_x = x_offset;
            word_idx = idx + 1;
            word_x = 0.0;
            continue;
        }

        let extent = m.extent();
        let row_start = sublines.last().map_or(0, |row| row.start);

        // An empty row takes anything, even if it overflows, so row starts
        // stay strictly increasing for glyphs wider than the column
        if extent + cursor_x <= width || idx == row_start {
            place(&mut chars[idx], m, &mut cursor_x);
            continue;
        }

        let word_width = cursor_x - word_x;
        let row_end_x = cursor_x;
        cursor_x = x_offset;

        let mut row = SubLine::new(idx);
        let closed_width;

        if extent + word_width > width {
            // Word plus this character can't fit a fresh row either: leave the
            // word where it is and only move the character
            tracing::trace!(idx, "breaking inside word");
            closed_width = row_end_x;
            place(&mut chars[idx], m, &mut cursor_x);
        } else {
            // The overflowing character is itself breakable: keep it with the
            // new row rather than stranding it at the end of the previous one
            if word_idx == idx + 1 {
                word_idx = idx;
            }

            tracing::trace!(idx, word_start = word_idx, "moving word to next row");
            let mut x = x_offset;
            for ch in &mut chars[word_idx..=idx] {
                let cm = metrics.metrics(ch.glyph);
                if cm.is_whitespace {
                    // Keeps its bearing but takes no width
                    ch.position.x = LogicalPixels(x + cm.offset_x);
                } else {
                    place(ch, cm, &mut x);
                }
            }
            row.start = word_idx;
            closed_width = row_end_x.min(word_x);
            cursor_x = x;
        }

        if let Some(prev) = sublines.last_mut() {
            prev.width = closed_width;
        }
        sublines.push(row);

        word_idx = row.start;
        word_x = 0.0;
    }

    if let Some(row) = sublines.last_mut() {
        row.width = cursor_x;
    }

    HorizontalLayout {
        sublines,
        width: cursor_x,
    }
}
