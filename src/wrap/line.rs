//! Wrapped line structures
//!
//! Line position convention, using a dummy text where intentional breaks are
//! marked `\n` and automatic wraps are marked `\nn`:
//!
//! ```text
//!  ____________________________________
//! | This text is a dummy example of\nn | Line 0, subline 0, chars 0 - 31
//! | a wrapped line break.\n            | Line 0, subline 1, chars 31 - 52
//! | \n                                 | Line 1, no characters
//! | The text ends here.                | Line 2, subline 0, chars 0 - 19
//!  ‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾
//! ```
//!
//! `\nn` breaks are computed and never stored as characters. Subline indices are
//! positions in the owning line's character sequence, not in the source text.

use std::collections::BTreeMap;
use std::ops::Range;

use super::glyph::{WrapChar, WrapString};

/// One visual row of a logical line
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubLine {
    /// First character index of the row; the row runs to the next subline's start
    pub start: usize,
    pub width: f32,
    pub height: f32,
    /// Top of the row in layout space
    pub rel_y_pos: f32,
    pub max_ascent: f32,
    /// Largest descent below the baseline, as a positive magnitude
    pub max_descent: f32,
}

impl SubLine {
    pub fn new(start: usize) -> Self {
        Self {
            start,
            ..Default::default()
        }
    }
}

/// Character range covered by `sublines[idx]` in a sequence of `len` characters
pub fn subline_range(sublines: &[SubLine], idx: usize, len: usize) -> Range<usize> {
    let start = sublines[idx].start;
    let end = sublines.get(idx + 1).map_or(len, |next| next.start);
    start..end
}

/// A logical line: its characters and the rows computed for them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrapLine {
    pub sublines: Vec<SubLine>,
    pub chars: WrapString,
    /// Text index where the line begins, also meaningful for empty lines
    pub text_start: usize,
    pub relative_y_pos: f32,
    pub height: f32,
}

impl WrapLine {
    pub fn new(chars: WrapString) -> Self {
        let text_start = chars.first().map_or(0, |c| c.text_index);
        Self {
            chars,
            text_start,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character range of the `idx`-th row
    pub fn subline_range(&self, idx: usize) -> Range<usize> {
        subline_range(&self.sublines, idx, self.chars.len())
    }

    /// Row holding the character at `char_idx`
    ///
    /// Past-the-end indices map to the last row. `None` until the line is laid out.
    pub fn subline_of(&self, char_idx: usize) -> Option<usize> {
        if self.sublines.is_empty() {
            return None;
        }
        let after = self.sublines.partition_point(|s| s.start <= char_idx);
        Some(after.saturating_sub(1))
    }

    /// Forget every computed position and row
    pub fn clear_layout(&mut self) {
        self.sublines.clear();
        self.relative_y_pos = 0.0;
        self.height = 0.0;
    }
}

/// Paragraph of logical lines, kept in line-index order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrapColumn {
    lines: BTreeMap<usize, WrapLine>,
}

impl WrapColumn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character to logical line `line`, creating the line if needed
    pub fn push(&mut self, ch: WrapChar, line: usize) {
        self.lines
            .entry(line)
            .or_insert_with(|| WrapLine {
                text_start: ch.text_index,
                ..Default::default()
            })
            .chars
            .push(ch);
    }

    /// Make sure logical line `line` exists, even if it never gets characters
    pub fn ensure_line(&mut self, line: usize) -> &mut WrapLine {
        self.lines.entry(line).or_default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, line: usize) -> Option<&WrapLine> {
        self.lines.get(&line)
    }

    pub fn get_mut(&mut self, line: usize) -> Option<&mut WrapLine> {
        self.lines.get_mut(&line)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &WrapLine)> {
        self.lines.iter().map(|(idx, line)| (*idx, line))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut WrapLine)> {
        self.lines.iter_mut().map(|(idx, line)| (*idx, line))
    }

    pub fn lines(&self) -> impl Iterator<Item = &WrapLine> {
        self.lines.values()
    }

    /// Sum of the laid-out line heights
    pub fn total_height(&self) -> f32 {
        self.lines.values().map(|line| line.height).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_sdk::GlyphId;

    fn line_with_rows(len: usize, starts: &[usize]) -> WrapLine {
        let chars = (0..len).map(|i| WrapChar::new(GlyphId(1), i)).collect();
        let mut line = WrapLine::new(chars);
        line.sublines = starts.iter().map(|&s| SubLine::new(s)).collect();
        line
    }

    #[test]
    fn test_subline_ranges_partition() {
        let line = line_with_rows(10, &[0, 4, 7]);
        assert_eq!(line.subline_range(0), 0..4);
        assert_eq!(line.subline_range(1), 4..7);
        assert_eq!(line.subline_range(2), 7..10);
    }

    #[test]
    fn test_subline_of() {
        let line = line_with_rows(10, &[0, 4, 7]);
        assert_eq!(line.subline_of(0), Some(0));
        assert_eq!(line.subline_of(3), Some(0));
        assert_eq!(line.subline_of(4), Some(1));
        assert_eq!(line.subline_of(9), Some(2));
        assert_eq!(line.subline_of(42), Some(2));
        assert_eq!(WrapLine::default().subline_of(0), None);
    }

    #[test]
    fn test_column_keeps_index_order() {
        let mut column = WrapColumn::new();
        column.push(WrapChar::new(GlyphId(1), 5), 2);
        column.ensure_line(1);
        column.push(WrapChar::new(GlyphId(1), 0), 0);

        let order: Vec<usize> = column.iter().map(|(idx, _)| idx).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(column.get(2).unwrap().text_start, 5);
        assert!(column.get(1).unwrap().is_empty());
        assert_eq!(column.len(), 3);
    }

    #[test]
    fn test_clear_layout() {
        let mut line = line_with_rows(3, &[0]);
        line.height = 12.0;
        line.relative_y_pos = 4.0;
        line.clear_layout();

        assert!(line.sublines.is_empty());
        assert_eq!(line.height, 0.0);
        assert_eq!(line.chars.len(), 3);
    }
}
