//! Text → character sequences, resolving every character through a glyph source

use tiny_sdk::GlyphSource;

use crate::wrap::{WrapChar, WrapColumn, WrapString};

/// One row sequence for the whole text; `'\n'` stays in as a hard break
pub fn build_string(text: &str, source: &mut dyn GlyphSource) -> WrapString {
    text.chars()
        .enumerate()
        .map(|(idx, ch)| WrapChar::new(source.glyph_for(ch), idx))
        .collect()
}

/// Split text into logical lines at `'\n'`
///
/// The terminating `'\n'` of a line is not stored, but its text index is still
/// consumed, so `text_index` always matches the character index in `text`.
/// Every line exists in the column even when it is empty, and there is always
/// at least line 0.
pub fn build_column(text: &str, source: &mut dyn GlyphSource) -> WrapColumn {
    let mut column = WrapColumn::new();
    let mut line = 0;
    column.ensure_line(line);

    for (idx, ch) in text.chars().enumerate() {
        if ch == '\n' {
            line += 1;
            column.ensure_line(line).text_start = idx + 1;
            continue;
        }
        column.push(WrapChar::new(source.glyph_for(ch), idx), line);
    }

    tracing::debug!(lines = column.len(), "built column");
    column
}
