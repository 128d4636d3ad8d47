use tiny_sdk::{GlyphId, LayoutPos};

/// One character instance in a row, plus the position layout computed for it
///
/// `position` is the glyph's top-left corner in layout space: x from the
/// horizontal pass, y from the vertical pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapChar {
    pub glyph: GlyphId,
    pub position: LayoutPos,
    /// Index of this character in the source text
    pub text_index: usize,
}

impl WrapChar {
    pub fn new(glyph: GlyphId, text_index: usize) -> Self {
        Self {
            glyph,
            position: LayoutPos::default(),
            text_index,
        }
    }
}

/// Ordered characters of one logical line
pub type WrapString = Vec<WrapChar>;
