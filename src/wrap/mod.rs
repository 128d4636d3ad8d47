//! Line wrapping and vertical layout
//!
//! The calculation of character coordinates is done in two passes: first the
//! horizontal pass decides the row breaks and x positions, then the vertical
//! pass, which depends on the breaks and on each glyph's ascent/descent,
//! computes y positions and row heights. `WrapAlgorithm` drives both over a
//! single line or a whole paragraph.

mod algorithm;
mod glyph;
mod horizontal;
mod line;
mod vertical;

#[cfg(test)]
pub(crate) mod test_support;

pub use algorithm::{
    WrapAlgorithm, DEFAULT_EMPTY_LINE_HEIGHT, DEFAULT_LINE_SPACE, UNBOUNDED_WIDTH,
};
pub use glyph::{WrapChar, WrapString};
pub use horizontal::{clamp_width, layout_horizontal, HorizontalLayout, MIN_WIDTH};
pub use line::{subline_range, SubLine, WrapColumn, WrapLine};
pub use vertical::{layout_vertical, VerticalLayout};
