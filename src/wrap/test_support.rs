//! Shared fixtures for the layout unit tests

use tiny_font::MonospaceMetrics;
use tiny_sdk::GlyphMetrics;

use super::{SubLine, WrapString};

/// 10 wide, ascent 8, descent 2 per cell
pub fn test_metrics() -> MonospaceMetrics {
    MonospaceMetrics::new(10.0, 8.0, -2.0)
}

/// Give `ch` its own advance and box width
pub fn set_width(metrics: &mut MonospaceMetrics, ch: char, width: f32) {
    let glyph = GlyphMetrics {
        advance: width,
        width,
        ..metrics.cell_metrics(ch)
    };
    metrics.set_glyph(ch, glyph);
}

pub fn chars_of(metrics: &mut MonospaceMetrics, text: &str) -> WrapString {
    crate::builder::build_string(text, metrics)
}

pub fn starts(sublines: &[SubLine]) -> Vec<usize> {
    sublines.iter().map(|s| s.start).collect()
}
