//! Fixed-cell metrics, for terminal-style layout and for running without a font file

use tiny_sdk::{GlyphId, GlyphMetrics, GlyphSource, MetricsProvider};

use crate::{classify, MetricsCache};

/// Tabs advance by this many cells
const TAB_CELLS: f32 = 4.0;

/// Every glyph occupies one cell of the same advance, ascent and descent
#[derive(Debug, Clone)]
pub struct MonospaceMetrics {
    advance: f32,
    ascent: f32,
    descent: f32,
    cache: MetricsCache,
}

impl MonospaceMetrics {
    /// `descent` follows font conventions and is usually negative
    pub fn new(advance: f32, ascent: f32, descent: f32) -> Self {
        let mut metrics = Self {
            advance,
            ascent,
            descent,
            cache: MetricsCache::default(),
        };
        let notdef = metrics.cell_metrics('\u{FFFD}');
        metrics.cache = MetricsCache::new(notdef);
        metrics
    }

    /// Cell size derived from a font size, roughly matching a programming font
    pub fn for_font_size(size_px: f32) -> Self {
        Self::new(size_px * 0.6, size_px * 0.8, -size_px * 0.2)
    }

    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// Metrics a character gets unless overridden
    pub fn cell_metrics(&self, ch: char) -> GlyphMetrics {
        let (is_breakable, is_linebreak, is_whitespace) = classify(ch);
        if is_linebreak {
            return GlyphMetrics {
                is_breakable,
                is_linebreak,
                is_whitespace,
                ..Default::default()
            };
        }

        let cells = if ch == '\t' { TAB_CELLS } else { 1.0 };
        GlyphMetrics {
            advance: self.advance * cells,
            offset_x: 0.0,
            offset_y: 0.0,
            ascent: self.ascent,
            descent: self.descent,
            width: self.advance * cells,
            height: self.ascent - self.descent,
            is_breakable,
            is_linebreak,
            is_whitespace,
        }
    }

    /// Replace the metrics of one character, e.g. a double-width glyph
    pub fn set_glyph(&mut self, ch: char, metrics: GlyphMetrics) -> GlyphId {
        self.cache.insert(ch, metrics)
    }
}

impl MetricsProvider for MonospaceMetrics {
    fn metrics(&self, glyph: GlyphId) -> &GlyphMetrics {
        self.cache.get(glyph)
    }
}

impl GlyphSource for MonospaceMetrics {
    fn glyph_for(&mut self, ch: char) -> GlyphId {
        if let Some(id) = self.cache.lookup(ch) {
            return id;
        }
        let metrics = self.cell_metrics(ch);
        self.cache.insert(ch, metrics)
    }
}
