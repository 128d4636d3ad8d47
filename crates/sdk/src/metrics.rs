//! Glyph metrics interface between the font subsystem and the wrap engine
//!
//! Metrics records are owned by whoever implements [`MetricsProvider`]. Layout
//! code only ever holds a [`GlyphId`] and reads records through the provider
//! passed into each call.

/// Handle to a metrics record inside a provider's cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GlyphId(pub u32);

impl GlyphId {
    /// Reserved handle for the `.notdef` fallback record
    pub const NOTDEF: GlyphId = GlyphId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable per-glyph metrics
///
/// Vertical values follow font conventions: `ascent` is the distance from the
/// baseline up to the top of the glyph, `descent` is negative below the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphMetrics {
    /// Horizontal distance the layout cursor moves after this glyph
    pub advance: f32,
    /// Horizontal bearing applied to the glyph origin
    pub offset_x: f32,
    /// Vertical adjustment applied after baseline alignment
    pub offset_y: f32,
    pub ascent: f32,
    pub descent: f32,
    /// Visible glyph box
    pub width: f32,
    pub height: f32,
    /// A line may break right after this glyph
    pub is_breakable: bool,
    /// Hard line break
    pub is_linebreak: bool,
    /// Takes up no visible glyph width when moved to a new row
    pub is_whitespace: bool,
}

impl GlyphMetrics {
    /// Visible extent used for overflow tests
    pub fn extent(&self) -> f32 {
        self.width + self.offset_x
    }
}

/// Read-only access to metrics records by handle
pub trait MetricsProvider {
    /// Metrics for `glyph`. Unknown handles resolve to the `.notdef` record.
    fn metrics(&self, glyph: GlyphId) -> &GlyphMetrics;
}

/// Maps characters to handles, measuring and caching glyphs on first use
pub trait GlyphSource: MetricsProvider {
    fn glyph_for(&mut self, ch: char) -> GlyphId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_includes_bearing() {
        let m = GlyphMetrics {
            advance: 10.0,
            offset_x: 1.5,
            width: 7.0,
            ..Default::default()
        };
        assert_eq!(m.extent(), 8.5);
    }

    #[test]
    fn test_notdef_is_first_slot() {
        assert_eq!(GlyphId::NOTDEF.index(), 0);
        assert_eq!(GlyphId::default(), GlyphId::NOTDEF);
    }
}
