//! Metrics cache - owns every glyph metrics record handed out as a `GlyphId`

use ahash::HashMap;
use tiny_sdk::{GlyphId, GlyphMetrics, GlyphSource, MetricsProvider};

/// Flat store of metrics records addressed by `GlyphId`
///
/// Slot 0 always holds the `.notdef` record, so lookups never fail.
#[derive(Debug, Clone)]
pub struct MetricsCache {
    records: Vec<GlyphMetrics>,
    by_char: HashMap<char, GlyphId>,
}

impl MetricsCache {
    pub fn new(notdef: GlyphMetrics) -> Self {
        Self {
            records: vec![notdef],
            by_char: HashMap::default(),
        }
    }

    /// Register (or replace) the record for `ch`
    pub fn insert(&mut self, ch: char, metrics: GlyphMetrics) -> GlyphId {
        if let Some(&id) = self.by_char.get(&ch) {
            self.records[id.index()] = metrics;
            return id;
        }

        let id = GlyphId(self.records.len() as u32);
        self.records.push(metrics);
        self.by_char.insert(ch, id);
        id
    }

    pub fn lookup(&self, ch: char) -> Option<GlyphId> {
        self.by_char.get(&ch).copied()
    }

    pub fn get(&self, id: GlyphId) -> &GlyphMetrics {
        self.records.get(id.index()).unwrap_or(&self.records[0])
    }

    /// Number of records, `.notdef` included
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_char.is_empty()
    }
}

impl Default for MetricsCache {
    fn default() -> Self {
        Self::new(GlyphMetrics::default())
    }
}

impl MetricsProvider for MetricsCache {
    fn metrics(&self, glyph: GlyphId) -> &GlyphMetrics {
        self.get(glyph)
    }
}

/// A bare cache only knows the glyphs it was given; anything else is `.notdef`
impl GlyphSource for MetricsCache {
    fn glyph_for(&mut self, ch: char) -> GlyphId {
        self.lookup(ch).unwrap_or(GlyphId::NOTDEF)
    }
}
