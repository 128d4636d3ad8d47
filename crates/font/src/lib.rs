//! Font metrics provider for the wrap engine
//!
//! Measures glyphs with fontdue at a fixed pixel size and stores the results in a
//! [`MetricsCache`]. Layout only sees `GlyphId` handles and reads records through
//! the `MetricsProvider` trait.

mod cache;
mod monospace;

pub use cache::MetricsCache;
pub use monospace::MonospaceMetrics;

use std::path::Path;

use tiny_sdk::{GlyphId, GlyphMetrics, GlyphSource, MetricsProvider};

/// Tabs advance by this many spaces
const TAB_WIDTH: f32 = 4.0;

/// Candidate fonts with decent coverage, tried in order by [`FontMetricsSystem::from_system`]
#[cfg(target_os = "macos")]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.dfont",
    "/System/Library/Fonts/Helvetica.ttc",
];
#[cfg(target_os = "windows")]
const SYSTEM_FONT_PATHS: &[&str] = &["C:\\Windows\\Fonts\\consola.ttf", "C:\\Windows\\Fonts\\arial.ttf"];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
];

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font: {0}")]
    Parse(&'static str),

    #[error("invalid font size {0}")]
    InvalidSize(f32),

    #[error("no usable system font found")]
    NoSystemFont,
}

/// Line-breaking flags derived from the character itself
pub fn classify(ch: char) -> (bool, bool, bool) {
    let is_linebreak = ch == '\n';
    let is_whitespace = ch.is_whitespace();
    let is_breakable = is_whitespace || ch == '-';
    (is_breakable, is_linebreak, is_whitespace)
}

/// fontdue-backed metrics source with a lazily filled cache
pub struct FontMetricsSystem {
    font: fontdue::Font,
    size_px: f32,
    cache: MetricsCache,
}

impl FontMetricsSystem {
    /// Parse a font from memory and measure at `size_px`
    pub fn from_bytes(data: &[u8], size_px: f32) -> Result<Self, FontError> {
        if !(size_px.is_finite() && size_px > 0.0) {
            return Err(FontError::InvalidSize(size_px));
        }

        let settings = fontdue::FontSettings {
            scale: size_px,
            ..Default::default()
        };
        let font = fontdue::Font::from_bytes(data, settings).map_err(FontError::Parse)?;

        let mut system = Self {
            font,
            size_px,
            cache: MetricsCache::default(),
        };
        // .notdef takes the measurement of the replacement character
        let notdef = system.measure('\u{FFFD}');
        system.cache = MetricsCache::new(notdef);

        tracing::debug!(size_px, glyphs = system.font.glyph_count(), "font loaded");
        Ok(system)
    }

    pub fn from_file(path: impl AsRef<Path>, size_px: f32) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_bytes(&data, size_px)
    }

    /// First loadable font from the platform's usual locations
    pub fn from_system(size_px: f32) -> Result<Self, FontError> {
        for path in SYSTEM_FONT_PATHS {
            match Self::from_file(path, size_px) {
                Ok(system) => {
                    tracing::info!(path, "loaded system font");
                    return Ok(system);
                }
                Err(FontError::InvalidSize(size)) => return Err(FontError::InvalidSize(size)),
                Err(err) => tracing::debug!(path, error = %err, "system font unavailable"),
            }
        }
        Err(FontError::NoSystemFont)
    }

    /// Measure a character without touching the cache
    pub fn measure(&self, ch: char) -> GlyphMetrics {
        let (is_breakable, is_linebreak, is_whitespace) = classify(ch);

        if is_linebreak {
            return GlyphMetrics {
                is_breakable,
                is_linebreak,
                is_whitespace,
                ..Default::default()
            };
        }

        if ch == '\t' {
            let space = self.font.metrics(' ', self.size_px);
            return GlyphMetrics {
                advance: space.advance_width * TAB_WIDTH,
                is_breakable,
                is_linebreak,
                is_whitespace,
                ..Default::default()
            };
        }

        let metrics = self.font.metrics(ch, self.size_px);
        let bounds = metrics.bounds;
        GlyphMetrics {
            advance: metrics.advance_width,
            offset_x: bounds.xmin,
            offset_y: 0.0,
            ascent: bounds.ymin + bounds.height,
            descent: bounds.ymin,
            width: bounds.width,
            height: bounds.height,
            is_breakable,
            is_linebreak,
            is_whitespace,
        }
    }
}

impl MetricsProvider for FontMetricsSystem {
    fn metrics(&self, glyph: GlyphId) -> &GlyphMetrics {
        self.cache.get(glyph)
    }
}

impl GlyphSource for FontMetricsSystem {
    fn glyph_for(&mut self, ch: char) -> GlyphId {
        if let Some(id) = self.cache.lookup(ch) {
            return id;
        }
        let metrics = self.measure(ch);
        let id = self.cache.insert(ch, metrics);
        tracing::trace!(?ch, glyphs = self.cache.len(), "measured glyph");
        id
    }
}
