//! Line wrapping and vertical layout for proportional text
//!
//! Text is turned into glyph handles by a [`tiny_sdk::GlyphSource`], wrapped
//! into rows by [`wrap::WrapAlgorithm`], and read back through the per-line
//! results or the helpers in [`coordinates`].

pub mod builder;
pub mod config;
pub mod coordinates; // Caret placement and hit testing
pub mod error;
pub mod logging;
pub mod wrap;

// Re-export core types
pub use builder::{build_column, build_string};
pub use config::WrapConfig;
pub use error::WrapError;
pub use wrap::{SubLine, WrapAlgorithm, WrapChar, WrapColumn, WrapLine, WrapString};

pub use tiny_font::{FontMetricsSystem, MonospaceMetrics};
pub use tiny_sdk::{GlyphId, GlyphMetrics, GlyphSource, LayoutPos, LayoutRect, MetricsProvider};
