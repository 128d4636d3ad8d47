//! Tiny Wrap SDK
//!
//! Shared vocabulary between the font subsystem and the wrap engine:
//! geometry types, the glyph metrics record and the traits used to look it up.

pub use crate::metrics::{GlyphId, GlyphMetrics, GlyphSource, MetricsProvider};
pub use crate::types::{LayoutPos, LayoutRect, LogicalPixels};

pub use bytemuck;
pub use bytemuck::{Pod, Zeroable};

pub mod metrics;
pub mod toml_utils;
pub mod types;
