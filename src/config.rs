//! Layout configuration, loaded from `wrap.toml`
//!
//! Every field has a default, so a partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tiny_font::FontMetricsSystem;
use tiny_sdk::toml_utils::{self, TomlLoadResult};

use crate::error::WrapError;
use crate::wrap::{WrapAlgorithm, DEFAULT_EMPTY_LINE_HEIGHT, DEFAULT_LINE_SPACE};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WrapConfig {
    /// Available width per non-empty line; the last one repeats. Empty means unbounded.
    #[serde(default)]
    pub widths: Vec<f32>,
    #[serde(default = "default_line_space")]
    pub line_space: f32,
    #[serde(default = "default_empty_line_height")]
    pub default_empty_line_height: f32,
    /// Where the first character of a single line starts
    #[serde(default)]
    pub x_offset: f32,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Path to a TTF/OTF file; the system font when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

fn default_line_space() -> f32 { DEFAULT_LINE_SPACE }
fn default_empty_line_height() -> f32 { DEFAULT_EMPTY_LINE_HEIGHT }
fn default_font_size() -> f32 { 14.0 }

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            widths: Vec::new(),
            line_space: default_line_space(),
            default_empty_line_height: default_empty_line_height(),
            x_offset: 0.0,
            font_size: default_font_size(),
            font: None,
        }
    }
}

impl WrapConfig {
    /// Load from a TOML file
    ///
    /// A missing file gives the defaults. Unreadable files and syntax errors are
    /// reported, unlike `toml_utils::load_or_default`, because the path was
    /// asked for explicitly.
    pub fn load(path: &Path) -> Result<Self, WrapError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| WrapError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        match toml_utils::parse(&content) {
            TomlLoadResult::SyntaxError { error, .. } => Err(WrapError::Config {
                path: path.display().to_string(),
                message: error,
            }),
            result => {
                tracing::info!(path = %path.display(), "loaded wrap config");
                Ok(result.into_inner())
            }
        }
    }

    /// Effective settings as TOML, in the same shape `load` reads
    pub fn to_toml(&self) -> Result<String, WrapError> {
        toml::to_string_pretty(self).map_err(|e| WrapError::Config {
            path: String::from("<memory>"),
            message: e.to_string(),
        })
    }

    /// Open the configured font at the configured size, or the system font
    pub fn font_metrics(&self) -> Result<FontMetricsSystem, WrapError> {
        let metrics = match &self.font {
            Some(path) => FontMetricsSystem::from_file(path, self.font_size)?,
            None => FontMetricsSystem::from_system(self.font_size)?,
        };
        Ok(metrics)
    }

    /// Push the layout settings into an algorithm without recalculating
    pub fn apply(&self, wrap: &mut WrapAlgorithm) {
        wrap.set_widths(&self.widths, None);
        wrap.set_line_space(self.line_space, None);
        wrap.set_default_empty_line_height(self.default_empty_line_height, None);
    }
}
