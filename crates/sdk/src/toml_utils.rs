//! Resilient TOML parsing utilities
//!
//! Provides graceful error handling for TOML configuration files:
//! - Syntax errors → use defaults
//! - Type errors → use defaults
//! - Missing files → use defaults
//!
//! # Example Usage
//!
//! ```ignore
//! use tiny_sdk::toml_utils;
//!
//! let config: WrapConfig = toml_utils::load_or_default("wrap.toml");
//! ```

use serde::de::DeserializeOwned;
use std::path::Path;

/// Result of loading a TOML file
pub enum TomlLoadResult<T> {
    /// Successfully loaded and parsed
    Loaded(T),
    /// File doesn't exist (or can't be read), using defaults
    NotFound(T),
    /// Syntax error in TOML, using defaults
    SyntaxError { error: String, defaults: T },
}

impl<T> TomlLoadResult<T> {
    /// The config to use, whatever happened while loading
    pub fn into_inner(self) -> T {
        match self {
            TomlLoadResult::Loaded(config) | TomlLoadResult::NotFound(config) => config,
            TomlLoadResult::SyntaxError { defaults, .. } => defaults,
        }
    }
}

/// Load a TOML file with graceful error handling
///
/// Returns the parsed config or defaults if anything goes wrong.
/// Logs warnings for errors but never panics or fails.
pub fn load_or_default<T: Default + DeserializeOwned>(path: impl AsRef<Path>) -> T {
    let path = path.as_ref();
    match load(path) {
        TomlLoadResult::Loaded(config) => config,
        TomlLoadResult::NotFound(defaults) => {
            tracing::info!(path = %path.display(), "config not found, using defaults");
            defaults
        }
        TomlLoadResult::SyntaxError { error, defaults } => {
            tracing::warn!(path = %path.display(), %error, "TOML syntax error, using defaults");
            defaults
        }
    }
}

/// Load a TOML file with detailed error information
pub fn load<T: Default + DeserializeOwned>(path: &Path) -> TomlLoadResult<T> {
    if !path.exists() {
        return TomlLoadResult::NotFound(T::default());
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read config");
            return TomlLoadResult::NotFound(T::default());
        }
    };

    parse(&content)
}

/// Parse TOML text, falling back to defaults on syntax errors
pub fn parse<T: Default + DeserializeOwned>(content: &str) -> TomlLoadResult<T> {
    match toml::from_str::<T>(content) {
        Ok(config) => TomlLoadResult::Loaded(config),
        Err(e) => TomlLoadResult::SyntaxError {
            error: e.to_string(),
            defaults: T::default(),
        },
    }
}
