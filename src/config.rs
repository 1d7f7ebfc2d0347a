// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration loaded from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! stock window with "please enter text!" at (100, 100).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::settings::document::font_size;
use crate::text::font::{DEFAULT_FAMILY, DEFAULT_POINT_SIZE};
use crate::text::FontSpec;

/// Semantic problems in an otherwise well-formed config file
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("font family must not be empty")]
    EmptyFontFamily,
    #[error("font size {0} is outside {min}..={max}", min = font_size::MIN, max = font_size::MAX)]
    FontSizeOutOfRange(f32),
    #[error("wrap width must be positive, got {0}")]
    InvalidWrapWidth(f64),
    #[error("window size must be positive, got {0}x{1}")]
    InvalidWindowSize(f64, f64),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub item: ItemConfig,
}

/// Host window settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// The text item placed in the scene
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    pub text: String,
    pub font_family: String,
    pub font_size: f32,
    /// Top-left corner of the item in the scene
    pub position: [f64; 2],
    /// Maximum line width before wrapping; unlimited when absent
    pub wrap_width: Option<f64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Canvas Text".to_string(),
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            text: "please enter text!".to_string(),
            font_family: DEFAULT_FAMILY.to_string(),
            font_size: DEFAULT_POINT_SIZE,
            position: [100.0, 100.0],
            wrap_width: None,
        }
    }
}

impl ItemConfig {
    pub fn font(&self) -> FontSpec {
        FontSpec::new(self.font_family.clone(), self.font_size)
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source).context("Invalid config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&source)
            .with_context(|| format!("Failed to load config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let item = &self.item;
        if item.font_family.trim().is_empty() {
            return Err(ConfigError::EmptyFontFamily);
        }
        if !(font_size::MIN..=font_size::MAX).contains(&item.font_size) {
            return Err(ConfigError::FontSizeOutOfRange(item.font_size));
        }
        if let Some(width) = item.wrap_width
            && width <= 0.0
        {
            return Err(ConfigError::InvalidWrapWidth(width));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::InvalidWindowSize(
                self.window.width,
                self.window.height,
            ));
        }
        Ok(())
    }
}
