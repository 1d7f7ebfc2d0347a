// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, pen widths) belongs in `theme.rs`.
//! Values a user may want to change per run (initial text, font, position)
//! live in the TOML config instead, see `config.rs`.

use std::time::Duration;

// ============================================================================
// CARET SETTINGS
// ============================================================================
/// Caret blink half-period in milliseconds
const CARET_BLINK_INTERVAL_MS: u64 = 500;

// ============================================================================
// POINTER SETTINGS
// ============================================================================
/// Maximum time between two clicks of a double-click
const DOUBLE_CLICK_TIME_MS: u64 = 500;

/// Maximum pointer travel between two clicks of a double-click (pixels)
const DOUBLE_CLICK_DISTANCE_PX: f64 = 10.0;

// ============================================================================
// DOCUMENT SETTINGS
// ============================================================================
/// Blank space between the item bounds and the laid out text (pixels)
const DOCUMENT_MARGIN: f64 = 4.0;

/// Smallest point size PageDown can reach
const MIN_FONT_SIZE: f32 = 1.0;

/// Largest point size PageUp can reach
const MAX_FONT_SIZE: f32 = 512.0;

/// Point size change per PageUp/PageDown press
const FONT_SIZE_STEP: f32 = 1.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Caret settings
pub mod caret {
    use super::Duration;

    /// Time the caret stays shown (or hidden) before toggling
    pub const BLINK_INTERVAL: Duration = Duration::from_millis(super::CARET_BLINK_INTERVAL_MS);
}

/// Double-click detection
pub mod pointer {
    use super::Duration;

    /// Maximum delay between clicks
    pub const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(super::DOUBLE_CLICK_TIME_MS);

    /// Maximum distance between clicks
    pub const DOUBLE_CLICK_DISTANCE: f64 = super::DOUBLE_CLICK_DISTANCE_PX;
}

/// Text document settings
pub mod document {
    /// Margin around the text inside the item bounds
    pub const MARGIN: f64 = super::DOCUMENT_MARGIN;

    /// Font size limits and step
    pub mod font_size {
        pub const MIN: f32 = super::super::MIN_FONT_SIZE;
        pub const MAX: f32 = super::super::MAX_FONT_SIZE;
        pub const STEP: f32 = super::super::FONT_SIZE_STEP;
    }
}
