// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_D: Color = Color::from_rgb8(0x40, 0x40, 0x40);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_B;
const SCENE_BORDER: Color = BASE_D;

// ============================================================================
// TEXT ITEM
// ============================================================================
// Also used as the "window text" color the highlight outline contrasts with
const ITEM_TEXT: Color = BASE_L;

// Caret - bright blue
const CARET: Color = Color::from_rgb8(0x00, 0x7A, 0xFF);

// Select-all background, half transparent
const SELECTION_FILL: Color = Color::from_rgba8(0x00, 0x81, 0xff, 0x80);

// ============================================================================
// STATUS LINE
// ============================================================================
const STATUS_TEXT: Color = Color::from_rgb8(0x80, 0x80, 0x80);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the scene canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
    pub const BORDER: Color = super::SCENE_BORDER;
}

/// Colors for the editable text item
pub mod item {
    use super::Color;
    pub const TEXT: Color = super::ITEM_TEXT;
    pub const CARET: Color = super::CARET;
    pub const SELECTION_FILL: Color = super::SELECTION_FILL;
}

/// Colors for overlay labels
pub mod text {
    use super::Color;
    pub const STATUS: Color = super::STATUS_TEXT;
}

/// Sizes and stroke widths
pub mod size {
    /// Caret line width
    pub const CARET_WIDTH: f64 = 1.0;

    /// Highlight outline pen width (a hairline, as in cosmetic pens)
    pub const HIGHLIGHT_PEN_WIDTH: f64 = 1.0;

    /// Dash pattern for the foreground highlight pen
    pub const HIGHLIGHT_DASHES: [f64; 2] = [4.0, 2.0];
}
