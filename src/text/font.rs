// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Display font of a text item: family and point size

use std::borrow::Cow;

use parley::{FontFamily, FontStack, GenericFamily};

use crate::settings::document::font_size;

/// Family name used when nothing else is configured
pub const DEFAULT_FAMILY: &str = "sans-serif";

/// Point size used when nothing else is configured
pub const DEFAULT_POINT_SIZE: f32 = 12.0;

/// A font family plus point size
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub point_size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, DEFAULT_POINT_SIZE)
    }
}

impl FontSpec {
    pub fn new(family: impl Into<String>, point_size: f32) -> Self {
        Self {
            family: family.into(),
            point_size: point_size.clamp(font_size::MIN, font_size::MAX),
        }
    }

    /// Step the point size by `steps` increments, clamped to the allowed
    /// range.
    ///
    /// Returns false when the size did not change (already at a limit).
    pub fn step_size(&mut self, steps: i32) -> bool {
        let new_size = (self.point_size + steps as f32 * font_size::STEP)
            .clamp(font_size::MIN, font_size::MAX);
        if new_size == self.point_size {
            return false;
        }
        self.point_size = new_size;
        true
    }

    /// The font stack handed to parley.
    ///
    /// CSS generic names ("serif", "monospace", ...) map to parley's generic
    /// families, anything else is looked up by name.
    pub fn font_stack(&self) -> FontStack<'static> {
        let family = match GenericFamily::parse(&self.family) {
            Some(generic) => FontFamily::Generic(generic),
            None => FontFamily::Named(Cow::Owned(self.family.clone())),
        };
        FontStack::Single(family)
    }
}

impl std::fmt::Display for FontSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}pt", self.family, self.point_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_size() {
        let mut font = FontSpec::new("serif", 12.0);
        assert!(font.step_size(1));
        assert_eq!(font.point_size, 13.0);
        assert!(font.step_size(-2));
        assert_eq!(font.point_size, 11.0);
    }

    #[test]
    fn test_step_size_stops_at_minimum() {
        let mut font = FontSpec::new("serif", 1.0);
        assert!(!font.step_size(-1));
        assert_eq!(font.point_size, 1.0);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(FontSpec::new("serif", 0.0).point_size, 1.0);
    }

    #[test]
    fn test_generic_family_maps_to_generic_stack() {
        let font = FontSpec::new("monospace", 12.0);
        assert!(matches!(
            font.font_stack(),
            FontStack::Single(FontFamily::Generic(GenericFamily::Monospace))
        ));

        let font = FontSpec::new("Noto Sans", 12.0);
        assert!(matches!(
            font.font_stack(),
            FontStack::Single(FontFamily::Named(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(FontSpec::default().to_string(), "sans-serif 12pt");
    }
}
