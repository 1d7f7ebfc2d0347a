// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection/focus outline drawn around an item's bounds.
//!
//! Two hairline rectangles are stroked on top of each other: a solid one in
//! a color contrasting with the foreground, then a dashed one in the
//! foreground color. The pair stays visible on any background.

use kurbo::{Affine, Rect, Stroke};
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};

use crate::theme;

/// Geometry and pens of a highlight outline
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightOutline {
    /// Outline rectangle in item coordinates, inset by half a pen
    pub rect: Rect,
    pub contrast: Color,
    pub foreground: Color,
}

impl HighlightOutline {
    /// Compute the outline of `bounds` painted through `transform`.
    ///
    /// Returns `None` when the outline would be invisible: the transform
    /// collapses a unit square, or the bounds map to less than a pixel in
    /// either direction.
    pub fn new(bounds: Rect, transform: Affine, foreground: Color) -> Option<Self> {
        let unit = transform.transform_rect_bbox(Rect::new(0.0, 0.0, 1.0, 1.0));
        if unit.width().max(unit.height()) <= f64::EPSILON {
            return None;
        }

        let mapped = transform.transform_rect_bbox(bounds);
        if mapped.width().min(mapped.height()) < 1.0 {
            return None;
        }

        let pad = theme::size::HIGHLIGHT_PEN_WIDTH / 2.0;
        Some(Self {
            rect: bounds.inset(-pad),
            contrast: contrast_color(foreground),
            foreground,
        })
    }

    /// Stroke the outline: contrast pen first, dashed foreground on top.
    pub fn render(&self, scene: &mut Scene, transform: Affine) {
        let solid = Stroke::new(theme::size::HIGHLIGHT_PEN_WIDTH);
        scene.stroke(
            &solid,
            transform,
            &Brush::Solid(self.contrast),
            None,
            &self.rect,
        );

        let dashed = Stroke::new(theme::size::HIGHLIGHT_PEN_WIDTH)
            .with_dashes(0.0, theme::size::HIGHLIGHT_DASHES);
        scene.stroke(
            &dashed,
            transform,
            &Brush::Solid(self.foreground),
            None,
            &self.rect,
        );
    }
}

/// Per channel: bright (> 127) becomes 0, dark becomes 255.
pub fn contrast_color(foreground: Color) -> Color {
    let [r, g, b, _] = foreground.to_rgba8().to_u8_array();
    let flip = |channel: u8| if channel > 127 { 0 } else { 255 };
    Color::from_rgb8(flip(r), flip(g), flip(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_color() {
        let light = Color::from_rgb8(0xc0, 0x20, 0x80);
        assert_eq!(
            contrast_color(light).to_rgba8().to_u8_array(),
            [0, 255, 255, 255]
        );
        let black = Color::from_rgb8(0, 0, 0);
        assert_eq!(
            contrast_color(black).to_rgba8().to_u8_array(),
            [255, 255, 255, 255]
        );
    }

    #[test]
    fn test_outline_is_inset_by_half_pen() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
        let outline = HighlightOutline::new(bounds, Affine::IDENTITY, theme::item::TEXT).unwrap();
        assert_eq!(outline.rect, Rect::new(0.5, 0.5, 99.5, 19.5));
    }

    #[test]
    fn test_skipped_when_collapsed() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert!(HighlightOutline::new(bounds, Affine::scale(0.0), theme::item::TEXT).is_none());
    }

    #[test]
    fn test_skipped_below_one_pixel() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
        // 20 * 0.04 = 0.8px tall
        assert!(HighlightOutline::new(bounds, Affine::scale(0.04), theme::item::TEXT).is_none());
        assert!(HighlightOutline::new(bounds, Affine::scale(0.1), theme::item::TEXT).is_some());
    }

    #[test]
    fn test_empty_bounds_skipped() {
        assert!(HighlightOutline::new(Rect::ZERO, Affine::IDENTITY, theme::item::TEXT).is_none());
    }
}
