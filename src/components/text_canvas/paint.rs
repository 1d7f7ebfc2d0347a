// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for TextCanvasWidget

use kurbo::{Affine, Stroke};
use masonry::core::render_text;
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::Brush;

use super::TextCanvasWidget;
use crate::item::HighlightOutline;
use crate::theme;

impl TextCanvasWidget {
    // ============================================================================
    // PAINT HELPER METHODS
    // ============================================================================

    pub(super) fn paint_background(&self, scene: &mut Scene, canvas_size: Size) {
        let bg_rect = canvas_size.to_rect();
        fill_color(scene, &bg_rect, theme::canvas::BACKGROUND);

        let border = bg_rect.inset(-0.5);
        scene.stroke(
            &Stroke::new(1.0),
            Affine::IDENTITY,
            &Brush::Solid(theme::canvas::BORDER),
            None,
            &border,
        );
    }

    /// Paint the item: selection, text, caret, then the highlight outline
    pub(super) fn paint_item(&self, scene: &mut Scene) {
        let transform = Affine::translate(self.origin.to_vec2());

        for rect in self.item.selection_rects() {
            fill_color(scene, &(rect + self.origin.to_vec2()), theme::item::SELECTION_FILL);
        }

        let text_origin = self.origin + self.item.text_origin().to_vec2();
        let brushes = vec![Brush::Solid(theme::item::TEXT)];
        render_text(
            scene,
            Affine::translate(text_origin.to_vec2()),
            self.item.layout().layout(),
            &brushes,
            false,
        );

        if self.item.caret_visible() {
            self.item
                .cursor()
                .render(scene, self.item.caret_line(), transform);
        }

        if (self.selected || self.item.focus().has_focus())
            && let Some(outline) =
                HighlightOutline::new(self.item.bounds(), transform, theme::item::TEXT)
        {
            outline.render(scene, transform);
        }
    }
}
