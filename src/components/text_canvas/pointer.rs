// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for TextCanvasWidget

use std::time::Instant;

use kurbo::Point;
use masonry::core::{EventCtx, PointerState};

use super::TextCanvasWidget;
use crate::item::ItemEvent;
use crate::settings;

/// Remembers the previous click to recognize double-clicks
#[derive(Debug, Clone, Default)]
pub(super) struct ClickTracker {
    last_click_time: Option<Instant>,
    last_click_position: Option<Point>,
}

impl ClickTracker {
    /// Record a click and report whether it completes a double-click.
    pub(super) fn is_double_click(&mut self, position: Point, now: Instant) -> bool {
        let is_double = if let (Some(last_time), Some(last_pos)) =
            (self.last_click_time, self.last_click_position)
        {
            now.duration_since(last_time) < settings::pointer::DOUBLE_CLICK_TIME
                && position.distance(last_pos) < settings::pointer::DOUBLE_CLICK_DISTANCE
        } else {
            false
        };

        // a third click right after a double-click starts a new pair
        if is_double {
            self.last_click_time = None;
            self.last_click_position = None;
        } else {
            self.last_click_time = Some(now);
            self.last_click_position = Some(position);
        }

        is_double
    }
}

impl TextCanvasWidget {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    /// Handle a primary button press anywhere on the canvas
    pub(super) fn handle_pointer_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let local_pos = ctx.local_position(state.position);
        let item_pos = self.to_item(local_pos);

        if !self.item.bounds().contains(item_pos) {
            // Empty scene area: deselect and drop focus
            tracing::debug!("[TextCanvasWidget] click on empty scene at {:?}", local_pos);
            self.selected = false;
            self.clicks = ClickTracker::default();
            ctx.resign_focus();
            ctx.request_render();
            return;
        }

        self.selected = true;
        ctx.request_focus();

        let event = if self.clicks.is_double_click(local_pos, Instant::now()) {
            ItemEvent::PointerDoubleClick(item_pos)
        } else {
            ItemEvent::PointerDown(item_pos)
        };
        let effects = self.item.handle(event);
        self.apply_event_effects(ctx, effects);
        ctx.request_render();
    }
}
