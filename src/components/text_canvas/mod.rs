// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene canvas widget hosting one editable text item

mod keyboard;
mod paint;
mod pointer;
mod view;

pub use view::text_canvas_view;

use std::time::Duration;

use kurbo::{Point, Rect};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, CursorIcon, EventCtx, Ime, LayoutCtx, PaintCtx,
    PointerButton, PointerButtonEvent, PointerEvent, PropertiesMut, PropertiesRef, QueryCtx,
    RegisterCtx, TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;

use crate::components::clipboard::Clipboard;
use crate::config::ItemConfig;
use crate::item::{EditableText, Effect, ItemEvent, PointerIcon};
use crate::text::ParleyLayout;
use pointer::ClickTracker;

/// Canvas showing a single editable text item at a fixed scene position
pub struct TextCanvasWidget {
    pub(super) item: EditableText<ParleyLayout>,

    /// Top-left corner of the item in canvas coordinates
    pub(super) origin: Point,

    /// The item was clicked and not deselected since
    pub(super) selected: bool,

    /// Canvas size
    pub(super) size: Size,

    pub(super) pointer_icon: PointerIcon,

    pub(super) clipboard: Clipboard,

    clicks: ClickTracker,
}

/// What the toolkit has to be asked for after the item handled an event
#[derive(Debug, Default)]
struct HostRequests {
    repaint: bool,
    anim_frame: bool,
    ime_area: Option<Rect>,
    text_changed: Option<String>,
}

impl TextCanvasWidget {
    pub fn new(config: &ItemConfig) -> Self {
        let [x, y] = config.position;
        Self {
            item: EditableText::new(
                &config.text,
                config.font(),
                ParleyLayout::new(config.wrap_width),
            ),
            origin: Point::new(x, y),
            selected: false,
            size: Size::new(800.0, 600.0),
            pointer_icon: PointerIcon::Default,
            clipboard: Clipboard::new(),
            clicks: ClickTracker::default(),
        }
    }

    /// Canvas point to item-local point
    pub(super) fn to_item(&self, point: Point) -> Point {
        point - self.origin.to_vec2()
    }

    /// Item bounds in canvas coordinates
    pub(super) fn item_rect(&self) -> Rect {
        self.item.bounds() + self.origin.to_vec2()
    }

    /// Carry out the effects that need no toolkit context and collect the
    /// rest.
    fn absorb(&mut self, effects: Vec<Effect>, requests: &mut HostRequests) {
        for effect in effects {
            match effect {
                Effect::Repaint | Effect::BoundsChanged(_) => requests.repaint = true,
                Effect::StartBlink => requests.anim_frame = true,
                // the blink stops by no longer requesting frames
                Effect::StopBlink => requests.anim_frame = false,
                Effect::SetPointerIcon(icon) => self.pointer_icon = icon,
                Effect::CopyToClipboard(text) => {
                    tracing::debug!("[TextCanvasWidget] copy {} chars", text.chars().count());
                    self.clipboard.set_text(&text);
                }
                Effect::RequestPaste => {
                    if let Some(text) = self.clipboard.get_text() {
                        let effects = self.item.handle(ItemEvent::Paste(text));
                        self.absorb(effects, requests);
                    }
                }
                Effect::ImeArea(rect) => {
                    requests.ime_area = Some(rect + self.origin.to_vec2());
                }
                Effect::TextChanged(text) => requests.text_changed = Some(text),
            }
        }
    }

    /// Apply item effects from an event pass.
    pub(super) fn apply_event_effects(&mut self, ctx: &mut EventCtx<'_>, effects: Vec<Effect>) {
        let mut requests = HostRequests::default();
        self.absorb(effects, &mut requests);

        if requests.repaint {
            ctx.request_render();
        }
        if requests.anim_frame {
            ctx.request_anim_frame();
        }
        if let Some(area) = requests.ime_area {
            ctx.set_ime_area(area);
        }
        if let Some(text) = requests.text_changed {
            ctx.submit_action::<TextChanged>(TextChanged { text });
        }
    }

    /// Apply item effects from an update pass.
    fn apply_update_effects(&mut self, ctx: &mut UpdateCtx<'_>, effects: Vec<Effect>) {
        let mut requests = HostRequests::default();
        self.absorb(effects, &mut requests);

        if requests.repaint {
            ctx.request_render();
        }
        if requests.anim_frame {
            ctx.request_anim_frame();
        }
        if requests.text_changed.is_some() {
            tracing::warn!("[TextCanvasWidget] text changed outside an event pass");
        }
    }

    /// Replace the item after a configuration change.
    pub(super) fn reset_item(&mut self, config: &ItemConfig) {
        *self = Self {
            size: self.size,
            ..Self::new(config)
        };
    }
}

/// Action emitted when the item's text was edited
#[derive(Debug, Clone)]
pub struct TextChanged {
    pub text: String,
}

impl Widget for TextCanvasWidget {
    type Action = TextChanged;

    fn accepts_focus(&self) -> bool {
        true
    }

    fn accepts_text_input(&self) -> bool {
        true
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, _props: &mut PropertiesMut<'_>, event: &Update) {
        if let Update::FocusChanged(focused) = event {
            tracing::debug!("[TextCanvasWidget] focus changed: {}", focused);
            let event = if *focused {
                ItemEvent::FocusGained
            } else {
                ItemEvent::FocusLost
            };
            let effects = self.item.handle(event);
            self.apply_update_effects(ctx, effects);
        }
    }

    fn on_anim_frame(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        interval: u64,
    ) {
        let effects = self
            .item
            .handle(ItemEvent::TimerTick(Duration::from_nanos(interval)));
        self.apply_update_effects(ctx, effects);

        if self.item.cursor().is_running() {
            ctx.request_anim_frame();
        }
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        // Use all available space (expand to fill the window)
        let size = bc.max();
        self.size = size;
        size
    }

    fn paint(&mut self, _ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.paint_background(scene, self.size);
        self.paint_item(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        if let PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            state,
            ..
        }) = event
        {
            self.handle_pointer_down(ctx, state);
        }
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        use masonry::core::keyboard::KeyState;

        let item_event = match event {
            TextEvent::Keyboard(key_event) if key_event.state == KeyState::Down => {
                tracing::debug!("[TextCanvasWidget::on_text_event] key: {:?}", key_event.key);
                ItemEvent::KeyPress(keyboard::key_press(key_event))
            }
            TextEvent::Ime(Ime::Commit(text)) => ItemEvent::CompositionCommit(text.clone()),
            _ => return,
        };

        let effects = self.item.handle(item_event);
        if !effects.is_empty() {
            ctx.set_handled();
        }
        self.apply_event_effects(ctx, effects);
    }

    fn get_cursor(&self, _ctx: &QueryCtx<'_>, pos: Point) -> CursorIcon {
        let over_item = self.item_rect().contains(pos);
        match self.pointer_icon {
            PointerIcon::Text if over_item => CursorIcon::Text,
            _ => CursorIcon::Default,
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::MultilineTextInput
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_value(self.item.text());
        node.set_label(format!("Text item, {}", self.item.font()));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn test_item_rect_follows_position() {
        let config = ItemConfig {
            position: [30.0, 40.0],
            ..ItemConfig::default()
        };
        let widget = TextCanvasWidget::new(&config);
        assert_eq!(widget.item_rect().origin(), Point::new(30.0, 40.0));
        assert_eq!(widget.to_item(Point::new(35.0, 50.0)), Point::new(5.0, 10.0));
    }

    #[test]
    fn test_absorb_collects_requests() {
        let mut widget = TextCanvasWidget::new(&ItemConfig::default());
        let mut requests = HostRequests::default();
        widget.absorb(
            vec![
                Effect::StartBlink,
                Effect::SetPointerIcon(PointerIcon::Text),
                Effect::ImeArea(Rect::new(1.0, 2.0, 2.0, 14.0)),
                Effect::TextChanged("x".to_string()),
            ],
            &mut requests,
        );

        assert!(requests.anim_frame);
        assert!(!requests.repaint);
        assert_eq!(widget.pointer_icon, PointerIcon::Text);
        assert_eq!(
            requests.ime_area,
            Some(Rect::new(1.0, 2.0, 2.0, 14.0) + Vec2::new(100.0, 100.0))
        );
        assert_eq!(requests.text_changed.as_deref(), Some("x"));
    }

    #[test]
    fn test_stop_blink_cancels_frames() {
        let mut widget = TextCanvasWidget::new(&ItemConfig::default());
        let mut requests = HostRequests::default();
        widget.absorb(vec![Effect::StartBlink, Effect::StopBlink], &mut requests);
        assert!(!requests.anim_frame);
    }
}
