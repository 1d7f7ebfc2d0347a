// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The editable text item.
//!
//! [`EditableText`] owns the text buffer, caret, display font and blink
//! state of one text block on the canvas. It knows nothing about the host
//! toolkit: the host feeds it [`ItemEvent`]s in item-local coordinates and
//! carries out the [`Effect`]s it returns (repaint, clipboard writes, blink
//! timer, pointer icon, input method area). Text shaping goes through the
//! [`TextLayout`] it was built with.
//!
//! Focus and editing follow a small state machine:
//!
//! ```text
//!   Unfocused --click/focus--> Focused --double-click--> Editing
//!       ^                         |                         |
//!       +-------focus lost--------+-------focus lost--------+
//! ```
//!
//! A double-click from any state enters `Editing`. There is no way back from
//! `Editing` to `Focused`; a single click while focused changes nothing.

pub mod event;
pub mod highlight;
pub mod ime;

use kurbo::{Line, Point, Rect, Size, Vec2};
use unicode_general_category::{GeneralCategory, get_general_category};

pub use event::{EditKey, Effect, ItemEvent, KeyPress, Modifiers, PointerIcon};
pub use highlight::HighlightOutline;
pub use ime::{ImeQuery, ImeReply};

use crate::settings;
use crate::text::{FontSpec, TextBuffer, TextCursor, TextLayout};

/// Focus and editing state of the item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Unfocused,
    /// Has keyboard focus but no double-click happened yet
    Focused,
    /// Double-clicked: caret blinking, text-caret pointer icon
    Editing,
}

impl FocusState {
    pub fn has_focus(self) -> bool {
        self != FocusState::Unfocused
    }
}

/// An editable block of text
pub struct EditableText<L> {
    buffer: TextBuffer,
    font: FontSpec,
    layout: L,
    /// Item bounds: laid out text plus the document margin on every side
    bounds: Rect,
    focus: FocusState,
    cursor: TextCursor,
    /// Cached caret segment in item coordinates
    caret: Line,
}

impl<L: TextLayout> EditableText<L> {
    /// Create an item holding `text`, with the caret after the last char.
    pub fn new(text: &str, font: FontSpec, layout: L) -> Self {
        let mut item = Self {
            buffer: TextBuffer::from_text(text),
            font,
            layout,
            bounds: Rect::ZERO,
            focus: FocusState::Unfocused,
            cursor: TextCursor::new(),
            caret: Line::new(Point::ZERO, Point::ZERO),
        };
        item.relayout();
        item.update_caret();
        item
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Caret offset in chars
    pub fn caret(&self) -> usize {
        self.buffer.caret()
    }

    /// Cached caret segment, top to bottom, in item coordinates
    pub fn caret_line(&self) -> Line {
        self.caret
    }

    /// Index of the visual line the caret is on
    pub fn caret_line_index(&self) -> usize {
        self.layout.line_for_offset(self.buffer.caret())
    }

    pub fn selection(&self) -> Option<std::ops::Range<usize>> {
        self.buffer.selection()
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.focus == FocusState::Editing
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Whether the caret should be drawn right now
    pub fn caret_visible(&self) -> bool {
        self.focus.has_focus() && self.cursor.is_visible()
    }

    pub fn cursor(&self) -> &TextCursor {
        &self.cursor
    }

    /// Offset of the laid out text inside the item bounds
    pub fn text_origin(&self) -> Point {
        let margin = settings::document::MARGIN;
        Point::new(margin, margin)
    }

    /// Caret rectangle reported to input methods, one pixel wide
    pub fn caret_rect(&self) -> Rect {
        Rect::new(
            self.caret.p0.x,
            self.caret.p0.y,
            self.caret.p0.x + 1.0,
            self.caret.p1.y,
        )
    }

    /// Rectangles covering the selection, one per visual line
    pub fn selection_rects(&self) -> Vec<Rect> {
        let Some(selection) = self.buffer.selection() else {
            return Vec::new();
        };
        let origin = self.text_origin().to_vec2();

        self.layout
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| {
                line.range.start < selection.end && selection.start < line.range.end
            })
            .map(|(index, line)| {
                let start = selection.start.max(line.range.start);
                let end = selection.end.min(line.range.start + line.visible_len());
                let x0 = self.layout.x_for_offset(index, start);
                let x1 = self.layout.x_for_offset(index, end);
                Rect::new(x0, line.rect.y0, x1.max(x0), line.rect.y1) + origin
            })
            .collect()
    }

    /// Answer a platform input method query
    pub fn query(&self, query: ImeQuery) -> ImeReply {
        match query {
            ImeQuery::CursorRectangle => ImeReply::Rect(self.caret_rect()),
            ImeQuery::Font => ImeReply::Font(self.font.clone()),
            ImeQuery::CursorPosition => ImeReply::Position(self.buffer.caret()),
            ImeQuery::SurroundingText => ImeReply::Text(self.buffer.text()),
            ImeQuery::CurrentSelection => ImeReply::Text(self.buffer.selected_text()),
        }
    }

    /// Move the caret, clamped to the text.
    pub fn set_caret(&mut self, offset: usize) {
        self.buffer.set_caret(offset);
        self.update_caret();
    }

    // ========================================================================
    // EVENT HANDLING
    // ========================================================================

    /// Apply one event and return what the host has to do about it.
    pub fn handle(&mut self, event: ItemEvent) -> Vec<Effect> {
        match event {
            ItemEvent::PointerDown(_) | ItemEvent::FocusGained => self.focus_in(),
            ItemEvent::PointerDoubleClick(position) => self.begin_editing(position),
            ItemEvent::KeyPress(key) => self.key_press(key),
            ItemEvent::FocusLost => self.focus_out(),
            ItemEvent::CompositionCommit(text) | ItemEvent::Paste(text) => {
                self.insert_committed(&text)
            }
            ItemEvent::TimerTick(elapsed) => {
                if self.cursor.update(elapsed) {
                    vec![Effect::Repaint]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn focus_in(&mut self) -> Vec<Effect> {
        if self.focus != FocusState::Unfocused {
            return Vec::new();
        }
        self.focus = FocusState::Focused;
        vec![Effect::Repaint]
    }

    fn focus_out(&mut self) -> Vec<Effect> {
        if self.focus == FocusState::Unfocused {
            return Vec::new();
        }
        self.focus = FocusState::Unfocused;
        self.cursor.stop();
        vec![
            Effect::StopBlink,
            Effect::SetPointerIcon(PointerIcon::Default),
            Effect::Repaint,
        ]
    }

    /// Place the caret under `position` and start editing.
    fn begin_editing(&mut self, position: Point) -> Vec<Effect> {
        let local = position - self.text_origin().to_vec2();
        if let Some(offset) = self.layout.hit_test(local) {
            self.buffer.set_caret(offset);
        }
        self.update_caret();

        if self.focus != FocusState::Editing {
            tracing::info!("[EditableText] editing started at offset {}", self.caret());
        }
        self.focus = FocusState::Editing;
        self.cursor.start();

        vec![
            Effect::StartBlink,
            Effect::SetPointerIcon(PointerIcon::Text),
            Effect::ImeArea(self.caret_rect()),
            Effect::Repaint,
        ]
    }

    fn key_press(&mut self, key: KeyPress) -> Vec<Effect> {
        if !self.focus.has_focus() {
            return Vec::new();
        }

        if key.modifiers.command {
            return self.shortcut(&key);
        }

        match key.key {
            EditKey::ArrowLeft => self.move_caret(|item| item.buffer.move_caret_left()),
            EditKey::ArrowRight => self.move_caret(|item| item.buffer.move_caret_right()),
            EditKey::ArrowUp => self.move_caret(|item| item.move_vertical(-1)),
            EditKey::ArrowDown => self.move_caret(|item| item.move_vertical(1)),
            EditKey::Home => self.move_caret(|item| {
                let line = item.layout.line_for_offset(item.buffer.caret());
                let start = item.layout.lines().get(line).map_or(0, |l| l.range.start);
                item.jump_caret(start)
            }),
            EditKey::End => self.move_caret(|item| {
                let line = item.layout.line_for_offset(item.buffer.caret());
                let end = item.layout.line_end(line);
                item.jump_caret(end)
            }),
            EditKey::PageUp => self.change_font_size(1),
            EditKey::PageDown => self.change_font_size(-1),
            EditKey::Backspace => self.edit(|buffer| {
                let had_selection = buffer.selection().is_some();
                buffer.delete().is_some() || had_selection
            }),
            EditKey::Delete => self.edit(|buffer| {
                let had_selection = buffer.selection().is_some();
                buffer.delete_forward().is_some() || had_selection
            }),
            EditKey::Enter => self.insert("\n"),
            EditKey::Other => match key.text {
                Some(text) if is_insertable(&text) => self.insert(&text),
                _ => Vec::new(),
            },
        }
    }

    /// Command (Ctrl/Cmd) shortcuts
    fn shortcut(&mut self, key: &KeyPress) -> Vec<Effect> {
        let Some(text) = key.text.as_deref() else {
            return Vec::new();
        };

        match text.to_lowercase().as_str() {
            "a" => {
                self.buffer.select_all();
                self.update_caret();
                self.cursor.reset();
                vec![Effect::ImeArea(self.caret_rect()), Effect::Repaint]
            }
            "c" => {
                let copied = match self.buffer.selection() {
                    Some(_) => self.buffer.selected_text(),
                    None => self.buffer.text(),
                };
                vec![Effect::CopyToClipboard(copied)]
            }
            "v" => vec![Effect::RequestPaste],
            _ => Vec::new(),
        }
    }

    fn insert_committed(&mut self, text: &str) -> Vec<Effect> {
        if text.is_empty() || !self.focus.has_focus() {
            return Vec::new();
        }
        self.insert(text)
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    fn insert(&mut self, text: &str) -> Vec<Effect> {
        self.edit(|buffer| {
            buffer.insert_str(text);
            true
        })
    }

    /// Run a text edit; on change re-layout and refresh the caret.
    fn edit(&mut self, apply: impl FnOnce(&mut TextBuffer) -> bool) -> Vec<Effect> {
        if !apply(&mut self.buffer) {
            return Vec::new();
        }

        let mut effects = self.relayout();
        self.update_caret();
        self.cursor.reset();
        effects.push(Effect::TextChanged(self.buffer.text()));
        effects.push(Effect::ImeArea(self.caret_rect()));
        effects.push(Effect::Repaint);
        effects
    }

    /// Run a caret movement; on change refresh the caret.
    fn move_caret(&mut self, apply: impl FnOnce(&mut Self) -> bool) -> Vec<Effect> {
        let had_selection = self.buffer.selection().is_some();
        if !apply(self) && !had_selection {
            return Vec::new();
        }
        // a failed move still drops the selection
        self.buffer.clear_selection();

        self.update_caret();
        self.cursor.reset();
        vec![Effect::ImeArea(self.caret_rect()), Effect::Repaint]
    }

    /// Set the caret, reporting whether it moved.
    fn jump_caret(&mut self, offset: usize) -> bool {
        let before = self.buffer.caret();
        self.buffer.set_caret(offset);
        self.buffer.caret() != before
    }

    /// Move the caret `delta` visual lines, keeping its horizontal position.
    fn move_vertical(&mut self, delta: isize) -> bool {
        let offset = self.buffer.caret();
        let line = self.layout.line_for_offset(offset);
        let Some(target) = line.checked_add_signed(delta) else {
            return false;
        };
        if target >= self.layout.lines().len() {
            return false;
        }

        let x = self.layout.x_for_offset(line, offset);
        let new_offset = self.layout.nearest_offset(target, x);
        self.jump_caret(new_offset)
    }

    fn change_font_size(&mut self, steps: i32) -> Vec<Effect> {
        if !self.font.step_size(steps) {
            return Vec::new();
        }
        tracing::debug!("[EditableText] font: {}", self.font);

        let mut effects = self.relayout();
        self.update_caret();
        effects.push(Effect::ImeArea(self.caret_rect()));
        effects.push(Effect::Repaint);
        effects
    }

    /// Lay the text out again and recompute the bounds.
    fn relayout(&mut self) -> Vec<Effect> {
        let text = self.buffer.text();
        self.layout.rebuild(&text, &self.font);

        let margin = settings::document::MARGIN;
        let size = self.layout.size() + Size::new(2.0 * margin, 2.0 * margin);
        let bounds = Rect::from_origin_size(Point::ZERO, size);
        if bounds == self.bounds {
            return Vec::new();
        }
        self.bounds = bounds;
        vec![Effect::BoundsChanged(bounds)]
    }

    /// Recompute the cached caret segment from the layout.
    fn update_caret(&mut self) {
        let origin: Vec2 = self.text_origin().to_vec2();
        self.caret = match self.layout.caret_line(self.buffer.caret()) {
            Some(line) => Line::new(line.p0 + origin, line.p1 + origin),
            None => {
                let top = self.text_origin();
                Line::new(top, top + Vec2::new(0.0, f64::from(self.font.point_size)))
            }
        };
        tracing::debug!(
            "[EditableText] caret offset={} at {:?}",
            self.buffer.caret(),
            self.caret.p0
        );
    }
}

/// Key text worth inserting: non-empty and free of control characters
/// (Escape, Tab, ...).
fn is_insertable(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| get_general_category(c) != GeneralCategory::Control)
}
