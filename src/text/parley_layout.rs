// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Text layout backed by parley, used for on-screen rendering

use kurbo::{Rect, Size};
use masonry::core::{BrushIndex, StyleProperty};
use parley::{Affinity, Cursor, FontContext, Layout, LayoutContext};

use super::font::FontSpec;
use super::layout::{LayoutLine, TextLayout};

/// Line height used for synthetic lines, relative to the point size
const FALLBACK_LINE_HEIGHT_PER_POINT: f64 = 1.2;

/// A parley layout of the item's text, plus the contexts needed to rebuild
/// it.
pub struct ParleyLayout {
    font_cx: FontContext,
    layout_cx: LayoutContext<BrushIndex>,
    layout: Layout<BrushIndex>,
    /// Text the layout was built from, for byte <-> char conversion
    text: String,
    wrap_width: Option<f64>,
    lines: Vec<LayoutLine>,
    size: Size,
}

impl ParleyLayout {
    pub fn new(wrap_width: Option<f64>) -> Self {
        Self {
            font_cx: FontContext::default(),
            layout_cx: LayoutContext::new(),
            layout: Layout::new(),
            text: String::new(),
            wrap_width,
            lines: Vec::new(),
            size: Size::ZERO,
        }
    }

    /// The shaped layout, for painting with `render_text`.
    pub fn layout(&self) -> &Layout<BrushIndex> {
        &self.layout
    }

    fn byte_to_char(&self, byte: usize) -> usize {
        self.text
            .char_indices()
            .take_while(|(index, _)| *index < byte)
            .count()
    }

    fn char_to_byte(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(index, _)| index)
    }

    /// Whether line `line` exists in parley's layout, as opposed to the
    /// synthetic lines added for empty text or a trailing paragraph break.
    fn is_shaped(&self, line: usize) -> bool {
        line < self.layout.len()
    }
}

impl TextLayout for ParleyLayout {
    fn rebuild(&mut self, text: &str, font: &FontSpec) {
        self.text = text.to_string();

        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, 1.0, true);
        builder.push_default(StyleProperty::FontSize(font.point_size));
        builder.push_default(StyleProperty::FontStack(font.font_stack()));
        builder.push_default(StyleProperty::Brush(BrushIndex(0)));
        self.layout = builder.build(text);
        self.layout
            .break_all_lines(self.wrap_width.map(|width| width as f32));

        let width = f64::from(self.layout.width());
        let text_len = self.text.len();
        let mut lines: Vec<LayoutLine> = Vec::with_capacity(self.layout.len());
        for line in self.layout.lines() {
            // the last line's range can run one byte past the text
            let byte_range = line.text_range();
            let end = byte_range.end.min(text_len);
            let start = byte_range.start.min(end);
            let hard_break = self
                .text
                .get(start..end)
                .is_some_and(|line_text| line_text.ends_with('\n'));

            // line boxes are half-open and stacked from y = 0
            let top = lines.last().map_or(0.0, |last: &LayoutLine| last.rect.y1);
            let bottom = top + f64::from(line.metrics().line_height);
            lines.push(LayoutLine {
                range: self.byte_to_char(start)..self.byte_to_char(end),
                rect: Rect::new(0.0, top, width, bottom),
                hard_break,
            });
        }

        // Parley may not emit a line after a final paragraph break, but the
        // caret still needs somewhere to live.
        let char_len = self.text.chars().count();
        let needs_tail = lines.last().is_none_or(|last| last.hard_break);
        if needs_tail {
            let height = lines.last().map_or(
                f64::from(font.point_size) * FALLBACK_LINE_HEIGHT_PER_POINT,
                |last| last.rect.height(),
            );
            let top = lines.last().map_or(0.0, |last| last.rect.y1);
            lines.push(LayoutLine {
                range: char_len..char_len,
                rect: Rect::new(0.0, top, width, top + height),
                hard_break: false,
            });
        }

        let height = lines.last().map_or(0.0, |last| last.rect.y1);
        self.size = Size::new(width, height);
        self.lines = lines;

        tracing::debug!(
            "[ParleyLayout::rebuild] font={}, lines={}, size={:?}",
            font,
            self.lines.len(),
            self.size
        );
    }

    fn size(&self) -> Size {
        self.size
    }

    fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    fn x_for_offset(&self, line: usize, offset: usize) -> f64 {
        if !self.is_shaped(line) {
            return 0.0;
        }
        let cursor = Cursor::from_byte_index(
            &self.layout,
            self.char_to_byte(offset),
            Affinity::Downstream,
        );
        cursor.geometry(&self.layout, 0.0).x0
    }

    fn offset_for_x(&self, line: usize, x: f64) -> usize {
        let Some(current) = self.lines.get(line) else {
            return 0;
        };
        if !self.is_shaped(line) {
            return current.range.start;
        }
        let y = current.rect.center().y;
        let cursor = Cursor::from_point(&self.layout, x as f32, y as f32);
        self.byte_to_char(cursor.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{EditKey, EditableText, ItemEvent, KeyPress};
    use kurbo::Point;

    fn layout(text: &str, wrap_width: Option<f64>) -> ParleyLayout {
        let mut layout = ParleyLayout::new(wrap_width);
        layout.rebuild(text, &FontSpec::default());
        layout
    }

    /// Every caret offset has a caret segment on the line it belongs to.
    fn assert_carets_on_lines(layout: &ParleyLayout, char_len: usize) {
        for offset in 0..=char_len {
            let index = layout.line_for_offset(offset);
            let line = &layout.lines()[index];
            let caret = layout.caret_line(offset).expect("caret segment");
            assert_eq!(caret.p0.y, line.rect.y0, "offset {offset}");
            assert_eq!(caret.p1.y, line.rect.y1, "offset {offset}");
            assert!(caret.p1.y > caret.p0.y, "offset {offset}");
        }
    }

    #[test]
    fn test_empty_text() {
        let layout = layout("", None);
        assert_eq!(layout.lines().len(), 1);
        assert_eq!(layout.lines()[0].range, 0..0);
        assert!(!layout.lines()[0].hard_break);
        assert!(layout.size().height > 0.0);
        assert_carets_on_lines(&layout, 0);

        let middle = layout.lines()[0].rect.center();
        assert_eq!(layout.hit_test(Point::new(0.0, middle.y)), Some(0));
    }

    #[test]
    fn test_trailing_newline_gets_empty_line() {
        let layout = layout("ab\n", None);
        let lines = layout.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].range, 0..3);
        assert!(lines[0].hard_break);
        assert_eq!(lines[1].range, 3..3);
        assert_eq!(layout.line_for_offset(3), 1);
        assert_carets_on_lines(&layout, 3);
    }

    #[test]
    fn test_blank_paragraphs() {
        let layout = layout("\n\n", None);
        let ranges: Vec<_> = layout.lines().iter().map(|l| l.range.clone()).collect();
        assert_eq!(ranges, vec![0..1, 1..2, 2..2]);
        assert_carets_on_lines(&layout, 2);
    }

    #[test]
    fn test_line_boxes_stack_from_origin() {
        let layout = layout("ab\ncd\nef", None);
        let lines = layout.lines();
        assert_eq!(lines[0].rect.y0, 0.0);
        for pair in lines.windows(2) {
            assert_eq!(pair[0].rect.y1, pair[1].rect.y0);
        }
        assert_eq!(layout.size().height, lines[lines.len() - 1].rect.y1);
    }

    #[test]
    fn test_multibyte_text_uses_char_offsets() {
        let layout = layout("中文\nxy", None);
        let ranges: Vec<_> = layout.lines().iter().map(|l| l.range.clone()).collect();
        assert_eq!(ranges, vec![0..3, 3..5]);
        assert_carets_on_lines(&layout, 5);

        assert_eq!(layout.line_for_offset(2), 0);
        assert_eq!(layout.line_for_offset(3), 1);
        assert!(layout.x_for_offset(1, 4) > layout.x_for_offset(1, 3));
        assert!(layout.x_for_offset(1, 5) > layout.x_for_offset(1, 4));
        assert!(layout.x_for_offset(0, 1) >= layout.x_for_offset(0, 0));
        assert_eq!(layout.offset_for_x(1, 1000.0), 5);
    }

    #[test]
    fn test_wrapped_text_hit_test() {
        // wrap just after the first word and its space
        let unwrapped = layout("aaaa bbbb", None);
        let first_word = unwrapped.x_for_offset(0, 5);
        let layout = layout("aaaa bbbb", Some(first_word + 1.0));

        let lines = layout.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].range, 0..5);
        assert!(!lines[0].hard_break);
        assert_eq!(lines[1].range, 5..9);
        assert_eq!(layout.line_end(0), 4);
        assert_carets_on_lines(&layout, 9);

        // offset 5 sits at the start of the second line
        assert_eq!(layout.line_for_offset(5), 1);
        assert!(layout.x_for_offset(1, 5) < 1.0);

        let second = lines[1].rect.center();
        assert_eq!(layout.hit_test(Point::new(0.0, second.y)), Some(5));
        assert_eq!(layout.hit_test(Point::new(1000.0, second.y)), Some(9));
    }

    #[test]
    fn test_deleting_everything_leaves_one_empty_line() {
        let mut item = EditableText::new("abc", FontSpec::default(), ParleyLayout::new(None));
        item.handle(ItemEvent::FocusGained);
        item.handle(ItemEvent::KeyPress(KeyPress::command("a")));
        item.handle(ItemEvent::KeyPress(KeyPress::named(EditKey::Backspace)));

        assert_eq!(item.text(), "");
        assert_eq!(item.caret(), 0);
        assert_eq!(item.layout().lines().len(), 1);
        assert!(item.bounds().height() > 0.0);

        item.handle(ItemEvent::KeyPress(KeyPress::text("x")));
        assert_eq!(item.text(), "x");
    }

    #[test]
    fn test_item_from_empty_text() {
        let item = EditableText::new("", FontSpec::default(), ParleyLayout::new(None));
        assert_eq!(item.caret(), 0);
        assert_eq!(item.caret_line_index(), 0);
    }

    #[test]
    fn test_named_family_falls_back() {
        let mut layout = ParleyLayout::new(None);
        layout.rebuild("abc", &FontSpec::new("No Such Family", 12.0));
        assert_eq!(layout.lines().len(), 1);
        assert!(layout.x_for_offset(0, 3) > 0.0);
    }
}
