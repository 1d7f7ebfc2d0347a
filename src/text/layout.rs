// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Text layout capability used by the editable text item.
//!
//! The item never talks to a shaping engine directly. It asks a
//! [`TextLayout`] for the visual lines of the current text and for the
//! mapping between char offsets and horizontal positions within a line.
//! Caret geometry, hit testing and vertical caret movement are all derived
//! from that line enumeration, so wrapped paragraphs behave the same way for
//! drawing and for clicking.
//!
//! All coordinates here are layout-local: (0, 0) is the top-left corner of
//! the laid out text, without the document margin.

use std::ops::Range;

use kurbo::{Line, Point, Rect, Size};

use super::font::FontSpec;

/// One visual line of laid out text
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    /// Char range covered by the line, including a trailing `\n`
    pub range: Range<usize>,
    /// Line box; spans the full layout width
    pub rect: Rect,
    /// Whether the line ends with an explicit paragraph break
    pub hard_break: bool,
}

impl LayoutLine {
    /// Number of chars that produce visible advance (the `\n` excluded)
    pub fn visible_len(&self) -> usize {
        self.range.len() - usize::from(self.hard_break)
    }
}

/// Shaping and line breaking for a plain text buffer.
pub trait TextLayout {
    /// Lay out `text` again with `font`.
    fn rebuild(&mut self, text: &str, font: &FontSpec);

    /// Size of the laid out text.
    fn size(&self) -> Size;

    /// Visual lines, top to bottom. Never empty after a rebuild.
    fn lines(&self) -> &[LayoutLine];

    /// Horizontal position of the caret at `offset` on line `line`.
    fn x_for_offset(&self, line: usize, offset: usize) -> f64;

    /// Char offset on line `line` closest to the horizontal position `x`.
    fn offset_for_x(&self, line: usize, x: f64) -> usize;

    /// Index of the line the caret at `offset` is drawn on.
    ///
    /// An offset at a line boundary belongs to the following line.
    fn line_for_offset(&self, offset: usize) -> usize {
        let lines = self.lines();
        lines
            .iter()
            .position(|line| offset < line.range.end)
            .unwrap_or(lines.len().saturating_sub(1))
    }

    /// Last caret offset that is still drawn on line `line`.
    fn line_end(&self, line: usize) -> usize {
        let lines = self.lines();
        let Some(current) = lines.get(line) else {
            return 0;
        };
        if line + 1 == lines.len() && !current.hard_break {
            current.range.end
        } else {
            current.range.end.saturating_sub(1).max(current.range.start)
        }
    }

    /// `offset_for_x` clamped to the caret positions of line `line`.
    fn nearest_offset(&self, line: usize, x: f64) -> usize {
        let Some(current) = self.lines().get(line) else {
            return 0;
        };
        self.offset_for_x(line, x)
            .clamp(current.range.start, self.line_end(line))
    }

    /// Map a point to the nearest char offset.
    ///
    /// Every line whose box contains `point` proposes the offset closest to
    /// `point.x`; the candidate with the smallest horizontal distance wins.
    /// Returns `None` when no line contains the point.
    fn hit_test(&self, point: Point) -> Option<usize> {
        let mut closest: Option<(usize, f64)> = None;

        for (index, line) in self.lines().iter().enumerate() {
            if !line.rect.contains(point) {
                continue;
            }
            let offset = self.nearest_offset(index, point.x);
            let distance = (self.x_for_offset(index, offset) - point.x).abs();
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((offset, distance));
            }
        }

        closest.map(|(offset, _)| offset)
    }

    /// The caret at `offset` as a vertical segment from line top to bottom.
    fn caret_line(&self, offset: usize) -> Option<Line> {
        let index = self.line_for_offset(offset);
        let line = self.lines().get(index)?;
        let x = self.x_for_offset(index, offset);
        Some(Line::new((x, line.rect.y0), (x, line.rect.y1)))
    }
}

/// Split `text` into hard lines: (start offset, visible char count, ends
/// with `\n`). A trailing `\n` produces a final empty line.
pub(crate) fn paragraphs(text: &str) -> Vec<(usize, usize, bool)> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for c in text.chars() {
        if c == '\n' {
            paragraphs.push((start, count, true));
            start += count + 1;
            count = 0;
        } else {
            count += 1;
        }
    }
    paragraphs.push((start, count, false));
    paragraphs
}
