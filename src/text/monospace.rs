// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Fixed-advance text layout.
//!
//! Every char advances by the same width and every line has the same
//! height, both proportional to the point size. No fonts are loaded, which
//! makes the layout deterministic: the item logic is tested against it, and
//! it can stand in for the real shaper when running headless.

use kurbo::{Rect, Size};

use super::font::FontSpec;
use super::layout::{LayoutLine, TextLayout, paragraphs};

/// Horizontal advance per char, relative to the point size
const ADVANCE_PER_POINT: f64 = 0.6;

/// Line height, relative to the point size
const LINE_HEIGHT_PER_POINT: f64 = 1.2;

#[derive(Debug, Clone)]
pub struct MonospaceLayout {
    wrap_width: Option<f64>,
    advance: f64,
    line_height: f64,
    lines: Vec<LayoutLine>,
    size: Size,
}

impl MonospaceLayout {
    pub fn new(wrap_width: Option<f64>) -> Self {
        let mut layout = Self {
            wrap_width,
            advance: 0.0,
            line_height: 0.0,
            lines: Vec::new(),
            size: Size::ZERO,
        };
        layout.rebuild("", &FontSpec::default());
        layout
    }

    /// Chars that fit on one line, if wrapping.
    fn columns(&self) -> Option<usize> {
        self.wrap_width
            .map(|width| ((width / self.advance).floor() as usize).max(1))
    }
}

impl Default for MonospaceLayout {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TextLayout for MonospaceLayout {
    fn rebuild(&mut self, text: &str, font: &FontSpec) {
        let point_size = f64::from(font.point_size);
        self.advance = point_size * ADVANCE_PER_POINT;
        self.line_height = point_size * LINE_HEIGHT_PER_POINT;

        let columns = self.columns();
        // (range, hard_break) before the boxes are known
        let mut spans = Vec::new();
        for (start, count, hard_break) in paragraphs(text) {
            let chunk = columns.unwrap_or(count).max(1);
            let mut chunk_start = start;
            let end = start + count;
            loop {
                let chunk_end = (chunk_start + chunk).min(end);
                if chunk_end == end {
                    spans.push((chunk_start..end + usize::from(hard_break), hard_break));
                    break;
                }
                spans.push((chunk_start..chunk_end, false));
                chunk_start = chunk_end;
            }
        }

        let width = spans
            .iter()
            .map(|(range, hard_break)| {
                (range.len() - usize::from(*hard_break)) as f64 * self.advance
            })
            .fold(0.0, f64::max);

        self.lines = spans
            .into_iter()
            .enumerate()
            .map(|(index, (range, hard_break))| {
                let top = index as f64 * self.line_height;
                LayoutLine {
                    range,
                    rect: Rect::new(0.0, top, width, top + self.line_height),
                    hard_break,
                }
            })
            .collect();
        self.size = Size::new(width, self.lines.len() as f64 * self.line_height);
    }

    fn size(&self) -> Size {
        self.size
    }

    fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    fn x_for_offset(&self, line: usize, offset: usize) -> f64 {
        let Some(current) = self.lines.get(line) else {
            return 0.0;
        };
        let column = offset
            .saturating_sub(current.range.start)
            .min(current.visible_len());
        column as f64 * self.advance
    }

    fn offset_for_x(&self, line: usize, x: f64) -> usize {
        let Some(current) = self.lines.get(line) else {
            return 0;
        };
        let column = (x / self.advance).round().max(0.0) as usize;
        current.range.start + column.min(current.visible_len())
    }
}
