// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Answers to input method queries

use kurbo::Rect;

use crate::text::FontSpec;

/// What the platform input method can ask about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImeQuery {
    CursorRectangle,
    Font,
    CursorPosition,
    SurroundingText,
    CurrentSelection,
}

/// Reply to an [`ImeQuery`]
#[derive(Debug, Clone, PartialEq)]
pub enum ImeReply {
    /// Caret rectangle in item coordinates, one pixel wide
    Rect(Rect),
    Font(FontSpec),
    /// Caret offset in chars
    Position(usize),
    Text(String),
}
