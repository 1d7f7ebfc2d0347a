// Copyright 2024 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Gap buffer implementation for efficient text editing.
//!
//! A gap buffer maintains a contiguous array with a "gap" of unused space
//! at the caret position. This allows O(1) insertion and deletion at the
//! caret, with O(n) worst-case for moving the gap.

use std::ops::Range;

/// A gap buffer of characters, with a caret and an optional selection.
///
/// Layout: [active chars] [gap] [active chars]
///         ^              ^     ^
///         0         gap_start  gap_end
///
/// Invariants:
/// - 0 <= gap_start <= gap_end <= buffer.len()
/// - caret is the logical position (0..=len())
/// - selection, when present, is non-empty and lies within 0..=len()
///
/// All offsets are counted in `char`s, never bytes.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// The underlying storage (includes gap)
    buffer: Vec<char>,
    /// Start of the gap (inclusive)
    gap_start: usize,
    /// End of the gap (exclusive)
    gap_end: usize,
    /// Logical caret position (where insertions occur)
    caret: usize,
    /// Selected range, if any
    selection: Option<Range<usize>>,
}

impl TextBuffer {
    /// Initial gap size when creating a new buffer
    const INITIAL_GAP_SIZE: usize = 16;
    /// Minimum gap size to maintain after growth
    const MIN_GAP_SIZE: usize = 16;

    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: vec!['\0'; Self::INITIAL_GAP_SIZE],
            gap_start: 0,
            gap_end: Self::INITIAL_GAP_SIZE,
            caret: 0,
            selection: None,
        }
    }

    /// Create a buffer holding `text`, with the caret after its last char.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.insert_str(text);
        buffer
    }

    /// Number of chars in the buffer (excluding the gap).
    pub fn len(&self) -> usize {
        self.buffer.len() - self.gap_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current caret position.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Current selection, if any.
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    fn gap_size(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Move the gap to the specified position.
    ///
    /// Moving the gap has O(k) complexity where k is the distance moved.
    fn move_gap_to(&mut self, position: usize) {
        if position == self.gap_start {
            return;
        }

        if position < self.gap_start {
            // Move gap left: [pos..gap_start] -> [gap_end-count..gap_end]
            let move_count = self.gap_start - position;
            let dst_start = self.gap_end - move_count;
            self.buffer
                .copy_within(position..self.gap_start, dst_start);
            self.gap_end -= move_count;
            self.gap_start = position;
        } else {
            // Move gap right: [gap_end..gap_end+count] -> [gap_start..pos]
            let move_count = position - self.gap_start;
            self.buffer
                .copy_within(self.gap_end..self.gap_end + move_count, self.gap_start);
            self.gap_start += move_count;
            self.gap_end += move_count;
        }
    }

    /// Grow the gap so that at least `needed` chars fit.
    ///
    /// Doubles the buffer capacity (or more) and moves chars after the gap to
    /// the end.
    fn grow_gap(&mut self, needed: usize) {
        let old_len = self.buffer.len();
        let new_capacity = (old_len * 2)
            .max(old_len + needed + Self::MIN_GAP_SIZE)
            .max(Self::MIN_GAP_SIZE);
        let elements_after_gap = old_len - self.gap_end;

        self.buffer.resize(new_capacity, '\0');
        let new_gap_end = new_capacity - elements_after_gap;
        self.buffer
            .copy_within(self.gap_end..old_len, new_gap_end);
        self.gap_end = new_gap_end;
    }

    /// Insert a single char at the caret.
    pub fn insert(&mut self, c: char) {
        if self.gap_size() == 0 {
            self.grow_gap(1);
        }

        self.move_gap_to(self.caret);
        self.buffer[self.gap_start] = c;
        self.gap_start += 1;
        self.caret += 1;
    }

    /// Insert a string at the caret, advancing the caret past it.
    ///
    /// An active selection is replaced by the inserted text.
    pub fn insert_str(&mut self, text: &str) {
        self.delete_selection();

        let count = text.chars().count();
        if self.gap_size() < count {
            self.grow_gap(count);
        }
        for c in text.chars() {
            self.insert(c);
        }
    }

    /// Delete the char before the caret (backspace).
    ///
    /// With an active selection, the selection is deleted instead.
    /// Returns the deleted char if a single char was removed.
    pub fn delete(&mut self) -> Option<char> {
        if self.delete_selection() {
            return None;
        }
        if self.caret == 0 {
            return None;
        }

        self.move_gap_to(self.caret);
        self.gap_start -= 1;
        self.caret -= 1;

        Some(self.buffer[self.gap_start])
    }

    /// Delete the char at the caret (delete key).
    ///
    /// With an active selection, the selection is deleted instead.
    pub fn delete_forward(&mut self) -> Option<char> {
        if self.delete_selection() {
            return None;
        }
        if self.caret >= self.len() {
            return None;
        }

        self.move_gap_to(self.caret);
        let deleted = self.buffer[self.gap_end];
        self.gap_end += 1;

        Some(deleted)
    }

    /// Remove the selected range, leaving the caret at its start.
    ///
    /// Returns false when there was nothing selected.
    pub fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection.take() else {
            return false;
        };

        self.move_gap_to(range.start);
        self.gap_end += range.end - range.start;
        self.caret = range.start;
        true
    }

    /// Move caret left by one position. Returns false at the start.
    pub fn move_caret_left(&mut self) -> bool {
        self.selection = None;
        if self.caret > 0 {
            self.caret -= 1;
            true
        } else {
            false
        }
    }

    /// Move caret right by one position. Returns false at the end.
    pub fn move_caret_right(&mut self) -> bool {
        self.selection = None;
        if self.caret < self.len() {
            self.caret += 1;
            true
        } else {
            false
        }
    }

    /// Set caret to a specific position, clamped to [0, len()].
    ///
    /// Clears the selection.
    pub fn set_caret(&mut self, position: usize) {
        self.selection = None;
        self.caret = position.min(self.len());
    }

    /// Select the whole buffer. The caret moves to the end.
    ///
    /// An empty buffer has nothing to select.
    pub fn select_all(&mut self) {
        let len = self.len();
        self.selection = (len > 0).then_some(0..len);
        self.caret = len;
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Iterate over all chars (skipping the gap).
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.buffer[..self.gap_start]
            .iter()
            .chain(&self.buffer[self.gap_end..])
            .copied()
    }

    /// The whole buffer as plain text.
    pub fn text(&self) -> String {
        self.iter().collect()
    }

    /// Text of the given char range, clamped to the buffer.
    pub fn slice(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.iter().skip(start).take(end - start).collect()
    }

    /// The selected text, or an empty string.
    pub fn selected_text(&self) -> String {
        self.selection
            .clone()
            .map(|range| self.slice(range))
            .unwrap_or_default()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.caret(), 0);
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_from_text_puts_caret_at_end() {
        let buffer = TextBuffer::from_text("Hello");
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.caret(), 5);
        assert_eq!(buffer.text(), "Hello");
    }

    #[test]
    fn test_insert_at_middle() {
        let mut buffer = TextBuffer::from_text("ac");
        buffer.move_caret_left();
        buffer.insert('b');

        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.caret(), 2);
    }

    #[test]
    fn test_insert_str_splices_and_advances() {
        let mut buffer = TextBuffer::from_text("hello world");
        buffer.set_caret(5);
        buffer.insert_str(", big");

        assert_eq!(buffer.text(), "hello, big world");
        assert_eq!(buffer.caret(), 10);
    }

    #[test]
    fn test_multibyte_chars_count_as_one() {
        let mut buffer = TextBuffer::from_text("中文");
        assert_eq!(buffer.len(), 2);
        buffer.set_caret(1);
        buffer.insert_str("é");
        assert_eq!(buffer.text(), "中é文");
        assert_eq!(buffer.caret(), 2);
    }

    #[test]
    fn test_delete_backspace() {
        let mut buffer = TextBuffer::from_text("abc");

        assert_eq!(buffer.delete(), Some('c'));
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.caret(), 2);
        assert_eq!(buffer.text(), "ab");
    }

    #[test]
    fn test_delete_at_start_is_noop() {
        let mut buffer = TextBuffer::from_text("abc");
        buffer.set_caret(0);

        assert_eq!(buffer.delete(), None);
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.caret(), 0);
    }

    #[test]
    fn test_delete_forward() {
        let mut buffer = TextBuffer::from_text("abc");
        buffer.set_caret(1);

        assert_eq!(buffer.delete_forward(), Some('b'));
        assert_eq!(buffer.text(), "ac");
        assert_eq!(buffer.caret(), 1);

        buffer.set_caret(2);
        assert_eq!(buffer.delete_forward(), None);
    }

    #[test]
    fn test_caret_movement() {
        let mut buffer = TextBuffer::from_text("abc");
        assert_eq!(buffer.caret(), 3);

        assert!(!buffer.move_caret_right());
        assert!(buffer.move_caret_left());
        assert_eq!(buffer.caret(), 2);

        buffer.move_caret_left();
        buffer.move_caret_left();
        assert_eq!(buffer.caret(), 0);
        assert!(!buffer.move_caret_left());
        assert_eq!(buffer.caret(), 0);
    }

    #[test]
    fn test_left_then_right_round_trips() {
        let text = "ab\ncd";
        let len = text.chars().count();
        for p in 1..len {
            let mut buffer = TextBuffer::from_text(text);
            buffer.set_caret(p);
            buffer.move_caret_left();
            buffer.move_caret_right();
            assert_eq!(buffer.caret(), p);
        }
    }

    #[test]
    fn test_set_caret_clamps() {
        let mut buffer = TextBuffer::from_text("abc");
        buffer.set_caret(99);
        assert_eq!(buffer.caret(), 3);
    }

    #[test]
    fn test_gap_growth() {
        let mut buffer = TextBuffer::new();
        for i in 0..100 {
            buffer.insert_str(&i.to_string());
        }
        buffer.set_caret(0);
        buffer.insert_str("start");

        assert!(buffer.text().starts_with("start0123"));
        assert!(buffer.text().ends_with("9899"));
    }

    #[test]
    fn test_select_all_and_selected_text() {
        let mut buffer = TextBuffer::from_text("ab\ncd");
        buffer.select_all();
        assert_eq!(buffer.selection(), Some(0..5));
        assert_eq!(buffer.selected_text(), "ab\ncd");
        assert_eq!(buffer.caret(), 5);
    }

    #[test]
    fn test_select_all_on_empty_buffer() {
        let mut buffer = TextBuffer::new();
        buffer.select_all();
        assert_eq!(buffer.selection(), None);
        assert_eq!(buffer.selected_text(), "");
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut buffer = TextBuffer::from_text("old text");
        buffer.select_all();
        buffer.insert_str("new");

        assert_eq!(buffer.text(), "new");
        assert_eq!(buffer.caret(), 3);
        assert_eq!(buffer.selection(), None);
    }

    #[test]
    fn test_backspace_removes_selection() {
        let mut buffer = TextBuffer::from_text("abc");
        buffer.select_all();
        assert_eq!(buffer.delete(), None);
        assert!(buffer.is_empty());
        assert_eq!(buffer.caret(), 0);
    }

    #[test]
    fn test_movement_clears_selection() {
        let mut buffer = TextBuffer::from_text("abc");
        buffer.select_all();
        buffer.move_caret_left();
        assert_eq!(buffer.selection(), None);
        assert_eq!(buffer.caret(), 2);
    }

    #[test]
    fn test_slice() {
        let buffer = TextBuffer::from_text("hello");
        assert_eq!(buffer.slice(1..3), "el");
        assert_eq!(buffer.slice(3..99), "lo");
    }
}
