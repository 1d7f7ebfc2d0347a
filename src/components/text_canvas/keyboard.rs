// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Translation of masonry keyboard events into item key presses

use masonry::core::keyboard::{Key, KeyboardEvent, NamedKey};

use crate::item::{EditKey, KeyPress, Modifiers};

/// Map a key-down event to a [`KeyPress`].
pub(super) fn key_press(event: &KeyboardEvent) -> KeyPress {
    let modifiers = Modifiers {
        command: event.modifiers.meta() || event.modifiers.ctrl(),
    };

    let (key, text) = match &event.key {
        Key::Named(named) => (edit_key(named), None),
        Key::Character(text) => (EditKey::Other, Some(text.to_string())),
    };

    KeyPress {
        key,
        modifiers,
        text,
    }
}

fn edit_key(named: &NamedKey) -> EditKey {
    match named {
        NamedKey::ArrowLeft => EditKey::ArrowLeft,
        NamedKey::ArrowRight => EditKey::ArrowRight,
        NamedKey::ArrowUp => EditKey::ArrowUp,
        NamedKey::ArrowDown => EditKey::ArrowDown,
        NamedKey::Home => EditKey::Home,
        NamedKey::End => EditKey::End,
        NamedKey::PageUp => EditKey::PageUp,
        NamedKey::PageDown => EditKey::PageDown,
        NamedKey::Backspace => EditKey::Backspace,
        NamedKey::Delete => EditKey::Delete,
        NamedKey::Enter => EditKey::Enter,
        _ => EditKey::Other,
    }
}
