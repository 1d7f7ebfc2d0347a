// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Input events consumed by the text item, and the effects it asks its host
//! to carry out.

use std::time::Duration;

use kurbo::{Point, Rect};

/// A host event, already translated into item-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum ItemEvent {
    /// Single primary-button press inside the item
    PointerDown(Point),
    /// Primary-button double-click inside the item
    PointerDoubleClick(Point),
    KeyPress(KeyPress),
    FocusGained,
    FocusLost,
    /// Text committed by the platform input method
    CompositionCommit(String),
    /// Clipboard text delivered after an `Effect::RequestPaste`
    Paste(String),
    /// Time elapsed since the previous tick
    TimerTick(Duration),
}

/// Keys the item reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Enter,
    /// Any other key; its text (if any) is inserted
    Other,
}

/// Modifier state relevant to editing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl, or Cmd on macOS
    pub command: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { command: false };

    pub const COMMAND: Modifiers = Modifiers { command: true };
}

/// A key press: the key, modifiers and the text it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: EditKey,
    pub modifiers: Modifiers,
    pub text: Option<String>,
}

impl KeyPress {
    /// A named key without modifiers
    pub fn named(key: EditKey) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            text: None,
        }
    }

    /// A key producing `text`
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            key: EditKey::Other,
            modifiers: Modifiers::NONE,
            text: Some(text.into()),
        }
    }

    /// A command shortcut such as Ctrl+A
    pub fn command(text: impl Into<String>) -> Self {
        Self {
            key: EditKey::Other,
            modifiers: Modifiers::COMMAND,
            text: Some(text.into()),
        }
    }
}

/// Pointer icon the host should show over the item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerIcon {
    #[default]
    Default,
    Text,
}

/// Something the host has to do after an event was handled
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The item needs to be painted again
    Repaint,
    /// The bounds changed; the host must re-layout before repainting
    BoundsChanged(Rect),
    /// Begin delivering `TimerTick`s
    StartBlink,
    /// Stop delivering `TimerTick`s
    StopBlink,
    SetPointerIcon(PointerIcon),
    CopyToClipboard(String),
    /// Read the clipboard and send its text back as `ItemEvent::Paste`
    RequestPaste,
    /// Caret rectangle for input method candidate windows
    ImeArea(Rect),
    /// The text content changed
    TextChanged(String),
}
