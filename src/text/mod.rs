// Copyright 2024 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Text editing primitives.
//!
//! This module provides:
//! - A gap buffer holding the text, caret and selection
//! - Caret blink state and rendering
//! - The display font
//! - The text layout capability, with a parley-backed implementation for
//!   rendering and a fixed-advance one for headless use

pub mod buffer;
pub mod cursor;
pub mod font;
pub mod layout;
pub mod monospace;
pub mod parley_layout;

pub use buffer::TextBuffer;
pub use cursor::TextCursor;
pub use font::FontSpec;
pub use layout::{LayoutLine, TextLayout};
pub use monospace::MonospaceLayout;
pub use parley_layout::ParleyLayout;
