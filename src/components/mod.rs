// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the canvas text editor

pub mod clipboard;
pub mod text_canvas;

pub use text_canvas::text_canvas_view;
