// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas Text: an editable text item on a 2D canvas

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    canvas_text::run(EventLoop::with_user_event())
}
