// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Application state

use std::sync::Arc;

use xilem::WindowId;

use crate::config::{Config, ItemConfig};

/// Main application state
pub struct AppState {
    pub config: Config,

    /// Item configuration handed to the canvas view; replaced only when
    /// the item should be rebuilt from scratch
    pub item: Arc<ItemConfig>,

    /// Latest text of the item, mirrored from the canvas
    pub text: String,

    /// Number of edits since startup
    pub edits: usize,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            item: Arc::new(config.item.clone()),
            text: config.item.text.clone(),
            config,
            edits: 0,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Record the item's new text
    pub fn text_changed(&mut self, text: String) {
        self.edits += 1;
        tracing::debug!("[AppState] edit #{}: {} chars", self.edits, text.chars().count());
        self.text = text;
    }

    /// Status line summary: char and line counts
    pub fn status(&self) -> String {
        let chars = self.text.chars().count();
        let lines = self.text.split('\n').count();
        format!("{chars} chars, {lines} lines")
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
