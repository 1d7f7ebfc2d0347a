// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! System clipboard access.
//!
//! The platform clipboard is opened lazily on first use. When it cannot be
//! opened (no display server, sandboxing), copy and paste become no-ops and
//! a warning is logged.

/// Lazily opened handle to the system text clipboard
#[derive(Default)]
pub struct Clipboard {
    manager: Option<arboard::Clipboard>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn manager(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.manager.is_none() {
            match arboard::Clipboard::new() {
                Ok(manager) => self.manager = Some(manager),
                Err(err) => {
                    tracing::warn!("Failed to initialize clipboard: {err}");
                    return None;
                }
            }
        }
        self.manager.as_mut()
    }

    /// Replace the clipboard contents with `text`.
    pub fn set_text(&mut self, text: &str) {
        let Some(manager) = self.manager() else {
            return;
        };
        if let Err(err) = manager.set_text(text.to_string()) {
            tracing::warn!("Clipboard set_text failed: {err}");
        }
    }

    /// Clipboard text, if there is any.
    pub fn get_text(&mut self) -> Option<String> {
        let manager = self.manager()?;
        match manager.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::debug!("Clipboard get_text failed: {err}");
                None
            }
        }
    }
}
