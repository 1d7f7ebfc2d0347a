// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas Text: an editable text item on a 2D scene canvas, built with Xilem

use std::path::PathBuf;

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

pub mod components;
pub mod config;
pub mod data;
pub mod item;
pub mod settings;
pub mod text;
pub mod theme;
pub mod views;

use config::Config;
use data::AppState;
use views::scene_view;

/// Entry point for the Canvas Text application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    init_tracing();

    let config = load_config_from_args();
    let app = Xilem::new(AppState::new(config), app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Initialize tracing subscriber (can be controlled via RUST_LOG env var)
fn init_tracing() {
    // Filter out noisy wgpu/naga shader compilation logs
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in [
        "canvas_text=info",
        "wgpu=warn",
        "naga=warn",
        "wgpu_core=warn",
        "wgpu_hal=warn",
    ] {
        match directive.parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(err) => eprintln!("Invalid log directive {directive}: {err}"),
        }
    }

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load the config file named by the first command-line argument, falling
/// back to defaults when there is none or it cannot be used
fn load_config_from_args() -> Config {
    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        return Config::default();
    };

    match Config::load(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from: {}", path.display());
            config
        }
        Err(err) => {
            tracing::error!("{err:#}");
            tracing::error!("Usage: canvas-text [path/to/config.toml]");
            Config::default()
        }
    }
}

/// Build the single-window UI
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_config = &state.config.window;
    let window_size = LogicalSize::new(window_config.width, window_config.height);
    let title = window_config.title.clone();

    let window_view = window(state.main_window_id, title, scene_view(state));
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
