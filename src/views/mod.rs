// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! View functions for the application window

mod scene;

pub use scene::scene_view;
