// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene view - the canvas with the text item and a status line

use masonry::properties::types::UnitPoint;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{ChildAlignment, ZStackExt, label, transformed, zstack};

use crate::components::text_canvas_view;
use crate::data::AppState;
use crate::theme;

const MARGIN: f64 = 16.0;

/// The canvas filling the window, status line floating bottom-left
pub fn scene_view(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    zstack((
        text_canvas_view(state.item.clone(), |state: &mut AppState, text| {
            state.text_changed(text);
        }),
        transformed(
            label(state.status())
                .text_size(12.0)
                .color(theme::text::STATUS),
        )
        .translate((MARGIN, -MARGIN))
        .alignment(ChildAlignment::SelfAligned(UnitPoint::BOTTOM_LEFT)),
    ))
}
