// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for TextCanvasWidget

use super::{TextCanvasWidget, TextChanged};
use crate::config::ItemConfig;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a text canvas view for the configured item, with a callback
/// receiving the text after every edit
pub fn text_canvas_view<State, F>(
    config: Arc<ItemConfig>,
    on_text_changed: F,
) -> TextCanvasView<State, F>
where
    F: Fn(&mut State, String),
{
    TextCanvasView {
        config,
        on_text_changed,
        phantom: PhantomData,
    }
}

/// The Xilem View for TextCanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct TextCanvasView<State, F> {
    config: Arc<ItemConfig>,
    on_text_changed: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for TextCanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, String) + 'static> View<State, (), ViewCtx>
    for TextCanvasView<State, F>
{
    type Element = Pod<TextCanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = TextCanvasWidget::new(&self.config);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // The widget owns the live text; only a new item configuration
        // replaces it. Text edits flowing back through the callback must
        // not reset the caret.
        if Arc::ptr_eq(&self.config, &prev.config) || *self.config == *prev.config {
            return;
        }

        tracing::debug!("[TextCanvasView::rebuild] item config changed, resetting item");
        let mut widget = element.downcast::<TextCanvasWidget>();
        widget.widget.reset_item(&self.config);
        widget.ctx.request_render();
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
        // No cleanup needed
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<TextChanged>() {
            Some(changed) => {
                (self.on_text_changed)(app_state, changed.text);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
