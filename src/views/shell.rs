//! Window Shell
//!
//! Root view of the main window: title bar on top, content below. Keeps the
//! window bounds in the persisted app state.

use crate::states::update_app_state_and_save;
use crate::views::{SpiContent, SpiTitleBar};
use gpui::{Context, Entity, Subscription, Window, prelude::*};
use gpui_component::{ActiveTheme, v_flex};

pub struct SpiShell {
    title_bar: Entity<SpiTitleBar>,
    content: Entity<SpiContent>,
    _subscriptions: Vec<Subscription>,
}

impl SpiShell {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| SpiTitleBar::new(window, cx));
        let content = cx.new(|cx| SpiContent::new(window, cx));

        let subscriptions = vec![cx.observe_window_bounds(window, |_this, window, cx| {
            let bounds = window.bounds();
            update_app_state_and_save(cx, "save_bounds", move |state, _cx| {
                state.set_bounds(bounds);
            });
        })];

        Self {
            title_bar,
            content,
            _subscriptions: subscriptions,
        }
    }
}

impl Render for SpiShell {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(self.content.clone())
    }
}
