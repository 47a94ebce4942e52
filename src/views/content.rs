//! Main Content Area
//!
//! Page header, the form and result columns, and the footer.

use crate::assets::CustomIconName;
use crate::constants::{FORM_COLUMN_WEIGHT, RESULT_COLUMN_WEIGHT};
use crate::states::{SpiGlobalStore, i18n_common};
use crate::views::{FormPanel, ResultPanel};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, relative};
use gpui_component::{ActiveTheme, Icon, Sizable, h_flex, label::Label, v_flex};

/// Main content container component
pub struct SpiContent {
    form_panel: Entity<FormPanel>,
    result_panel: Entity<ResultPanel>,
    _subscriptions: Vec<Subscription>,
}

impl SpiContent {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let form_panel = cx.new(|cx| FormPanel::new(window, cx));
        let result_panel = cx.new(|cx| ResultPanel::new(window, cx));

        // Locale changes re-render the static labels
        let app_state = cx.global::<SpiGlobalStore>().app_state();
        let subscriptions = vec![cx.observe(&app_state, |_this, _model, cx| cx.notify())];

        Self {
            form_panel,
            result_panel,
            _subscriptions: subscriptions,
        }
    }

    fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        v_flex()
            .w_full()
            .items_center()
            .gap_1()
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(Icon::from(CustomIconName::GraduationCap).large())
                    .child(Label::new(i18n_common(cx, "title")).text_2xl()),
            )
            .child(
                Label::new(i18n_common(cx, "subtitle"))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
    }

    fn render_footer(&self, cx: &Context<Self>) -> impl IntoElement {
        h_flex()
            .w_full()
            .justify_center()
            .pt_2()
            .border_t_1()
            .border_color(cx.theme().border)
            .child(
                Label::new(i18n_common(cx, "footer"))
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            )
    }
}

impl Render for SpiContent {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let total = FORM_COLUMN_WEIGHT + RESULT_COLUMN_WEIGHT;

        v_flex()
            .id("content")
            .flex_1()
            .w_full()
            .p_4()
            .gap_4()
            .overflow_y_scroll()
            .bg(cx.theme().background)
            .child(self.render_header(cx))
            .child(
                h_flex()
                    .w_full()
                    .flex_1()
                    .items_start()
                    .gap_4()
                    .child(
                        div()
                            .w(relative(FORM_COLUMN_WEIGHT / total))
                            .child(self.form_panel.clone()),
                    )
                    .child(
                        div()
                            .flex_1()
                            .child(self.result_panel.clone()),
                    ),
            )
            .child(self.render_footer(cx))
    }
}
