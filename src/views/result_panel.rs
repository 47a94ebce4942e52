//! Result Panel
//!
//! Right column: loading indicator, metric cards, score chart, or the
//! failure message of the last submission.

use crate::assets::CustomIconName;
use crate::constants::{CHART_BAR_HEIGHT, CHART_HEIGHT, CHART_TICKS};
use crate::domain::PredictionOutcome;
use crate::states::{
    FailureKind, PredictionFailure, PredictionState, PredictionStatus, SpiGlobalStore,
    i18n_format, i18n_result,
};
use gpui::{
    AnyElement, Context, Entity, Hsla, SharedString, Subscription, Window, div, prelude::*, px,
    relative, rgb,
};
use gpui_component::{ActiveTheme, Icon, IconName, Sizable, h_flex, label::Label, v_flex};

/// Width of the bar label column left of the chart track
const CHART_LABEL_WIDTH: f32 = 150.0;

/// Bar fill color
const CHART_BAR_COLOR: u32 = 0x1f77b4;

/// Prediction result view
pub struct ResultPanel {
    prediction_state: Entity<PredictionState>,
    _subscriptions: Vec<Subscription>,
}

impl ResultPanel {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let prediction_state = cx.global::<SpiGlobalStore>().prediction_state();
        let subscriptions = vec![cx.observe(&prediction_state, |_this, _model, cx| cx.notify())];

        Self {
            prediction_state,
            _subscriptions: subscriptions,
        }
    }

    fn render_placeholder(&self, cx: &Context<Self>) -> AnyElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .child(
                Label::new(i18n_result(cx, "empty"))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .into_any_element()
    }

    fn render_loading(&self, cx: &Context<Self>) -> AnyElement {
        h_flex()
            .gap_2()
            .items_center()
            .child(Icon::new(IconName::Loader).small())
            .child(
                Label::new(i18n_result(cx, "loading"))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .into_any_element()
    }

    fn render_metric(
        &self,
        title: SharedString,
        value: SharedString,
        color: Hsla,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        div().flex_1().p_4().rounded_lg().bg(cx.theme().secondary).child(
            v_flex()
                .gap_1()
                .child(
                    Label::new(title)
                        .text_sm()
                        .text_color(cx.theme().muted_foreground),
                )
                .child(Label::new(value).text_2xl().text_color(color)),
        )
    }

    /// Horizontal bar on a fixed 0..100 axis
    fn render_chart(&self, outcome: &PredictionOutcome, cx: &Context<Self>) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        let mut ticks = h_flex().flex_1().justify_between();
        for tick in CHART_TICKS {
            ticks = ticks.child(Label::new(tick.to_string()).text_xs().text_color(muted));
        }

        v_flex()
            .w_full()
            .h(px(CHART_HEIGHT))
            .p_4()
            .gap_2()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(Icon::from(CustomIconName::ChartBar).small())
                    .child(Label::new(i18n_result(cx, "chart_title")).text_sm()),
            )
            .child(
                h_flex()
                    .w_full()
                    .items_center()
                    .child(
                        div()
                            .w(px(CHART_LABEL_WIDTH))
                            .flex_shrink_0()
                            .child(Label::new(i18n_result(cx, "chart_bar")).text_xs()),
                    )
                    .child(
                        div()
                            .flex_1()
                            .h(px(CHART_BAR_HEIGHT))
                            .border_l_1()
                            .border_b_1()
                            .border_color(cx.theme().border)
                            .child(
                                div()
                                    .h_full()
                                    .w(relative(outcome.bar_fraction()))
                                    .bg(rgb(CHART_BAR_COLOR)),
                            ),
                    ),
            )
            .child(
                h_flex()
                    .w_full()
                    .child(div().w(px(CHART_LABEL_WIDTH)).flex_shrink_0())
                    .child(ticks),
            )
            .child(
                h_flex().w_full().justify_center().child(
                    Label::new(i18n_result(cx, "chart_axis"))
                        .text_xs()
                        .text_color(muted),
                ),
            )
    }

    fn render_outcome(&self, outcome: &PredictionOutcome, cx: &Context<Self>) -> AnyElement {
        let level = outcome.level;
        let received_at = outcome.received_at.format("%H:%M:%S").to_string();
        let level_text = format!("{} {}", level.emoji(), i18n_result(cx, level.i18n_key()));

        v_flex()
            .w_full()
            .gap_4()
            .child(
                h_flex()
                    .w_full()
                    .gap_4()
                    .child(self.render_metric(
                        i18n_result(cx, "predicted_score"),
                        outcome.score_text().into(),
                        cx.theme().foreground,
                        cx,
                    ))
                    .child(self.render_metric(
                        i18n_result(cx, "performance_level"),
                        level_text.into(),
                        rgb(level.color()).into(),
                        cx,
                    )),
            )
            .child(self.render_chart(outcome, cx))
            .child(
                Label::new(i18n_format(
                    cx,
                    "result.received_at",
                    &[("time", received_at.as_str())],
                ))
                .text_xs()
                .text_color(cx.theme().muted_foreground),
            )
            .into_any_element()
    }

    fn failure_message(failure: &PredictionFailure, cx: &Context<Self>) -> SharedString {
        let key = format!("result.{}", failure.kind.i18n_key());
        match failure.kind {
            FailureKind::Server => i18n_format(cx, &key, &[("body", failure.detail.as_str())]),
            FailureKind::Unreachable => i18n_result(cx, failure.kind.i18n_key()),
            FailureKind::Malformed | FailureKind::Request => {
                i18n_format(cx, &key, &[("detail", failure.detail.as_str())])
            }
        }
    }

    fn render_failure(&self, failure: &PredictionFailure, cx: &Context<Self>) -> AnyElement {
        let danger = cx.theme().danger;

        h_flex()
            .w_full()
            .p_3()
            .gap_2()
            .items_start()
            .rounded_lg()
            .border_1()
            .border_color(danger)
            .bg(danger.opacity(0.1))
            .child(Icon::new(IconName::CircleX).small().text_color(danger))
            .child(
                Label::new(Self::failure_message(failure, cx))
                    .text_sm()
                    .text_color(danger),
            )
            .into_any_element()
    }
}

impl Render for ResultPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let status = self.prediction_state.read(cx).status().clone();

        let body = match &status {
            PredictionStatus::Idle => self.render_placeholder(cx),
            PredictionStatus::Loading => self.render_loading(cx),
            PredictionStatus::Ready(outcome) => self.render_outcome(outcome, cx),
            PredictionStatus::Failed(failure) => self.render_failure(failure, cx),
        };

        v_flex()
            .id("result-panel")
            .size_full()
            .p_4()
            .gap_4()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .child(Label::new(i18n_result(cx, "heading")).text_xl())
            .child(body)
    }
}
