//! Form Panel
//!
//! Left column: the five fixed-choice dropdowns, the two score sliders and
//! the predict button.

use crate::constants::{FORM_LABEL_WIDTH, SCORE_VALUE_WIDTH};
use crate::domain::Score;
use crate::helpers::{SUBMIT_KEYSTROKE, humanize_keystroke};
use crate::states::{
    ChoiceField, FormState, PredictionState, ScoreField, SelectChoice, SpiGlobalStore, i18n_form,
    reset_prediction_form, submit_prediction,
};
use gpui::{Context, Entity, SharedString, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::DropdownMenu,
    slider::{Slider, SliderEvent, SliderState},
    v_flex,
};

/// Student form view
pub struct FormPanel {
    form_state: Entity<FormState>,
    prediction_state: Entity<PredictionState>,
    reading_slider: Entity<SliderState>,
    writing_slider: Entity<SliderState>,
    _subscriptions: Vec<Subscription>,
}

impl FormPanel {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<SpiGlobalStore>();
        let form_state = store.form_state();
        let prediction_state = store.prediction_state();

        let form = form_state.read(cx);
        let (reading, writing) = (form.score(ScoreField::Reading), form.score(ScoreField::Writing));
        let reading_slider = cx.new(|_| Self::new_slider(reading));
        let writing_slider = cx.new(|_| Self::new_slider(writing));

        let mut subscriptions = vec![
            // Reset and other external edits move the sliders back
            cx.observe_in(&form_state, window, |this, form, window, cx| {
                this.sync_sliders(&form, window, cx);
                cx.notify();
            }),
            // Submit button loading state
            cx.observe(&prediction_state, |_this, _model, cx| cx.notify()),
        ];

        for (field, slider) in [
            (ScoreField::Reading, &reading_slider),
            (ScoreField::Writing, &writing_slider),
        ] {
            let form_state = form_state.clone();
            subscriptions.push(cx.subscribe(slider, move |_this, _slider, event: &SliderEvent, cx| {
                if let SliderEvent::Change(value) = event {
                    let value = value.start();
                    form_state.update(cx, |form, cx| {
                        if form.set_score_from_slider(field, value) {
                            cx.notify();
                        }
                    });
                }
            }));
        }

        Self {
            form_state,
            prediction_state,
            reading_slider,
            writing_slider,
            _subscriptions: subscriptions,
        }
    }

    fn new_slider(score: Score) -> SliderState {
        SliderState::new()
            .min(f32::from(Score::MIN))
            .max(f32::from(Score::MAX))
            .step(1.)
            .default_value(score.as_slider())
    }

    fn slider(&self, field: ScoreField) -> &Entity<SliderState> {
        match field {
            ScoreField::Reading => &self.reading_slider,
            ScoreField::Writing => &self.writing_slider,
        }
    }

    /// Write form scores into sliders that show a different value
    fn sync_sliders(&self, form: &Entity<FormState>, window: &mut Window, cx: &mut Context<Self>) {
        for field in ScoreField::all() {
            let score = form.read(cx).score(*field);
            self.slider(*field).update(cx, |slider, cx| {
                if Score::from_slider(slider.value().start()) != score {
                    slider.set_value(score.as_slider(), window, cx);
                }
            });
        }
    }

    /// Label column shared by every row
    fn render_label(&self, key: &str, cx: &Context<Self>) -> impl IntoElement {
        div()
            .w(px(FORM_LABEL_WIDTH))
            .flex_shrink_0()
            .child(Label::new(i18n_form(cx, key)).text_sm())
    }

    fn render_choice_row(&self, field: ChoiceField, cx: &Context<Self>) -> impl IntoElement {
        let form = self.form_state.read(cx);
        let selected = form.selected_index(field);
        let current = form.selected(field);
        let options = field.options();

        h_flex()
            .w_full()
            .items_center()
            .gap_3()
            .child(self.render_label(field.label_key(), cx))
            .child(
                Button::new(SharedString::from(format!("choice-{}", field.label_key())))
                    .w_full()
                    .small()
                    .label(current)
                    .dropdown_menu(move |menu, _window, _cx| {
                        options.iter().enumerate().fold(menu, |menu, (index, option)| {
                            menu.menu_with_check(
                                *option,
                                index == selected,
                                Box::new(SelectChoice { field, index }),
                            )
                        })
                    }),
            )
    }

    fn render_score_row(&self, field: ScoreField, cx: &Context<Self>) -> impl IntoElement {
        let score = self.form_state.read(cx).score(field);

        h_flex()
            .w_full()
            .items_center()
            .gap_3()
            .child(self.render_label(field.label_key(), cx))
            .child(div().flex_1().child(Slider::new(self.slider(field))))
            .child(
                div()
                    .w(px(SCORE_VALUE_WIDTH))
                    .flex()
                    .justify_end()
                    .child(Label::new(score.to_string()).text_sm()),
            )
    }
}

impl Render for FormPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_loading = self.prediction_state.read(cx).is_loading();

        let mut rows = v_flex().w_full().gap_3();
        for field in ChoiceField::all() {
            rows = rows.child(self.render_choice_row(*field, cx));
        }
        for field in ScoreField::all() {
            rows = rows.child(self.render_score_row(*field, cx));
        }

        v_flex()
            .id("form-panel")
            .size_full()
            .p_4()
            .gap_4()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .child(Label::new(i18n_form(cx, "heading")).text_xl())
            .child(rows)
            .child(
                h_flex()
                    .w_full()
                    .gap_2()
                    .child(
                        Button::new("predict")
                            .flex_1()
                            .primary()
                            .icon(IconName::ChevronRight)
                            .label(i18n_form(cx, "submit"))
                            .tooltip(humanize_keystroke(SUBMIT_KEYSTROKE))
                            .loading(is_loading)
                            .disabled(is_loading)
                            .on_click(|_, _, cx| submit_prediction(cx)),
                    )
                    .child(
                        Button::new("reset")
                            .ghost()
                            .label(i18n_form(cx, "reset"))
                            .disabled(is_loading)
                            .on_click(|_, _, cx| reset_prediction_form(cx)),
                    ),
            )
    }
}
