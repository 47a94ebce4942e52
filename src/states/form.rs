//! Form State
//!
//! Current widget values of the student form. Values change freely until the
//! user submits; `request()` snapshots them into a `PredictionRequest`.

use crate::domain::{
    Choice, Ethnicity, Gender, Lunch, ParentalEducation, PredictionRequest, Score,
    TestPreparation,
};
use crate::states::SpiGlobalStore;
use gpui::{Action, App};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, warn};

/// Fixed-choice fields of the form
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize, JsonSchema)]
pub enum ChoiceField {
    Gender,
    Ethnicity,
    ParentalEducation,
    Lunch,
    TestPreparation,
}

impl ChoiceField {
    /// All choice fields in form order
    pub fn all() -> &'static [ChoiceField] {
        &[
            ChoiceField::Gender,
            ChoiceField::Ethnicity,
            ChoiceField::ParentalEducation,
            ChoiceField::Lunch,
            ChoiceField::TestPreparation,
        ]
    }

    /// Translation key for the field label
    pub fn label_key(&self) -> &'static str {
        match self {
            ChoiceField::Gender => "gender",
            ChoiceField::Ethnicity => "ethnicity",
            ChoiceField::ParentalEducation => "parental_education",
            ChoiceField::Lunch => "lunch",
            ChoiceField::TestPreparation => "test_preparation",
        }
    }

    /// Wire values of every option, in display order
    pub fn options(&self) -> Vec<&'static str> {
        fn wire<C: Choice>() -> Vec<&'static str> {
            C::all().iter().map(|c| c.as_str()).collect()
        }

        match self {
            ChoiceField::Gender => wire::<Gender>(),
            ChoiceField::Ethnicity => wire::<Ethnicity>(),
            ChoiceField::ParentalEducation => wire::<ParentalEducation>(),
            ChoiceField::Lunch => wire::<Lunch>(),
            ChoiceField::TestPreparation => wire::<TestPreparation>(),
        }
    }
}

/// Bounded numeric fields of the form
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize, JsonSchema)]
pub enum ScoreField {
    Reading,
    Writing,
}

impl ScoreField {
    pub fn all() -> &'static [ScoreField] {
        &[ScoreField::Reading, ScoreField::Writing]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ScoreField::Reading => "reading_score",
            ScoreField::Writing => "writing_score",
        }
    }
}

/// Pick the `index`-th option of a choice field (dispatched from dropdown menus)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub struct SelectChoice {
    pub field: ChoiceField,
    pub index: usize,
}

/// Widget values of the student form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    request: PredictionRequest,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    /// Snapshot the current values for submission
    pub fn request(&self) -> PredictionRequest {
        self.request
    }

    /// Wire value currently selected for a choice field
    pub fn selected(&self, field: ChoiceField) -> &'static str {
        match field {
            ChoiceField::Gender => self.request.gender.as_str(),
            ChoiceField::Ethnicity => self.request.ethnicity.as_str(),
            ChoiceField::ParentalEducation => self.request.parental_level_of_education.as_str(),
            ChoiceField::Lunch => self.request.lunch.as_str(),
            ChoiceField::TestPreparation => self.request.test_preparation_course.as_str(),
        }
    }

    /// Index of the selected option for a choice field
    pub fn selected_index(&self, field: ChoiceField) -> usize {
        match field {
            ChoiceField::Gender => self.request.gender.index(),
            ChoiceField::Ethnicity => self.request.ethnicity.index(),
            ChoiceField::ParentalEducation => self.request.parental_level_of_education.index(),
            ChoiceField::Lunch => self.request.lunch.index(),
            ChoiceField::TestPreparation => self.request.test_preparation_course.index(),
        }
    }

    pub fn score(&self, field: ScoreField) -> Score {
        match field {
            ScoreField::Reading => self.request.reading_score,
            ScoreField::Writing => self.request.writing_score,
        }
    }

    // ==================== Setters ====================

    pub fn set_gender(&mut self, gender: Gender) {
        self.request.gender = gender;
    }

    pub fn set_ethnicity(&mut self, ethnicity: Ethnicity) {
        self.request.ethnicity = ethnicity;
    }

    pub fn set_parental_education(&mut self, education: ParentalEducation) {
        self.request.parental_level_of_education = education;
    }

    pub fn set_lunch(&mut self, lunch: Lunch) {
        self.request.lunch = lunch;
    }

    pub fn set_test_preparation(&mut self, course: TestPreparation) {
        self.request.test_preparation_course = course;
    }

    /// Select an option by index; returns false if `index` is out of range
    pub fn set_choice(&mut self, field: ChoiceField, index: usize) -> bool {
        match field {
            ChoiceField::Gender => Gender::from_index(index).map(|c| self.set_gender(c)),
            ChoiceField::Ethnicity => Ethnicity::from_index(index).map(|c| self.set_ethnicity(c)),
            ChoiceField::ParentalEducation => {
                ParentalEducation::from_index(index).map(|c| self.set_parental_education(c))
            }
            ChoiceField::Lunch => Lunch::from_index(index).map(|c| self.set_lunch(c)),
            ChoiceField::TestPreparation => {
                TestPreparation::from_index(index).map(|c| self.set_test_preparation(c))
            }
        }
        .is_some()
    }

    pub fn set_score(&mut self, field: ScoreField, score: Score) {
        match field {
            ScoreField::Reading => self.request.reading_score = score,
            ScoreField::Writing => self.request.writing_score = score,
        }
    }

    /// Apply a slider position; returns true if the stored score changed
    pub fn set_score_from_slider(&mut self, field: ScoreField, value: f32) -> bool {
        let score = Score::from_slider(value);
        if self.score(field) == score {
            return false;
        }
        self.set_score(field, score);
        true
    }

    /// Restore default values
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Apply a `SelectChoice` dispatched from a dropdown menu
pub fn select_choice(action: &SelectChoice, cx: &mut App) {
    let form_state = cx.global::<SpiGlobalStore>().form_state();
    let SelectChoice { field, index } = *action;
    form_state.update(cx, |form, cx| {
        if form.set_choice(field, index) {
            debug!(?field, value = form.selected(field), "Choice selected");
            cx.notify();
        } else {
            warn!(?field, index, "Choice index out of range");
        }
    });
}
