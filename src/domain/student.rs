//! Student - Categorical Attributes of a Prediction Request
//!
//! Every attribute is a closed enumeration. The wire strings are exactly the
//! category values the model was trained on and must never be translated.

use serde::{Deserialize, Serialize};

/// A fixed-choice form attribute
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// All options in display order
    fn all() -> &'static [Self];

    /// Exact value sent on the wire
    fn as_str(&self) -> &'static str;

    /// Parse a wire value back into an option
    fn from_wire(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == value)
    }

    /// Position of this option within `all()`
    fn index(&self) -> usize {
        Self::all().iter().position(|c| c == self).unwrap_or(0)
    }

    /// Option at `index`, if any
    fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

/// Student gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
}

impl Choice for Gender {
    fn all() -> &'static [Self] {
        &[Gender::Male, Gender::Female]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Race / ethnicity group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Ethnicity {
    #[default]
    #[serde(rename = "group A")]
    GroupA,
    #[serde(rename = "group B")]
    GroupB,
    #[serde(rename = "group C")]
    GroupC,
    #[serde(rename = "group D")]
    GroupD,
    #[serde(rename = "group E")]
    GroupE,
}

impl Choice for Ethnicity {
    fn all() -> &'static [Self] {
        &[
            Ethnicity::GroupA,
            Ethnicity::GroupB,
            Ethnicity::GroupC,
            Ethnicity::GroupD,
            Ethnicity::GroupE,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Ethnicity::GroupA => "group A",
            Ethnicity::GroupB => "group B",
            Ethnicity::GroupC => "group C",
            Ethnicity::GroupD => "group D",
            Ethnicity::GroupE => "group E",
        }
    }
}

/// Highest education level reached by a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParentalEducation {
    #[default]
    #[serde(rename = "associate's degree")]
    Associate,
    #[serde(rename = "bachelor's degree")]
    Bachelor,
    #[serde(rename = "high school")]
    HighSchool,
    #[serde(rename = "master's degree")]
    Master,
    #[serde(rename = "some college")]
    SomeCollege,
    #[serde(rename = "some high school")]
    SomeHighSchool,
}

impl Choice for ParentalEducation {
    fn all() -> &'static [Self] {
        &[
            ParentalEducation::Associate,
            ParentalEducation::Bachelor,
            ParentalEducation::HighSchool,
            ParentalEducation::Master,
            ParentalEducation::SomeCollege,
            ParentalEducation::SomeHighSchool,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ParentalEducation::Associate => "associate's degree",
            ParentalEducation::Bachelor => "bachelor's degree",
            ParentalEducation::HighSchool => "high school",
            ParentalEducation::Master => "master's degree",
            ParentalEducation::SomeCollege => "some college",
            ParentalEducation::SomeHighSchool => "some high school",
        }
    }
}

/// Lunch type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lunch {
    #[default]
    #[serde(rename = "free/reduced")]
    FreeReduced,
    #[serde(rename = "standard")]
    Standard,
}

impl Choice for Lunch {
    fn all() -> &'static [Self] {
        &[Lunch::FreeReduced, Lunch::Standard]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Lunch::FreeReduced => "free/reduced",
            Lunch::Standard => "standard",
        }
    }
}

/// Test preparation course status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TestPreparation {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "completed")]
    Completed,
}

impl Choice for TestPreparation {
    fn all() -> &'static [Self] {
        &[TestPreparation::None, TestPreparation::Completed]
    }

    fn as_str(&self) -> &'static str {
        match self {
            TestPreparation::None => "none",
            TestPreparation::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_wire_values<C: Choice + std::fmt::Debug>(expected: &[&str]) {
        let actual: Vec<_> = C::all().iter().map(|c| c.as_str()).collect();
        assert_eq!(actual, expected);
        for (index, choice) in C::all().iter().enumerate() {
            assert_eq!(choice.index(), index);
            assert_eq!(C::from_wire(choice.as_str()), Some(*choice));
        }
    }

    #[test]
    fn wire_values_match_training_categories() {
        assert_wire_values::<Gender>(&["male", "female"]);
        assert_wire_values::<Ethnicity>(&["group A", "group B", "group C", "group D", "group E"]);
        assert_wire_values::<ParentalEducation>(&[
            "associate's degree",
            "bachelor's degree",
            "high school",
            "master's degree",
            "some college",
            "some high school",
        ]);
        assert_wire_values::<Lunch>(&["free/reduced", "standard"]);
        assert_wire_values::<TestPreparation>(&["none", "completed"]);
    }

    #[test]
    fn defaults_are_first_option() {
        assert_eq!(Gender::default(), Gender::all()[0]);
        assert_eq!(Ethnicity::default(), Ethnicity::all()[0]);
        assert_eq!(ParentalEducation::default(), ParentalEducation::all()[0]);
        assert_eq!(Lunch::default(), Lunch::all()[0]);
        assert_eq!(TestPreparation::default(), TestPreparation::all()[0]);
    }

    #[test]
    fn unknown_wire_value_is_rejected() {
        assert_eq!(Gender::from_wire("Male"), None);
        assert_eq!(Ethnicity::from_wire("group F"), None);
        assert_eq!(Lunch::from_index(2), None);
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&ParentalEducation::Master).expect("serialize");
        assert_eq!(json, "\"master's degree\"");
        let parsed: Lunch = serde_json::from_str("\"free/reduced\"").expect("deserialize");
        assert_eq!(parsed, Lunch::FreeReduced);
    }
}
