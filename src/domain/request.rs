//! PredictionRequest - Form Payload Sent to the Scoring Endpoint

use serde::{Deserialize, Serialize};

use super::score::Score;
use super::student::{Choice, Ethnicity, Gender, Lunch, ParentalEducation, TestPreparation};

/// Field names in wire order
pub const REQUEST_FIELDS: [&str; 7] = [
    "gender",
    "ethnicity",
    "parental_level_of_education",
    "lunch",
    "test_preparation_course",
    "reading_score",
    "writing_score",
];

/// One submission of the student form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub gender: Gender,
    pub ethnicity: Ethnicity,
    pub parental_level_of_education: ParentalEducation,
    pub lunch: Lunch,
    pub test_preparation_course: TestPreparation,
    pub reading_score: Score,
    pub writing_score: Score,
}

impl PredictionRequest {
    /// Flatten into `application/x-www-form-urlencoded` pairs
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.gender.as_str().to_string(),
            self.ethnicity.as_str().to_string(),
            self.parental_level_of_education.as_str().to_string(),
            self.lunch.as_str().to_string(),
            self.test_preparation_course.as_str().to_string(),
            self.reading_score.to_string(),
            self.writing_score.to_string(),
        ];

        REQUEST_FIELDS.into_iter().zip(values).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_have_exactly_seven_keys_with_unmodified_values() {
        let request = PredictionRequest {
            gender: Gender::Female,
            ethnicity: Ethnicity::GroupC,
            parental_level_of_education: ParentalEducation::SomeHighSchool,
            lunch: Lunch::FreeReduced,
            test_preparation_course: TestPreparation::Completed,
            reading_score: Score::new(72),
            writing_score: Score::new(0),
        };

        let fields = request.form_fields();
        assert_eq!(
            fields,
            vec![
                ("gender", "female".to_string()),
                ("ethnicity", "group C".to_string()),
                ("parental_level_of_education", "some high school".to_string()),
                ("lunch", "free/reduced".to_string()),
                ("test_preparation_course", "completed".to_string()),
                ("reading_score", "72".to_string()),
                ("writing_score", "0".to_string()),
            ]
        );
    }

    #[test]
    fn field_names_are_unique() {
        let mut names = REQUEST_FIELDS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), REQUEST_FIELDS.len());
    }
}
