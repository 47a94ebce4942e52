//! Prediction - Response Parsing and Score Classification

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Lower bound of the chart axis
pub const AXIS_MIN: f64 = 0.0;
/// Upper bound of the chart axis
pub const AXIS_MAX: f64 = 100.0;

/// Body returned by the scoring endpoint on success
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
}

impl PredictionResponse {
    /// Parse a 200 response body
    ///
    /// Anything that is not a JSON object with a finite numeric `prediction`
    /// is reported as `MalformedResponse`.
    pub fn parse(body: &str) -> Result<Self> {
        let response: Self =
            serde_json::from_str(body).map_err(|e| Error::MalformedResponse {
                message: e.to_string(),
            })?;

        if !response.prediction.is_finite() {
            return Err(Error::MalformedResponse {
                message: format!("prediction is not finite: {}", response.prediction),
            });
        }

        Ok(response)
    }
}

/// Four-tier qualitative label for a predicted score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceLevel {
    Poor,
    Average,
    Good,
    Excellent,
}

impl PerformanceLevel {
    /// Classify a score; 40, 60 and 80 belong to the upper tier
    pub fn classify(score: f64) -> Self {
        if score < 40.0 {
            PerformanceLevel::Poor
        } else if score < 60.0 {
            PerformanceLevel::Average
        } else if score < 80.0 {
            PerformanceLevel::Good
        } else {
            PerformanceLevel::Excellent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceLevel::Poor => "Poor",
            PerformanceLevel::Average => "Average",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Excellent => "Excellent",
        }
    }

    /// Translation key under the `result` namespace
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PerformanceLevel::Poor => "level_poor",
            PerformanceLevel::Average => "level_average",
            PerformanceLevel::Good => "level_good",
            PerformanceLevel::Excellent => "level_excellent",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PerformanceLevel::Poor => "😟",
            PerformanceLevel::Average => "😐",
            PerformanceLevel::Good => "🙂",
            PerformanceLevel::Excellent => "🌟",
        }
    }

    /// Tier color as 0xRRGGBB
    pub fn color(&self) -> u32 {
        match self {
            PerformanceLevel::Poor => 0xff0000,      // red
            PerformanceLevel::Average => 0xffa500,   // orange
            PerformanceLevel::Good => 0x008000,      // green
            PerformanceLevel::Excellent => 0x006400, // dark green
        }
    }
}

/// Render a score with two decimals
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

/// Bar length on the fixed [0, 100] axis as a fraction of the axis
pub fn bar_fraction(score: f64) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    ((score.clamp(AXIS_MIN, AXIS_MAX) - AXIS_MIN) / (AXIS_MAX - AXIS_MIN)) as f32
}

/// A completed prediction ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    /// Correlation id of the submission that produced this result
    pub submission_id: Uuid,
    /// Raw predicted math score
    pub score: f64,
    /// Tier derived from `score`
    pub level: PerformanceLevel,
    /// When the response arrived
    pub received_at: DateTime<Local>,
}

impl PredictionOutcome {
    pub fn new(submission_id: Uuid, response: PredictionResponse) -> Self {
        Self {
            submission_id,
            score: response.prediction,
            level: PerformanceLevel::classify(response.prediction),
            received_at: Local::now(),
        }
    }

    /// Score formatted for the metric card
    pub fn score_text(&self) -> String {
        format_score(self.score)
    }

    pub fn bar_fraction(&self) -> f32 {
        bar_fraction(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_tiers() {
        assert_eq!(PerformanceLevel::classify(-3.0), PerformanceLevel::Poor);
        assert_eq!(PerformanceLevel::classify(0.0), PerformanceLevel::Poor);
        assert_eq!(PerformanceLevel::classify(39.99), PerformanceLevel::Poor);
        assert_eq!(PerformanceLevel::classify(59.99), PerformanceLevel::Average);
        assert_eq!(PerformanceLevel::classify(79.99), PerformanceLevel::Good);
        assert_eq!(PerformanceLevel::classify(100.0), PerformanceLevel::Excellent);
        assert_eq!(PerformanceLevel::classify(112.4), PerformanceLevel::Excellent);
    }

    #[test]
    fn classify_boundaries_belong_to_upper_tier() {
        assert_eq!(PerformanceLevel::classify(40.0), PerformanceLevel::Average);
        assert_eq!(PerformanceLevel::classify(60.0), PerformanceLevel::Good);
        assert_eq!(PerformanceLevel::classify(80.0), PerformanceLevel::Excellent);
    }

    #[test]
    fn parse_good_response() {
        let response = PredictionResponse::parse(r#"{"prediction": 72.5}"#).expect("parse");
        let outcome = PredictionOutcome::new(Uuid::nil(), response);
        assert_eq!(outcome.level, PerformanceLevel::Good);
        assert_eq!(outcome.level.label(), "Good");
        assert_eq!(outcome.score_text(), "72.50");
    }

    #[test]
    fn parse_integer_prediction() {
        let response = PredictionResponse::parse(r#"{"prediction": 81}"#).expect("parse");
        assert_eq!(response.prediction, 81.0);
    }

    #[test]
    fn malformed_bodies_are_explicit_errors() {
        for body in ["", "model error", "{}", r#"{"prediction": "high"}"#, "[72.5]"] {
            let err = PredictionResponse::parse(body).expect_err(body);
            assert!(matches!(err, Error::MalformedResponse { .. }), "{body}: {err}");
        }
    }

    #[test]
    fn format_score_rounds_to_two_decimals() {
        assert_eq!(format_score(72.5), "72.50");
        assert_eq!(format_score(64.456), "64.46");
        assert_eq!(format_score(0.0), "0.00");
    }

    #[test]
    fn bar_fraction_is_clamped_to_axis() {
        assert_eq!(bar_fraction(50.0), 0.5);
        assert_eq!(bar_fraction(-20.0), 0.0);
        assert_eq!(bar_fraction(140.0), 1.0);
        assert_eq!(bar_fraction(f64::NAN), 0.0);
    }
}
