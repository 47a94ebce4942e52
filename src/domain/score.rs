//! Score - Bounded Exam Score

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// An exam score in `[Score::MIN, Score::MAX]`
///
/// Every constructor clamps, so a `Score` outside the range cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 50;

    /// Create a score, clamping into range
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Create a score from a slider position, rounding to the nearest integer
    ///
    /// NaN maps to `MIN`.
    pub fn from_slider(value: f32) -> Self {
        Self::new(value.round() as i64)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Slider position for this score
    pub fn as_slider(self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Score::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_into_range() {
        assert_eq!(Score::new(-5).value(), 0);
        assert_eq!(Score::new(0).value(), 0);
        assert_eq!(Score::new(73).value(), 73);
        assert_eq!(Score::new(100).value(), 100);
        assert_eq!(Score::new(250).value(), 100);
    }

    #[test]
    fn slider_positions_round_and_clamp() {
        assert_eq!(Score::from_slider(72.6).value(), 73);
        assert_eq!(Score::from_slider(72.4).value(), 72);
        assert_eq!(Score::from_slider(100.0).value(), 100);
        assert_eq!(Score::from_slider(150.0).value(), 100);
        assert_eq!(Score::from_slider(-3.0).value(), 0);
        assert_eq!(Score::from_slider(f32::NAN).value(), 0);
    }

    #[test]
    fn slider_position_round_trips() {
        for value in [0, 1, 50, 99, 100] {
            let score = Score::new(value);
            assert_eq!(Score::from_slider(score.as_slider()), score);
        }
        assert_eq!(Score::default().as_slider(), 50.0);
    }

    #[test]
    fn deserialize_clamps() {
        let score: Score = serde_json::from_str("512").expect("deserialize");
        assert_eq!(score.value(), 100);
        assert_eq!(Score::default().value(), 50);
    }
}
