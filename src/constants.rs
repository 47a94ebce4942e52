//! Application Constants
//!
//! Centralized layout and service constants.

/// Default prediction endpoint of the local scoring service
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict_api";

/// Environment variable overriding the persisted endpoint
pub const ENDPOINT_ENV_VAR: &str = "SPI_ENDPOINT";

/// Pause before each request so the spinner is perceivable
pub const DEFAULT_PREDICT_DELAY_MS: u64 = 1200;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// Form column : result column width ratio (1.2 : 1)
pub const FORM_COLUMN_WEIGHT: f32 = 1.2;
pub const RESULT_COLUMN_WEIGHT: f32 = 1.0;

/// Width of the label column in the form
pub const FORM_LABEL_WIDTH: f32 = 200.0;

/// Width of the value readout right of each score slider
pub const SCORE_VALUE_WIDTH: f32 = 32.0;

/// Chart geometry
pub const CHART_HEIGHT: f32 = 180.0;
pub const CHART_BAR_HEIGHT: f32 = 48.0;
pub const CHART_TICKS: [u8; 6] = [0, 20, 40, 60, 80, 100];

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "spi-gui.log";
