//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Action → State Method → spawn Service Call → Result → State Update → notify → UI Refresh
//! ```

mod app;
mod form;
mod i18n;
mod prediction;

pub use app::*;
pub use form::*;
pub use i18n::*;
pub use prediction::*;
