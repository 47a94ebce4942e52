//! Service Layer
//!
//! The service layer wraps the external scoring endpoint and bridges its
//! async HTTP client into GPUI tasks.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │   FormPanel submit ─▶ PredictionState.begin  │
//! └──────────────────────────────────────────────┘
//!                      │ PredictionRequest
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │  run_in_tokio ─▶ PredictionClient::predict   │
//! │        POST /predict_api (form fields)       │
//! └──────────────────────────────────────────────┘
//!                      │ Result<PredictionOutcome>
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │   PredictionState.finish ─▶ ResultPanel      │
//! └──────────────────────────────────────────────┘
//! ```

mod client;
mod runtime;

pub use client::*;
pub use runtime::*;
