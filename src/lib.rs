//! SPI GUI Library
//!
//! Student Performance Indicator: a desktop form that sends a student's
//! profile to a local scoring service and shows the predicted math score
//! with its performance level.

rust_i18n::i18n!("locales", fallback = "en");

pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
pub mod views;
