//! Domain - Pure Data Structures and Protocol Types
//!
//! These types don't depend on GPUI and represent the prediction contract.

mod prediction;
mod request;
mod score;
mod student;

pub use prediction::*;
pub use request::*;
pub use score::*;
pub use student::*;
