//! View Components
//!
//! UI components for the SPI-GUI application.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                         Header                               │
//! ├────────────────────────────────┬────────────────────────────┤
//! │                                │                             │
//! │          FormPanel             │        ResultPanel          │
//! │            (1.2)               │           (1.0)             │
//! │                                │                             │
//! ├────────────────────────────────┴────────────────────────────┤
//! │                         Footer                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod content;
mod form_panel;
mod result_panel;
mod shell;
mod title_bar;

pub use content::*;
pub use form_panel::*;
pub use result_panel::*;
pub use shell::*;
pub use title_bar::*;
