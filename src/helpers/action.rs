//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Form actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum FormAction {
    /// Submit the form for prediction
    Submit,
    /// Restore default inputs and clear the result
    Reset,
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    let parts = keystroke.split('-');
    let mut display_text = String::new();

    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    for (i, part) in parts.enumerate() {
        if i > 0 {
            display_text.push_str(separator);
        }

        let symbol = match part {
            "secondary" | "cmd" => {
                #[cfg(target_os = "macos")]
                { "⌘" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "alt" => {
                #[cfg(target_os = "macos")]
                { "⌥" }
                #[cfg(not(target_os = "macos"))]
                { "Alt" }
            }
            "shift" => {
                #[cfg(target_os = "macos")]
                { "⇧" }
                #[cfg(not(target_os = "macos"))]
                { "Shift" }
            }
            "enter" => "Enter",
            c => {
                display_text.push_str(&c.to_uppercase());
                continue;
            }
        };
        display_text.push_str(symbol);
    }

    display_text
}

/// Keystroke that submits the form
pub const SUBMIT_KEYSTROKE: &str = "secondary-enter";

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        KeyBinding::new(SUBMIT_KEYSTROKE, FormAction::Submit, None),
        KeyBinding::new("secondary-r", FormAction::Reset, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn humanize_submit_keystroke() {
        assert_eq!(humanize_keystroke(SUBMIT_KEYSTROKE), "Ctrl+Enter");
        assert_eq!(humanize_keystroke("secondary-shift-r"), "Ctrl+Shift+R");
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn humanize_submit_keystroke() {
        assert_eq!(humanize_keystroke(SUBMIT_KEYSTROKE), "⌘Enter");
    }
}
