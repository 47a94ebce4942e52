//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::SpiGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<SpiGlobalStore>().read(cx).locale();
    t!(format!("common.{key}"), locale = locale).into()
}

/// Get translated string from "title_bar" namespace
pub fn i18n_title_bar(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<SpiGlobalStore>().read(cx).locale();
    t!(format!("title_bar.{key}"), locale = locale).into()
}

/// Get translated string from "form" namespace
pub fn i18n_form(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<SpiGlobalStore>().read(cx).locale();
    t!(format!("form.{key}"), locale = locale).into()
}

/// Get translated string from "result" namespace
pub fn i18n_result(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<SpiGlobalStore>().read(cx).locale();
    t!(format!("result.{key}"), locale = locale).into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `error_server: "Prediction failed: {body}"`
/// i18n_format(cx, "result.error_server", &[("body", "model error")])
/// // Returns "Prediction failed: model error"
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = cx.global::<SpiGlobalStore>().read(cx).locale();
    let mut result = t!(key, locale = locale).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}
