//! Title Bar Component
//!
//! Custom title bar with language/theme menu and the active endpoint.

use crate::assets::CustomIconName;
use crate::states::{LocaleAction, SpiGlobalStore, ThemeAction, i18n_common, i18n_title_bar};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct SpiTitleBar;

impl SpiTitleBar {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<SpiGlobalStore>().read(cx);
        let (locale, theme) = (store.locale(), store.theme());

        menu
            // Language section
            .label(i18n_title_bar(cx, "language"))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            // Theme section
            .label(i18n_title_bar(cx, "theme"))
            .menu_with_check(
                i18n_title_bar(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_title_bar(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_title_bar(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
    }
}

impl Render for SpiTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let endpoint = cx.global::<SpiGlobalStore>().client().endpoint().to_string();

        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .gap_2()
                    .pl_4()
                    .child(Icon::from(CustomIconName::GraduationCap).small())
                    .child(Label::new(i18n_common(cx, "app_name")).text_sm()),
            )
            .child(
                h_flex()
                    .items_center()
                    .justify_end()
                    .px_2()
                    .gap_2()
                    .mr_2()
                    .child(
                        Label::new(endpoint)
                            .text_xs()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        Button::new("settings")
                            .tooltip(i18n_title_bar(cx, "settings"))
                            .icon(IconName::Settings2)
                            .small()
                            .ghost()
                            .dropdown_menu(move |menu, window, cx| {
                                Self::render_settings_menu(menu, window, cx)
                            })
                            .anchor(Corner::TopRight),
                    ),
            )
    }
}
