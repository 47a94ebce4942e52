//! SPI GUI - Main Entry Point
//!
//! Student exam performance indicator backed by a local scoring service.

use gpui::{App, AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use gpui_component::{Root, Theme, ThemeMode, TitleBar};
use spi_gui::assets::Assets;
use spi_gui::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, LOG_FILE_PREFIX, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use spi_gui::helpers::{
    FormAction, MenuAction, get_or_create_data_dir, is_development, new_key_bindings,
};
use spi_gui::services::{ClientConfig, PredictionClient};
use spi_gui::states::{
    FormState, LocaleAction, PredictionState, SelectChoice, SpiAppState, SpiGlobalStore,
    ThemeAction, reset_prediction_form, select_choice, submit_prediction,
    update_app_state_and_save,
};
use spi_gui::views::SpiShell;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: `info`, plus crate debug logs in
/// development builds
fn default_log_directive(development: bool) -> String {
    if development {
        "info,spi_gui=debug".to_string()
    } else {
        "info".to_string()
    }
}

/// Console logging plus a daily log file in the data directory.
///
/// The returned guard must live until exit so buffered lines are flushed.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(is_development())));

    let (file_layer, guard, dir_error) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = dir_error {
        warn!(error = %e, "Log file disabled, data directory unavailable");
    }
    guard
}

fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
}

fn build_client(config: &ClientConfig) -> spi_gui::error::Result<PredictionClient> {
    let config = config.clone().with_env_override();
    PredictionClient::new(config).or_else(|e| {
        error!(error = %e, "Invalid prediction endpoint, using default");
        PredictionClient::new(ClientConfig::default())
    })
}

fn init_actions(cx: &mut App) {
    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
    });

    cx.on_action(|action: &FormAction, cx: &mut App| match action {
        FormAction::Submit => submit_prediction(cx),
        FormAction::Reset => reset_prediction_form(cx),
    });

    cx.on_action(|action: &SelectChoice, cx: &mut App| select_choice(action, cx));

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(mode, cx);
        update_app_state_and_save(cx, "save_theme", move |state, _cx| {
            state.set_theme(mode);
        });
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = action.code();
        update_app_state_and_save(cx, "save_locale", move |state, _cx| {
            state.set_locale(locale.to_string());
        });
    });

    // Quit the app when all windows are closed
    cx.on_window_closed(|cx| {
        if cx.windows().is_empty() {
            cx.quit();
        }
    })
    .detach();
}

fn main() {
    let _log_guard = init_tracing();
    info!("Starting SPI GUI...");

    let app_state = SpiAppState::try_load().unwrap_or_else(|e| {
        error!(error = %e, "Failed to load config, using defaults");
        SpiAppState::new()
    });
    let client = match build_client(app_state.client()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create prediction client");
            std::process::exit(1);
        }
    };
    info!(endpoint = client.endpoint(), "Prediction client ready");

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());
        init_actions(cx);
        apply_theme(app_state.theme(), cx);

        let bounds = app_state.bounds().cloned().unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });

        let app_state = cx.new(|_| app_state);
        let form_state = cx.new(|_| FormState::new());
        let prediction_state = cx.new(|_| PredictionState::new());
        cx.set_global(SpiGlobalStore::new(
            app_state,
            form_state,
            prediction_state,
            client,
        ));

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitleBar::title_bar_options()),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let view = cx.new(|cx| SpiShell::new(window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_info() {
        assert_eq!(default_log_directive(false), "info");
        assert!(default_log_directive(true).starts_with("info,"));
        assert!(EnvFilter::try_new(default_log_directive(true)).is_ok());
    }
}
