//! Application State
//!
//! Global application state including theme, locale, window bounds and the
//! prediction service settings.

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::services::{ClientConfig, PredictionClient};
use crate::states::{FormState, PredictionState};
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const SUPPORTED_LOCALES: &[&str] = &["en", "zh"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("spi-gui.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpiAppState {
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    theme: Option<String>,
    /// Prediction service settings
    #[serde(default)]
    client: ClientConfig,
}

impl SpiAppState {
    /// Load state from config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        let mut state = Self::from_toml(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once("-") {
                state.locale = Some(lang.to_string());
            }
        }

        Ok(state)
    }

    /// Parse persisted TOML; an empty document yields defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(value)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Active locale; unsupported languages fall back to English
    pub fn locale(&self) -> &str {
        match self.locale.as_deref() {
            Some(locale) if SUPPORTED_LOCALES.contains(&locale) => locale,
            _ => "en",
        }
    }

    pub fn client(&self) -> &ClientConfig {
        &self.client
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<SpiGlobalStore>()`
#[derive(Clone)]
pub struct SpiGlobalStore {
    app_state: Entity<SpiAppState>,
    form_state: Entity<FormState>,
    prediction_state: Entity<PredictionState>,
    client: PredictionClient,
}

impl SpiGlobalStore {
    /// Create a new global store
    pub fn new(
        app_state: Entity<SpiAppState>,
        form_state: Entity<FormState>,
        prediction_state: Entity<PredictionState>,
        client: PredictionClient,
    ) -> Self {
        Self {
            app_state,
            form_state,
            prediction_state,
            client,
        }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<SpiAppState> {
        self.app_state.clone()
    }

    /// Get the form state entity
    pub fn form_state(&self) -> Entity<FormState> {
        self.form_state.clone()
    }

    /// Get the prediction state entity
    pub fn prediction_state(&self) -> Entity<PredictionState> {
        self.prediction_state.clone()
    }

    /// Get the prediction client
    pub fn client(&self) -> &PredictionClient {
        &self.client
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a SpiAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut SpiAppState, &mut Context<SpiAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for SpiGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub async fn save_app_state(state: &SpiAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = state.to_toml()?;
    smol::fs::write(path, value).await?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut SpiAppState, &App) + Send + 'static + Clone,
{
    let store = cx.global::<SpiGlobalStore>().clone();

    cx.spawn(async move |cx| {
        // Step 1: Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        // Step 2: Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state).await {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        // Step 3: Refresh windows
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let state = SpiAppState::from_toml("  \n").expect("parse");
        assert_eq!(state, SpiAppState::default());
        assert_eq!(state.locale(), "en");
        assert_eq!(state.theme(), None);
        assert_eq!(state.client(), &ClientConfig::default());
    }

    #[test]
    fn round_trip_preferences_and_client() {
        let mut state = SpiAppState::new();
        state.set_locale("zh".to_string());
        state.set_theme(Some(ThemeMode::Dark));

        let text = state.to_toml().expect("serialize");
        let loaded = SpiAppState::from_toml(&text).expect("parse");
        assert_eq!(loaded.locale(), "zh");
        assert_eq!(loaded.theme(), Some(ThemeMode::Dark));
        assert_eq!(loaded.client().endpoint, ClientConfig::default().endpoint);
    }

    #[test]
    fn client_section_overrides_endpoint() {
        let text = r#"
            locale = "en"

            [client]
            endpoint = "http://192.168.1.20:5000/predict_api"
            delay_ms = 0
        "#;
        let state = SpiAppState::from_toml(text).expect("parse");
        assert_eq!(state.client().endpoint, "http://192.168.1.20:5000/predict_api");
        assert_eq!(state.client().delay_ms, 0);
    }

    #[test]
    fn unsupported_locale_falls_back_to_english() {
        let mut state = SpiAppState::new();
        state.set_locale("fr".to_string());
        assert_eq!(state.locale(), "en");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(SpiAppState::from_toml("locale = [").is_err());
    }
}
