//! UI configuration.
//!
//! Defaults are compiled in; a JSON override may be stored in localStorage
//! under [`CONFIG_STORAGE_KEY`].

use crate::shared::i18n::Locale;
use leptos::prelude::*;
use serde::Deserialize;
use web_sys::window;

pub const CONFIG_STORAGE_KEY: &str = "ui_config";

/// Trailing-edge delay for search inputs
pub const DEFAULT_DEBOUNCE_WAIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub debounce_wait_ms: u32,
    pub locale: Locale,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_wait_ms: DEFAULT_DEBOUNCE_WAIT_MS,
            locale: Locale::default(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("invalid ui config: {e}"))
    }

    /// Loads the stored override, falling back to defaults
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("{e}, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
