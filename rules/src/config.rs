use crate::error::ConfigError;
use derive_getters::Getters;
use serde::Deserialize;

/// Time a flash message stays visible before fading out.
pub const FADE_DELAY_MS: u32 = 3000;
/// Time between the fade and the removal of a flash message.
pub const REMOVAL_DELAY_MS: u32 = 500;

/// Class names and labels used by the page interactions.
#[derive(Debug, Clone, Getters, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    flash_selector: String,
    fade_class: String,
    focused_class: String,
    processing_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            flash_selector: ".alert".to_owned(),
            fade_class: "fade".to_owned(),
            focused_class: "focused".to_owned(),
            processing_label: "Processing...".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON document. Missing keys keep their default value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json_wasm::from_str(json)?)
    }
}
