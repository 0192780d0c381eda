//! Page-supplied configuration
//!
//! `<script type="application/json" id="tracker-config">{...}</script>`

use asset_core::domain::ConfigError;
use asset_core::TrackerConfig;

const CONFIG_ELEMENT_ID: &str = "tracker-config";

/// Defaults when the page has no config element.
///
/// A present but unreadable config is an error: falling back to defaults
/// would quietly turn an admin page into a standard one.
pub fn read_config() -> Result<TrackerConfig, ConfigError> {
    let Some(text) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return Ok(TrackerConfig::default());
    };
    TrackerConfig::from_json(&text)
}
