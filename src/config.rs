//! App Configuration
//!
//! Read once at startup from an optional JSON block in `index.html`:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "log_level": "debug", "stub_latency_ms": 400 }
//! </script>
//! ```
//!
//! Missing block or missing keys fall back to defaults.

use serde::Deserialize;

use crate::error::ConfigError;

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Product name shown next to the logo
    pub brand: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    /// Delay applied by the local stub backend
    pub stub_latency_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: "SCINEX".to_string(),
            log_level: "info".to_string(),
            stub_latency_ms: 0,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from the page. No document or no config block means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    /// Unrecognized level names fall back to info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
