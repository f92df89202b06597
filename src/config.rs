//! Root configuration handed to `ApplicationRoot::create`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_MOUNT_SELECTOR: &str = "#app";
pub const DEFAULT_TITLE: &str = "Chat";
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSS selector of the single host element the root mounts into.
    pub mount_selector: String,
    pub title: String,
    /// Prefix for REST calls; empty means same origin.
    pub api_base: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            api_base: String::new(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON document; missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] on malformed JSON or an unknown
    /// log level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::InvalidConfig(e.to_string()))?;
        config.level_filter()?;
        Ok(config)
    }

    /// Build from the text of the host page's config element; a missing or
    /// blank element means defaults.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_json`].
    pub fn from_embedded(text: Option<&str>) -> Result<Self, ConfigError> {
        match text.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::from_json(raw),
            _ => Ok(Self::default()),
        }
    }

    /// Read the configuration embedded in the host document under
    /// [`CONFIG_ELEMENT_ID`].
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_json`].
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(feature = "csr")]
        {
            let text = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            Self::from_embedded(text.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::from_embedded(None)
        }
    }

    /// Parsed `log_level`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] when the level name is unknown.
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::InvalidConfig(format!("unknown log_level: {}", self.log_level)))
    }

    /// Join `api_base` with an absolute endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.trim_end_matches('/'))
    }
}
