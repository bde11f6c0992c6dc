//! Named frame styles loaded from JSON.

use crate::error::FrameError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use toyframe_style::FrameStyle;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameConfig {
    /// A map of all named frame styles.
    #[serde(default)]
    pub styles: HashMap<String, FrameStyle>,
    /// The style every named style is layered onto.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<String>,
}

impl FrameConfig {
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        let config: FrameConfig = serde_json::from_str(json)?;
        log::debug!(
            "Loaded frame config with {} styles (default: {:?})",
            config.styles.len(),
            config.default_style
        );
        if let Some(name) = &config.default_style {
            if !config.styles.contains_key(name) {
                return Err(FrameError::UnknownStyle(name.clone()));
            }
        }
        Ok(config)
    }

    /// Looks up a style by name, without layering.
    pub fn get_style(&self, name: &str) -> Option<&FrameStyle> {
        self.styles.get(name)
    }

    pub fn get_default_style(&self) -> Option<&FrameStyle> {
        self.default_style
            .as_ref()
            .and_then(|name| self.styles.get(name))
    }

    /// Returns the named style layered on top of the default style.
    pub fn resolve(&self, name: &str) -> Result<FrameStyle, FrameError> {
        let named = self.get_style(name).ok_or_else(|| {
            log::debug!("Frame style '{}' not found", name);
            FrameError::UnknownStyle(name.to_string())
        })?;

        let mut resolved = match &self.default_style {
            Some(default) => self
                .get_style(default)
                .cloned()
                .ok_or_else(|| FrameError::UnknownStyle(default.clone()))?,
            None => FrameStyle::default(),
        };
        resolved.merge(named);
        Ok(resolved)
    }
}
