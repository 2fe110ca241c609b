//! TOML configuration for the plain-data props.
//!
//! ```toml
//! label = "Choose preferred work locations"
//! placeholder = "Type a Country"
//! hide_toggle_button = false
//! max_visible_items = 6
//!
//! [styles]
//! highlight_item_bg = "#a277ff"
//!
//! [styles.label]
//! foreground = "rebeccapurple"
//! bold = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::props::AutocompleteProps;
use crate::style::StyleProps;

/// Settings that can be loaded from a file and merged into props.
///
/// Fields left out of the file keep the props' current values, except
/// `styles` which replaces the props' styles as a whole (missing style
/// entries take their defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_toggle_button: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_create_item: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_visible_items: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleProps>,
}

impl AutocompleteConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a specific path, falling back to defaults if the
    /// file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no autocomplete config at {}", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("loaded autocomplete config from {}", path.display());
        Ok(config)
    }

    /// Merge the configured values into `props`.
    pub fn apply(&self, mut props: AutocompleteProps) -> AutocompleteProps {
        if let Some(label) = &self.label {
            props.label = label.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            props.placeholder = placeholder.clone();
        }
        if let Some(hide) = self.hide_toggle_button {
            props.hide_toggle_button = hide;
        }
        if let Some(disable) = self.disable_create_item {
            props.disable_create_item = disable;
        }
        if let Some(rows) = self.max_visible_items {
            props.max_visible_items = rows.max(1);
        }
        if let Some(styles) = &self.styles {
            props.styles = styles.clone();
        }
        props
    }
}
