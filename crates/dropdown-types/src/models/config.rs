//! Widget and demo page configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::option::SelectOption;
use crate::error::{ConfigError, Result};

/// Text shown on the toggle button while nothing is selected.
pub const DEFAULT_LABEL: &str = "Select One";

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

/// Construction-time settings of a single dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownConfig {
    /// Fallback text for the toggle button
    #[serde(default = "default_label")]
    pub label: String,
    /// Show a search box when the dropdown opens
    #[serde(default)]
    pub searchable: bool,
    /// Ignore clicks on the toggle button
    #[serde(default)]
    pub disabled: bool,
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self { label: default_label(), searchable: false, disabled: false }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Content of the demo page that hosts the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Page heading
    pub title: String,
    /// Settings passed to the hosted dropdown
    #[serde(default)]
    pub dropdown: DropdownConfig,
    /// Options offered by the hosted dropdown
    pub options: Vec<SelectOption>,
}

impl DemoConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject options the host page cannot tell apart.
    ///
    /// The widget accepts any list; this check only guards the bundled demo content.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.options.len());
        for (index, option) in self.options.iter().enumerate() {
            if option.value.is_empty() {
                return Err(ConfigError::invalid(
                    format!("options[{index}].value"),
                    "value must not be empty",
                ));
            }
            if !seen.insert(option.value.as_str()) {
                return Err(ConfigError::invalid(
                    format!("options[{index}].value"),
                    format!("duplicate value \"{}\"", option.value),
                ));
            }
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        let options = [
            ("red", "Red"),
            ("green", "Green"),
            ("blue", "Blue"),
            ("purple", "Purple"),
            ("yellow", "Yellow"),
            ("white", "White"),
        ]
        .into_iter()
        .map(|(value, label)| SelectOption::new(value, label))
        .collect();

        Self {
            title: "DropdownSelect Reusable Component Demo".to_string(),
            dropdown: DropdownConfig::new().with_label("Select a color").searchable(true),
            options,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_config_defaults() {
        let config: DropdownConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DropdownConfig::default());
        assert_eq!(config.label, "Select One");
        assert!(!config.searchable);
        assert!(!config.disabled);
    }

    #[test]
    fn test_demo_config_from_json() {
        let json = r#"{
            "title": "Colors",
            "dropdown": { "label": "Pick one", "searchable": true },
            "options": [
                { "value": "red", "label": "Red" },
                { "value": "blue", "label": "Blue" }
            ]
        }"#;

        let config = DemoConfig::from_json(json).unwrap();
        assert_eq!(config.title, "Colors");
        assert_eq!(config.dropdown.label, "Pick one");
        assert!(config.dropdown.searchable);
        assert!(!config.dropdown.disabled);
        assert_eq!(config.options[1], SelectOption::new("blue", "Blue"));
    }

    #[test]
    fn test_demo_config_missing_dropdown_uses_defaults() {
        let json = r#"{ "title": "t", "options": [] }"#;
        let config = DemoConfig::from_json(json).unwrap();
        assert_eq!(config.dropdown, DropdownConfig::default());
    }

    #[test]
    fn test_demo_config_rejects_duplicates() {
        let json = r#"{
            "title": "t",
            "options": [
                { "value": "red", "label": "Red" },
                { "value": "red", "label": "Crimson" }
            ]
        }"#;

        let err = DemoConfig::from_json(json).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ValidationError {
                field: "options[1].value".to_string(),
                message: "duplicate value \"red\"".to_string(),
            }
        );
    }

    #[test]
    fn test_demo_config_rejects_empty_value() {
        let json = r#"{ "title": "t", "options": [ { "value": "", "label": "Nothing" } ] }"#;
        let err = DemoConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_demo_config_malformed_json() {
        let err = DemoConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_default_demo_config_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.options.len(), 6);
        assert_eq!(config.dropdown.label, "Select a color");
        assert!(config.dropdown.searchable);
    }
}
