//! Bundled demo page configuration

use dropdown_types::DemoConfig;

/// Demo content compiled into the binary.
const DEMO_CONFIG_JSON: &str = include_str!("../demo.json");

/// Load the bundled demo config, falling back to the built-in defaults.
pub fn load_demo_config() -> DemoConfig {
    match DemoConfig::from_json(DEMO_CONFIG_JSON) {
        Ok(config) => {
            log::debug!("Loaded demo config with {} options", config.options.len());
            config
        }
        Err(err) => {
            log::error!("Invalid bundled demo config, using defaults: {}", err);
            DemoConfig::default()
        }
    }
}
