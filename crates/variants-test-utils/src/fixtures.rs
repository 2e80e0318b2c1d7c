//! Sample configurations in every supported text format
//!
//! - button: many axes, boolean `true`/`false` pairs, list `className`s and
//!   multi-value compound conditions (JSON)
//! - icon: a single color axis with a non-first default (TOML)
//! - card: a slotted configuration (YAML)

use variants_core::{SlottedConfig, VariantsConfig};

pub const BUTTON_JSON: &str = include_str!("../fixtures/button.json");
pub const ICON_TOML: &str = include_str!("../fixtures/icon.toml");
pub const CARD_YAML: &str = include_str!("../fixtures/card.yaml");

/// The button configuration.
///
/// # Panics
///
/// Panics if the bundled fixture fails to parse.
pub fn button_config() -> VariantsConfig {
    VariantsConfig::from_json_str(BUTTON_JSON).expect("button fixture should parse")
}

/// The icon configuration.
pub fn icon_config() -> VariantsConfig {
    VariantsConfig::from_toml_str(ICON_TOML).expect("icon fixture should parse")
}

/// The card slotted configuration with `root`, `header` and `title` slots.
pub fn card_config() -> SlottedConfig {
    SlottedConfig::from_yaml_str(CARD_YAML).expect("card fixture should parse")
}
