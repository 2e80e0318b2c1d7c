//! Shared test utilities for the variants workspace.
//!
//! This crate provides the sample configurations and helpers that several
//! crate test suites use. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`fixtures`]: parsed sample configurations (button, icon, card)
//! - [`recording`]: [`RecordingMerge`], a class merger that logs its calls

pub mod fixtures;
pub mod recording;

pub use fixtures::{BUTTON_JSON, CARD_YAML, ICON_TOML, button_config, card_config, icon_config};
pub use recording::RecordingMerge;
