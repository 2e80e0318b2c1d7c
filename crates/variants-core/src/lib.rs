//! Declarative style-variant resolution.
//!
//! A configuration declares base classes, named variant axes with a class
//! fragment per value, compound rules that add classes for specific value
//! combinations, and default selections. An engine built from it turns a
//! caller's [`Props`] into class strings:
//!
//! - [`Variants`] resolves to one class string
//! - [`SlottedVariants`] resolves to one class string per named slot
//!
//! Engines are immutable. [`Variants::extend`] and [`SlottedVariants::extend`]
//! derive a new engine from an existing one plus a delta configuration,
//! leaving the original usable and unchanged.
//!
//! # Example
//!
//! ```
//! use variants_core::{CompoundRule, Props, VariantsConfig, create_variants};
//!
//! let button = create_variants(
//!     VariantsConfig::new()
//!         .base("inline-flex items-center")
//!         .axis("intent", [("primary", "bg-blue-600"), ("danger", "bg-red-600")])
//!         .axis("isLoading", [("true", "opacity-50")])
//!         .compound(CompoundRule::new().when("intent", "danger").when("isLoading", true).class_name("cursor-wait")),
//! )
//! .unwrap();
//!
//! assert_eq!(button.resolve_default(), "inline-flex items-center bg-blue-600");
//! assert_eq!(
//!     button.resolve(&Props::new().with("intent", "danger").with("isLoading", true)),
//!     "inline-flex items-center bg-red-600 opacity-50 cursor-wait"
//! );
//! ```
//!
//! Class merging goes through the [`ClassMerge`] trait. Engines default to
//! [`ConflictMerge::tailwind`], which drops utilities overridden by a later
//! one in the same group; [`TokenMerge`] only removes duplicate tokens.

pub mod axis;
pub mod config;
pub mod error;
pub mod logging;
pub mod merge;
pub mod props;
pub mod slots;
pub mod variants;

pub use axis::{AxisKind, PropSchema, Selection};
pub use config::{
    CompoundRule, ConfigFormat, DefaultVariants, Requirement, SlotStyles, SlottedAxes, SlottedConfig,
    VariantAxes, VariantValue, VariantsConfig, parse_config,
};
pub use error::{Error, Result};
pub use props::Props;
pub use slots::{SlotClass, SlotClasses, SlottedVariants, create_slotted_variants};
pub use variants::{Variants, create_variants};

pub use variants_class::{ClassMerge, ClassValue, ConflictGroup, ConflictMerge, StyleFragment, TokenMerge};
