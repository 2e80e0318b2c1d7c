//! Configuration text in every supported format drives the same engines
//!
//! The badge fixture exists as TOML, JSON and YAML with identical content.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use variants_core::{
    ConfigFormat, ConflictGroup, ConflictMerge, Error, Props, SlottedConfig, SlottedVariants, TokenMerge,
    Variants, VariantsConfig, create_variants, parse_config,
};

const BADGE_TOML: &str = include_str!("../../../test-fixtures/configs/badge.toml");
const BADGE_JSON: &str = include_str!("../../../test-fixtures/configs/badge.json");
const BADGE_YAML: &str = include_str!("../../../test-fixtures/configs/badge.yaml");
const TABS_YAML: &str = include_str!("../../../test-fixtures/configs/tabs.yaml");

fn load(file_name: &str, content: &str) -> VariantsConfig {
    let extension = file_name.rsplit('.').next().unwrap_or_default();
    let format = ConfigFormat::from_extension(extension).unwrap();
    parse_config(format, content).unwrap()
}

#[rstest]
#[case("badge.toml", BADGE_TOML)]
#[case("badge.json", BADGE_JSON)]
#[case("badge.yaml", BADGE_YAML)]
fn test_badge_resolves_identically(#[case] file_name: &str, #[case] content: &str) {
    let badge = create_variants(load(file_name, content)).unwrap();

    assert_eq!(
        badge.resolve_default(),
        "inline-flex items-center rounded-full bg-gray-100 text-gray-800 text-sm px-3 border-0"
    );
    assert_eq!(
        badge.resolve(&Props::new().with("tone", "danger").with("isOutlined", true).with("size", "sm")),
        "inline-flex items-center rounded-full px-2 text-red-800 text-xs bg-transparent border \
         border-red-500 font-semibold uppercase"
    );
}

#[rstest]
fn test_formats_parse_to_equal_configs() {
    let toml = VariantsConfig::from_toml_str(BADGE_TOML).unwrap();
    let json = VariantsConfig::from_json_str(BADGE_JSON).unwrap();
    let yaml = VariantsConfig::from_yaml_str(BADGE_YAML).unwrap();

    assert_eq!(toml, json);
    assert_eq!(json, yaml);
}

#[rstest]
fn test_parsed_config_with_token_merge() {
    let badge = Variants::with_merger(
        VariantsConfig::from_toml_str(BADGE_TOML).unwrap(),
        Arc::new(TokenMerge::new()),
    )
    .unwrap();

    assert_eq!(
        badge.resolve_default(),
        "inline-flex items-center rounded-full px-2 bg-gray-100 text-gray-800 text-sm px-3 border-0"
    );
    assert_eq!(
        badge.resolve(&Props::new().with("tone", "danger").with("isOutlined", true).with("size", "sm")),
        "inline-flex items-center rounded-full px-2 bg-red-100 text-red-800 text-xs bg-transparent border \
         border-red-500 font-semibold uppercase"
    );
}

#[rstest]
fn test_props_from_json() {
    let badge = create_variants(VariantsConfig::from_json_str(BADGE_JSON).unwrap()).unwrap();
    let props: Props =
        serde_json::from_str(r#"{"tone": "info", "size": "sm", "className": ["ml-1"], "class": "mr-1"}"#).unwrap();

    assert_eq!(
        badge.resolve(&props),
        "inline-flex items-center rounded-full px-2 bg-blue-100 text-blue-800 text-xs border-0 \
         font-semibold uppercase ml-1 mr-1"
    );
}

#[rstest]
fn test_slotted_yaml_with_conflict_merge() {
    let tabs = SlottedVariants::with_merger(
        SlottedConfig::from_yaml_str(TABS_YAML).unwrap(),
        Arc::new(ConflictMerge::tailwind()),
    )
    .unwrap();

    let classes = tabs.resolve(&Props::new().with("orientation", "vertical").with("isFullWidth", true));

    assert_eq!(classes.get("list"), Some("flex gap-1 flex-col border-b-0 border-r w-full"));
    assert_eq!(classes.get("trigger"), Some("px-3 py-2 text-sm grow text-left"));
    assert_eq!(classes.get("panel"), Some("p-4 pl-6"));

    let classes = tabs.resolve_default();
    assert_eq!(classes.get("list"), Some("flex gap-1 border-b flex-row"));
    assert_eq!(classes.get("panel"), Some("p-4"));
}

#[rstest]
#[case(ConfigFormat::Toml, "base = [")]
#[case(ConfigFormat::Json, "{\"base\": ")]
#[case(ConfigFormat::Yaml, "variants: [unclosed")]
fn test_malformed_text_is_a_parse_error(#[case] format: ConfigFormat, #[case] content: &str) {
    let result: variants_core::Result<VariantsConfig> = parse_config(format, content);

    match result {
        Err(Error::ConfigParse { format: name, .. }) => assert_eq!(name, format.to_string()),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[rstest]
fn test_unknown_extension() {
    let err = ConfigFormat::from_extension("ini").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported config format: ini");
}

#[rstest]
fn test_empty_axis_in_text_is_rejected() {
    let config = VariantsConfig::from_json_str(r#"{"variants": {"tone": {}}}"#).unwrap();
    let err = create_variants(config).unwrap_err();
    assert_eq!(err.to_string(), "Variant axis 'tone' declares no values");
}

fn brand_merger() -> variants_core::Result<ConflictMerge> {
    let merger = ConflictMerge::tailwind()
        .with_group(ConflictGroup::new("brand-tone", r"^tone-(calm|loud)$")?.overriding(["text-color"]));
    merger.validate()?;
    Ok(merger)
}

#[rstest]
fn test_custom_conflict_group() {
    let merger = brand_merger().unwrap();
    let badge = Variants::with_merger(
        VariantsConfig::new()
            .base("text-gray-800")
            .axis("mood", [("calm", "tone-calm"), ("loud", "tone-loud")]),
        Arc::new(merger),
    )
    .unwrap();

    assert_eq!(badge.resolve(&Props::new().with("mood", "loud").class("tone-calm")), "tone-calm");
}

#[rstest]
fn test_invalid_custom_group_surfaces_as_core_error() {
    let result: variants_core::Result<ConflictGroup> =
        ConflictGroup::new("broken", "(").map_err(Error::from);

    assert!(matches!(result, Err(Error::Class(variants_class::Error::InvalidPattern { .. }))));
}
