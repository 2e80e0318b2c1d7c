//! Engines derived through several `extend` calls stay independent

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use rstest::rstest;
use variants_core::config::slot_styles;
use variants_core::{
    CompoundRule, ConflictMerge, Props, SlottedConfig, Variants, VariantsConfig, create_slotted_variants,
    create_variants, logging,
};
use variants_test_utils::{button_config, card_config, icon_config};

#[rstest]
fn test_three_generations() {
    let _ = logging::init();

    let icon = create_variants(icon_config()).unwrap();
    let sized = icon
        .extend(VariantsConfig::new().axis("size", [("sm", "h-4 w-4"), ("lg", "h-8 w-8")]))
        .unwrap();
    let branded = sized
        .extend(
            VariantsConfig::new()
                .axis("color", [("brand", "text-brand")])
                .default_variant("color", "brand")
                .compound(CompoundRule::new().when("color", "brand").when("size", "lg").class_name("drop-shadow")),
        )
        .unwrap();

    assert_eq!(icon.resolve_default(), "text-auto");
    assert_eq!(sized.resolve_default(), "text-auto h-4 w-4");
    assert_eq!(branded.resolve_default(), "text-brand h-4 w-4");
    assert_eq!(branded.resolve(&Props::new().with("size", "lg")), "text-brand h-8 w-8 drop-shadow");

    // Earlier generations never see later axes or rules.
    assert_eq!(sized.resolve(&Props::new().with("color", "brand")), "text-auto h-4 w-4");
    assert!(icon.prop_schema().get("size").is_none());
    assert_eq!(branded.prop_schema().len(), 2);
}

#[rstest]
fn test_siblings_do_not_share_changes() {
    let button = Variants::with_merger(button_config(), Arc::new(ConflictMerge::tailwind())).unwrap();

    let wide = button.extend(VariantsConfig::new().base("w-full")).unwrap();
    let tall = button.extend(VariantsConfig::new().base("h-16")).unwrap();

    let wide_classes = wide.resolve_default();
    let tall_classes = tall.resolve_default();

    assert!(wide_classes.split_whitespace().any(|t| t == "w-full"));
    assert!(!wide_classes.split_whitespace().any(|t| t == "h-16"));
    assert!(tall_classes.split_whitespace().any(|t| t == "h-16"));
    assert!(!tall_classes.split_whitespace().any(|t| t == "w-full"));
    assert!(!button.resolve_default().split_whitespace().any(|t| t == "w-full" || t == "h-16"));
}

#[rstest]
fn test_slotted_chain() {
    let card = create_slotted_variants(card_config()).unwrap();
    let with_footer = card
        .extend(
            SlottedConfig::new()
                .slot("footer", "flex justify-end")
                .axis("color", [("primary", slot_styles([("footer", "bg-blue-50")]))]),
        )
        .unwrap();
    let compact = with_footer
        .extend(
            SlottedConfig::new()
                .slot("header", "p-2 bg-gray-100")
                .axis("color", [("primary", slot_styles([("root", "bg-blue-700")]))]),
        )
        .unwrap();

    let classes = compact.resolve_default();
    assert_eq!(classes.get("root"), Some("flex flex-col bg-blue-700 text-sm"));
    assert_eq!(classes.get("header"), Some("p-2 bg-gray-100"));
    assert_eq!(classes.get("title"), Some("font-bold text-white text-sm"));
    assert_eq!(classes.get("footer"), Some("flex justify-end bg-blue-50"));

    let classes = with_footer.resolve_default();
    assert_eq!(classes.get("root"), Some("flex flex-col bg-blue-500 text-sm"));
    assert_eq!(classes.get("header"), Some("p-4 bg-gray-100"));

    assert_eq!(card.resolve_default().len(), 3);
}

#[rstest]
fn test_engines_are_shared_across_threads() {
    let button = create_variants(button_config()).unwrap();
    let expected = button.resolve(&Props::new().with("color", "primary"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let button = button.clone();
            thread::spawn(move || button.resolve(&Props::new().with("color", "primary")))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
