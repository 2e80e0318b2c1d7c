//! Pure functions that fold a delta configuration into an existing one
//!
//! Used by `extend`. Nothing here mutates its inputs: every function clones
//! the old side and overlays the delta on the copy.
//!
//! Ordering rules, which keep "first declared value" stable across extends:
//! - axes present on the old side keep their position; delta-only axes are
//!   appended in delta order
//! - inside an axis, old values keep their position; new values are appended

use indexmap::IndexMap;

use crate::config::{CompoundRule, DefaultVariants, SlotStyles, SlottedAxes, VariantAxes};

/// Merge two flat axis maps.
///
/// The merged axis's value set is the union of both sides; a value name
/// present on both sides takes the delta's fragment.
pub fn merge_flat_axes(old: &VariantAxes, delta: &VariantAxes) -> VariantAxes {
    merge_axes_with(old, delta, |old_fragment, delta_fragment| {
        *old_fragment = delta_fragment.clone();
    })
}

/// Merge two slotted axis maps.
///
/// Like [`merge_flat_axes`], except that a value name present on both sides
/// has its partial slot maps merged slot by slot: delta slot styles replace
/// old ones for the same slot, slots named on only one side are kept.
pub fn merge_slotted_axes(old: &SlottedAxes, delta: &SlottedAxes) -> SlottedAxes {
    merge_axes_with(old, delta, |old_styles, delta_styles| {
        *old_styles = overlay_slots(old_styles, delta_styles);
    })
}

/// Shallow overlay of slot styles: delta entries replace same-named entries
/// in place, new slots are appended.
pub fn overlay_slots(old: &SlotStyles, delta: &SlotStyles) -> SlotStyles {
    overlay(old, delta)
}

/// Shallow overlay of default selections.
pub fn overlay_defaults(old: &DefaultVariants, delta: &DefaultVariants) -> DefaultVariants {
    overlay(old, delta)
}

/// Old rules first, then the delta's, so delta rules are applied later and
/// can override.
pub fn concat_rules<A: Clone>(old: &[CompoundRule<A>], delta: &[CompoundRule<A>]) -> Vec<CompoundRule<A>> {
    old.iter().chain(delta).cloned().collect()
}

fn overlay<V: Clone>(old: &IndexMap<String, V>, delta: &IndexMap<String, V>) -> IndexMap<String, V> {
    let mut merged = old.clone();
    for (key, value) in delta {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Union two axis maps, combining values that exist on both sides with
/// `combine(old, delta)`.
fn merge_axes_with<T, F>(
    old: &IndexMap<String, IndexMap<String, T>>,
    delta: &IndexMap<String, IndexMap<String, T>>,
    combine: F,
) -> IndexMap<String, IndexMap<String, T>>
where
    T: Clone,
    F: Fn(&mut T, &T),
{
    let mut merged = old.clone();

    for (axis, delta_values) in delta {
        match merged.get_mut(axis) {
            Some(values) => {
                for (value, delta_payload) in delta_values {
                    match values.get_mut(value) {
                        Some(old_payload) => combine(old_payload, delta_payload),
                        None => {
                            values.insert(value.clone(), delta_payload.clone());
                        }
                    }
                }
            }
            None => {
                merged.insert(axis.clone(), delta_values.clone());
            }
        }
    }

    merged
}
