//! Built-in Tailwind-style conflict groups
//!
//! Order matters: the first matching group wins, so narrow patterns
//! (`gap-x-*`, `text-lg`) come before the catch-all of their family
//! (`gap-*`, `text-*`).
//!
//! Arbitrary values are split by shape: `[14px]`, `[length:...]` and
//! `[calc(...)]` are lengths, anything else in brackets falls through to the
//! family's color group.

use std::sync::LazyLock;

use super::conflict::ConflictGroup;

/// (id, pattern, overridden groups)
const GROUPS: &[(&str, &str, &[&str])] = &[
    // Layout
    (
        "display",
        r"^(block|inline-block|inline|flex|inline-flex|table|inline-table|table-caption|table-cell|table-column|table-column-group|table-footer-group|table-header-group|table-row-group|table-row|flow-root|grid|inline-grid|contents|list-item|hidden)$",
        &[],
    ),
    ("position", r"^(static|fixed|absolute|relative|sticky)$", &[]),
    ("visibility", r"^(visible|invisible|collapse)$", &[]),
    ("overflow-x", r"^overflow-x-(auto|hidden|clip|visible|scroll)$", &[]),
    ("overflow-y", r"^overflow-y-(auto|hidden|clip|visible|scroll)$", &[]),
    (
        "overflow",
        r"^overflow-(auto|hidden|clip|visible|scroll)$",
        &["overflow-x", "overflow-y"],
    ),
    ("z", r"^z-.+$", &[]),
    ("inset-x", r"^inset-x-.+$", &[]),
    ("inset-y", r"^inset-y-.+$", &[]),
    (
        "inset",
        r"^inset-.+$",
        &["inset-x", "inset-y", "top", "right", "bottom", "left"],
    ),
    ("top", r"^top-.+$", &[]),
    ("right", r"^right-.+$", &[]),
    ("bottom", r"^bottom-.+$", &[]),
    ("left", r"^left-.+$", &[]),
    // Flexbox and grid
    ("flex-direction", r"^flex-(row|row-reverse|col|col-reverse)$", &[]),
    ("flex-wrap", r"^flex-(wrap|wrap-reverse|nowrap)$", &[]),
    ("flex", r"^flex-(1|auto|initial|none|\[.+\])$", &[]),
    ("grow", r"^grow(-.+)?$", &[]),
    ("shrink", r"^shrink(-.+)?$", &[]),
    ("align-items", r"^items-(start|end|center|baseline|stretch)$", &[]),
    (
        "justify-content",
        r"^justify-(normal|start|end|center|between|around|evenly|stretch)$",
        &[],
    ),
    ("gap-x", r"^gap-x-.+$", &[]),
    ("gap-y", r"^gap-y-.+$", &[]),
    ("gap", r"^gap-.+$", &["gap-x", "gap-y"]),
    // Spacing
    ("pt", r"^pt-.+$", &[]),
    ("pr", r"^pr-.+$", &[]),
    ("pb", r"^pb-.+$", &[]),
    ("pl", r"^pl-.+$", &[]),
    ("ps", r"^ps-.+$", &[]),
    ("pe", r"^pe-.+$", &[]),
    ("px", r"^px-.+$", &["pr", "pl", "ps", "pe"]),
    ("py", r"^py-.+$", &["pt", "pb"]),
    ("p", r"^p-.+$", &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"]),
    ("mt", r"^mt-.+$", &[]),
    ("mr", r"^mr-.+$", &[]),
    ("mb", r"^mb-.+$", &[]),
    ("ml", r"^ml-.+$", &[]),
    ("ms", r"^ms-.+$", &[]),
    ("me", r"^me-.+$", &[]),
    ("mx", r"^mx-.+$", &["mr", "ml", "ms", "me"]),
    ("my", r"^my-.+$", &["mt", "mb"]),
    ("m", r"^m-.+$", &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"]),
    ("space-x", r"^space-x-.+$", &[]),
    ("space-y", r"^space-y-.+$", &[]),
    // Sizing
    ("min-w", r"^min-w-.+$", &[]),
    ("min-h", r"^min-h-.+$", &[]),
    ("max-w", r"^max-w-.+$", &[]),
    ("max-h", r"^max-h-.+$", &[]),
    ("w", r"^w-.+$", &[]),
    ("h", r"^h-.+$", &[]),
    ("size", r"^size-.+$", &["w", "h"]),
    // Typography
    (
        "font-size",
        r"^text-(base|(\d+(\.\d+)?)?(xs|sm|md|lg|xl)|\[(\d+(\.\d+)?(px|rem|em|pt|%|vh|vw)|length:.+|calc\(.+\)|clamp\(.+\))\])$",
        &[],
    ),
    ("text-align", r"^text-(left|center|right|justify|start|end)$", &[]),
    ("text-wrap", r"^text-(wrap|nowrap|balance|pretty)$", &[]),
    ("text-overflow", r"^(truncate|text-ellipsis|text-clip)$", &[]),
    ("text-color", r"^text-.+$", &[]),
    (
        "font-weight",
        r"^font-(thin|extralight|light|normal|medium|semibold|bold|extrabold|black)$",
        &[],
    ),
    ("font-family", r"^font-(sans|serif|mono)$", &[]),
    ("leading", r"^leading-.+$", &[]),
    ("tracking", r"^tracking-.+$", &[]),
    ("whitespace", r"^whitespace-.+$", &[]),
    // Backgrounds
    ("bg-attachment", r"^bg-(fixed|local|scroll)$", &[]),
    ("bg-size", r"^bg-(auto|cover|contain)$", &[]),
    ("bg-repeat", r"^bg-(repeat|no-repeat|repeat-x|repeat-y|repeat-round|repeat-space)$", &[]),
    (
        "bg-position",
        r"^bg-(bottom|center|left|left-bottom|left-top|right|right-bottom|right-top|top)$",
        &[],
    ),
    ("bg-image", r"^bg-(none|gradient-to-.+|linear-.+|radial(-.+)?|conic(-.+)?)$", &[]),
    ("bg-clip", r"^bg-clip-(border|padding|content|text)$", &[]),
    ("bg-origin", r"^bg-origin-(border|padding|content)$", &[]),
    ("bg-opacity", r"^bg-opacity-.+$", &[]),
    ("bg-color", r"^bg-.+$", &[]),
    // Borders
    ("border-style", r"^border-(solid|dashed|dotted|double|hidden|none)$", &[]),
    ("border-w-x", r"^border-x(-(\d+|\[(\d+(\.\d+)?(px|rem|em)|length:.+)\]))?$", &[]),
    ("border-w-y", r"^border-y(-(\d+|\[(\d+(\.\d+)?(px|rem|em)|length:.+)\]))?$", &[]),
    ("border-w-t", r"^border-t(-(\d+|\[(\d+(\.\d+)?(px|rem|em)|length:.+)\]))?$", &[]),
    ("border-w-r", r"^border-r(-(\d+|\[(\d+(\.\d+)?(px|rem|em)|length:.+)\]))?$", &[]),
    ("border-w-b", r"^border-b(-(\d+|\[(\d+(\.\d+)?(px|rem|em)|length:.+)\]))?$", &[]),
    ("border-w-l", r"^border-l(-(\d+|\[(\d+(\.\d+)?(px|rem|em)|length:.+)\]))?$", &[]),
    (
        "border-w",
        r"^border(-(\d+|\[(\d+(\.\d+)?(px|rem|em)|length:.+)\]))?$",
        &["border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l"],
    ),
    ("border-color", r"^border-.+$", &[]),
    ("rounded-side", r"^rounded-(t|r|b|l|s|e|tl|tr|br|bl|ss|se|es|ee)(-.+)?$", &[]),
    ("rounded", r"^rounded(-.+)?$", &["rounded-side"]),
    ("outline-style", r"^outline(-(none|hidden|dashed|dotted|double))?$", &[]),
    // Effects and interaction
    ("shadow", r"^shadow(-(2xs|xs|sm|md|lg|xl|2xl|inner|none|\[[\d-].*\]))?$", &[]),
    ("shadow-color", r"^shadow-.+$", &[]),
    ("opacity", r"^opacity-.+$", &[]),
    ("scale", r"^scale-(\d+|\[.+\])$", &[]),
    ("pointer-events", r"^pointer-events-(none|auto)$", &[]),
    ("select", r"^select-(none|text|all|auto)$", &[]),
    ("cursor", r"^cursor-.+$", &[]),
    ("transition", r"^transition(-(none|all|colors|opacity|shadow|transform|\[.+\]))?$", &[]),
    ("duration", r"^duration-.+$", &[]),
    ("ease", r"^ease-.+$", &[]),
    ("object-fit", r"^object-(contain|cover|fill|none|scale-down)$", &[]),
];

static BUILTIN_GROUPS: LazyLock<Vec<ConflictGroup>> = LazyLock::new(|| {
    GROUPS
        .iter()
        .map(|(id, pattern, overrides)| {
            ConflictGroup::new(*id, pattern)
                .expect("Invalid builtin conflict pattern")
                .overriding(overrides.iter().copied())
        })
        .collect()
});

pub(super) fn builtin_groups() -> &'static [ConflictGroup] {
    &BUILTIN_GROUPS
}
