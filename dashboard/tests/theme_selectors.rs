#![cfg(test)]
/*!
Selector lint for the shared theme.

Every class the dashboard components emit must have a rule in
`ui/assets/theme/main.css`. A plain substring check is enough to catch a
renamed or dropped selector before it ships as an unstyled table.

When a component starts emitting a new class, add it to `REQUIRED_SELECTORS`.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".dashboard {",
    ".dashboard__body",
    ".dashboard__content",
    ".page {",
    ".page__header",
    ".page__title",
    ".page__subtitle",
    // Buttons
    ".button {",
    ".button--primary",
    // Notifications table
    ".notifications-table",
    ".table__head",
    ".table__head--id",
    ".table__row",
    ".table__row--unread",
    ".table__cell",
    ".table__cell--provider",
    ".table__link",
    ".table__placeholder",
    ".unread-dot",
    ".row-menu__trigger",
    // Status cells
    ".status--pending",
    ".status--delivered",
    ".status--failed",
    ".status--attempted",
    ".status--undelivered",
    // Contract error panel
    ".contract-error",
    ".contract-error__title",
    ".contract-error__detail",
    // Shared
    ".avatar",
    ".avatar__fallback",
    ".icon {",
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors in shared theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Shared theme looks truncated ({non_ws_len} non-whitespace chars)"
    );
}
