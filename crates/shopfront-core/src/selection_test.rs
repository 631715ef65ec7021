use super::*;
use crate::catalog::Color;

fn variant(color: &str, storage: &str, ram: &str, price: u64) -> AvailableVariant {
    AvailableVariant {
        color: color.to_owned(),
        storage: storage.to_owned(),
        ram: ram.to_owned(),
        price,
    }
}

fn color(name: &str, code: &str) -> Color {
    Color {
        name: name.to_owned(),
        code: code.to_owned(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn selection(color: &str, storage: &str, ram: &str) -> Selection {
    Selection {
        color: Some(color.to_owned()),
        storage: Some(storage.to_owned()),
        ram: Some(ram.to_owned()),
    }
}

/// Black 128/8 @500, Black 256/8 @600, White 128/8 @550.
fn basic_phone() -> Product {
    Product {
        name: "Nova 12".to_owned(),
        images: strings(&["front.png"]),
        colors: vec![color("Black", "#111111"), color("White", "#fafafa")],
        note: String::new(),
        storage_options: strings(&["128GB", "256GB"]),
        ram_options: strings(&["8GB"]),
        specs_page: "https://example.com/nova-12".to_owned(),
        available_variants: vec![
            variant("Black", "128GB", "8GB", 500),
            variant("Black", "256GB", "8GB", 600),
            variant("White", "128GB", "8GB", 550),
        ],
    }
}

/// A richer product with a color that has no stock and RAM that depends on storage.
fn wide_phone() -> Product {
    Product {
        name: "Nova 12 Pro".to_owned(),
        images: vec![],
        colors: vec![
            color("Black", "#111111"),
            color("Blue", "#1e3a8a"),
            color("Gold", "#d4af37"),
        ],
        note: String::new(),
        storage_options: strings(&["128GB", "256GB", "512GB"]),
        ram_options: strings(&["8GB", "12GB", "16GB"]),
        specs_page: "https://example.com/nova-12-pro".to_owned(),
        available_variants: vec![
            variant("Black", "128GB", "8GB", 800),
            variant("Black", "256GB", "12GB", 950),
            variant("Black", "256GB", "8GB", 900),
            variant("Black", "512GB", "16GB", 1_200),
            variant("Blue", "256GB", "12GB", 980),
            variant("Blue", "256GB", "8GB", 930),
        ],
    }
}

fn option<'a>(options: &'a [crate::view::OptionView], value: &str) -> &'a crate::view::OptionView {
    options
        .iter()
        .find(|o| o.value == value)
        .unwrap_or_else(|| panic!("option {value} missing"))
}

// -----------------------------------------------------------------------
// Initial selection
// -----------------------------------------------------------------------

#[test]
fn initial_selection_is_cheapest_variant() {
    let product = basic_phone();
    let sel = Selection::initial(&product);
    assert_eq!(sel, selection("Black", "128GB", "8GB"));

    let view = refresh(&product, &sel);
    assert_eq!(view.price, PriceDisplay::Price { amount: 500 });
}

#[test]
fn initial_selection_prefers_first_of_tied_cheapest() {
    let mut product = basic_phone();
    product.available_variants = vec![
        variant("White", "128GB", "8GB", 500),
        variant("Black", "128GB", "8GB", 500),
    ];
    assert_eq!(
        Selection::initial(&product),
        selection("White", "128GB", "8GB")
    );
}

#[test]
fn initial_selection_is_empty_without_variants() {
    let mut product = basic_phone();
    product.available_variants.clear();
    let sel = Selection::initial(&product);
    assert_eq!(sel, Selection::default());

    let view = refresh(&product, &sel);
    assert_eq!(view.price, PriceDisplay::NotAvailable);
    assert!(view.color_label.is_none());
    assert!(view.storage.iter().all(|o| !o.selectable && !o.active));
}

// -----------------------------------------------------------------------
// select_color
// -----------------------------------------------------------------------

#[test]
fn select_color_resolves_to_cheapest_in_color() {
    let product = basic_phone();
    let sel = select_color(&product, &Selection::initial(&product), "White");
    assert_eq!(sel, selection("White", "128GB", "8GB"));
    assert_eq!(
        refresh(&product, &sel).price,
        PriceDisplay::Price { amount: 550 }
    );
}

#[test]
fn select_color_uses_cheapest_not_first_listed() {
    let product = wide_phone();
    let sel = select_color(&product, &Selection::initial(&product), "Blue");
    assert_eq!(sel, selection("Blue", "256GB", "8GB"));
}

#[test]
fn select_color_without_variants_is_not_available() {
    let product = wide_phone();
    let sel = select_color(&product, &Selection::initial(&product), "Gold");
    assert_eq!(
        sel,
        Selection {
            color: Some("Gold".to_owned()),
            storage: None,
            ram: None,
        }
    );

    let view = refresh(&product, &sel);
    assert_eq!(view.price, PriceDisplay::NotAvailable);
    assert!(view.storage.iter().all(|o| !o.selectable));
    assert!(view.ram.iter().all(|o| !o.selectable));
    assert_eq!(
        view.color_label.as_ref().map(|l| l.tint.as_str()),
        Some("#d4af37")
    );
    assert!(view.swatches.iter().any(|s| s.name == "Gold" && s.active));
}

#[test]
fn select_color_ignores_unknown_color() {
    let product = basic_phone();
    let before = Selection::initial(&product);
    let after = select_color(&product, &before, "Purple");
    assert_eq!(after, before);
}

#[test]
fn select_color_recovers_from_unavailable_color() {
    let product = wide_phone();
    let gold = select_color(&product, &Selection::initial(&product), "Gold");
    let back = select_color(&product, &gold, "Black");
    assert_eq!(back, selection("Black", "128GB", "8GB"));
}

// -----------------------------------------------------------------------
// select_storage
// -----------------------------------------------------------------------

#[test]
fn select_storage_re_resolves_ram_from_first_variant() {
    let product = basic_phone();
    let sel = select_storage(&product, &Selection::initial(&product), "256GB");
    assert_eq!(sel, selection("Black", "256GB", "8GB"));
    assert_eq!(
        refresh(&product, &sel).price,
        PriceDisplay::Price { amount: 600 }
    );
}

#[test]
fn select_storage_takes_first_listed_ram_even_when_current_ram_fits() {
    let product = wide_phone();
    // Black/128GB/8GB, and Black/256GB/8GB exists, yet the first listed
    // Black/256GB variant carries 12GB.
    let sel = select_storage(&product, &Selection::initial(&product), "256GB");
    assert_eq!(sel, selection("Black", "256GB", "12GB"));
}

#[test]
fn select_storage_is_noop_when_not_selectable() {
    let product = basic_phone();
    let white = select_color(&product, &Selection::initial(&product), "White");
    let after = select_storage(&product, &white, "256GB");
    assert_eq!(after, white);
}

#[test]
fn select_storage_is_noop_for_unlisted_value() {
    let product = basic_phone();
    let before = Selection::initial(&product);
    assert_eq!(select_storage(&product, &before, "1TB"), before);
}

#[test]
fn select_storage_is_noop_while_color_unavailable() {
    let product = wide_phone();
    let gold = select_color(&product, &Selection::initial(&product), "Gold");
    assert_eq!(select_storage(&product, &gold, "128GB"), gold);
}

// -----------------------------------------------------------------------
// select_ram
// -----------------------------------------------------------------------

#[test]
fn select_ram_commits_exact_match() {
    let product = wide_phone();
    let sel = select_storage(&product, &Selection::initial(&product), "256GB");
    let sel = select_ram(&product, &sel, "8GB");
    assert_eq!(sel, selection("Black", "256GB", "8GB"));
    assert_eq!(
        refresh(&product, &sel).price,
        PriceDisplay::Price { amount: 900 }
    );
}

#[test]
fn select_ram_without_exact_match_changes_nothing() {
    let product = wide_phone();
    let before = Selection::initial(&product);
    let view_before = refresh(&product, &before);

    let after = select_ram(&product, &before, "16GB");
    assert_eq!(after, before);
    assert_eq!(refresh(&product, &after), view_before);
}

// -----------------------------------------------------------------------
// refresh
// -----------------------------------------------------------------------

#[test]
fn refresh_marks_active_and_selectable_options() {
    let product = wide_phone();
    let sel = selection("Black", "256GB", "12GB");
    let view = refresh(&product, &sel);

    assert!(option(&view.storage, "128GB").selectable);
    assert!(option(&view.storage, "256GB").active);
    assert!(option(&view.storage, "512GB").selectable);

    assert!(option(&view.ram, "8GB").selectable);
    assert!(option(&view.ram, "12GB").selectable);
    assert!(option(&view.ram, "12GB").active);
    assert!(!option(&view.ram, "16GB").selectable);

    assert_eq!(view.price, PriceDisplay::Price { amount: 950 });
}

#[test]
fn refresh_shows_select_variant_for_contradictory_selection() {
    let product = wide_phone();
    let sel = selection("Black", "128GB", "16GB");
    let view = refresh(&product, &sel);
    assert_eq!(view.price, PriceDisplay::SelectVariant);
    assert!(!option(&view.ram, "16GB").selectable);
    assert!(option(&view.ram, "16GB").active);
}

#[test]
fn refresh_shows_select_variant_for_partial_selection() {
    let product = wide_phone();
    let sel = Selection {
        color: Some("Black".to_owned()),
        storage: None,
        ram: None,
    };
    let view = refresh(&product, &sel);
    assert_eq!(view.price, PriceDisplay::SelectVariant);
    assert!(view.storage.iter().any(|o| o.selectable));
    assert!(view.ram.iter().all(|o| !o.selectable));
}

#[test]
fn refresh_is_idempotent() {
    let product = wide_phone();
    for sel in [
        Selection::initial(&product),
        selection("Blue", "256GB", "12GB"),
        selection("Gold", "128GB", "8GB"),
        Selection::default(),
    ] {
        assert_eq!(refresh(&product, &sel), refresh(&product, &sel));
    }
}

#[test]
fn refresh_sets_color_label_from_swatch() {
    let product = basic_phone();
    let view = refresh(&product, &selection("White", "128GB", "8GB"));
    let label = view.color_label.expect("label for known color");
    assert_eq!(label.name, "White");
    assert_eq!(label.tint, "#fafafa");
    let active: Vec<&str> = view
        .swatches
        .iter()
        .filter(|s| s.active)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(active, ["White"]);
}

/// After any sequence of commands, every selectable storage has stock in
/// the current color and every selectable RAM has stock in (color, storage).
#[test]
fn selectable_options_always_have_stock() {
    let product = wide_phone();
    let commands = [
        SelectionCommand::SelectStorage("512GB".to_owned()),
        SelectionCommand::SelectColor("Blue".to_owned()),
        SelectionCommand::SelectRam("12GB".to_owned()),
        SelectionCommand::SelectColor("Gold".to_owned()),
        SelectionCommand::SelectStorage("128GB".to_owned()),
        SelectionCommand::SelectColor("Black".to_owned()),
        SelectionCommand::SelectStorage("256GB".to_owned()),
        SelectionCommand::SelectRam("16GB".to_owned()),
        SelectionCommand::SelectRam("8GB".to_owned()),
    ];

    let mut sel = Selection::initial(&product);
    for command in &commands {
        sel = apply(&product, &sel, command);
        let view = refresh(&product, &sel);
        let color = sel.color.as_deref().unwrap_or_default();

        for opt in view.storage.iter().filter(|o| o.selectable) {
            assert!(
                product
                    .variants_in_color(color)
                    .any(|v| v.storage == opt.value),
                "storage {} selectable without stock after {command:?}",
                opt.value
            );
        }
        for opt in view.ram.iter().filter(|o| o.selectable) {
            let storage = sel.storage.as_deref().unwrap_or_default();
            assert!(
                product.find_variant(color, storage, &opt.value).is_some(),
                "ram {} selectable without stock after {command:?}",
                opt.value
            );
        }

        match sel.resolve(&product) {
            Some(v) => assert_eq!(view.price, PriceDisplay::Price { amount: v.price }),
            None => assert!(view.price.amount().is_none()),
        }
    }

    assert_eq!(sel, selection("Black", "256GB", "8GB"));
}

#[test]
fn apply_dispatches_each_command() {
    let product = basic_phone();
    let start = Selection::initial(&product);

    let sel = apply(
        &product,
        &start,
        &SelectionCommand::SelectStorage("256GB".to_owned()),
    );
    assert_eq!(sel, selection("Black", "256GB", "8GB"));

    let sel = apply(&product, &sel, &SelectionCommand::SelectColor("White".to_owned()));
    assert_eq!(sel, selection("White", "128GB", "8GB"));

    let sel = apply(&product, &sel, &SelectionCommand::SelectRam("8GB".to_owned()));
    assert_eq!(sel, selection("White", "128GB", "8GB"));
}

#[test]
fn selection_command_serializes_adjacently_tagged() {
    let json = serde_json::to_value(SelectionCommand::SelectColor("White".to_owned()))
        .expect("serialize");
    assert_eq!(json, serde_json::json!({"type": "select_color", "value": "White"}));
}
