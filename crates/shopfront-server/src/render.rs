//! HTML rendering of [`CardView`]s.
//!
//! Markup is a pure function of the view-model. The only data attributes
//! emitted are the ones that map a click back to a domain value
//! (`data-name`, `data-value`, `data-specs`). Every clickable element is a
//! link that carries the card's current state plus the action, so a click
//! re-renders that one card.

use std::fmt::Write as _;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use shopfront_core::{CardState, CardView, OptionView};

/// User-visible text shown in place of the catalog when it failed to load.
pub const CATALOG_ERROR_MESSAGE: &str = "Failed to load products.";

const STYLE: &str = "\
.product-card{border:1px solid #ddd;border-radius:8px;padding:16px;margin:16px;max-width:360px}\
.product-slider img{display:none;max-width:100%}.product-slider img.active{display:block}\
.color-dot{display:inline-block;width:18px;height:18px;border-radius:50%;margin:2px;border:2px solid transparent}\
.color-dot.active{border-color:#333}\
.variant{display:inline-block;padding:4px 8px;margin:2px;border:1px solid #999;border-radius:4px;color:inherit;text-decoration:none}\
.variant.active{background:#333;color:#fff}.variant.disabled{opacity:.35}\
.catalog-error{color:red}";

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

/// Builds the link that applies `action` (with optional `value`) to the card
/// at `index` in `state`.
pub fn card_href(index: usize, state: &CardState, action: &str, value: Option<&str>) -> String {
    let mut href = format!("/cards/{index}?");
    let selection = &state.selection;
    for (key, field) in [
        ("color", &selection.color),
        ("storage", &selection.storage),
        ("ram", &selection.ram),
    ] {
        if let Some(v) = field {
            let _ = write!(href, "{key}={}&", encode(v));
        }
    }
    let _ = write!(href, "image={}&action={action}", state.image);
    if let Some(v) = value {
        let _ = write!(href, "&value={}", encode(v));
    }
    href
}

fn render_options(out: &mut String, view: &CardView, kind: &str, options: &[OptionView]) {
    for opt in options {
        let mut class = String::from("variant");
        if opt.active {
            class.push_str(" active");
        }
        if !opt.selectable {
            class.push_str(" disabled");
        }
        let value = escape_html(&opt.value);

        if opt.selectable {
            let href = card_href(view.index, &view.state, kind, Some(&opt.value));
            let _ = write!(
                out,
                r#"<a class="{class}" data-value="{value}" href="{}">{value}</a>"#,
                escape_html(&href)
            );
        } else {
            let _ = write!(out, r#"<span class="{class}" data-value="{value}">{value}</span>"#);
        }
    }
}

/// Renders one product card.
pub fn render_card(view: &CardView, currency_prefix: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, r#"<div class="product-card" data-index="{}">"#, view.index);

    out.push_str(r#"<div class="product-slider">"#);
    for img in &view.images {
        let class = if img.active { "active" } else { "" };
        let _ = write!(out, r#"<img src="{}" class="{class}">"#, escape_html(&img.url));
    }
    if view.slider_controls {
        let prev = card_href(view.index, &view.state, "prev", None);
        let next = card_href(view.index, &view.state, "next", None);
        let _ = write!(
            out,
            r#"<a class="prev" href="{}">&#10094;</a><a class="next" href="{}">&#10095;</a>"#,
            escape_html(&prev),
            escape_html(&next)
        );
    }
    out.push_str("</div>");

    let _ = write!(
        out,
        r#"<div class="product-header"><div class="product-name">{}</div><div class="color-options">"#,
        escape_html(&view.name)
    );
    for swatch in &view.variant.swatches {
        let class = if swatch.active {
            "color-dot active"
        } else {
            "color-dot"
        };
        let href = card_href(view.index, &view.state, "color", Some(&swatch.name));
        let _ = write!(
            out,
            r#"<a class="{class}" style="background:{}" data-name="{}" href="{}"></a>"#,
            escape_html(&swatch.code),
            escape_html(&swatch.name),
            escape_html(&href)
        );
    }
    out.push_str("</div></div>");

    let _ = write!(
        out,
        r#"<div class="product-price"><span class="price-text">{}</span>"#,
        escape_html(&view.variant.price.label(currency_prefix))
    );
    if let Some(label) = &view.variant.color_label {
        let _ = write!(
            out,
            r#" <span class="selected-color" style="color:{}">{}</span>"#,
            escape_html(&label.tint),
            escape_html(&label.name)
        );
    }
    out.push_str("</div>");

    let _ = write!(
        out,
        r#"<div class="product-note">{}</div>"#,
        escape_html(&view.note)
    );

    out.push_str(r#"<div class="variant-group"><label>Storage</label><div class="variant-options storage-options">"#);
    render_options(&mut out, view, "storage", &view.variant.storage);
    out.push_str("</div></div>");

    out.push_str(r#"<div class="variant-group"><label>RAM</label><div class="variant-options ram-options">"#);
    render_options(&mut out, view, "ram", &view.variant.ram);
    out.push_str("</div></div>");

    let _ = write!(
        out,
        r#"<a class="buy-button view-specs" data-specs="{}" href="/specs/{}">View Specs</a>"#,
        escape_html(&view.specs_page),
        view.index
    );

    out.push_str("</div>");
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title><style>{STYLE}</style></head>\
         <body><div id=\"productsContainer\">{body}</div></body></html>",
        escape_html(title)
    )
}

/// Renders the catalog page from views already in display order.
pub fn render_catalog_page(views: &[CardView], currency_prefix: &str) -> String {
    let cards: String = views
        .iter()
        .map(|v| render_card(v, currency_prefix))
        .collect();
    page("Products", &cards)
}

/// Renders a page holding a single card, with a way back to the catalog.
pub fn render_card_page(view: &CardView, currency_prefix: &str) -> String {
    let body = format!(
        r#"<a class="back" href="/">&larr; All products</a>{}"#,
        render_card(view, currency_prefix)
    );
    page(&view.name, &body)
}

/// Renders the error state that replaces the whole catalog.
pub fn render_error_page() -> String {
    page(
        "Products",
        &format!(r#"<p class="catalog-error">{CATALOG_ERROR_MESSAGE}</p>"#),
    )
}
