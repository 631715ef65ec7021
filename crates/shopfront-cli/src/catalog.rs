//! Catalog command handlers for the CLI.

use std::fmt::Write as _;

use shopfront_core::{
    AppConfig, Card, CardCommand, CardView, Catalog, OptionView, SelectionCommand, SliderCommand,
};
use shopfront_loader::{CatalogClient, CatalogSource};

/// Parses one `--step` argument of the form `KIND=VALUE`.
///
/// # Errors
///
/// Returns a message when the kind is unknown, the value is empty, or an
/// `image` step is neither `next` nor `prev`.
pub(crate) fn parse_step(raw: &str) -> Result<CardCommand, String> {
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=VALUE, got '{raw}'"))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("step '{kind}' has an empty value"));
    }

    let command: CardCommand = match kind.trim() {
        "color" => SelectionCommand::SelectColor(value.to_owned()).into(),
        "storage" => SelectionCommand::SelectStorage(value.to_owned()).into(),
        "ram" => SelectionCommand::SelectRam(value.to_owned()).into(),
        "image" => match value {
            "next" => SliderCommand::NextImage.into(),
            "prev" => SliderCommand::PrevImage.into(),
            other => return Err(format!("image step must be next or prev, got '{other}'")),
        },
        other => {
            return Err(format!(
                "unknown step kind '{other}' (expected color, storage, ram or image)"
            ))
        }
    };
    Ok(command)
}

async fn load_catalog(config: &AppConfig, source_override: Option<&str>) -> anyhow::Result<Catalog> {
    let raw = source_override.unwrap_or(&config.catalog_source);
    let source = CatalogSource::parse(raw)?;
    let client = CatalogClient::new(config.fetch_timeout_secs, &config.fetch_user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    client.load(&source).await.map_err(|e| {
        tracing::error!(error = %e, %source, "failed to load catalog");
        anyhow::anyhow!("Failed to load products. ({e})")
    })
}

/// Resolves `--product` as a display index first, then as an exact name.
pub(crate) fn find_product(catalog: &Catalog, key: &str) -> anyhow::Result<usize> {
    if let Ok(index) = key.parse::<usize>() {
        if index < catalog.len() {
            return Ok(index);
        }
    }
    catalog
        .position_by_name(key)
        .ok_or_else(|| anyhow::anyhow!("product '{key}' not found"))
}

/// Print the catalog in display order.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub(crate) async fn run_list(config: &AppConfig, source: Option<&str>) -> anyhow::Result<()> {
    let catalog = load_catalog(config, source).await?;

    if catalog.is_empty() {
        println!("catalog is empty");
        return Ok(());
    }

    println!("{:<6}{:<32}{:<10}{:>14}", "INDEX", "NAME", "VARIANTS", "FROM");
    for (index, product) in catalog.products().iter().enumerate() {
        let from = product.cheapest_variant().map_or_else(
            || "-".to_owned(),
            |v| shopfront_core::format_price(v.price, &config.currency_prefix),
        );
        println!(
            "{:<6}{:<32}{:<10}{:>14}",
            index,
            product.name,
            product.available_variants.len(),
            from
        );
    }

    Ok(())
}

/// Replay `steps` against a fresh card for one product and print the card.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the product is unknown.
pub(crate) async fn run_configure(
    config: &AppConfig,
    source: Option<&str>,
    product_key: &str,
    steps: &[CardCommand],
) -> anyhow::Result<()> {
    let catalog = load_catalog(config, source).await?;
    let index = find_product(&catalog, product_key)?;
    let product = catalog
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("product '{product_key}' not found"))?;

    let mut card = Card::new(product);
    for step in steps {
        if !card.dispatch(step) {
            tracing::debug!(command = ?step, "step had no effect");
        }
    }

    print!("{}", render_card_text(&card.view(index), &config.currency_prefix));
    Ok(())
}

fn render_options(options: &[OptionView]) -> String {
    options
        .iter()
        .map(|opt| match (opt.active, opt.selectable) {
            (true, _) => format!("[{}]", opt.value),
            (false, true) => opt.value.clone(),
            (false, false) => format!("({})", opt.value),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text card: `[x]` marks the active option, `(x)` a disabled one.
pub(crate) fn render_card_text(view: &CardView, currency_prefix: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.name);

    let active_image = view.images.iter().position(|img| img.active);
    if let Some(pos) = active_image {
        let _ = writeln!(
            out,
            "  image    {}/{}  {}",
            pos + 1,
            view.images.len(),
            view.images[pos].url
        );
    }

    let swatches = view
        .variant
        .swatches
        .iter()
        .map(|s| {
            if s.active {
                format!("[{}]", s.name)
            } else {
                s.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "  colors   {swatches}");
    let _ = writeln!(out, "  price    {}", view.variant.price.label(currency_prefix));
    let _ = writeln!(out, "  storage  {}", render_options(&view.variant.storage));
    let _ = writeln!(out, "  ram      {}", render_options(&view.variant.ram));
    if !view.note.is_empty() {
        let _ = writeln!(out, "  note     {}", view.note);
    }
    let _ = writeln!(out, "  specs    {}", view.specs_page);
    out
}
