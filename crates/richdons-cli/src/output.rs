//! Output formatting module

use rust_decimal::Decimal;
use serde_json::json;

use richdons_domain::model::{GalleryImage, MenuItem, PricingTable, QuoteBreakdown};
use richdons_domain::service::{GalleryFilter, MenuFilter, SelectionState};
use richdons_types::{OutputFormat, Result};

/// Amount with currency symbol and two decimals, e.g. `$4,250.00`
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, frac)
}

pub fn output_breakdown(
    output_format: OutputFormat,
    breakdown: &QuoteBreakdown,
    symbol: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(breakdown)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nYour Estimated Budget");
    println!("=====================");
    println!("Event:           {}", breakdown.event_type.label());
    println!("Menu:            {}", breakdown.menu_tier.label());
    println!("Guests:          {}", breakdown.guest_count);

    println!("\n--- Budget Breakdown ---");
    let base_label = format!("Base Catering ({} guests)", breakdown.guest_count);
    println!("{:<40} {:>14}", base_label, format_money(symbol, breakdown.base_cost));
    let menu_label = format!("Menu Selection ({})", breakdown.menu_tier.label());
    println!("{:<40} {:>14}", menu_label, format_money(symbol, breakdown.menu_cost));
    for item in &breakdown.add_on_line_items {
        println!("{:<40} {:>14}", item.service.label(), format_money(symbol, item.price));
    }
    println!("{}", "-".repeat(55));
    println!("{:<40} {:>14}", "Total", format_money(symbol, breakdown.total));

    Ok(())
}

pub fn output_state(output_format: OutputFormat, state: &SelectionState, symbol: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string(state)?);
        return Ok(());
    }

    match state {
        SelectionState::Editing { request } => {
            let add_ons: Vec<_> = request.selected_add_ons.iter().map(|a| a.key()).collect();
            println!(
                "[editing] guests={} event={} menu={} add-ons=[{}]",
                request.guest_count,
                request.event_type,
                request.menu_tier,
                add_ons.join(", ")
            );
            Ok(())
        }
        SelectionState::Showing { breakdown, .. } => output_breakdown(output_format, breakdown, symbol),
    }
}

pub fn output_pricing(
    output_format: OutputFormat,
    table: &PricingTable,
    source: &str,
    symbol: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&json!({
            "source": source,
            "pricing": table,
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nPricing ({})", source);
    println!("=========");
    println!("\nBase rate per guest:");
    for (event_type, rate) in table.base_rates() {
        println!("  {:<28} {:>12}", event_type.label(), format_money(symbol, rate));
    }
    println!("\nMenu multiplier:");
    for (menu_tier, multiplier) in table.multipliers() {
        println!("  {:<28} {:>11}x", menu_tier.label(), multiplier);
    }
    println!("\nAdd-on services:");
    for (service, price) in table.add_on_prices() {
        println!("  {:<28} {:>12}", service.label(), format_money(symbol, price));
    }

    Ok(())
}

pub fn output_menu(
    output_format: OutputFormat,
    filter: MenuFilter,
    items: &[&MenuItem],
    symbol: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    println!("\n{} ({})", filter.label(), items.len());
    println!("{}", "=".repeat(50));
    for item in items {
        let mut tags = Vec::new();
        if item.spicy {
            tags.push("spicy");
        }
        if item.popular {
            tags.push("popular");
        }
        let tags = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };
        println!(
            "{:<24} {:>10}  {}{}",
            item.name,
            format_money(symbol, item.price),
            item.category.label(),
            tags
        );
        println!("    {}", item.description);
    }

    Ok(())
}

pub fn output_gallery(
    output_format: OutputFormat,
    filter: GalleryFilter,
    images: &[&GalleryImage],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(images)?);
        return Ok(());
    }

    println!("\n{} ({})", filter.label(), images.len());
    println!("{}", "=".repeat(50));
    for image in images {
        println!("{:<28} {}", image.title, image.category.label());
        println!("    {}", image.description);
    }

    Ok(())
}
