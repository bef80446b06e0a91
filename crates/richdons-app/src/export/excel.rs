//! Excel export of a calculated quote

use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use richdons_domain::model::QuoteBreakdown;
use richdons_types::{Error, Result};

fn xlsx_err(e: XlsxError) -> Error {
    Error::Export(e.to_string())
}

fn amount(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| Error::Export(format!("amount {} cannot be written", value)))
}

/// Currency number format with every character of the symbol escaped,
/// so symbols containing `"` or format codes stay literal
fn money_num_format(currency_symbol: &str) -> String {
    let mut format = String::with_capacity(currency_symbol.len() * 2 + 10);
    for ch in currency_symbol.chars() {
        format.push('\\');
        format.push(ch);
    }
    format.push_str("#,##0.00");
    format
}

/// Write a single-sheet workbook with the itemized quote
pub fn export_quote_to_excel(
    breakdown: &QuoteBreakdown,
    currency_symbol: &str,
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_quote_sheet(sheet, breakdown, currency_symbol)?;

    workbook.save(output_path).map_err(xlsx_err)?;
    tracing::info!(path = %output_path.display(), "quote exported");

    Ok(())
}

fn write_quote_sheet(
    sheet: &mut Worksheet,
    breakdown: &QuoteBreakdown,
    currency_symbol: &str,
) -> Result<()> {
    sheet.set_name("Quote").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let num_format = money_num_format(currency_symbol);
    let money_format = Format::new().set_num_format(&num_format);
    let total_format = Format::new().set_bold().set_num_format(&num_format);

    sheet
        .write_string_with_format(0, 0, "RichDons Catering - Budget Estimate", &header_format)
        .map_err(xlsx_err)?;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    sheet.write_string(2, 0, "Date:").map_err(xlsx_err)?;
    sheet.write_string(2, 1, &today).map_err(xlsx_err)?;

    sheet.write_string(3, 0, "Event:").map_err(xlsx_err)?;
    sheet
        .write_string(3, 1, breakdown.event_type.label())
        .map_err(xlsx_err)?;

    sheet.write_string(4, 0, "Menu:").map_err(xlsx_err)?;
    sheet
        .write_string(4, 1, breakdown.menu_tier.label())
        .map_err(xlsx_err)?;

    sheet.write_string(5, 0, "Guests:").map_err(xlsx_err)?;
    sheet
        .write_number(5, 1, breakdown.guest_count as f64)
        .map_err(xlsx_err)?;

    // Line items
    sheet
        .write_string_with_format(7, 0, "Item", &header_format)
        .map_err(xlsx_err)?;
    sheet
        .write_string_with_format(7, 1, "Amount", &header_format)
        .map_err(xlsx_err)?;

    let mut row = 8;
    let base_label = format!("Base Catering ({} guests)", breakdown.guest_count);
    sheet.write_string(row, 0, &base_label).map_err(xlsx_err)?;
    sheet
        .write_number_with_format(row, 1, amount(breakdown.base_cost)?, &money_format)
        .map_err(xlsx_err)?;
    row += 1;

    let menu_label = format!("Menu Selection ({})", breakdown.menu_tier.label());
    sheet.write_string(row, 0, &menu_label).map_err(xlsx_err)?;
    sheet
        .write_number_with_format(row, 1, amount(breakdown.menu_cost)?, &money_format)
        .map_err(xlsx_err)?;
    row += 1;

    for item in &breakdown.add_on_line_items {
        sheet
            .write_string(row, 0, item.service.label())
            .map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 1, amount(item.price)?, &money_format)
            .map_err(xlsx_err)?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, "Total", &header_format)
        .map_err(xlsx_err)?;
    sheet
        .write_number_with_format(row, 1, amount(breakdown.total)?, &total_format)
        .map_err(xlsx_err)?;

    sheet.set_column_width(0, 40).map_err(xlsx_err)?;
    sheet.set_column_width(1, 16).map_err(xlsx_err)?;

    Ok(())
}
