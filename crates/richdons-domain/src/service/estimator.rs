//! Budget estimation
//!
//! # Formula
//! base_cost = base_per_guest[event_type] x guests
//! menu_cost = base_cost x menu_multiplier[menu_tier] - base_cost
//! total     = base_cost + menu_cost + sum(add-on prices)
//!
//! Amounts are decimal. The base and scaled costs are computed exactly and
//! rounded to cents (half away from zero) once each; `menu_cost` is their
//! difference, so the breakdown always sums exactly to the total.

use rust_decimal::{Decimal, RoundingStrategy};

use richdons_types::{Error, Result};

use crate::model::{
    AddOnLineItem, PricingTable, QuoteBreakdown, QuoteRequest, MAX_GUEST_COUNT, MIN_GUEST_COUNT,
};

/// Validate a guest count and clamp it into the bookable range.
///
/// Non-positive counts are rejected; anything else is pulled to the nearest
/// bound of `[MIN_GUEST_COUNT, MAX_GUEST_COUNT]`.
pub fn clamp_guest_count(guest_count: i64) -> Result<u32> {
    if guest_count <= 0 {
        return Err(Error::InvalidGuestCount(format!(
            "{} (must be a positive integer)",
            guest_count
        )));
    }
    let clamped = guest_count.clamp(MIN_GUEST_COUNT as i64, MAX_GUEST_COUNT as i64);
    // In range after clamping
    Ok(clamped as u32)
}

/// Convert a raw numeric input (e.g. from a slider or text box) into a guest count
pub fn guest_count_from_f64(value: f64) -> Result<i64> {
    if !value.is_finite() {
        return Err(Error::InvalidGuestCount(format!("{} is not a number", value)));
    }
    if value.fract() != 0.0 {
        return Err(Error::InvalidGuestCount(format!("{} is not a whole number", value)));
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(Error::InvalidGuestCount(format!("{} is out of range", value)));
    }
    Ok(value as i64)
}

/// Price a request against a pricing table
pub fn compute_breakdown(request: &QuoteRequest, table: &PricingTable) -> Result<QuoteBreakdown> {
    let guest_count = clamp_guest_count(request.guest_count)?;
    let base_rate = table.base_rate(request.event_type)?;
    let multiplier = table.multiplier(request.menu_tier)?;

    let exact_base = checked_mul(base_rate, Decimal::from(guest_count), "base cost")?;
    let base_cost = to_cents(exact_base);
    let scaled_cost = to_cents(checked_mul(exact_base, multiplier, "menu cost")?);
    let menu_cost = scaled_cost
        .checked_sub(base_cost)
        .ok_or_else(|| Error::ArithmeticOverflow("menu cost".to_string()))?;

    let mut add_on_line_items = Vec::with_capacity(request.selected_add_ons.len());
    let mut total = scaled_cost;
    for service in &request.selected_add_ons {
        // A duplicate in a hand-built request is priced once
        if add_on_line_items
            .iter()
            .any(|item: &AddOnLineItem| item.service == *service)
        {
            continue;
        }
        let price = to_cents(table.add_on_price(*service)?);
        total = total
            .checked_add(price)
            .ok_or_else(|| Error::ArithmeticOverflow("total".to_string()))?;
        add_on_line_items.push(AddOnLineItem {
            service: *service,
            price,
        });
    }

    Ok(QuoteBreakdown {
        guest_count,
        event_type: request.event_type,
        menu_tier: request.menu_tier,
        base_cost,
        menu_cost: to_cents(menu_cost),
        add_on_line_items,
        total: to_cents(total),
    })
}

fn checked_mul(a: Decimal, b: Decimal, what: &str) -> Result<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| Error::ArithmeticOverflow(what.to_string()))
}

/// Round to two decimal places and fix the scale at 2 for display
fn to_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
