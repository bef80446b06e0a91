//! Standard catering rates

use rust_decimal::Decimal;
use std::sync::{Arc, LazyLock};

use richdons_domain::model::PricingTable;
use richdons_types::{AddOnService, EventType, MenuTier};

/// Rates published on the budget calculator
pub static STANDARD_PRICING: LazyLock<Arc<PricingTable>> = LazyLock::new(|| {
    let table = PricingTable::default()
        // Per guest
        .with_base_rate(EventType::Wedding, Decimal::new(85, 0))
        .with_base_rate(EventType::Corporate, Decimal::new(65, 0))
        .with_base_rate(EventType::Party, Decimal::new(55, 0))
        .with_base_rate(EventType::Festival, Decimal::new(45, 0))
        // Menu multipliers
        .with_multiplier(MenuTier::Basic, Decimal::new(8, 1))
        .with_multiplier(MenuTier::Standard, Decimal::ONE)
        .with_multiplier(MenuTier::Premium, Decimal::new(13, 1))
        .with_multiplier(MenuTier::Luxury, Decimal::new(16, 1))
        // Flat fees
        .with_add_on_price(AddOnService::Staffing, Decimal::new(350, 0))
        .with_add_on_price(AddOnService::Decoration, Decimal::new(500, 0))
        .with_add_on_price(AddOnService::Entertainment, Decimal::new(750, 0))
        .with_add_on_price(AddOnService::Transportation, Decimal::new(300, 0))
        .with_add_on_price(AddOnService::Photography, Decimal::new(600, 0));
    Arc::new(table)
});

/// Shared handle to the standard rates
pub fn standard_pricing() -> Arc<PricingTable> {
    Arc::clone(&STANDARD_PRICING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pricing_is_complete() {
        assert!(STANDARD_PRICING.validate().is_ok());
    }

    #[test]
    fn test_standard_rates() {
        let table = standard_pricing();
        assert_eq!(table.base_rate(EventType::Wedding).unwrap(), Decimal::new(85, 0));
        assert_eq!(table.multiplier(MenuTier::Luxury).unwrap(), Decimal::new(16, 1));
        assert_eq!(
            table.add_on_price(AddOnService::Entertainment).unwrap(),
            Decimal::new(750, 0)
        );
    }

    #[test]
    fn test_shared_handle() {
        assert!(Arc::ptr_eq(&standard_pricing(), &standard_pricing()));
    }
}
