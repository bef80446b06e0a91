//! Pricing table for catering quotes

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use richdons_types::{AddOnService, CategoryKind, Error, EventType, MenuTier, Result};

/// Rates used to price a quote.
///
/// Built once and shared read-only between sessions. Lookups return
/// `InvalidCategory` for a variant with no entry, so a partial table fails
/// loudly instead of pricing a quote at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTable {
    /// Currency per guest, by event type
    base_per_guest: BTreeMap<EventType, Decimal>,
    /// Dimensionless scaling of the per-guest cost, by menu tier
    menu_multiplier: BTreeMap<MenuTier, Decimal>,
    /// Flat fee per add-on service
    add_on_price: BTreeMap<AddOnService, Decimal>,
}

impl PricingTable {
    pub fn new(
        base_per_guest: BTreeMap<EventType, Decimal>,
        menu_multiplier: BTreeMap<MenuTier, Decimal>,
        add_on_price: BTreeMap<AddOnService, Decimal>,
    ) -> Self {
        Self {
            base_per_guest,
            menu_multiplier,
            add_on_price,
        }
    }

    pub fn with_base_rate(mut self, event_type: EventType, rate: Decimal) -> Self {
        self.base_per_guest.insert(event_type, rate);
        self
    }

    pub fn with_multiplier(mut self, menu_tier: MenuTier, multiplier: Decimal) -> Self {
        self.menu_multiplier.insert(menu_tier, multiplier);
        self
    }

    pub fn with_add_on_price(mut self, service: AddOnService, price: Decimal) -> Self {
        self.add_on_price.insert(service, price);
        self
    }

    /// Per-guest base rate for an event type
    pub fn base_rate(&self, event_type: EventType) -> Result<Decimal> {
        self.base_per_guest
            .get(&event_type)
            .copied()
            .ok_or_else(|| Error::invalid_category(CategoryKind::EventType, event_type.key()))
    }

    /// Menu multiplier for a tier
    pub fn multiplier(&self, menu_tier: MenuTier) -> Result<Decimal> {
        self.menu_multiplier
            .get(&menu_tier)
            .copied()
            .ok_or_else(|| Error::invalid_category(CategoryKind::MenuTier, menu_tier.key()))
    }

    /// Flat price of an add-on service
    pub fn add_on_price(&self, service: AddOnService) -> Result<Decimal> {
        self.add_on_price
            .get(&service)
            .copied()
            .ok_or_else(|| Error::invalid_category(CategoryKind::AddOnService, service.key()))
    }

    pub fn base_rates(&self) -> impl Iterator<Item = (EventType, Decimal)> + '_ {
        self.base_per_guest.iter().map(|(k, v)| (*k, *v))
    }

    pub fn multipliers(&self) -> impl Iterator<Item = (MenuTier, Decimal)> + '_ {
        self.menu_multiplier.iter().map(|(k, v)| (*k, *v))
    }

    pub fn add_on_prices(&self) -> impl Iterator<Item = (AddOnService, Decimal)> + '_ {
        self.add_on_price.iter().map(|(k, v)| (*k, *v))
    }

    /// Check that every variant has a strictly positive entry
    pub fn validate(&self) -> Result<()> {
        for event_type in EventType::ALL {
            check_positive(event_type.key(), self.base_per_guest.get(&event_type))?;
        }
        for menu_tier in MenuTier::ALL {
            check_positive(menu_tier.key(), self.menu_multiplier.get(&menu_tier))?;
        }
        for service in AddOnService::ALL {
            check_positive(service.key(), self.add_on_price.get(&service))?;
        }
        Ok(())
    }
}

fn check_positive(key: &str, value: Option<&Decimal>) -> Result<()> {
    match value {
        None => Err(Error::InvalidPricing(format!("missing entry for '{}'", key))),
        Some(v) if v.is_sign_negative() || v.is_zero() => Err(Error::InvalidPricing(format!(
            "entry for '{}' must be positive, got {}",
            key, v
        ))),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table() -> PricingTable {
        let mut table = PricingTable::default();
        for event_type in EventType::ALL {
            table = table.with_base_rate(event_type, Decimal::new(50, 0));
        }
        for menu_tier in MenuTier::ALL {
            table = table.with_multiplier(menu_tier, Decimal::ONE);
        }
        for service in AddOnService::ALL {
            table = table.with_add_on_price(service, Decimal::new(100, 0));
        }
        table
    }

    #[test]
    fn test_full_table_is_valid() {
        assert!(full_table().validate().is_ok());
    }

    #[test]
    fn test_missing_entry_rejected() {
        let table = PricingTable::new(
            full_table().base_per_guest.clone(),
            BTreeMap::new(),
            full_table().add_on_price.clone(),
        );
        let err = table.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidPricing(ref m) if m.contains("basic")));
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        let zero = full_table().with_add_on_price(AddOnService::Staffing, Decimal::ZERO);
        assert!(zero.validate().is_err());

        let negative = full_table().with_base_rate(EventType::Party, Decimal::new(-5, 0));
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_lookup_missing_is_invalid_category() {
        let table = PricingTable::default().with_base_rate(EventType::Wedding, Decimal::new(85, 0));
        assert_eq!(table.base_rate(EventType::Wedding).unwrap(), Decimal::new(85, 0));
        let err = table.base_rate(EventType::Festival).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCategory { kind: CategoryKind::EventType, ref value } if value == "festival"
        ));
    }

    #[test]
    fn test_iterators_are_ordered() {
        let keys: Vec<_> = full_table().add_on_prices().map(|(k, _)| k).collect();
        assert_eq!(keys, AddOnService::ALL.to_vec());
    }
}
