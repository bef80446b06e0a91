//! Quote request and breakdown

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use richdons_types::{AddOnService, EventType, MenuTier};

pub const MIN_GUEST_COUNT: u32 = 10;
pub const MAX_GUEST_COUNT: u32 = 500;
pub const DEFAULT_GUEST_COUNT: u32 = 50;

/// Inputs of a budget estimate, edited in place while the form is open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Raw guest count; the estimator validates and clamps it
    pub guest_count: i64,
    pub event_type: EventType,
    pub menu_tier: MenuTier,
    /// Selected add-ons in the order they were picked, no duplicates
    #[serde(default)]
    pub selected_add_ons: Vec<AddOnService>,
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            guest_count: DEFAULT_GUEST_COUNT as i64,
            event_type: EventType::default(),
            menu_tier: MenuTier::default(),
            selected_add_ons: Vec::new(),
        }
    }
}

impl QuoteRequest {
    pub fn new(guest_count: i64, event_type: EventType, menu_tier: MenuTier) -> Self {
        Self {
            guest_count,
            event_type,
            menu_tier,
            selected_add_ons: Vec::new(),
        }
    }

    pub fn with_add_on(mut self, service: AddOnService) -> Self {
        if !self.has_add_on(service) {
            self.selected_add_ons.push(service);
        }
        self
    }

    pub fn has_add_on(&self, service: AddOnService) -> bool {
        self.selected_add_ons.contains(&service)
    }

    /// Add the service if absent, remove it if present
    pub fn toggle_add_on(&mut self, service: AddOnService) {
        if let Some(pos) = self.selected_add_ons.iter().position(|s| *s == service) {
            self.selected_add_ons.remove(pos);
        } else {
            self.selected_add_ons.push(service);
        }
    }
}

/// A priced add-on service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnLineItem {
    pub service: AddOnService,
    pub price: Decimal,
}

/// Itemized estimate computed from a request and a pricing table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    /// Guest count actually priced, after clamping
    pub guest_count: u32,
    pub event_type: EventType,
    pub menu_tier: MenuTier,
    pub base_cost: Decimal,
    /// Increment over `base_cost` due to the menu tier (negative for Basic)
    pub menu_cost: Decimal,
    pub add_on_line_items: Vec<AddOnLineItem>,
    pub total: Decimal,
}

impl QuoteBreakdown {
    pub fn add_ons_total(&self) -> Decimal {
        self.add_on_line_items.iter().map(|item| item.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = QuoteRequest::default();
        assert_eq!(request.guest_count, 50);
        assert_eq!(request.event_type, EventType::Wedding);
        assert_eq!(request.menu_tier, MenuTier::Standard);
        assert!(request.selected_add_ons.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut request = QuoteRequest::default().with_add_on(AddOnService::Decoration);
        let before = request.selected_add_ons.clone();
        request.toggle_add_on(AddOnService::Photography);
        assert!(request.has_add_on(AddOnService::Photography));
        request.toggle_add_on(AddOnService::Photography);
        assert_eq!(request.selected_add_ons, before);
    }

    #[test]
    fn test_toggle_keeps_selection_order() {
        let mut request = QuoteRequest::default();
        request.toggle_add_on(AddOnService::Photography);
        request.toggle_add_on(AddOnService::Staffing);
        request.toggle_add_on(AddOnService::Decoration);
        request.toggle_add_on(AddOnService::Staffing);
        assert_eq!(
            request.selected_add_ons,
            vec![AddOnService::Photography, AddOnService::Decoration]
        );
    }

    #[test]
    fn test_with_add_on_ignores_duplicates() {
        let request = QuoteRequest::default()
            .with_add_on(AddOnService::Staffing)
            .with_add_on(AddOnService::Staffing);
        assert_eq!(request.selected_add_ons.len(), 1);
    }
}
