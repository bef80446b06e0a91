use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use richdons_types::MenuCategory;

/// A dish on the catering menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub category: MenuCategory,
    /// Price per serving
    pub price: Decimal,
    pub description: String,
    #[serde(default)]
    pub spicy: bool,
    #[serde(default)]
    pub popular: bool,
}
