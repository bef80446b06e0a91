//! Menu category filtering

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use richdons_types::{Error, MenuCategory};

use crate::model::MenuItem;

/// Active filter of the menu grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuFilter {
    #[default]
    All,
    Category(MenuCategory),
}

impl MenuFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            MenuFilter::All => true,
            MenuFilter::Category(category) => item.category == *category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuFilter::All => "All Items",
            MenuFilter::Category(category) => category.label(),
        }
    }
}

impl FromStr for MenuFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(MenuFilter::All)
        } else {
            s.parse().map(MenuFilter::Category)
        }
    }
}

impl fmt::Display for MenuFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuFilter::All => write!(f, "all"),
            MenuFilter::Category(category) => write!(f, "{}", category),
        }
    }
}

/// Items matching the filter, in catalogue order
pub fn filter_menu(items: &[MenuItem], filter: MenuFilter) -> Vec<&MenuItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use richdons_types::CategoryKind;
    use rust_decimal::Decimal;

    fn item(id: u32, category: MenuCategory) -> MenuItem {
        MenuItem {
            id,
            name: format!("dish {}", id),
            category,
            price: Decimal::new(10, 0),
            description: String::new(),
            spicy: false,
            popular: false,
        }
    }

    fn catalogue() -> Vec<MenuItem> {
        vec![
            item(1, MenuCategory::Mains),
            item(2, MenuCategory::Sides),
            item(3, MenuCategory::Mains),
            item(4, MenuCategory::Beverages),
        ]
    }

    #[test]
    fn test_all_returns_everything() {
        let items = catalogue();
        assert_eq!(filter_menu(&items, MenuFilter::All).len(), 4);
    }

    #[test]
    fn test_category_keeps_order() {
        let items = catalogue();
        let ids: Vec<_> = filter_menu(&items, MenuFilter::Category(MenuCategory::Mains))
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_empty_category() {
        let items = vec![item(1, MenuCategory::Mains)];
        assert!(filter_menu(&items, MenuFilter::Category(MenuCategory::Beverages)).is_empty());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("All".parse::<MenuFilter>().unwrap(), MenuFilter::All);
        assert_eq!(
            "sides".parse::<MenuFilter>().unwrap(),
            MenuFilter::Category(MenuCategory::Sides)
        );
        assert!(matches!(
            "desserts".parse::<MenuFilter>(),
            Err(Error::InvalidCategory { kind: CategoryKind::MenuCategory, .. })
        ));
    }
}
