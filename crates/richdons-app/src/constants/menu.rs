//! Dish catalogue shown on the menu section

use rust_decimal::Decimal;
use std::sync::LazyLock;

use richdons_domain::model::MenuItem;
use richdons_types::MenuCategory;

fn dish(
    id: u32,
    name: &str,
    category: MenuCategory,
    price: i64,
    description: &str,
    spicy: bool,
    popular: bool,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        category,
        price: Decimal::new(price, 0),
        description: description.to_string(),
        spicy,
        popular,
    }
}

/// Dishes in display order
pub static MENU_ITEMS: LazyLock<Vec<MenuItem>> = LazyLock::new(|| {
    vec![
        dish(
            1,
            "Jollof Rice Special",
            MenuCategory::Mains,
            25,
            "Authentic Ghanaian jollof rice with tender chicken and vegetables",
            true,
            true,
        ),
        dish(
            2,
            "Kelewele",
            MenuCategory::Sides,
            12,
            "Spiced fried plantain cubes with ginger and pepper",
            true,
            false,
        ),
        dish(
            3,
            "Banku & Tilapia",
            MenuCategory::Mains,
            30,
            "Traditional fermented corn dough with grilled tilapia",
            false,
            true,
        ),
        dish(
            4,
            "Waakye",
            MenuCategory::Mains,
            20,
            "Rice and beans cooked with millet leaves",
            false,
            false,
        ),
        dish(
            5,
            "Sobolo",
            MenuCategory::Beverages,
            8,
            "Refreshing hibiscus drink with ginger and spices",
            false,
            true,
        ),
        dish(
            6,
            "Red Red",
            MenuCategory::Mains,
            18,
            "Black-eyed peas stew with fried plantain",
            true,
            false,
        ),
        dish(
            7,
            "Kontomire Stew",
            MenuCategory::Sides,
            15,
            "Cocoyam leaves stew with smoked fish",
            false,
            false,
        ),
        dish(
            8,
            "Palm Nut Soup",
            MenuCategory::Mains,
            28,
            "Rich palm fruit soup with assorted meat",
            true,
            true,
        ),
    ]
});
