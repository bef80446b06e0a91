//! Built-in catalogue data

pub mod gallery;
pub mod menu;
pub mod pricing;

pub use gallery::GALLERY_IMAGES;
pub use menu::MENU_ITEMS;
pub use pricing::{standard_pricing, STANDARD_PRICING};
