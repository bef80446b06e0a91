//! Domain model types

pub mod gallery_image;
pub mod menu_item;
pub mod pricing;
pub mod quote;

pub use gallery_image::GalleryImage;
pub use menu_item::MenuItem;
pub use pricing::PricingTable;
pub use quote::{
    AddOnLineItem, QuoteBreakdown, QuoteRequest, DEFAULT_GUEST_COUNT, MAX_GUEST_COUNT,
    MIN_GUEST_COUNT,
};
