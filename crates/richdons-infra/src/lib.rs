//! Infrastructure layer - loaders for external data files

pub mod pricing_loader;

pub use pricing_loader::{load_pricing_table, render_pricing_toml, PricingLoader};
