//! Quote export

pub mod excel;

pub use excel::export_quote_to_excel;
