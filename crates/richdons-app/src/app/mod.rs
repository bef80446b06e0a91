//! Application Layer
//!
//! Orchestrates between the CLI and the domain/infrastructure layers.
//!
//! - `quote_service`: pricing resolution and one-shot quotes
//! - `session_script`: line-oriented driver for an interactive quote session

pub mod quote_service;
pub mod session_script;

pub use quote_service::{PricingSource, QuoteOptions, QuoteService};
pub use session_script::{apply_line, LineOutcome};
