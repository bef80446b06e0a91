//! Pricing table loader from TOML
//!
//! ```toml
//! [base_per_guest]
//! wedding = 85
//!
//! [menu_multiplier]
//! luxury = 1.6
//!
//! [add_on_price]
//! staffing = "350.00"
//! ```
//!
//! Amounts may be integers, floats or decimal strings. Every event type,
//! menu tier and add-on must be present and positive.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use richdons_domain::model::PricingTable;
use richdons_types::{ConfigError, Error, Result};

/// A number as written in the TOML file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawAmount {
    fn to_decimal(&self, key: &str) -> Result<Decimal> {
        match self {
            RawAmount::Integer(i) => Ok(Decimal::from(*i)),
            // Display of f64 gives the shortest round-trip form, so 1.3 stays 1.3
            RawAmount::Float(f) => parse_decimal(&f.to_string(), key),
            RawAmount::Text(s) => parse_decimal(s, key),
        }
    }
}

fn parse_decimal(s: &str, key: &str) -> Result<Decimal> {
    Decimal::from_str(s.trim()).map_err(|e| {
        Error::InvalidPricing(format!("'{}' has invalid amount '{}': {}", key, s, e))
    })
}

/// Container for parsing pricing.toml
#[derive(Debug, Deserialize)]
struct PricingFile {
    base_per_guest: BTreeMap<String, RawAmount>,
    menu_multiplier: BTreeMap<String, RawAmount>,
    add_on_price: BTreeMap<String, RawAmount>,
}

/// Convert a section of `key = amount` pairs into typed entries
fn convert_section<K>(section: &BTreeMap<String, RawAmount>) -> Result<BTreeMap<K, Decimal>>
where
    K: FromStr<Err = Error> + Ord,
{
    section
        .iter()
        .map(|(key, amount)| -> Result<(K, Decimal)> {
            Ok((key.parse::<K>()?, amount.to_decimal(key)?))
        })
        .collect()
}

/// Pricing table loaded from a TOML file
#[derive(Debug)]
pub struct PricingLoader {
    path: Option<PathBuf>,
    table: PricingTable,
}

impl PricingLoader {
    /// Load a pricing table from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read pricing file {}: {}",
                path.display(),
                e
            )))
        })?;

        let mut loader = Self::load_from_str(&content)?;
        loader.path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "loaded pricing table");
        Ok(loader)
    }

    /// Load a pricing table from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: PricingFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse pricing TOML: {}",
                e
            )))
        })?;

        let table = PricingTable::new(
            convert_section(&file.base_per_guest)?,
            convert_section(&file.menu_multiplier)?,
            convert_section(&file.add_on_price)?,
        );
        table.validate()?;

        Ok(Self { path: None, table })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    pub fn into_table(self) -> PricingTable {
        self.table
    }
}

/// Load and validate a pricing table from a TOML file
pub fn load_pricing_table(path: &Path) -> Result<PricingTable> {
    PricingLoader::load_from_file(path).map(PricingLoader::into_table)
}

/// Render a pricing table in the format read by [`PricingLoader`]
pub fn render_pricing_toml(table: &PricingTable) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "[base_per_guest]");
    for (event_type, rate) in table.base_rates() {
        let _ = writeln!(out, "{} = \"{}\"", event_type.key(), rate);
    }
    let _ = writeln!(out, "\n[menu_multiplier]");
    for (menu_tier, multiplier) in table.multipliers() {
        let _ = writeln!(out, "{} = \"{}\"", menu_tier.key(), multiplier);
    }
    let _ = writeln!(out, "\n[add_on_price]");
    for (service, price) in table.add_on_prices() {
        let _ = writeln!(out, "{} = \"{}\"", service.key(), price);
    }
    out
}
