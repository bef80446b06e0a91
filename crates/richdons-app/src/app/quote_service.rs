//! Quote Service - budget estimation use cases
//!
//! Resolves which pricing table applies (CLI override, then config, then the
//! standard rates) and runs quotes through a `QuoteSession`, so one-shot
//! quotes obey the same transition rules as the interactive form.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use richdons_domain::model::{GalleryImage, MenuItem, PricingTable, QuoteBreakdown, DEFAULT_GUEST_COUNT};
use richdons_domain::service::{
    filter_gallery, filter_menu, GalleryFilter, MenuFilter, QuoteSession,
};
use richdons_infra::load_pricing_table;
use richdons_types::{AddOnService, EventType, MenuTier, Result};

use crate::config::Config;
use crate::constants::{standard_pricing, GALLERY_IMAGES, MENU_ITEMS};

/// Where the active pricing table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingSource {
    Standard,
    File(PathBuf),
}

impl fmt::Display for PricingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingSource::Standard => write!(f, "standard rates"),
            PricingSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Inputs for a one-shot quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteOptions {
    pub guest_count: i64,
    pub event_type: EventType,
    pub menu_tier: MenuTier,
    /// Applied as toggles, in order
    pub add_ons: Vec<AddOnService>,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            guest_count: DEFAULT_GUEST_COUNT as i64,
            event_type: EventType::default(),
            menu_tier: MenuTier::default(),
            add_ons: Vec::new(),
        }
    }
}

impl QuoteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guest_count(mut self, guest_count: i64) -> Self {
        self.guest_count = guest_count;
        self
    }

    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn with_menu_tier(mut self, menu_tier: MenuTier) -> Self {
        self.menu_tier = menu_tier;
        self
    }

    pub fn with_add_on(mut self, service: AddOnService) -> Self {
        self.add_ons.push(service);
        self
    }
}

/// Entry point for quote use cases
#[derive(Debug, Clone)]
pub struct QuoteService {
    table: Arc<PricingTable>,
    source: PricingSource,
}

impl QuoteService {
    /// Service using the published rates
    pub fn standard() -> Self {
        Self {
            table: standard_pricing(),
            source: PricingSource::Standard,
        }
    }

    /// Service using a caller-supplied table
    pub fn with_table(table: Arc<PricingTable>, source: PricingSource) -> Self {
        Self { table, source }
    }

    /// Resolve pricing: explicit override, then config file, then standard
    pub fn from_config(config: &Config, pricing_override: Option<&Path>) -> Result<Self> {
        let path = pricing_override.or(config.pricing_file.as_deref());
        match path {
            Some(path) => {
                let table = load_pricing_table(path)?;
                tracing::info!(path = %path.display(), "using custom pricing table");
                Ok(Self::with_table(
                    Arc::new(table),
                    PricingSource::File(path.to_path_buf()),
                ))
            }
            None => {
                tracing::debug!("using standard pricing table");
                Ok(Self::standard())
            }
        }
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.table
    }

    pub fn source(&self) -> &PricingSource {
        &self.source
    }

    /// Fresh session sharing this service's table
    pub fn new_session(&self) -> QuoteSession {
        QuoteSession::new(Arc::clone(&self.table))
    }

    /// Run a complete edit-then-calculate cycle
    pub fn quote(&self, options: &QuoteOptions) -> Result<QuoteBreakdown> {
        let mut session = self.new_session();
        session.update_guest_count(options.guest_count)?;
        session.set_event_type(options.event_type)?;
        session.set_menu_tier(options.menu_tier)?;
        for service in &options.add_ons {
            session.toggle_add_on(*service)?;
        }
        let breakdown = session.calculate()?.clone();
        tracing::debug!(
            guests = breakdown.guest_count,
            event = %breakdown.event_type,
            menu = %breakdown.menu_tier,
            total = %breakdown.total,
            "quote calculated"
        );
        Ok(breakdown)
    }

    /// Dishes of the built-in catalogue matching `filter`
    pub fn menu(&self, filter: MenuFilter) -> Vec<&'static MenuItem> {
        filter_menu(&MENU_ITEMS, filter)
    }

    /// Photos of the built-in gallery matching `filter`
    pub fn gallery(&self, filter: GalleryFilter) -> Vec<&'static GalleryImage> {
        filter_gallery(&GALLERY_IMAGES, filter)
    }
}
