//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use richdons_domain::model::DEFAULT_GUEST_COUNT;
use richdons_types::{
    AddOnService, EventType, GalleryCategory, MenuCategory, MenuTier, OutputFormat,
};

#[derive(Parser)]
#[command(name = "richdons-budget")]
#[command(author = "richdons")]
#[command(version)]
#[command(about = "Catering budget estimation for RichDons Catering")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Pricing TOML file for this run (overrides config)
    #[arg(long, global = true)]
    pub pricing: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Inputs shared by `quote` and `export`
#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Number of guests (clamped to 10-500)
    #[arg(long, short = 'g', default_value_t = DEFAULT_GUEST_COUNT as i64, allow_negative_numbers = true)]
    pub guests: i64,

    /// Event type
    #[arg(long, short = 'e', value_enum, default_value_t = EventType::Wedding)]
    pub event: EventType,

    /// Menu tier
    #[arg(long, short = 'm', value_enum, default_value_t = MenuTier::Standard)]
    pub menu: MenuTier,

    /// Add-on service; repeat to add several (repeating one removes it again)
    #[arg(long = "add-on", short = 'a', value_enum)]
    pub add_ons: Vec<AddOnService>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the budget for an event
    Quote(QuoteArgs),

    /// Interactive session reading edit commands from stdin
    Session,

    /// Show the active pricing table
    Pricing {
        /// Print the table as a pricing TOML file instead
        #[arg(long)]
        template: bool,
    },

    /// List dishes on the catering menu
    Menu {
        /// Only show one category
        #[arg(long, short = 'c', value_enum)]
        category: Option<MenuCategory>,
    },

    /// List photos in the gallery
    Gallery {
        /// Only show one category
        #[arg(long, short = 'c', value_enum)]
        category: Option<GalleryCategory>,
    },

    /// Export a quote to an Excel workbook
    Export {
        #[command(flatten)]
        quote: QuoteArgs,

        /// Output Excel file path
        #[arg(long, short = 'o', default_value = "quote.xlsx")]
        output: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Use a pricing TOML file by default
        #[arg(long)]
        set_pricing_file: Option<PathBuf>,

        /// Go back to the standard rates
        #[arg(long)]
        clear_pricing_file: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the currency symbol
        #[arg(long)]
        set_currency: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
