//! Command handlers

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::{Cli, Commands, QuoteArgs};
use crate::output::{
    output_breakdown, output_gallery, output_menu, output_pricing, output_state,
};
use richdons_app::app::{apply_line, LineOutcome, QuoteOptions, QuoteService};
use richdons_app::config::Config;
use richdons_app::export::export_quote_to_excel;
use richdons_domain::service::{GalleryFilter, MenuFilter};
use richdons_infra::render_pricing_toml;
use richdons_types::{OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Quote(args) => {
            let service = QuoteService::from_config(&config, cli.pricing.as_deref())?;
            cmd_quote(&service, args, output_format, &config.currency_symbol)
        }

        Commands::Session => {
            let service = QuoteService::from_config(&config, cli.pricing.as_deref())?;
            cmd_session(&service, output_format, &config.currency_symbol)
        }

        Commands::Pricing { template } => {
            let service = QuoteService::from_config(&config, cli.pricing.as_deref())?;
            if *template {
                print!("{}", render_pricing_toml(service.pricing()));
                Ok(())
            } else {
                output_pricing(
                    output_format,
                    service.pricing(),
                    &service.source().to_string(),
                    &config.currency_symbol,
                )
            }
        }

        Commands::Menu { category } => {
            let filter = category.map(MenuFilter::Category).unwrap_or_default();
            let items = QuoteService::standard().menu(filter);
            output_menu(output_format, filter, &items, &config.currency_symbol)
        }

        Commands::Gallery { category } => {
            let filter = category.map(GalleryFilter::Category).unwrap_or_default();
            let images = QuoteService::standard().gallery(filter);
            output_gallery(output_format, filter, &images)
        }

        Commands::Export { quote, output } => {
            let service = QuoteService::from_config(&config, cli.pricing.as_deref())?;
            cmd_export(&service, quote, output, &config.currency_symbol)
        }

        Commands::Config {
            show,
            set_pricing_file,
            clear_pricing_file,
            set_output,
            set_currency,
            reset,
        } => cmd_config(
            config,
            *show,
            set_pricing_file.as_deref(),
            *clear_pricing_file,
            *set_output,
            set_currency.clone(),
            *reset,
        ),
    }
}

fn quote_options(args: &QuoteArgs) -> QuoteOptions {
    let mut options = QuoteOptions::new()
        .with_guest_count(args.guests)
        .with_event_type(args.event)
        .with_menu_tier(args.menu);
    for service in &args.add_ons {
        options = options.with_add_on(*service);
    }
    options
}

fn cmd_quote(
    service: &QuoteService,
    args: &QuoteArgs,
    output_format: OutputFormat,
    symbol: &str,
) -> Result<()> {
    let breakdown = service.quote(&quote_options(args))?;
    output_breakdown(output_format, &breakdown, symbol)
}

fn cmd_session(service: &QuoteService, output_format: OutputFormat, symbol: &str) -> Result<()> {
    let mut session = service.new_session();
    let stdin = io::stdin();

    if output_format == OutputFormat::Table {
        eprintln!("Commands: guests N | event T | menu M | toggle A | calculate | reset | show | quit");
    }

    for line in stdin.lock().lines() {
        let line = line?;
        match apply_line(&mut session, &line) {
            Ok(LineOutcome::Quit) => break,
            Ok(LineOutcome::Skipped) => {}
            Ok(LineOutcome::Calculated) | Ok(LineOutcome::Show) => {
                output_state(output_format, session.state(), symbol)?;
            }
            Ok(LineOutcome::Edited) | Ok(LineOutcome::Reset) => {
                if output_format == OutputFormat::Table {
                    output_state(output_format, session.state(), symbol)?;
                }
            }
            // Report and keep going; the session is unchanged
            Err(e) => eprintln!("Error: {}", e),
        }
        io::stdout().flush()?;
    }

    Ok(())
}

fn cmd_export(service: &QuoteService, args: &QuoteArgs, output: &Path, symbol: &str) -> Result<()> {
    let breakdown = service.quote(&quote_options(args))?;
    export_quote_to_excel(&breakdown, symbol, output)?;
    println!("Exported quote to: {}", output.display());
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_pricing_file: Option<&Path>,
    clear_pricing_file: bool,
    set_output: Option<OutputFormat>,
    set_currency: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut modified = false;

    if let Some(path) = set_pricing_file {
        // Refuse a file that would break every later command
        richdons_infra::load_pricing_table(path)?;
        config.pricing_file = Some(path.to_path_buf());
        modified = true;
    }

    if clear_pricing_file {
        config.pricing_file = None;
        modified = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if let Some(symbol) = set_currency {
        config.currency_symbol = symbol;
        modified = true;
    }

    if modified {
        config.save()?;
        tracing::debug!("configuration saved");
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
