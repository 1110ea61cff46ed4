//! laser-quote - Quote calculator for laser cutting and engraving jobs.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use laser_core::config::form_defaults;
use laser_core::report::{render_catalog, render_quote};
use laser_core::{
    quote_order, suggest_discount, MaterialsCatalog, OrderSpec, PricingRates, QuoteError,
    QuoteSession,
};

mod commands;

/// Quote laser cutting and engraving jobs and compare variants.
#[derive(Parser, Debug)]
#[command(name = "laser-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with pricing rates (missing fields use defaults)
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    /// JSON file with the initial materials catalog (read only)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the materials catalog
    Materials,
    /// Price a single job
    Quote(QuoteArgs),
    /// Interactive session reading commands from stdin
    Session,
}

#[derive(clap::Args, Debug)]
struct QuoteArgs {
    /// Material name as listed by `materials`
    #[arg(short, long)]
    material: String,

    /// Number of pieces
    #[arg(short, long, default_value_t = form_defaults::QUANTITY, value_parser = clap::value_parser!(u32).range(1..))]
    quantity: u32,

    /// Cutting line length per piece in meters
    #[arg(long, default_value_t = form_defaults::CUTTING_LENGTH_M)]
    cutting: Decimal,

    /// Engraving area per piece in cm²
    #[arg(long, default_value_t = form_defaults::ENGRAVING_AREA_CM2)]
    engraving: Decimal,

    /// Discount in percent (defaults to the quantity suggestion)
    #[arg(short, long)]
    discount: Option<Decimal>,

    /// One-off setup fee
    #[arg(long, default_value_t = form_defaults::SETUP_FEE)]
    setup: Decimal,

    /// Graphic design hours
    #[arg(long, default_value_t = form_defaults::DESIGN_HOURS)]
    hours: Decimal,

    /// Graphic design hourly rate
    #[arg(long, default_value_t = form_defaults::DESIGN_RATE)]
    rate: Decimal,

    /// Output the order and breakdown as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            let code = err
                .downcast_ref::<QuoteError>()
                .map(|e| e.code_value())
                .unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(args: Args) -> Result<()> {
    let rates = match &args.rates {
        Some(path) => PricingRates::load(path)
            .with_context(|| format!("Failed to load rates from {}", path.display()))?,
        None => PricingRates::default(),
    };

    let catalog = match &args.catalog {
        Some(path) => MaterialsCatalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => MaterialsCatalog::seed(),
    };

    match args.command {
        Command::Materials => {
            print!("{}", render_catalog(&catalog, &rates.currency));
        }
        Command::Quote(quote) => run_quote(&catalog, &rates, quote)?,
        Command::Session => {
            info!(
                "Session started with {} material(s), type 'help' for commands",
                catalog.len()
            );
            let mut session = QuoteSession::new(catalog, rates);
            commands::run_session(&mut session, io::stdin().lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

fn run_quote(catalog: &MaterialsCatalog, rates: &PricingRates, args: QuoteArgs) -> Result<()> {
    let material = catalog.lookup_by_name(&args.material)?.clone();
    let suggested = suggest_discount(args.quantity);

    let order = OrderSpec {
        material,
        quantity: args.quantity,
        cutting_length_m: args.cutting,
        engraving_area_cm2: args.engraving,
        discount_percent: args.discount.unwrap_or(suggested),
        setup_fee: args.setup,
        design_hours: args.hours,
        design_rate: args.rate,
    };

    let breakdown = quote_order(&order, rates)?;

    if args.json {
        let json = serde_json::json!({
            "order": order,
            "breakdown": breakdown,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print!("{}", render_quote(&order, &breakdown, suggested, rates));
    }

    Ok(())
}
