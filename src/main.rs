//! coffee-rota - plan who buys the group coffee on which day.

#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use coffee_rota::allocation::{LayoutPolicy, Strategy};
use coffee_rota::config::PlannerConfig;
use coffee_rota::input::{format_price_list, InputProvider};
use coffee_rota::models::{Plan, PriceVector};
use coffee_rota::render::{write_schedule, Destination, OutputFormat, OutputTarget};
use coffee_rota::validation::{parse_duration, parse_prices, PriceEntry};

#[derive(Parser, Debug)]
#[command(
    name = "coffee-rota",
    version,
    about = "Plan a fair rotation for who pays the group coffee bill"
)]
struct Cli {
    /// Allocation strategy
    #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
    strategy: Strategy,

    /// Plan duration in days (prompted for when omitted)
    #[arg(long)]
    days: Option<String>,

    /// Space-separated prices, one per participant (prompted for when omitted)
    #[arg(long, allow_hyphen_values = true)]
    prices: Option<String>,

    /// Sort prices ascending before allocating
    #[arg(long, conflicts_with = "keep_price_order")]
    sort_prices: bool,

    /// Keep prices in entry order
    #[arg(long)]
    keep_price_order: bool,

    /// Output destination (prompted for when omitted)
    #[arg(long, value_enum)]
    output: Option<Destination>,

    /// File written when the destination is a file
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Day layout for the proportional strategy
    #[arg(long, value_enum, default_value_t = LayoutPolicy::Compact)]
    layout: LayoutPolicy,

    /// JSON configuration file (roster, defaults, bounds)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<PlannerConfig> {
    let mut config = match &cli.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => PlannerConfig::default(),
    };
    if let Some(file) = &cli.output_file {
        config.output_file = file.clone();
    }
    Ok(config)
}

fn duration_from_flag(value: &str, config: &PlannerConfig) -> Result<u32> {
    match parse_duration(value, config.duration_bounds) {
        Ok(Some(days)) => Ok(days),
        Ok(None) => Ok(config.default_duration_days),
        Err(err) => bail!("--days: {err}"),
    }
}

fn prices_from_flag(value: &str, config: &PlannerConfig) -> PriceVector {
    let defaults = config.default_prices();
    match parse_prices(value, config.roster.len(), config.price_bounds) {
        Ok(PriceEntry::Custom(prices)) => prices,
        Ok(PriceEntry::Default) => defaults,
        Err(err) => {
            eprintln!(
                "{err}. Using default coffee prices: {}.",
                format_price_list(&defaults)
            );
            defaults
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let sort = if cli.sort_prices {
        true
    } else if cli.keep_price_order {
        false
    } else {
        cli.strategy.sorts_prices_by_default()
    };

    let stdin = io::stdin();
    let mut provider = InputProvider::new(stdin.lock(), io::stdout(), &config);

    let days = match &cli.days {
        Some(value) => duration_from_flag(value, &config)?,
        None => provider.duration().context("reading plan duration")?,
    };
    let prices = match &cli.prices {
        Some(value) => {
            let prices = prices_from_flag(value, &config);
            if sort {
                prices.sorted_ascending()
            } else {
                prices
            }
        }
        None => provider.prices(sort).context("reading prices")?,
    };
    let destination = match cli.output {
        Some(destination) => destination,
        None => provider.destination().context("reading output destination")?,
    };

    let plan = Plan::new(config.roster(), prices, days)?;
    tracing::info!(
        strategy = %cli.strategy,
        days,
        participants = plan.participant_count(),
        bill_total = plan.bill_total(),
        "allocating"
    );

    let allocation = cli.strategy.allocator(cli.layout).allocate(&plan);

    let target = OutputTarget::resolve(destination, config.output_file.clone());
    write_schedule(&target, cli.format, &plan, &allocation)?;
    if let OutputTarget::File(path) = &target {
        println!("Coffee buying schedule written to {}", path.display());
    }
    Ok(())
}
