//! tessera-sim — command-line front-end for the Tessera issuance simulator.
//!
//! Runs one-shot mint simulations and prints the epoch table, traversal-time
//! estimates, and supply curve, as plain text or JSON. The same engine backs
//! the governance dashboard, so output here matches what the web UI charts.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tessera_core::constants::{DECAY_RATE, EPOCH_SIZE, MAX_EPOCHS, MAX_SUPPLY};
use tessera_core::format::format_days;
use tessera_core::params::ScheduleParams;
use tessera_halving::HalvingEngine;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Tessera issuance simulator.
#[derive(Parser)]
#[command(name = "tessera-sim", version, about = "Off-chain halving-issuance simulator for the Tessera DAO")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Override the supply cap (sandbox schedules only)
    #[arg(long)]
    max_supply: Option<f64>,

    /// Override the epoch size (sandbox schedules only)
    #[arg(long)]
    epoch_size: Option<f64>,

    /// Override the per-epoch decay rate (sandbox schedules only)
    #[arg(long)]
    decay_rate: Option<f64>,

    /// Override the epoch count at which the ratio floor pins
    #[arg(long)]
    max_epochs: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one raw-input → supply conversion.
    Simulate(SimulateArgs),
    /// Print the epoch table (ratio, mintable, cumulative supply per epoch).
    Table(TableArgs),
    /// Project how long each epoch takes at a constant raw-input rate.
    Estimate(EstimateArgs),
    /// Print the sampled raw-input → supply curve.
    Curve(CurveArgs),
}

#[derive(Args)]
struct SimulateArgs {
    /// Cumulative supply before the mint.
    #[arg(long, default_value_t = 0.0)]
    supply: f64,

    /// Raw input amount to convert.
    #[arg(long)]
    amount: f64,

    /// Emission-efficiency multiplier in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    emission: f64,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TableArgs {
    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct EstimateArgs {
    /// Raw input produced per block.
    #[arg(long)]
    rate: f64,

    /// Block time in seconds.
    #[arg(long, default_value_t = 12.0)]
    block_time: f64,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CurveArgs {
    /// Raw-input step between samples (0 = default resolution).
    #[arg(long, default_value_t = 0.0)]
    step: f64,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("invalid log level: {}", cli.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let engine = build_engine(&cli)?;
    debug!(params = ?engine.params(), "engine ready");

    match cli.command {
        Commands::Simulate(args) => simulate(&engine, &args),
        Commands::Table(args) => table(&engine, &args),
        Commands::Estimate(args) => estimate(&engine, &args),
        Commands::Curve(args) => curve(&engine, &args),
    }
}

/// Build the engine, applying any sandbox schedule overrides.
fn build_engine(cli: &Cli) -> Result<HalvingEngine> {
    let overridden = cli.max_supply.is_some()
        || cli.epoch_size.is_some()
        || cli.decay_rate.is_some()
        || cli.max_epochs.is_some();
    if !overridden {
        return Ok(HalvingEngine::new());
    }
    let params = ScheduleParams::new(
        cli.max_supply.unwrap_or(MAX_SUPPLY),
        cli.epoch_size.unwrap_or(EPOCH_SIZE),
        cli.decay_rate.unwrap_or(DECAY_RATE),
        cli.max_epochs.unwrap_or(MAX_EPOCHS),
    )
    .context("invalid schedule override")?;
    Ok(HalvingEngine::with_params(params))
}

fn simulate(engine: &HalvingEngine, args: &SimulateArgs) -> Result<()> {
    let result = engine.simulate_mint(args.supply, args.amount, args.emission);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    println!("minted:      {:.6}", result.actual_minted);
    println!("new supply:  {:.6}", result.new_supply);
    println!("epoch:       {}", result.epoch);
    println!("ratio:       {:.9}", result.ratio);
    Ok(())
}

fn table(engine: &HalvingEngine, args: &TableArgs) -> Result<()> {
    let rows = engine.epoch_table();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    println!("{:>5}  {:>12}  {:>14}  {:>16}", "epoch", "ratio", "mintable", "cumulative");
    for row in rows {
        println!(
            "{:>5}  {:>12.9}  {:>14.0}  {:>16.0}",
            row.epoch, row.halving_ratio, row.epoch_mintable, row.cumulative_supply
        );
    }
    Ok(())
}

fn estimate(engine: &HalvingEngine, args: &EstimateArgs) -> Result<()> {
    let estimates = engine.epoch_time_estimates(args.rate, args.block_time);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimates)?);
        return Ok(());
    }
    if estimates.is_empty() {
        println!("no estimates: rate and block time must be positive");
        return Ok(());
    }
    println!(
        "{:>5}  {:>16}  {:>16}  {:>12}  {:>14}",
        "epoch", "raw needed", "cumulative raw", "time", "cumulative"
    );
    for est in estimates {
        println!(
            "{:>5}  {:>16.0}  {:>16.0}  {:>12}  {:>14}",
            est.epoch,
            est.raw_input_needed,
            est.cumulative_raw_input,
            est.formatted_time,
            format_days(est.cumulative_days),
        );
    }
    Ok(())
}

fn curve(engine: &HalvingEngine, args: &CurveArgs) -> Result<()> {
    let points = engine.supply_curve(args.step);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }
    println!("{:>18}  {:>18}", "raw minted", "total supply");
    for point in points {
        println!("{:>18.2}  {:>18.2}", point.raw_minted, point.total_supply);
    }
    Ok(())
}
