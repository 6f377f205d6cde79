//! Ton-year accounting CLI
//!
//! # Usage
//!
//! ```bash
//! tonyear run --method lashof --time-horizon 100 --delay 40 --curve joos_2013
//! tonyear run --config run.toml --discount-rate 0.03 --output result.json
//! tonyear irf --curve ipcc_2007 --output ipcc_2007.json
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tonyear::config::{BaselineSource, RunConfig};
use tonyear::output::{read_trajectory, write_curve_json, write_json};
use tonyear::report::BenefitReport;
use tonyear::{generate_irf, FloatValue, RunResult};
use tracing_subscriber::EnvFilter;

/// Ton-year accounting of temporary carbon storage
#[derive(Parser, Debug)]
#[command(name = "tonyear")]
#[command(about = "Compare temporary carbon storage against a baseline using ton-year accounting")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an accounting method and print the benefit report
    Run(RunArgs),
    /// Print or save an atmospheric impulse-response curve
    Irf {
        /// Parameter set: joos_2013, ipcc_2007 or ipcc_2000
        #[arg(short, long)]
        curve: String,

        /// Write the curve to this JSON file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// TOML file with run settings; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Accounting method: mc, ipcc or lashof
    #[arg(short, long)]
    method: Option<String>,

    /// Years analysed after the start of the baseline
    #[arg(long, allow_negative_numbers = true)]
    time_horizon: Option<i64>,

    /// Storage period in years
    #[arg(long, allow_negative_numbers = true)]
    delay: Option<i64>,

    /// Per-year discount rate, e.g. 0.03
    #[arg(long, allow_negative_numbers = true)]
    discount_rate: Option<FloatValue>,

    /// Use a named impulse-response curve as the baseline
    #[arg(long, conflicts_with = "baseline_file")]
    curve: Option<String>,

    /// Read the baseline from a JSON array of yearly values
    #[arg(long)]
    baseline_file: Option<PathBuf>,

    /// Write the full accounting result to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = try_run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run(command: Command) -> RunResult<()> {
    match command {
        Command::Run(args) => run(args),
        Command::Irf { curve, output } => {
            let irf = generate_irf(&curve)?;
            match output {
                Some(path) => write_curve_json(&irf, &path)?,
                None => {
                    for (year, value) in irf.values().iter().enumerate() {
                        println!("{}\t{:.6}", year, value);
                    }
                }
            }
            Ok(())
        }
    }
}

fn run(args: RunArgs) -> RunResult<()> {
    let base = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    let baseline = match (args.curve, &args.baseline_file) {
        (Some(curve), _) => Some(BaselineSource::Curve { curve }),
        (None, Some(path)) => Some(BaselineSource::Values {
            values: read_trajectory(path)?,
        }),
        (None, None) => None,
    };

    let config = base.merge(RunConfig {
        method: args.method,
        time_horizon: args.time_horizon,
        delay: args.delay,
        discount_rate: args.discount_rate,
        baseline,
    });

    let result = config.run()?;
    println!();
    print!("{}", BenefitReport(&result));
    println!();

    if let Some(path) = &args.output {
        write_json(&result, path)?;
    }
    Ok(())
}
