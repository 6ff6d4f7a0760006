use crossterm::style::Stylize;
use miner_core::{ingest, report, AprioriEngine, MinerError};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const DEFAULT_MIN_SUP: f64 = 0.1;
const DEFAULT_MIN_CONF: f64 = 0.6;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("Usage: basket_miner <dataset.csv> [min_sup] [min_conf]");
        return ExitCode::FAILURE;
    };
    let min_sup = match parse_threshold(args.get(1), DEFAULT_MIN_SUP) {
        Ok(v) => v,
        Err(raw) => {
            eprintln!("[ERROR] min_sup is not a number: '{}'", raw);
            return ExitCode::FAILURE;
        }
    };
    let min_conf = match parse_threshold(args.get(2), DEFAULT_MIN_CONF) {
        Ok(v) => v,
        Err(raw) => {
            eprintln!("[ERROR] min_conf is not a number: '{}'", raw);
            return ExitCode::FAILURE;
        }
    };

    match run(PathBuf::from(path), min_sup, min_conf) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: PathBuf, min_sup: f64, min_conf: f64) -> Result<(), MinerError> {
    let start = Instant::now();

    let transactions = ingest::load_csv(&path)?;
    println!("{}", "Apriori Market-Basket Miner".bold().cyan());
    println!("---------------------------------------------------------------");
    println!("dataset: {} ({} transactions)", path.display(), transactions.len());
    println!("min_sup = {}", min_sup);
    println!("min_conf = {}", min_conf);
    println!();

    let engine = AprioriEngine::new(transactions, min_sup, min_conf)?;
    let outcome = engine.mine()?;

    println!("{}", report::render_itemsets(&outcome.supports));
    println!("{}", report::render_rules(&outcome.rules));

    println!("Time Taken: {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn parse_threshold(arg: Option<&String>, default: f64) -> Result<f64, String> {
    match arg {
        Some(raw) => raw.parse::<f64>().map_err(|_| raw.clone()),
        None => Ok(default),
    }
}
