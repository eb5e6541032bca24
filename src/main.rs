use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

use keysweep::alphabet::{Alphabet, Charset};
use keysweep::search::{self, ParallelConfig, SearchConfig, SearchResult, Strategy};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "keysweep")]
#[command(about = "keysweep - exhaustive alphabet search")]
#[command(version)]
struct Args {
    /// Value to recover (read from stdin when omitted)
    #[arg(long, short, env = "KEYSWEEP_TARGET", hide_env_values = true)]
    target: Option<String>,

    /// Search strategy
    #[arg(long, short, value_enum, default_value = "parallel")]
    strategy: CliStrategy,

    /// Named symbol set to search over
    #[arg(long, value_enum, default_value = "default", env = "KEYSWEEP_CHARSET")]
    charset: CliCharset,

    /// Explicit symbols to search over, in order (overrides --charset)
    #[arg(long, short)]
    alphabet: Option<String>,

    /// Number of worker threads for parallel search
    #[arg(long, short = 'j', env = "KEYSWEEP_WORKERS")]
    workers: Option<usize>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

/// CLI strategy selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliStrategy {
    /// Fixed-length search split across worker threads
    Parallel,
    /// Single-threaded search over increasing lengths
    Incremental,
}

impl From<CliStrategy> for Strategy {
    fn from(cli: CliStrategy) -> Self {
        match cli {
            CliStrategy::Parallel => Strategy::Parallel,
            CliStrategy::Incremental => Strategy::Incremental,
        }
    }
}

/// CLI charset selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliCharset {
    /// Lowercase, uppercase, digits and @#$
    Default,
    Lower,
    Upper,
    Digits,
    Symbols,
    /// Lowercase, uppercase and digits
    Alnum,
}

impl From<CliCharset> for Charset {
    fn from(cli: CliCharset) -> Self {
        match cli {
            CliCharset::Default => Charset::Default,
            CliCharset::Lower => Charset::Lower,
            CliCharset::Upper => Charset::Upper,
            CliCharset::Digits => Charset::Digits,
            CliCharset::Symbols => Charset::Symbols,
            CliCharset::Alnum => Charset::Alnum,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "keysweep=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read the target from the first line of stdin.
fn read_target() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read target from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_result(result: &SearchResult) {
    if result.is_found() {
        println!("Match found!");
    } else {
        println!("No match found.");
    }
    println!("Elapsed time: {:.6} seconds.", result.elapsed_secs());
    println!(
        "Candidates evaluated: {}",
        result.statistics.candidates_evaluated
    );
    println!(
        "Throughput: {:.0} candidates/s",
        result.statistics.throughput()
    );
    if let Some(ref found) = result.found {
        println!("Recovered value: {}", found);
    }
}

fn run(args: Args) -> Result<()> {
    let alphabet = match args.alphabet {
        Some(ref symbols) => Alphabet::new(symbols).context("invalid --alphabet")?,
        None => Charset::from(args.charset).alphabet(),
    };

    let target = match args.target {
        Some(target) => target,
        None => read_target()?,
    };
    if let Some(c) = target.chars().find(|&c| c.is_control()) {
        bail!("target contains a non-printable character: {:?}", c);
    }

    let config = SearchConfig::default()
        .with_strategy(args.strategy.into())
        .with_parallel(ParallelConfig::default().with_workers_option(args.workers));

    if args.verbose {
        println!("Strategy: {}", config.strategy);
        println!("Alphabet: {} symbols", alphabet.len());
        if config.strategy == Strategy::Parallel {
            println!("Workers: {}", config.parallel.resolve_workers(alphabet.len()));
        }
    }

    let result = search::run(&target, &alphabet, &config);
    print_result(&result);
    Ok(())
}

// --- Main Function ---
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
