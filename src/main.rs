//! Prime Cache - interactive prime factor finder
//!
//! Prompts for a number, answers from the cache file when it can, and logs
//! the run to the output file.

use std::io::{self, BufRead, Write};

use num_bigint::BigUint;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prime_cache::cache::key_for;
use prime_cache::input::{parse_command, Command};
use prime_cache::report::display::{self, BANNER, CLOSING_RULE, PROMPT};
use prime_cache::report::OutputLog;
use prime_cache::{resolve, Config, PrimeError, Provenance, ResultStore};

/// Main entry point for the prime factor finder.
///
/// # Run Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Prompt until a valid number is entered or the user quits
/// 4. Load the result store and resolve the number
/// 5. Print the results and append them to the output file
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prime_cache=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false),
        )
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_file={}, output_file={}",
        config.cache_file.display(),
        config.output_file.display()
    );

    println!("{}", BANNER);

    let number = match prompt_for_number()? {
        Some(number) => number,
        None => {
            info!("Exiting program.");
            return Ok(());
        }
    };

    let mut store = ResultStore::load(&config.cache_file);
    if store.lookup(&key_for(&number)).is_none() {
        println!("Calculating prime factors for {}...", number);
    }

    let outcome = resolve(&mut store, &number);
    if outcome.provenance == Provenance::FromStore {
        for line in display::lookup_lines(&outcome) {
            println!("{}", line);
        }
    }
    for line in display::result_lines(&outcome) {
        println!("{}", line);
    }

    if let Err(e) = OutputLog::new(&config.output_file).append(&outcome) {
        warn!("Error writing to output file: {}", e);
    }
    println!("{}", CLOSING_RULE);

    Ok(())
}

/// Reads lines until one parses as a number greater than 1.
///
/// Returns `None` when the user quits or stdin closes.
fn prompt_for_number() -> anyhow::Result<Option<BigUint>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("{}", PROMPT);
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(None),
            Ok(Command::Factor(number)) => return Ok(Some(number)),
            Err(PrimeError::EmptyInput) => {
                println!("Input cannot be empty. Please try again.");
            }
            Err(PrimeError::TooSmall(_)) => {
                println!("Please enter a natural number greater than 1.");
            }
            Err(e) if e.is_input_error() => {
                warn!("{}. Please enter a valid integer.", e);
            }
            Err(e) => return Err(e.into()),
        }
    }
}
