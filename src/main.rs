use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eratosthenes::{SieveConfig, DEFAULT_MAX_ALLOWED};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "eratosthenes",
    about = "Print every prime up to a bound using the Sieve of Eratosthenes"
)]
struct Cli {
    /// Inclusive upper bound. Values below 2 produce no primes.
    #[arg(allow_negative_numbers = true)]
    max_value: i64,
    /// Print only the number of primes.
    #[arg(long)]
    count: bool,
    /// Print marking statistics to stderr.
    #[arg(long)]
    stats: bool,
    /// Output layout for the primes.
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,
    /// Refuse bounds above this value.
    #[arg(long, default_value_t = DEFAULT_MAX_ALLOWED)]
    max_allowed: i64,
    /// Log sieve phases (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One prime per line.
    Lines,
    /// Comma-separated on a single line.
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SieveConfig::new(cli.max_value)
        .with_max_allowed(cli.max_allowed)
        .with_profile(cli.stats);
    let outcome = config
        .run()
        .with_context(|| format!("failed to sieve primes up to {}", cli.max_value))?;

    if cli.stats {
        match &outcome.stats {
            Some(stats) => eprintln!("{}", stats.report()),
            None => eprintln!("No marking array built for bound {}", cli.max_value),
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.count {
        writeln!(out, "{}", outcome.primes.len())?;
    } else {
        write_primes(&mut out, &outcome.primes, cli.format)?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn write_primes(out: &mut impl Write, primes: &[u64], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for prime in primes {
                writeln!(out, "{}", prime)?;
            }
        }
        OutputFormat::Csv => {
            if primes.is_empty() {
                return Ok(());
            }
            let line = primes
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(primes: &[u64], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_primes(&mut buf, primes, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_lines_format() {
        assert_eq!(render(&[2, 3, 5], OutputFormat::Lines), "2\n3\n5\n");
    }

    #[test]
    fn test_csv_format() {
        assert_eq!(render(&[2, 3, 5, 7], OutputFormat::Csv), "2,3,5,7\n");
        assert_eq!(render(&[], OutputFormat::Csv), "");
    }

    #[test]
    fn test_cli_accepts_negative_bound() {
        let cli = Cli::try_parse_from(["eratosthenes", "-5", "--count"]).unwrap();
        assert_eq!(cli.max_value, -5);
        assert!(cli.count);
        assert_eq!(cli.max_allowed, DEFAULT_MAX_ALLOWED);
    }

    #[test]
    fn test_cli_parses_format() {
        let cli = Cli::try_parse_from(["eratosthenes", "30", "--format", "csv", "-v"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Csv));
        assert!(cli.verbose);
    }
}
