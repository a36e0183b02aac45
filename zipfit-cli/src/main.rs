//! Zipfit CLI - power-law trendline fitting for counts

#![deny(warnings)]

// Global invariants enforced:
// - Identical input yields byte-for-byte identical output
// - All fitting happens in zipfit-core; this binary only parses and prints

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use zipfit_core::{
    by_rank, fit_observations, render_json, render_text, FitMode, FitReport, Histogram,
};

#[derive(Parser)]
#[command(name = "zipfit")]
#[command(about = "Fit a power-law (Zipf) trendline and report slope, R2, and y-intercept")]
#[command(version = env!("ZIPFIT_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank-frequency fit: counts in any order, ranks assigned automatically
    Rank {
        /// Input file of whitespace-separated counts (stdin when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Size-frequency fit: whitespace-separated "size count" pairs
    Size {
        /// Input file of alternating size and count values (stdin when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Histogram an integer event stream and fit both distributions
    Events {
        /// Input file of whitespace-separated integer events (stdin when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (reports, format) = match cli.command {
        Commands::Rank { file, format } => {
            let input = read_input(file.as_deref())?;
            let magnitudes = parse_counts(&input)?;
            let result = by_rank(&magnitudes)?;
            (
                vec![FitReport::new(FitMode::Rank, magnitudes.len(), &result)],
                format,
            )
        }
        Commands::Size { file, format } => {
            let input = read_input(file.as_deref())?;
            let observations = parse_pairs(&input)?;
            let result = fit_observations(&observations)?;
            (
                vec![FitReport::new(FitMode::Size, observations.len(), &result)],
                format,
            )
        }
        Commands::Events { file, format } => {
            let input = read_input(file.as_deref())?;
            let events = parse_events(&input)?;
            let histogram = Histogram::from_events(&events);

            let counts = histogram.counts();
            let rank_result = by_rank(&counts)?;
            let observations = histogram.observations()?;
            let size_result = fit_observations(&observations)?;

            (
                vec![
                    FitReport::new(FitMode::Rank, counts.len(), &rank_result),
                    FitReport::new(FitMode::Size, observations.len(), &size_result),
                ],
                format,
            )
        }
    };

    match format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", render_json(&reports)),
    }

    Ok(())
}

/// Read the whole input from a file, or from stdin when no file is given.
fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Parse whitespace-separated counts.
fn parse_counts(input: &str) -> anyhow::Result<Vec<f64>> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("invalid count: {:?}", token))
        })
        .collect()
}

/// Parse alternating size/count tokens into observation pairs.
fn parse_pairs(input: &str) -> anyhow::Result<Vec<zipfit_core::Observation>> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        bail!(
            "expected size/count pairs, got an odd number of values ({})",
            tokens.len()
        );
    }

    tokens
        .chunks(2)
        .map(|chunk| {
            let size = chunk[0]
                .parse::<u64>()
                .with_context(|| format!("invalid size: {:?}", chunk[0]))?;
            let count = chunk[1]
                .parse::<f64>()
                .with_context(|| format!("invalid count: {:?}", chunk[1]))?;
            Ok(zipfit_core::Observation::new(size, count))
        })
        .collect()
}

/// Parse whitespace-separated integer events.
fn parse_events(input: &str) -> anyhow::Result<Vec<i64>> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid event: {:?}", token))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_counts() {
        let counts = parse_counts("10 20.5\n3").unwrap();
        assert_eq!(counts, vec![10.0, 20.5, 3.0]);

        assert!(parse_counts("10 abc").is_err());
    }

    #[test]
    fn test_parse_pairs() {
        let observations = parse_pairs("1 100 2 50").unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].position, 1);
        assert_eq!(observations[1].magnitude, 50.0);

        // Odd token count cannot form pairs
        assert!(parse_pairs("1 100 2").is_err());
    }

    #[test]
    fn test_parse_events() {
        assert_eq!(parse_events("3 1 3 2").unwrap(), vec![3, 1, 3, 2]);
        assert!(parse_events("3 x").is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        write!(file, "10 20 30").expect("failed to write temp file");

        let input = read_input(Some(file.path())).unwrap();
        assert_eq!(input, "10 20 30");
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(Some(Path::new("/nonexistent/counts.txt")));
        assert!(result.is_err());
    }
}
