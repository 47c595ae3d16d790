use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use bidi_iter::{drain, reversed, BiIterator, Direction, PullResult};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bidi-iter", about = "Consume a sequence from both ends")]
struct Cli {
    /// Log cursor activity (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Values {
    /// Read values from this file (one per line) instead of arguments.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Values to iterate; read from stdin when empty.
    values: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pull following a pattern of `f` (forward) and `b` (backward).
    Pull {
        /// Pull pattern, e.g. `fbfb`.
        pattern: String,
        #[command(flatten)]
        values: Values,
    },
    /// Print the values in reverse by always pulling from the back.
    Reverse {
        #[command(flatten)]
        values: Values,
    },
    /// Print the first and last values, skipping the middle.
    Drain {
        /// Number of leading values to keep.
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        head: i64,
        /// Number of trailing values to keep.
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        tail: i64,
        #[command(flatten)]
        values: Values,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Pull { pattern, values } => run_pull(&pattern, values)?,
        Commands::Reverse { values } => run_reverse(values)?,
        Commands::Drain { head, tail, values } => run_drain(head, tail, values)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_pull(pattern: &str, values: Values) -> Result<()> {
    let directions = parse_pattern(pattern)?;
    let values = load_values(values)?;
    let mut iter = BiIterator::new(values.as_slice())?;

    for direction in directions {
        let label = match direction {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        };
        match iter.pull(direction)? {
            PullResult::Value(value) => println!("{label}\t{value}"),
            PullResult::Done => println!("{label}\tdone"),
        }
    }

    let stats = iter.stats();
    println!(
        "remaining={}\tforward={}\tbackward={}\texhausted={}",
        iter.remaining(),
        stats.forward,
        stats.backward,
        stats.exhausted
    );
    Ok(())
}

fn run_reverse(values: Values) -> Result<()> {
    let values = load_values(values)?;
    for value in reversed(BiIterator::new(values.as_slice())?) {
        println!("{value}");
    }
    Ok(())
}

fn run_drain(head: i64, tail: i64, values: Values) -> Result<()> {
    let values = load_values(values)?;
    let drained = drain(BiIterator::new(values.as_slice())?, head, tail)
        .context("drain failed")?;

    for value in &drained.head {
        println!("head\t{value}");
    }
    for value in &drained.tail {
        println!("tail\t{value}");
    }
    println!("skipped\t{}", drained.middle_skipped);
    Ok(())
}

fn parse_pattern(pattern: &str) -> Result<Vec<Direction>> {
    pattern
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(idx, c)| match c.to_ascii_lowercase() {
            'f' => Ok(Direction::Forward),
            'b' => Ok(Direction::Backward),
            other => Err(anyhow!(
                "invalid pull '{other}' at position {} (expected f or b)",
                idx + 1
            )),
        })
        .collect()
}

fn load_values(values: Values) -> Result<Vec<String>> {
    if let Some(path) = values.input {
        let file = File::open(&path)
            .with_context(|| format!("failed to open values file {}", path.display()))?;
        return read_lines(BufReader::new(file));
    }
    if !values.values.is_empty() {
        return Ok(values.values);
    }
    read_lines(io::stdin().lock())
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read value")?;
        let value = line.trim();
        if !value.is_empty() {
            values.push(value.to_string());
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern() {
        let directions = parse_pattern("fB f").unwrap();
        assert_eq!(
            directions,
            vec![Direction::Forward, Direction::Backward, Direction::Forward]
        );
        assert!(parse_pattern("fx").is_err());
    }

    #[test]
    fn test_read_lines_skips_blanks() {
        let input = "a\n\n  b \n";
        let values = read_lines(input.as_bytes()).unwrap();
        assert_eq!(values, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_cli_parses_negative_counts() {
        let cli = Cli::try_parse_from(["bidi-iter", "drain", "--head", "-1", "x"]).unwrap();
        match cli.command {
            Commands::Drain { head, tail, values } => {
                assert_eq!(head, -1);
                assert_eq!(tail, 1);
                assert_eq!(values.values, vec!["x".to_string()]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
