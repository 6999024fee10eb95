// File: crates/arrival-gen/src/config.rs
// Summary: Command-line arguments and the validated generator configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{GenError, Result};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "test.txt";

/// Closed integer interval `[min, max]` a value is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    min: i64,
    max: i64,
}

impl TimeRange {
    /// Contract: `min <= max`; `name` identifies the range in the error.
    pub fn new(name: &'static str, min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(GenError::InvertedRange { name, min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 { self.min }
    pub fn max(&self) -> i64 { self.max }

    pub fn contains(&self, v: i64) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

/// How service times relate to the enter-time sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Pairing {
    /// Sort enter times only; service times stay in draw order.
    #[default]
    Independent,
    /// Stable-sort (enter, service) pairs by enter time.
    Joint,
}

/// Generate synthetic customer records (index, enter time, service time).
#[derive(Debug, Parser)]
#[command(name = "generate-examples", version)]
pub struct GeneratorArgs {
    /// Number of customers
    #[arg(long = "ncustomer", default_value_t = 10)]
    pub ncustomer: usize,
    /// Lower bound of the service-time draw
    #[arg(long = "minservtime", default_value_t = 1, allow_negative_numbers = true)]
    pub min_serv_time: i64,
    /// Upper bound of the service-time draw
    #[arg(long = "maxservtime", default_value_t = 10, allow_negative_numbers = true)]
    pub max_serv_time: i64,
    /// Lower bound of the enter-time draw
    #[arg(long = "minentertime", default_value_t = 1, allow_negative_numbers = true)]
    pub min_enter_time: i64,
    /// Upper bound of the enter-time draw
    #[arg(long = "maxentertime", default_value_t = 10, allow_negative_numbers = true)]
    pub max_enter_time: i64,
    /// Seed for reproducible output; entropy-seeded when absent
    #[arg(long)]
    pub seed: Option<u64>,
    /// Whether service times move with their enter times when sorting
    #[arg(long, value_enum, default_value_t = Pairing::Independent)]
    pub pairing: Pairing,
    /// Output file, truncated on every run
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl GeneratorArgs {
    /// Validate ranges and build the configuration.
    pub fn into_config(self) -> Result<GeneratorConfig> {
        Ok(GeneratorConfig {
            customers: self.ncustomer,
            service: TimeRange::new("service time", self.min_serv_time, self.max_serv_time)?,
            enter: TimeRange::new("enter time", self.min_enter_time, self.max_enter_time)?,
            seed: self.seed,
            pairing: self.pairing,
            output: self.output,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub customers: usize,
    pub service: TimeRange,
    pub enter: TimeRange,
    pub seed: Option<u64>,
    pub pairing: Pairing,
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customers: 10,
            service: TimeRange { min: 1, max: 10 },
            enter: TimeRange { min: 1, max: 10 },
            seed: None,
            pairing: Pairing::Independent,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<GeneratorArgs, clap::Error> {
        GeneratorArgs::try_parse_from(std::iter::once("generate-examples").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_documented_values() {
        let cfg = parse(&[]).unwrap().into_config().unwrap();
        assert_eq!(cfg, GeneratorConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = parse(&[
            "--ncustomer", "3",
            "--minentertime", "5", "--maxentertime", "5",
            "--minservtime", "2", "--maxservtime", "2",
            "--seed", "7", "--pairing", "joint", "-o", "out.txt",
        ])
        .unwrap()
        .into_config()
        .unwrap();
        assert_eq!(cfg.customers, 3);
        assert_eq!(cfg.enter, TimeRange::new("enter time", 5, 5).unwrap());
        assert_eq!(cfg.service, TimeRange::new("service time", 2, 2).unwrap());
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.pairing, Pairing::Joint);
        assert_eq!(cfg.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn negative_bounds_are_accepted() {
        let cfg = parse(&["--minentertime", "-5", "--maxentertime", "-1"]).unwrap().into_config().unwrap();
        assert_eq!((cfg.enter.min(), cfg.enter.max()), (-5, -1));
    }

    #[test]
    fn non_integer_is_a_parse_error() {
        assert!(parse(&["--ncustomer", "ten"]).is_err());
        assert!(parse(&["--ncustomer", "-1"]).is_err());
        assert!(parse(&["--maxservtime", "2.5"]).is_err());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = parse(&["--minservtime", "9", "--maxservtime", "3"]).unwrap().into_config().unwrap_err();
        assert!(matches!(err, GenError::InvertedRange { name: "service time", min: 9, max: 3 }));
        assert_eq!(err.to_string(), "service time range is inverted: min 9 > max 3");
    }
}
