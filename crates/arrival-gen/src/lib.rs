// File: crates/arrival-gen/src/lib.rs
// Summary: Synthetic customer arrival/service records for queueing experiments.

pub mod config;
pub mod error;
pub mod generate;
pub mod record;

pub use config::{GeneratorArgs, GeneratorConfig, Pairing, TimeRange};
pub use error::GenError;
pub use generate::{generate_records, make_rng};
pub use record::{read_records, write_records, Record};
