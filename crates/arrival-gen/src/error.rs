// File: crates/arrival-gen/src/error.rs
// Summary: Error type shared by configuration, generation and record I/O.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange { name: &'static str, min: i64, max: i64 },
    #[error("cannot access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("record I/O on {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path}:{line}: {reason}")]
    Parse { path: PathBuf, line: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, GenError>;
