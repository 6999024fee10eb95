// File: crates/arrival-gen/src/record.rs
// Summary: Customer record and the space-separated record file format.
// Format: one `<index> <enter_time> <service_time>` line per record, newline-terminated.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{GenError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    /// Row position in the output, starting at zero.
    pub index: usize,
    pub enter_time: i64,
    pub service_time: i64,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.index, self.enter_time, self.service_time)
    }
}

/// Write `records` to `path`, truncating any previous content.
pub fn write_records(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    let csv_err = |source| GenError::Csv { path: path.to_path_buf(), source };
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    for r in records {
        wtr.serialize((r.index, r.enter_time, r.service_time)).map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| GenError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), rows = records.len(), "records written");
    Ok(())
}

/// Read records back from `path`.
/// Fields may be separated by any run of whitespace; blank lines are skipped.
/// Lines are split by hand rather than through `csv`: its reader takes a single
/// delimiter byte and would yield empty fields for repeated spaces or tabs.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let io_err = |source| GenError::Io { path: path.to_path_buf(), source };
    let reader = BufReader::new(File::open(path).map_err(io_err)?);

    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        let line_no = i as u64 + 1;
        if line.trim().is_empty() {
            continue;
        }
        out.push(parse_line(&line).map_err(|reason| GenError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            reason,
        })?);
    }
    Ok(out)
}

fn parse_line(line: &str) -> std::result::Result<Record, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    }
    let index = fields[0].parse::<usize>().map_err(|e| format!("index {:?}: {e}", fields[0]))?;
    let enter_time = fields[1].parse::<i64>().map_err(|e| format!("enter time {:?}: {e}", fields[1]))?;
    let service_time = fields[2].parse::<i64>().map_err(|e| format!("service time {:?}: {e}", fields[2]))?;
    Ok(Record { index, enter_time, service_time })
}
