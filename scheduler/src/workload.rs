//! Workload loading.
//!
//! A workload is a plain text file with one `arrival,length` pair per line.
//! Lines that cannot be parsed are skipped with a warning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::{JobStore, SchedulerError};

/// Loads the workload stored at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<JobStore, SchedulerError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SchedulerError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let jobs = read(BufReader::new(file)).map_err(|source| SchedulerError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), jobs = jobs.len(), "workload loaded");
    Ok(jobs)
}

/// Builds a workload from an in-memory description.
pub fn parse(workload: &str) -> JobStore {
    let mut jobs = JobStore::new();
    for (index, line) in workload.lines().enumerate() {
        push_line(&mut jobs, index + 1, line);
    }
    jobs
}

fn read(reader: impl BufRead) -> std::io::Result<JobStore> {
    let mut jobs = JobStore::new();
    for (index, line) in reader.lines().enumerate() {
        push_line(&mut jobs, index + 1, &line?);
    }
    Ok(jobs)
}

fn push_line(jobs: &mut JobStore, line_number: usize, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    match parse_line(line_number, line) {
        Ok((arrival, length)) => {
            jobs.push(arrival, length);
        }
        Err(error) => warn!(%error, "skipping workload line"),
    }
}

/// Parses a single `arrival,length` line.
pub fn parse_line(line_number: usize, line: &str) -> Result<(usize, usize), SchedulerError> {
    let invalid = || SchedulerError::Parse {
        line: line_number,
        content: line.to_string(),
    };

    let mut fields = line.split(',').map(str::trim);
    let (Some(arrival), Some(length), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(invalid());
    };
    let arrival = arrival.parse::<usize>().map_err(|_| invalid())?;
    let length = length.parse::<usize>().map_err(|_| invalid())?;
    if length == 0 {
        return Err(invalid());
    }

    Ok((arrival, length))
}
