use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::JobId;

/// Errors raised while loading a workload or reporting on a run.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("unable to read workload {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected `arrival,length`, found {content:?}")]
    Parse { line: usize, content: String },

    #[error("the timeslice must be a positive integer, found {0:?}")]
    InvalidTimeslice(String),

    #[error("job {0} has not completed")]
    Unfinished(JobId),
}
